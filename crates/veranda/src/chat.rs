// SPDX-FileCopyrightText: 2026 Veranda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `veranda chat` command implementation.
//!
//! Runs the guided conversation as a terminal session: bot lines arrive
//! paced (with a typing hint), visitor replies are read via readline, and
//! the session ends after the submission settles.

use std::sync::Arc;
use std::time::Duration;

use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::debug;
use veranda_config::VerandaConfig;
use veranda_core::{CrmIntake, LeadStore, SubmissionResult, VerandaError};
use veranda_delivery::{CrmClient, LeadStoreClient};
use veranda_engine::{ChatSession, ChatStep, Script, SessionEvent, SessionOptions};

/// How long to wait for further events once the pacer looks idle.
const IDLE_GRACE: Duration = Duration::from_millis(250);

/// Runs the `veranda chat` interactive conversation.
pub async fn run_chat(config: VerandaConfig) -> Result<(), VerandaError> {
    let crm: Arc<dyn CrmIntake> = Arc::new(CrmClient::new(&config.crm)?);
    let store: Arc<dyn LeadStore> = Arc::new(LeadStoreClient::new(&config.lead_store)?);
    let options = SessionOptions {
        source: config.concierge.source.clone(),
        fallback_whatsapp: config.fallback.whatsapp_number.clone(),
    };

    let (mut session, mut events) =
        ChatSession::open(Script::default(), crm, store, options);

    println!();
    println!("  {}", config.concierge.name.bold());
    println!("  Type your reply and press Enter. Ctrl-C leaves the conversation.");
    println!();

    let mut editor = DefaultEditor::new()
        .map_err(|e| VerandaError::Internal(format!("readline init failed: {e}")))?;

    // The greeting arrives paced; show it before the first prompt.
    drain_until_idle(&session, &mut events).await;

    loop {
        match editor.readline("you> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line.as_str());
                session.submit_reply(&line).await;
                drain_until_idle(&session, &mut events).await;

                if session.step() == ChatStep::Complete {
                    drain_until_settled(&session, &mut events).await;
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!();
                println!("  Leaving the conversation.");
                break;
            }
            Err(e) => {
                return Err(VerandaError::Internal(format!("readline failed: {e}")));
            }
        }
    }

    session.close();
    Ok(())
}

/// Prints events until the pacer has no queued or in-flight bot lines.
async fn drain_until_idle(session: &ChatSession, events: &mut UnboundedReceiver<SessionEvent>) {
    loop {
        match tokio::time::timeout(IDLE_GRACE, events.recv()).await {
            Ok(Some(event)) => print_event(&event),
            Ok(None) => break,
            Err(_) => {
                if !session.is_typing() && session.pending_bot_lines() == 0 {
                    break;
                }
            }
        }
    }
}

/// Prints events until the submission settles and its closing lines (and,
/// on success, the minimize signal) have been delivered.
async fn drain_until_settled(session: &ChatSession, events: &mut UnboundedReceiver<SessionEvent>) {
    let mut minimized = false;
    loop {
        let result = session.result();
        let idle = !session.is_typing() && session.pending_bot_lines() == 0;
        if idle && result != SubmissionResult::Pending {
            // Failures end here; successes also wait for the minimize signal.
            if result == SubmissionResult::Failure || minimized {
                break;
            }
        }

        match tokio::time::timeout(IDLE_GRACE, events.recv()).await {
            Ok(Some(SessionEvent::Minimize)) => {
                minimized = true;
                debug!("presentation shell asked to minimize");
            }
            Ok(Some(event)) => print_event(&event),
            Ok(None) => break,
            Err(_) => continue,
        }
    }
}

/// Renders one session event to the terminal.
fn print_event(event: &SessionEvent) {
    match event {
        SessionEvent::Bot(message) => {
            let stamp = message.sent_at.format("%H:%M");
            println!(
                "{} {}",
                format!("[{stamp}]").dimmed(),
                message.text.yellow()
            );
        }
        SessionEvent::Typing(true) => {
            println!("{}", "...".dimmed());
        }
        SessionEvent::Submission(SubmissionResult::Success) => {
            println!("{}", "  (your details were sent successfully)".green());
        }
        SessionEvent::Submission(SubmissionResult::Failure) => {
            println!("{}", "  (we could not send your details)".red());
        }
        // Visitor echoes and typing-off need no rendering in a terminal.
        _ => {}
    }
}
