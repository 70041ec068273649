// SPDX-FileCopyrightText: 2026 Veranda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-session glue over the step controller, transcript, pacer, and
//! submission coordinator.
//!
//! One `ChatSession` is one visitor in one surface. All state transitions run
//! on discrete events (a reply, a timer expiry, a delivery response); visitor
//! calls never block on timers or the network. Tearing the session down
//! cancels pending bot lines and suppresses late delivery outcomes.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use veranda_core::{ChatMessage, CrmIntake, LeadStore, SessionId, SubmissionResult};

use crate::events::SessionEvent;
use crate::pacer::Pacer;
use crate::script::Script;
use crate::state::{ChatStep, ConversationState};
use crate::steps;
use crate::submission::SubmissionCoordinator;
use crate::transcript::{self, SharedTranscript};

/// Deployment-specific knobs for a session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Source tag stamped on every lead this session produces.
    pub source: String,
    /// WhatsApp number (digits) for the failure fallback link, if configured.
    pub fallback_whatsapp: Option<String>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            source: "chat".to_string(),
            fallback_whatsapp: None,
        }
    }
}

/// A single guided conversation with one visitor.
pub struct ChatSession {
    id: SessionId,
    step: ChatStep,
    state: ConversationState,
    script: Arc<Script>,
    transcript: SharedTranscript,
    pacer: Pacer,
    events_tx: mpsc::UnboundedSender<SessionEvent>,
    coordinator: Arc<SubmissionCoordinator>,
    cancel: CancellationToken,
    submitted: bool,
    result_tx: Arc<watch::Sender<SubmissionResult>>,
    result_rx: watch::Receiver<SubmissionResult>,
    options: SessionOptions,
}

impl ChatSession {
    /// Opens a session: queues the greeting and readies the first collecting
    /// step.
    ///
    /// The welcome step collects nothing, so it advances to `CollectName`
    /// before the first reply; the pacer alone handles display pacing of the
    /// greeting. Returns the session and the event stream for the hosting
    /// surface.
    pub fn open(
        script: Script,
        crm: Arc<dyn CrmIntake>,
        store: Arc<dyn LeadStore>,
        options: SessionOptions,
    ) -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        let id = SessionId::generate();
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let transcript = transcript::shared();
        let cancel = CancellationToken::new();
        let pacer = Pacer::spawn(transcript.clone(), events_tx.clone(), cancel.clone());
        let script = Arc::new(script);
        let (result_tx, result_rx) = watch::channel(SubmissionResult::Pending);

        info!(session_id = %id.0, source = %options.source, "conversation session opened");
        pacer.enqueue_all(script.greeting());

        let session = Self {
            id,
            step: ChatStep::CollectName,
            state: ConversationState::new(),
            script,
            transcript,
            pacer,
            events_tx,
            coordinator: Arc::new(SubmissionCoordinator::new(crm, store)),
            cancel,
            submitted: false,
            result_tx: Arc::new(result_tx),
            result_rx,
            options,
        };
        (session, events_rx)
    }

    /// Feeds one visitor reply through the current step.
    ///
    /// Empty or whitespace-only input is rejected silently: no transcript
    /// append, no transition, no reply. Everything else is appended to the
    /// transcript verbatim -- including replies the current step rejects.
    pub async fn submit_reply(&mut self, raw: &str) {
        if self.cancel.is_cancelled() {
            debug!(session_id = %self.id.0, "reply after teardown ignored");
            return;
        }
        let input = raw.trim();
        if input.is_empty() {
            return;
        }

        let message = self.transcript.lock().await.append_visitor(input);
        let _ = self.events_tx.send(SessionEvent::Visitor(message));

        let outcome = steps::advance(self.step, &self.state, input, &self.script);
        if outcome.next != self.step {
            debug!(
                session_id = %self.id.0,
                from = %self.step,
                to = %outcome.next,
                "step advanced"
            );
        }
        self.step = outcome.next;
        self.state = outcome.state;
        self.pacer.enqueue_all(outcome.replies);

        if let Some(completed) = outcome.completed {
            self.trigger_submission(completed);
        }
    }

    /// Hands the completed answers to the submission coordinator, once.
    ///
    /// Re-entering the completed step never re-submits: the first trigger
    /// wins and later calls are ignored.
    pub(crate) fn trigger_submission(&mut self, completed: ConversationState) {
        if self.submitted {
            debug!(session_id = %self.id.0, "submission already triggered; ignoring");
            return;
        }
        self.submitted = true;

        let Some(lead) = completed.into_lead(&self.options.source) else {
            warn!(session_id = %self.id.0, "conversation completed without a full lead");
            return;
        };

        let coordinator = self.coordinator.clone();
        let pacer = self.pacer.clone();
        let script = self.script.clone();
        let events = self.events_tx.clone();
        let cancel = self.cancel.clone();
        let result_tx = self.result_tx.clone();
        let fallback = self.options.fallback_whatsapp.clone();
        let session_id = self.id.clone();

        tokio::spawn(async move {
            let result = coordinator.deliver(&lead).await;

            // A late-resolving delivery must not touch a torn-down session.
            if cancel.is_cancelled() {
                debug!(session_id = %session_id.0, "session torn down during delivery; dropping outcome");
                return;
            }

            let _ = result_tx.send(result);
            let _ = events.send(SessionEvent::Submission(result));

            match result {
                SubmissionResult::Success => {
                    pacer.enqueue_all(script.submission_succeeded(&lead.name));
                    tokio::select! {
                        _ = cancel.cancelled() => {}
                        _ = tokio::time::sleep(script.minimize_delay) => {
                            let _ = events.send(SessionEvent::Minimize);
                        }
                    }
                }
                SubmissionResult::Failure | SubmissionResult::Pending => {
                    pacer.enqueue_all(script.submission_failed(fallback.as_deref()));
                }
            }
        });
    }

    /// Tears the session down: cancels pending bot lines and suppresses any
    /// in-flight delivery outcome.
    pub fn close(&self) {
        info!(session_id = %self.id.0, step = %self.step, "conversation session closed");
        self.cancel.cancel();
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn step(&self) -> ChatStep {
        self.step
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    /// Latest settled submission result (`Pending` until delivery finishes).
    pub fn result(&self) -> SubmissionResult {
        *self.result_rx.borrow()
    }

    /// Watch handle for callers that want to await the settled result.
    pub fn result_watch(&self) -> watch::Receiver<SubmissionResult> {
        self.result_rx.clone()
    }

    pub fn is_typing(&self) -> bool {
        self.pacer.is_typing()
    }

    /// Bot lines queued but not yet visible.
    pub fn pending_bot_lines(&self) -> usize {
        self.pacer.pending_lines()
    }

    /// Snapshot of the transcript so far.
    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.transcript.lock().await.messages().to_vec()
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        // Pending timers must not outlive the session.
        self.cancel.cancel();
    }
}
