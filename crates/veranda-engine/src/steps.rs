// SPDX-FileCopyrightText: 2026 Veranda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Step controller: validates each visitor reply against the current step
//! and produces the transition, the stored answers, and the scripted replies.
//!
//! `advance` is a pure function so every transition can be tested without a
//! running session, a pacer, or the network.

use std::sync::OnceLock;

use regex::Regex;

use crate::script::{BotLine, Script};
use crate::state::{ChatStep, ConversationState};

/// Result of feeding one visitor reply through the step controller.
#[derive(Debug)]
pub struct StepOutcome {
    /// Step after the reply. At most one transition per reply, always forward.
    pub next: ChatStep,
    /// Answers after the reply (a new value; the input state is untouched).
    pub state: ConversationState,
    /// Scripted bot replies to queue, in speaking order.
    pub replies: Vec<BotLine>,
    /// Set exactly when this reply completed the conversation.
    pub completed: Option<ConversationState>,
}

/// Feeds one trimmed, non-empty visitor reply through the current step.
///
/// Callers are responsible for rejecting empty input before calling; the
/// controller treats whatever it receives as the visitor's answer.
pub fn advance(
    step: ChatStep,
    state: &ConversationState,
    input: &str,
    script: &Script,
) -> StepOutcome {
    match step {
        ChatStep::CollectName => {
            let state = state.clone().with_full_name(input);
            StepOutcome {
                next: ChatStep::CollectEmail,
                replies: script.name_accepted(input),
                state,
                completed: None,
            }
        }
        ChatStep::CollectEmail => {
            if !looks_like_email(input) {
                return StepOutcome {
                    next: ChatStep::CollectEmail,
                    state: state.clone(),
                    replies: script.email_rejected(),
                    completed: None,
                };
            }
            let state = state.clone().with_email(input);
            StepOutcome {
                next: ChatStep::CollectPhone,
                replies: script.email_accepted(),
                state,
                completed: None,
            }
        }
        ChatStep::CollectPhone => {
            // The phone reply doubles as the free-text interest note; there
            // is no separate interest step.
            let state = state.clone().with_phone(input).with_interest(input);
            StepOutcome {
                next: ChatStep::Complete,
                replies: script.phone_accepted(),
                completed: Some(state.clone()),
                state,
            }
        }
        ChatStep::Welcome | ChatStep::Complete => StepOutcome {
            next: step,
            state: state.clone(),
            replies: script.fallthrough_reply(),
            completed: None,
        },
    }
}

/// Permissive address-shape check: `local-part@domain.tld`.
///
/// Deliberately not RFC 5322 -- the collaborators accept anything of this
/// shape, and stricter validation only costs leads.
pub fn looks_like_email(input: &str) -> bool {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    let shape = SHAPE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern compiles")
    });
    shape.is_match(input)
}
