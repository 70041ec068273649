// SPDX-FileCopyrightText: 2026 Veranda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Guided conversation engine for the Veranda lead-capture funnel.
//!
//! A session walks one visitor through a fixed, forward-only sequence of
//! collecting steps (name, email, phone), pacing bot replies like a human
//! agent, and -- once every step is answered -- delivers the collected lead
//! to the CRM intake and lead store collaborators exactly once.
//!
//! The moving parts:
//! - [`steps`]: pure step-transition function (validation and storage rules)
//! - [`transcript`]: append-only dialogue log
//! - [`pacer`]: single-consumer typing/delay scheduler for bot output
//! - [`submission`]: sequential, fail-fast delivery to the collaborators
//! - [`session`]: the per-visitor glue that owns all of the above

pub mod events;
pub mod pacer;
pub mod script;
pub mod session;
pub mod state;
pub mod steps;
pub mod submission;
pub mod transcript;

pub use events::SessionEvent;
pub use pacer::Pacer;
pub use script::{BotLine, Script};
pub use session::{ChatSession, SessionOptions};
pub use state::{ChatStep, ConversationState};
pub use steps::{StepOutcome, advance};
pub use submission::SubmissionCoordinator;
pub use transcript::{SharedTranscript, Transcript};
