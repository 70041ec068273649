// SPDX-FileCopyrightText: 2026 Veranda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Events emitted by a conversation session for the hosting surface.

use veranda_core::{ChatMessage, SubmissionResult};

/// What the presentation shell needs to observe from a running session.
///
/// Events arrive in delivery order on the channel returned by
/// [`crate::session::ChatSession::open`]. A surface that only renders the
/// transcript can ignore everything except `Bot`/`Visitor`.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// A visitor message was appended to the transcript.
    Visitor(ChatMessage),
    /// A paced bot message became visible and was appended to the transcript.
    Bot(ChatMessage),
    /// The typing indicator changed.
    Typing(bool),
    /// The submission settled.
    Submission(SubmissionResult),
    /// The hosting surface should minimize the conversation widget.
    Minimize,
}
