// SPDX-FileCopyrightText: 2026 Veranda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the Veranda workspace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Unique identifier for a conversation session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    /// Generates a fresh random session id.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

/// Unique identifier for a transcript message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub String);

impl MessageId {
    /// Generates a fresh random message id.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

/// Originator of a transcript message.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Bot,
    Visitor,
}

/// One entry in the conversation transcript.
///
/// Messages are append-only: once created they are never mutated or removed
/// for the lifetime of the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub sender: Sender,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

/// Outcome of delivering a completed conversation to the collaborators.
///
/// Starts `Pending`, and settles exactly once per session into `Success`
/// or `Failure`. A settled result is terminal -- there is no automatic retry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SubmissionResult {
    Pending,
    Success,
    Failure,
}

/// A completed lead, as shipped to the CRM intake and lead store collaborators.
///
/// Field names serialize in the collaborators' wire convention
/// (`whatsappConsent`, not `whatsapp_consent`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Free-text note. Chat-sourced leads carry the interest field here.
    pub message: String,
    pub whatsapp_consent: bool,
    pub source: String,
}
