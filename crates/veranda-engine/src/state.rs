// SPDX-FileCopyrightText: 2026 Veranda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversation step enumeration and the collected visitor answers.
//!
//! The step machine is strictly forward-only:
//! Welcome -> CollectName -> CollectEmail -> CollectPhone -> Complete.
//! Exactly one step is current at any time and a step never repeats.

use strum::{Display, EnumString};
use veranda_core::LeadRecord;

/// Current position in the guided conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum ChatStep {
    /// Greeting only; collects nothing and advances without input.
    Welcome,
    CollectName,
    CollectEmail,
    CollectPhone,
    /// Terminal: the input surface is retired and replies get a generic answer.
    Complete,
}

impl ChatStep {
    /// Whether this step accepts no further field collection.
    pub fn is_terminal(self) -> bool {
        self == ChatStep::Complete
    }
}

/// The visitor's collected answers.
///
/// Fields are populated strictly in step order and never overwritten: each
/// `with_*` constructor returns a new value and keeps an already-set field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationState {
    full_name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    interest: Option<String>,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new state with the name set (first write wins).
    pub fn with_full_name(mut self, name: &str) -> Self {
        self.full_name.get_or_insert_with(|| name.to_string());
        self
    }

    /// Returns a new state with the email set (first write wins).
    pub fn with_email(mut self, email: &str) -> Self {
        self.email.get_or_insert_with(|| email.to_string());
        self
    }

    /// Returns a new state with the phone set (first write wins).
    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone.get_or_insert_with(|| phone.to_string());
        self
    }

    /// Returns a new state with the free-text interest set (first write wins).
    pub fn with_interest(mut self, interest: &str) -> Self {
        self.interest.get_or_insert_with(|| interest.to_string());
        self
    }

    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn interest(&self) -> Option<&str> {
        self.interest.as_deref()
    }

    /// Whether every collected field required for submission is present.
    pub fn is_complete(&self) -> bool {
        self.full_name.is_some() && self.email.is_some() && self.phone.is_some()
    }

    /// Projects a completed state into the record shipped to collaborators.
    ///
    /// Returns `None` unless all required fields were collected. The phone
    /// step is the WhatsApp number, so chat-sourced leads carry consent.
    pub fn into_lead(self, source: &str) -> Option<LeadRecord> {
        let name = self.full_name?;
        let email = self.email?;
        let phone = self.phone?;
        let message = self.interest.unwrap_or_default();
        Some(LeadRecord {
            name,
            email,
            phone,
            message,
            whatsapp_consent: true,
            source: source.to_string(),
        })
    }
}
