// SPDX-FileCopyrightText: 2026 Veranda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Veranda lead-capture engine.

use thiserror::Error;

/// The primary error type used across all Veranda crates.
#[derive(Debug, Error)]
pub enum VerandaError {
    /// Configuration errors (missing endpoint or credential, invalid values).
    #[error("configuration error: {0}")]
    Config(String),

    /// CRM intake collaborator errors (transport failure or non-success status).
    #[error("crm intake error: {message}")]
    Crm {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Lead store collaborator errors (transport failure, rejected payload,
    /// or an application-level error in the response body).
    #[error("lead store error: {message}")]
    LeadStore {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Conversation session errors (torn-down session, closed event channels).
    #[error("session error: {0}")]
    Session(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
