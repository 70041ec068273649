// SPDX-FileCopyrightText: 2026 Veranda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Veranda lead-capture engine.
//!
//! This crate provides the foundational trait definitions, error types, and
//! common types used throughout the Veranda workspace. The delivery adapters
//! implement the collaborator traits defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::VerandaError;
pub use types::{ChatMessage, LeadRecord, MessageId, Sender, SessionId, SubmissionResult};

// Re-export collaborator traits at crate root.
pub use traits::{CrmIntake, LeadReceipt, LeadStore};
