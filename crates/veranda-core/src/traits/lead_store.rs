// SPDX-FileCopyrightText: 2026 Veranda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lead store collaborator trait.

use async_trait::async_trait;

use crate::error::VerandaError;
use crate::types::LeadRecord;

/// Receipt returned by the lead store when it accepts a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadReceipt {
    /// Identifier assigned by the store.
    pub lead_id: String,
}

/// The lead store endpoint: a structured JSON submission with an
/// application-level acknowledgement.
///
/// Implementations must check both the transport status and the response
/// body's acceptance indicator before returning `Ok`.
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Stores the lead and returns the store's receipt.
    async fn store(&self, lead: &LeadRecord) -> Result<LeadReceipt, VerandaError>;
}
