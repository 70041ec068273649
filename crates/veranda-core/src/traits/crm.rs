// SPDX-FileCopyrightText: 2026 Veranda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! CRM intake collaborator trait.

use async_trait::async_trait;

use crate::error::VerandaError;
use crate::types::LeadRecord;

/// The CRM intake endpoint: a fire-and-forget form submission.
///
/// Success is judged on transport status alone; the CRM response body is
/// not inspected. A non-success status fails the whole submission.
#[async_trait]
pub trait CrmIntake: Send + Sync {
    /// Submits the lead to the CRM form endpoint.
    async fn submit(&self, lead: &LeadRecord) -> Result<(), VerandaError>;
}
