// SPDX-FileCopyrightText: 2026 Veranda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Submission coordinator: delivers a completed lead to the collaborators.
//!
//! The protocol is sequential and fail-fast: the CRM intake is called first,
//! and a rejection there means the lead store is never contacted. Every
//! failure is absorbed here and mapped to a [`SubmissionResult`]; nothing
//! propagates past this boundary.

use std::sync::Arc;

use tracing::{debug, info, warn};
use veranda_core::{CrmIntake, LeadRecord, LeadStore, SubmissionResult};

/// Delivers a completed conversation to the CRM intake and the lead store.
pub struct SubmissionCoordinator {
    crm: Arc<dyn CrmIntake>,
    store: Arc<dyn LeadStore>,
}

impl SubmissionCoordinator {
    pub fn new(crm: Arc<dyn CrmIntake>, store: Arc<dyn LeadStore>) -> Self {
        Self { crm, store }
    }

    /// Runs the delivery protocol once and returns the settled result.
    ///
    /// There is no automatic retry: a `Failure` is terminal for the session
    /// and the visitor's recovery path is the scripted fallback contact.
    pub async fn deliver(&self, lead: &LeadRecord) -> SubmissionResult {
        if let Err(e) = self.crm.submit(lead).await {
            warn!(error = %e, "crm intake rejected lead; skipping lead store");
            return SubmissionResult::Failure;
        }
        debug!("crm intake accepted lead");

        match self.store.store(lead).await {
            Ok(receipt) => {
                info!(lead_id = %receipt.lead_id, "lead stored");
                SubmissionResult::Success
            }
            Err(e) => {
                warn!(error = %e, "lead store rejected lead");
                SubmissionResult::Failure
            }
        }
    }
}
