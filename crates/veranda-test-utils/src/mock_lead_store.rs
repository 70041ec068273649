// SPDX-FileCopyrightText: 2026 Veranda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock lead store collaborator for deterministic testing.

use std::sync::Mutex;

use async_trait::async_trait;
use veranda_core::{LeadReceipt, LeadRecord, LeadStore, VerandaError};

/// A mock lead store that records every stored lead and hands out
/// sequential receipts.
pub struct MockLeadStore {
    submissions: Mutex<Vec<LeadRecord>>,
    fail: bool,
}

impl MockLeadStore {
    /// A store that accepts everything.
    pub fn new() -> Self {
        Self {
            submissions: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// A store that answers with an application-level error body.
    pub fn failing() -> Self {
        Self {
            submissions: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// All leads passed to `store`, in call order.
    pub fn submissions(&self) -> Vec<LeadRecord> {
        self.submissions.lock().expect("mock lock").clone()
    }

    /// Number of `store` calls observed.
    pub fn submission_count(&self) -> usize {
        self.submissions.lock().expect("mock lock").len()
    }
}

impl Default for MockLeadStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LeadStore for MockLeadStore {
    async fn store(&self, lead: &LeadRecord) -> Result<LeadReceipt, VerandaError> {
        let mut submissions = self.submissions.lock().expect("mock lock");
        submissions.push(lead.clone());
        if self.fail {
            return Err(VerandaError::LeadStore {
                message: "lead store answered with an error body".into(),
                source: None,
            });
        }
        Ok(LeadReceipt {
            lead_id: format!("lead-{}", submissions.len()),
        })
    }
}
