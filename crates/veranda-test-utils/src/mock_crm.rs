// SPDX-FileCopyrightText: 2026 Veranda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock CRM intake collaborator for deterministic testing.

use std::sync::Mutex;

use async_trait::async_trait;
use veranda_core::{CrmIntake, LeadRecord, VerandaError};

/// A mock CRM intake that records every submission.
///
/// In failing mode it behaves like the real endpoint answering HTTP 500:
/// the submission is still observed (and counted) but reported as rejected.
pub struct MockCrm {
    submissions: Mutex<Vec<LeadRecord>>,
    fail: bool,
}

impl MockCrm {
    /// An intake that accepts everything.
    pub fn new() -> Self {
        Self {
            submissions: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// An intake that rejects everything with a server-error status.
    pub fn failing() -> Self {
        Self {
            submissions: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// All leads passed to `submit`, in call order.
    pub fn submissions(&self) -> Vec<LeadRecord> {
        self.submissions.lock().expect("mock lock").clone()
    }

    /// Number of `submit` calls observed.
    pub fn submission_count(&self) -> usize {
        self.submissions.lock().expect("mock lock").len()
    }
}

impl Default for MockCrm {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CrmIntake for MockCrm {
    async fn submit(&self, lead: &LeadRecord) -> Result<(), VerandaError> {
        self.submissions.lock().expect("mock lock").push(lead.clone());
        if self.fail {
            return Err(VerandaError::Crm {
                message: "CRM intake returned 500 Internal Server Error".into(),
                source: None,
            });
        }
        Ok(())
    }
}
