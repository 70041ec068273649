// SPDX-FileCopyrightText: 2026 Veranda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Veranda integration tests.
//!
//! Provides deterministic in-memory implementations of the collaborator
//! traits: submissions are captured for assertion, and either collaborator
//! can be switched into a failing mode to exercise the failure paths.

pub mod mock_crm;
pub mod mock_lead_store;

pub use mock_crm::MockCrm;
pub use mock_lead_store::MockLeadStore;
