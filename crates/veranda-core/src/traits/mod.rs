// SPDX-FileCopyrightText: 2026 Veranda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator traits implemented by the delivery adapters.

pub mod crm;
pub mod lead_store;

pub use crm::CrmIntake;
pub use lead_store::{LeadReceipt, LeadStore};
