// SPDX-FileCopyrightText: 2026 Veranda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP delivery adapters for the Veranda collaborators.
//!
//! Implements the [`veranda_core::CrmIntake`] and [`veranda_core::LeadStore`]
//! traits over reqwest. Both clients fail closed: an unset endpoint or
//! credential yields a configuration error at the call site, and the network
//! is never touched.

pub mod crm;
pub mod lead_store;
pub mod types;

pub use crm::CrmClient;
pub use lead_store::LeadStoreClient;
