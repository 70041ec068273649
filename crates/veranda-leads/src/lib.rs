// SPDX-FileCopyrightText: 2026 Veranda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-side access to stored leads.
//!
//! Fetches the lead list from the remote leads function, and provides the
//! dashboard-style operations over it: summary stats, search filtering, and
//! CSV export. Storage itself lives behind the remote function; this crate
//! never persists anything locally.

pub mod client;
pub mod export;
pub mod model;
pub mod stats;

pub use client::LeadsClient;
pub use export::{export_file_name, write_csv};
pub use model::Lead;
pub use stats::{LeadStats, filter_leads, matches_query};
