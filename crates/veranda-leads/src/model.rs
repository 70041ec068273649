// SPDX-FileCopyrightText: 2026 Veranda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Stored-lead record as returned by the leads function.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One stored lead, in the leads function's wire convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub whatsapp_consent: bool,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub source: String,
}
