// SPDX-FileCopyrightText: 2026 Veranda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types for the collaborator endpoints.

use serde::{Deserialize, Serialize};
use veranda_core::LeadRecord;

/// One field entry in a CRM form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrmField {
    pub name: String,
    pub value: String,
}

/// Submission context reported alongside the CRM form fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrmContext {
    #[serde(rename = "pageUri")]
    pub page_uri: String,
    #[serde(rename = "pageName")]
    pub page_name: String,
}

/// Body of a CRM form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrmSubmission {
    pub fields: Vec<CrmField>,
    pub context: CrmContext,
}

impl CrmSubmission {
    /// Maps a lead onto the CRM form's field names.
    pub fn from_lead(lead: &LeadRecord, page_uri: &str, page_name: &str) -> Self {
        let field = |name: &str, value: &str| CrmField {
            name: name.to_string(),
            value: value.to_string(),
        };
        Self {
            fields: vec![
                field("firstname", &lead.name),
                field("email", &lead.email),
                field("phone", &lead.phone),
                field("message", &lead.message),
            ],
            context: CrmContext {
                page_uri: page_uri.to_string(),
                page_name: page_name.to_string(),
            },
        }
    }
}

/// Response body of the lead store function.
///
/// Acceptance is signalled by `leadId`; rejections carry `error`. A success
/// status without either is treated as a rejection, not silently accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreResponse {
    #[serde(rename = "leadId", default)]
    pub lead_id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
