// SPDX-FileCopyrightText: 2026 Veranda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the CRM intake collaborator.
//!
//! The CRM form endpoint is public: the portal and form ids select the
//! destination, and success is judged on transport status alone. With either
//! id unset the client fails closed -- it returns a configuration error
//! without making the call.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use veranda_config::model::CrmConfig;
use veranda_core::{CrmIntake, LeadRecord, VerandaError};

use crate::types::CrmSubmission;

/// Request timeout for CRM form submissions.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the CRM form submission API.
#[derive(Debug, Clone)]
pub struct CrmClient {
    client: reqwest::Client,
    endpoint: String,
    portal_id: Option<String>,
    form_id: Option<String>,
    page_uri: String,
    page_name: String,
}

impl CrmClient {
    /// Creates a client from the CRM section of the configuration.
    ///
    /// Construction succeeds even with ids unset; the fail-closed check
    /// happens per call so a misconfigured deployment still chats.
    pub fn new(config: &CrmConfig) -> Result<Self, VerandaError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| VerandaError::Crm {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            portal_id: config.portal_id.clone(),
            form_id: config.form_id.clone(),
            page_uri: config.page_uri.clone(),
            page_name: config.page_name.clone(),
        })
    }

    /// Resolves the form URL, failing closed when the ids are absent.
    fn form_url(&self) -> Result<String, VerandaError> {
        let portal = self.portal_id.as_deref().ok_or_else(|| {
            VerandaError::Config("crm.portal_id is not set; CRM intake is unavailable".into())
        })?;
        let form = self.form_id.as_deref().ok_or_else(|| {
            VerandaError::Config("crm.form_id is not set; CRM intake is unavailable".into())
        })?;
        Ok(format!(
            "{}/{portal}/{form}",
            self.endpoint.trim_end_matches('/')
        ))
    }
}

#[async_trait]
impl CrmIntake for CrmClient {
    async fn submit(&self, lead: &LeadRecord) -> Result<(), VerandaError> {
        let url = self.form_url()?;
        let payload = CrmSubmission::from_lead(lead, &self.page_uri, &self.page_name);

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| VerandaError::Crm {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, "crm intake response received");

        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(VerandaError::Crm {
            message: format!("CRM intake returned {status}: {body}"),
            source: None,
        })
    }
}
