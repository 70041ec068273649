// SPDX-FileCopyrightText: 2026 Veranda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the lead store collaborator.
//!
//! The lead store is a bearer-authenticated JSON function. Acceptance is
//! judged on BOTH the transport status and the response body's
//! application-level indicator: a 200 with an `error` body is a rejection,
//! and a 200 without a `leadId` is treated as one too.
//!
//! With the endpoint or token unset the client fails closed -- it returns a
//! configuration error without making the call.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use veranda_config::model::LeadStoreConfig;
use veranda_core::{LeadReceipt, LeadRecord, LeadStore, VerandaError};

use crate::types::StoreResponse;

/// Request timeout for lead store submissions.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the lead store function.
#[derive(Debug, Clone)]
pub struct LeadStoreClient {
    client: reqwest::Client,
    endpoint: Option<String>,
    api_token: Option<String>,
}

impl LeadStoreClient {
    /// Creates a client from the lead store section of the configuration.
    pub fn new(config: &LeadStoreConfig) -> Result<Self, VerandaError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| VerandaError::LeadStore {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_token: config.api_token.clone(),
        })
    }

    /// Resolves endpoint and credential, failing closed when absent.
    fn credentials(&self) -> Result<(&str, &str), VerandaError> {
        let endpoint = self.endpoint.as_deref().ok_or_else(|| {
            VerandaError::Config("lead_store.endpoint is not set; lead store is unavailable".into())
        })?;
        let token = self.api_token.as_deref().ok_or_else(|| {
            VerandaError::Config("lead_store.api_token is not set; lead store is unavailable".into())
        })?;
        Ok((endpoint, token))
    }
}

#[async_trait]
impl LeadStore for LeadStoreClient {
    async fn store(&self, lead: &LeadRecord) -> Result<LeadReceipt, VerandaError> {
        let (endpoint, token) = self.credentials()?;

        let response = self
            .client
            .post(endpoint)
            .bearer_auth(token)
            .json(lead)
            .send()
            .await
            .map_err(|e| VerandaError::LeadStore {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        debug!(status = %status, "lead store response received");

        let parsed: Option<StoreResponse> = serde_json::from_str(&body).ok();

        if !status.is_success() {
            let detail = parsed
                .and_then(|p| p.error)
                .unwrap_or_else(|| body.clone());
            return Err(VerandaError::LeadStore {
                message: format!("lead store returned {status}: {detail}"),
                source: None,
            });
        }

        match parsed {
            Some(StoreResponse { error: Some(error), .. }) => Err(VerandaError::LeadStore {
                message: format!("lead store rejected the record: {error}"),
                source: None,
            }),
            Some(StoreResponse {
                lead_id: Some(lead_id),
                ..
            }) => Ok(LeadReceipt { lead_id }),
            _ => Err(VerandaError::LeadStore {
                message: "lead store response carried no acceptance indicator".into(),
                source: None,
            }),
        }
    }
}
