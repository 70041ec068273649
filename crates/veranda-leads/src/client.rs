// SPDX-FileCopyrightText: 2026 Veranda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the leads listing function.
//!
//! Bearer-authenticated GET; the response is either `{ "leads": [...] }` or
//! `{ "error": "..." }`. With the endpoint or token unset the client fails
//! closed without touching the network.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;
use veranda_config::model::LeadsConfig;
use veranda_core::VerandaError;

use crate::model::Lead;

/// Request timeout for lead listing.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Response body of the leads function.
#[derive(Debug, Deserialize)]
struct LeadsResponse {
    #[serde(default)]
    leads: Option<Vec<Lead>>,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for the leads function (read side).
#[derive(Debug, Clone)]
pub struct LeadsClient {
    client: reqwest::Client,
    endpoint: Option<String>,
    api_token: Option<String>,
}

impl LeadsClient {
    /// Creates a client from the leads section of the configuration.
    pub fn new(config: &LeadsConfig) -> Result<Self, VerandaError> {
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
            VerandaError::Config("leads.endpoint is not set; lead listing is unavailable".into())
        })?;
        let token = self.api_token.as_deref().ok_or_else(|| {
            VerandaError::Config("leads.api_token is not set; lead listing is unavailable".into())
        })?;
        Ok((endpoint, token))
    }

    /// Fetches all stored leads.
    pub async fn fetch(&self) -> Result<Vec<Lead>, VerandaError> {
        let (endpoint, token) = self.credentials()?;

        let response = self
            .client
            .get(endpoint)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| VerandaError::LeadStore {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        debug!(status = %status, "leads response received");

        let parsed: Option<LeadsResponse> = serde_json::from_str(&body).ok();

        if !status.is_success() {
            let detail = parsed
                .and_then(|p| p.error)
                .unwrap_or_else(|| body.clone());
            return Err(VerandaError::LeadStore {
                message: format!("leads function returned {status}: {detail}"),
                source: None,
            });
        }

        match parsed {
            Some(LeadsResponse { error: Some(error), .. }) => Err(VerandaError::LeadStore {
                message: format!("leads function reported: {error}"),
                source: None,
            }),
            Some(LeadsResponse { leads: Some(leads), .. }) => Ok(leads),
            _ => Err(VerandaError::LeadStore {
                message: "leads function response carried no lead list".into(),
                source: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn config(endpoint: &str) -> LeadsConfig {
        LeadsConfig {
            endpoint: Some(format!("{endpoint}/leads")),
            api_token: Some("read-token".into()),
        }
    }

    #[tokio::test]
    async fn fetch_returns_parsed_leads() {
        let server = MockServer::start().await;

        let body = json!({"leads": [{
            "id": "abc-123",
            "name": "Maria",
            "email": "maria@example.com",
            "phone": "11999998888",
            "message": "",
            "whatsappConsent": true,
            "timestamp": "2026-08-06T12:30:00Z",
            "source": "chat"
        }]});

        Mock::given(method("GET"))
            .and(path("/leads"))
            .and(header("authorization", "Bearer read-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .expect(1)
            .mount(&server)
            .await;

        let client = LeadsClient::new(&config(&server.uri())).unwrap();
        let leads = client.fetch().await.expect("fetch succeeds");
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].name, "Maria");
    }

    #[tokio::test]
    async fn error_body_surfaces_as_failure() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/leads"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"error": "not authorized"})),
            )
            .mount(&server)
            .await;

        let client = LeadsClient::new(&config(&server.uri())).unwrap();
        let err = client.fetch().await.unwrap_err();
        assert!(err.to_string().contains("not authorized"), "got: {err}");
    }

    #[tokio::test]
    async fn transport_error_carries_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/leads"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = LeadsClient::new(&config(&server.uri())).unwrap();
        let err = client.fetch().await.unwrap_err();
        assert!(err.to_string().contains("500"), "got: {err}");
    }

    #[tokio::test]
    async fn missing_configuration_fails_closed_without_a_call() {
        let server = MockServer::start().await;

        let client = LeadsClient::new(&LeadsConfig::default()).unwrap();
        let err = client.fetch().await.unwrap_err();
        assert!(matches!(err, VerandaError::Config(_)), "got: {err}");
        assert!(
            server.received_requests().await.unwrap_or_default().is_empty(),
            "fail-closed must not reach the network"
        );
    }
}
