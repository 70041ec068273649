// SPDX-FileCopyrightText: 2026 Veranda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Veranda lead-capture engine.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Veranda configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
/// Collaborator endpoints and credentials default to unset: the delivery
/// clients fail closed when asked to call an unconfigured collaborator.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VerandaConfig {
    /// Concierge identity and behavior settings.
    #[serde(default)]
    pub concierge: ConciergeConfig,

    /// CRM intake collaborator settings.
    #[serde(default)]
    pub crm: CrmConfig,

    /// Lead store collaborator settings (write side).
    #[serde(default)]
    pub lead_store: LeadStoreConfig,

    /// Leads function settings (read side, used by `veranda leads`).
    #[serde(default)]
    pub leads: LeadsConfig,

    /// Fallback contact offered when a submission fails.
    #[serde(default)]
    pub fallback: FallbackConfig,
}

/// Concierge identity and behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConciergeConfig {
    /// Display name of the concierge.
    #[serde(default = "default_concierge_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Source tag attached to every lead produced by this deployment.
    #[serde(default = "default_source")]
    pub source: String,
}

impl Default for ConciergeConfig {
    fn default() -> Self {
        Self {
            name: default_concierge_name(),
            log_level: default_log_level(),
            source: default_source(),
        }
    }
}

fn default_concierge_name() -> String {
    "veranda".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_source() -> String {
    "chat".to_string()
}

/// CRM intake collaborator configuration.
///
/// The CRM form endpoint is public (no credential); the portal and form ids
/// select the destination form. Both must be set for submissions to run.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CrmConfig {
    /// Base URL of the CRM form submission API.
    #[serde(default = "default_crm_endpoint")]
    pub endpoint: String,

    /// CRM portal identifier. `None` disables CRM intake.
    #[serde(default)]
    pub portal_id: Option<String>,

    /// CRM form identifier. `None` disables CRM intake.
    #[serde(default)]
    pub form_id: Option<String>,

    /// Page URI reported in the submission context.
    #[serde(default = "default_page_uri")]
    pub page_uri: String,

    /// Page name reported in the submission context.
    #[serde(default = "default_page_name")]
    pub page_name: String,
}

impl Default for CrmConfig {
    fn default() -> Self {
        Self {
            endpoint: default_crm_endpoint(),
            portal_id: None,
            form_id: None,
            page_uri: default_page_uri(),
            page_name: default_page_name(),
        }
    }
}

fn default_crm_endpoint() -> String {
    "https://api.hsforms.com/submissions/v3/integration/submit".to_string()
}

fn default_page_uri() -> String {
    "https://veranda.example/".to_string()
}

fn default_page_name() -> String {
    "Veranda".to_string()
}

/// Lead store collaborator configuration (write side).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LeadStoreConfig {
    /// Full URL of the lead intake function. `None` disables the lead store.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Bearer token for the lead intake function. `None` disables the lead store.
    #[serde(default)]
    pub api_token: Option<String>,
}

/// Leads function configuration (read side).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LeadsConfig {
    /// Full URL of the leads listing function. `None` disables the read side.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Bearer token for the leads listing function. `None` disables the read side.
    #[serde(default)]
    pub api_token: Option<String>,
}

/// Fallback contact configuration.
///
/// When a submission fails, the visitor is offered a direct contact path
/// instead of a retry. Unset means the failure message carries no link.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FallbackConfig {
    /// WhatsApp number (digits, with country code) for the direct contact link.
    #[serde(default)]
    pub whatsapp_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_default_when_absent() {
        let config: VerandaConfig = toml::from_str("").expect("empty config deserializes");
        assert_eq!(config.concierge.name, "veranda");
        assert_eq!(config.concierge.log_level, "info");
        assert!(config.lead_store.api_token.is_none());
        assert!(config.fallback.whatsapp_number.is_none());
    }

    #[test]
    fn deny_unknown_fields_rejects_typos() {
        let toml_str = r#"
[concierge]
naem = "test"
"#;
        assert!(toml::from_str::<VerandaConfig>(toml_str).is_err());
    }

    #[test]
    fn crm_defaults_keep_the_public_form_endpoint() {
        let config = CrmConfig::default();
        assert!(config.endpoint.starts_with("https://"));
        assert!(config.portal_id.is_none());
        assert!(config.form_id.is_none());
    }
}
