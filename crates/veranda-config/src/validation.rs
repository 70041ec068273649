// SPDX-FileCopyrightText: 2026 Veranda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as known log levels, endpoint URL shapes, and
//! non-empty collaborator identifiers.

use crate::diagnostic::ConfigError;
use crate::model::VerandaConfig;

const KNOWN_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &VerandaConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.concierge.name.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "concierge.name must not be empty".to_string(),
        });
    }

    let level = config.concierge.log_level.trim();
    if !KNOWN_LOG_LEVELS.contains(&level) {
        errors.push(ConfigError::Validation {
            message: format!(
                "concierge.log_level `{level}` is not one of: {}",
                KNOWN_LOG_LEVELS.join(", ")
            ),
        });
    }

    if config.concierge.source.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "concierge.source must not be empty".to_string(),
        });
    }

    check_endpoint(&mut errors, "crm.endpoint", Some(&config.crm.endpoint));
    check_endpoint(
        &mut errors,
        "lead_store.endpoint",
        config.lead_store.endpoint.as_deref(),
    );
    check_endpoint(&mut errors, "leads.endpoint", config.leads.endpoint.as_deref());

    check_set_but_empty(&mut errors, "crm.portal_id", config.crm.portal_id.as_deref());
    check_set_but_empty(&mut errors, "crm.form_id", config.crm.form_id.as_deref());
    check_set_but_empty(
        &mut errors,
        "lead_store.api_token",
        config.lead_store.api_token.as_deref(),
    );
    check_set_but_empty(&mut errors, "leads.api_token", config.leads.api_token.as_deref());

    if let Some(number) = config.fallback.whatsapp_number.as_deref() {
        if !number.chars().all(|c| c.is_ascii_digit()) || number.is_empty() {
            errors.push(ConfigError::Validation {
                message: format!(
                    "fallback.whatsapp_number must be digits only (country code included), got `{number}`"
                ),
            });
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// An endpoint, when set, must be an absolute http(s) URL.
fn check_endpoint(errors: &mut Vec<ConfigError>, key: &str, value: Option<&str>) {
    let Some(url) = value else { return };
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        errors.push(ConfigError::Validation {
            message: format!("{key} must be an http(s) URL, got `{url}`"),
        });
    }
}

/// Setting a collaborator key to an empty string is a configuration mistake,
/// not a disablement -- unset keys disable, empty keys error.
fn check_set_but_empty(errors: &mut Vec<ConfigError>, key: &str, value: Option<&str>) {
    if let Some(v) = value {
        if v.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("{key} is set but empty; unset it to disable the collaborator"),
            });
        }
    }
}
