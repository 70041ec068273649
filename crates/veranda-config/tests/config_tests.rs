// SPDX-FileCopyrightText: 2026 Veranda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Veranda configuration system.

use veranda_config::diagnostic::ConfigError;
use veranda_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_veranda_config() {
    let toml = r#"
[concierge]
name = "claris"
log_level = "debug"
source = "landing-page"

[crm]
portal_id = "50401797"
form_id = "ec59b695"
page_uri = "https://claris.example/"
page_name = "Claris"

[lead_store]
endpoint = "https://functions.example/chat-submit"
api_token = "store-token"

[leads]
endpoint = "https://functions.example/leads"
api_token = "leads-token"

[fallback]
whatsapp_number = "5511999998888"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.concierge.name, "claris");
    assert_eq!(config.concierge.log_level, "debug");
    assert_eq!(config.concierge.source, "landing-page");
    assert_eq!(config.crm.portal_id.as_deref(), Some("50401797"));
    assert_eq!(config.crm.form_id.as_deref(), Some("ec59b695"));
    assert_eq!(
        config.lead_store.endpoint.as_deref(),
        Some("https://functions.example/chat-submit")
    );
    assert_eq!(config.lead_store.api_token.as_deref(), Some("store-token"));
    assert_eq!(config.leads.api_token.as_deref(), Some("leads-token"));
    assert_eq!(
        config.fallback.whatsapp_number.as_deref(),
        Some("5511999998888")
    );
}

/// Empty TOML yields compiled defaults with collaborators unset.
#[test]
fn empty_toml_yields_defaults() {
    let config = load_config_from_str("").expect("defaults should deserialize");
    assert_eq!(config.concierge.name, "veranda");
    assert_eq!(config.concierge.log_level, "info");
    assert_eq!(config.concierge.source, "chat");
    assert!(config.crm.portal_id.is_none());
    assert!(config.lead_store.endpoint.is_none());
    assert!(config.leads.endpoint.is_none());
    assert!(config.fallback.whatsapp_number.is_none());
    assert!(
        config
            .crm
            .endpoint
            .starts_with("https://api.hsforms.com/submissions")
    );
}

/// Unknown field in a section produces a diagnostic with a suggestion.
#[test]
fn unknown_field_produces_suggestion() {
    let toml = r#"
[lead_store]
endpont = "https://functions.example/chat-submit"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown field");
    let unknown = errors
        .iter()
        .find_map(|e| match e {
            ConfigError::UnknownKey { key, suggestion, .. } => Some((key, suggestion)),
            _ => None,
        })
        .expect("should produce an UnknownKey diagnostic");
    assert_eq!(unknown.0, "endpont");
    assert_eq!(unknown.1.as_deref(), Some("endpoint"));
}

/// Wrong-typed values surface as InvalidType diagnostics.
#[test]
fn wrong_type_produces_invalid_type_error() {
    let toml = r#"
[crm]
portal_id = 50401797
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject wrong type");
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidType { .. } | ConfigError::Other(_))),
        "expected a type diagnostic, got: {errors:?}"
    );
}

/// Validation runs after a successful parse and collects all failures.
#[test]
fn validation_collects_multiple_errors() {
    let toml = r#"
[concierge]
log_level = "loud"

[leads]
endpoint = "not-a-url"
api_token = "tok"
"#;

    let errors = load_and_validate_str(toml).expect_err("should fail validation");
    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    assert!(messages.iter().any(|m| m.contains("log_level")), "{messages:?}");
    assert!(messages.iter().any(|m| m.contains("leads.endpoint")), "{messages:?}");
}
