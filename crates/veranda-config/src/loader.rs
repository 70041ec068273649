// SPDX-FileCopyrightText: 2026 Veranda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./veranda.toml` > `~/.config/veranda/veranda.toml`
//! > `/etc/veranda/veranda.toml` with environment variable overrides via the
//! `VERANDA_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::VerandaConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/veranda/veranda.toml` (system-wide)
/// 3. `~/.config/veranda/veranda.toml` (user XDG config)
/// 4. `./veranda.toml` (local directory)
/// 5. `VERANDA_*` environment variables
pub fn load_config() -> Result<VerandaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VerandaConfig::default()))
        .merge(Toml::file("/etc/veranda/veranda.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("veranda/veranda.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("veranda.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<VerandaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VerandaConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<VerandaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VerandaConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// CRITICAL: Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names. For example, `VERANDA_LEAD_STORE_API_TOKEN`
/// must map to `lead_store.api_token`, not `lead.store.api.token`.
fn env_provider() -> Env {
    Env::prefixed("VERANDA_").map(|key| map_env_key(key.as_str()).into())
}

/// Map a lowercased, prefix-stripped env var name to a dotted config path.
///
/// `lead_store_` must be rewritten before any shorter section prefix so the
/// section boundary lands after the full section name.
pub(crate) fn map_env_key(key: &str) -> String {
    key.replacen("concierge_", "concierge.", 1)
        .replacen("lead_store_", "lead_store.", 1)
        .replacen("crm_", "crm.", 1)
        .replacen("leads_", "leads.", 1)
        .replacen("fallback_", "fallback.", 1)
}
