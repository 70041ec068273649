// SPDX-FileCopyrightText: 2026 Veranda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `veranda doctor` command implementation.
//!
//! Runs diagnostic checks against the Veranda configuration to identify
//! unconfigured collaborators before a visitor hits a failed submission.
//! With `--deep`, also exercises the leads function over the network.

use std::io::IsTerminal;
use std::time::{Duration, Instant};

use veranda_config::VerandaConfig;
use veranda_core::VerandaError;
use veranda_leads::LeadsClient;

/// Status of a diagnostic check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed successfully.
    Pass,
    /// Check passed with a warning.
    Warn,
    /// Check failed.
    Fail,
}

/// Result of a single diagnostic check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the check.
    pub name: String,
    /// Check status.
    pub status: CheckStatus,
    /// Human-readable message.
    pub message: String,
    /// Duration the check took.
    pub duration: Duration,
}

/// Run the `veranda doctor` command.
pub async fn run_doctor(
    config: &VerandaConfig,
    deep: bool,
    plain: bool,
) -> Result<(), VerandaError> {
    let use_color = !plain && std::io::stdout().is_terminal();
    let mut results = Vec::new();

    // Quick checks (always run).
    results.push(check_concierge(config));
    results.push(check_crm(config));
    results.push(check_lead_store(config));
    results.push(check_leads(config));
    results.push(check_fallback(config));

    // Deep checks (only with --deep).
    if deep {
        results.push(check_leads_connectivity(config).await);
    }

    print_results(&results, use_color, deep);
    Ok(())
}

fn print_results(results: &[CheckResult], use_color: bool, deep: bool) {
    println!();
    println!("  veranda doctor");
    println!("  {}", "-".repeat(50));

    let mut fail_count = 0;
    let mut warn_count = 0;

    for result in results {
        let duration_ms = result.duration.as_millis();
        let line = match result.status {
            CheckStatus::Pass => {
                if use_color {
                    use colored::Colorize;
                    format!(
                        "    {} {:<20} {} ({duration_ms}ms)",
                        "✓".green(),
                        result.name,
                        result.message
                    )
                } else {
                    format!(
                        "    [OK]   {:<20} {} ({duration_ms}ms)",
                        result.name, result.message
                    )
                }
            }
            CheckStatus::Warn => {
                warn_count += 1;
                if use_color {
                    use colored::Colorize;
                    format!(
                        "    {} {:<20} {} ({duration_ms}ms)",
                        "!".yellow(),
                        result.name,
                        result.message.yellow()
                    )
                } else {
                    format!(
                        "    [WARN] {:<20} {} ({duration_ms}ms)",
                        result.name, result.message
                    )
                }
            }
            CheckStatus::Fail => {
                fail_count += 1;
                if use_color {
                    use colored::Colorize;
                    format!(
                        "    {} {:<20} {} ({duration_ms}ms)",
                        "✗".red(),
                        result.name,
                        result.message.red()
                    )
                } else {
                    format!(
                        "    [FAIL] {:<20} {} ({duration_ms}ms)",
                        result.name, result.message
                    )
                }
            }
        };
        println!("{line}");
    }

    println!();

    if fail_count > 0 || warn_count > 0 {
        let issues = fail_count + warn_count;
        let issue_word = if issues == 1 { "issue" } else { "issues" };
        println!("  {issues} {issue_word} found.");
        if !deep {
            println!("  Run with --deep to also check collaborator connectivity.");
        }
    } else {
        println!("  All checks passed.");
    }

    println!();
}

fn check_concierge(config: &VerandaConfig) -> CheckResult {
    let start = Instant::now();
    CheckResult {
        name: "concierge".into(),
        status: CheckStatus::Pass,
        message: format!(
            "name={}, log_level={}",
            config.concierge.name, config.concierge.log_level
        ),
        duration: start.elapsed(),
    }
}

fn check_crm(config: &VerandaConfig) -> CheckResult {
    let start = Instant::now();
    let (status, message) = match (&config.crm.portal_id, &config.crm.form_id) {
        (Some(_), Some(_)) => (CheckStatus::Pass, "portal and form configured".to_string()),
        _ => (
            CheckStatus::Fail,
            "crm.portal_id / crm.form_id not set; submissions will fail closed".to_string(),
        ),
    };
    CheckResult {
        name: "crm intake".into(),
        status,
        message,
        duration: start.elapsed(),
    }
}

fn check_lead_store(config: &VerandaConfig) -> CheckResult {
    let start = Instant::now();
    let (status, message) = match (&config.lead_store.endpoint, &config.lead_store.api_token) {
        (Some(_), Some(_)) => (CheckStatus::Pass, "endpoint and token configured".to_string()),
        _ => (
            CheckStatus::Fail,
            "lead_store.endpoint / lead_store.api_token not set; submissions will fail closed"
                .to_string(),
        ),
    };
    CheckResult {
        name: "lead store".into(),
        status,
        message,
        duration: start.elapsed(),
    }
}

fn check_leads(config: &VerandaConfig) -> CheckResult {
    let start = Instant::now();
    let (status, message) = match (&config.leads.endpoint, &config.leads.api_token) {
        (Some(_), Some(_)) => (CheckStatus::Pass, "endpoint and token configured".to_string()),
        _ => (
            CheckStatus::Warn,
            "leads.endpoint / leads.api_token not set; `veranda leads` is unavailable".to_string(),
        ),
    };
    CheckResult {
        name: "leads read side".into(),
        status,
        message,
        duration: start.elapsed(),
    }
}

fn check_fallback(config: &VerandaConfig) -> CheckResult {
    let start = Instant::now();
    let (status, message) = match &config.fallback.whatsapp_number {
        Some(number) => (CheckStatus::Pass, format!("direct contact +{number}")),
        None => (
            CheckStatus::Warn,
            "fallback.whatsapp_number not set; failure messages carry no contact link".to_string(),
        ),
    };
    CheckResult {
        name: "fallback contact".into(),
        status,
        message,
        duration: start.elapsed(),
    }
}

async fn check_leads_connectivity(config: &VerandaConfig) -> CheckResult {
    let start = Instant::now();
    let (status, message) = match LeadsClient::new(&config.leads) {
        Ok(client) => match client.fetch().await {
            Ok(leads) => (CheckStatus::Pass, format!("{} leads reachable", leads.len())),
            Err(e) => (CheckStatus::Fail, e.to_string()),
        },
        Err(e) => (CheckStatus::Fail, e.to_string()),
    };
    CheckResult {
        name: "leads connectivity".into(),
        status,
        message,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_flags_unset_collaborators() {
        let config = VerandaConfig::default();
        assert_eq!(check_crm(&config).status, CheckStatus::Fail);
        assert_eq!(check_lead_store(&config).status, CheckStatus::Fail);
        assert_eq!(check_leads(&config).status, CheckStatus::Warn);
        assert_eq!(check_fallback(&config).status, CheckStatus::Warn);
    }

    #[test]
    fn configured_collaborators_pass() {
        let mut config = VerandaConfig::default();
        config.crm.portal_id = Some("50401797".into());
        config.crm.form_id = Some("ec59b695".into());
        config.lead_store.endpoint = Some("https://functions.example/chat-submit".into());
        config.lead_store.api_token = Some("token".into());

        assert_eq!(check_crm(&config).status, CheckStatus::Pass);
        assert_eq!(check_lead_store(&config).status, CheckStatus::Pass);
    }
}
