// SPDX-FileCopyrightText: 2026 Veranda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `veranda leads` command implementation.
//!
//! Fetches stored leads from the remote leads function and either prints a
//! summary table or exports them as CSV.

use std::path::PathBuf;

use chrono::Utc;
use colored::Colorize;
use tracing::info;
use veranda_config::VerandaConfig;
use veranda_core::VerandaError;
use veranda_leads::{LeadStats, LeadsClient, export_file_name, filter_leads, write_csv};

/// Runs `veranda leads list`.
pub async fn run_list(config: &VerandaConfig, query: &str) -> Result<(), VerandaError> {
    let client = LeadsClient::new(&config.leads)?;
    let leads = client.fetch().await?;
    let stats = LeadStats::compute(&leads, Utc::now());
    let filtered = filter_leads(&leads, query);

    println!();
    println!(
        "  {} total | {} today | {} whatsapp consent | {}% with message",
        stats.total.to_string().bold(),
        stats.today,
        stats.whatsapp_consent,
        stats.with_message_pct
    );
    println!();

    if filtered.is_empty() {
        if query.trim().is_empty() {
            println!("  No leads received yet.");
        } else {
            println!("  No leads match `{query}`.");
        }
        return Ok(());
    }

    println!(
        "  {:<20} {:<28} {:<16} {:<17} {}",
        "NAME".dimmed(),
        "EMAIL".dimmed(),
        "PHONE".dimmed(),
        "RECEIVED".dimmed(),
        "WHATSAPP".dimmed()
    );
    for lead in &filtered {
        println!(
            "  {:<20} {:<28} {:<16} {:<17} {}",
            truncate(&lead.name, 20),
            truncate(&lead.email, 28),
            truncate(&lead.phone, 16),
            lead.timestamp.format("%Y-%m-%d %H:%M"),
            if lead.whatsapp_consent { "yes" } else { "no" }
        );
    }
    println!();
    println!("  {} shown", filtered.len());

    Ok(())
}

/// Runs `veranda leads export`.
pub async fn run_export(
    config: &VerandaConfig,
    query: &str,
    output: Option<PathBuf>,
) -> Result<(), VerandaError> {
    let client = LeadsClient::new(&config.leads)?;
    let leads = client.fetch().await?;
    let filtered = filter_leads(&leads, query);

    let path =
        output.unwrap_or_else(|| PathBuf::from(export_file_name(Utc::now().date_naive())));
    let file = std::fs::File::create(&path)
        .map_err(|e| VerandaError::Internal(format!("cannot create {}: {e}", path.display())))?;

    let count = filtered.len();
    write_csv(filtered, file)?;

    info!(count, path = %path.display(), "leads exported");
    println!("exported {count} leads to {}", path.display());
    Ok(())
}

/// Clips a cell to the column width, marking the cut with an ellipsis.
fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        value.to_string()
    } else {
        let clipped: String = value.chars().take(max.saturating_sub(1)).collect();
        format!("{clipped}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_values() {
        assert_eq!(truncate("Maria", 20), "Maria");
    }

    #[test]
    fn truncate_clips_long_values() {
        let clipped = truncate("a-very-long-email-address@example.com", 10);
        assert_eq!(clipped.chars().count(), 10);
        assert!(clipped.ends_with('…'));
    }
}
