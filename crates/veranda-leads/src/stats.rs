// SPDX-FileCopyrightText: 2026 Veranda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Summary statistics and search filtering over stored leads.

use chrono::{DateTime, Utc};

use crate::model::Lead;

/// Dashboard-style summary of a lead set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadStats {
    /// All stored leads.
    pub total: usize,
    /// Leads received on the reference date (UTC calendar day).
    pub today: usize,
    /// Leads that consented to WhatsApp contact.
    pub whatsapp_consent: usize,
    /// Percentage of leads carrying a non-empty message, rounded.
    pub with_message_pct: u32,
}

impl LeadStats {
    /// Computes stats against a caller-supplied reference instant so tests
    /// and backfills are not tied to the wall clock.
    pub fn compute(leads: &[Lead], now: DateTime<Utc>) -> Self {
        let total = leads.len();
        let today = leads
            .iter()
            .filter(|l| l.timestamp.date_naive() == now.date_naive())
            .count();
        let whatsapp_consent = leads.iter().filter(|l| l.whatsapp_consent).count();
        let with_message = leads.iter().filter(|l| !l.message.is_empty()).count();
        let with_message_pct = if total > 0 {
            ((with_message as f64 / total as f64) * 100.0).round() as u32
        } else {
            0
        };
        Self {
            total,
            today,
            whatsapp_consent,
            with_message_pct,
        }
    }
}

/// Whether a lead matches a search query.
///
/// Name and email match case-insensitively; phone matches by substring.
pub fn matches_query(lead: &Lead, query: &str) -> bool {
    let query_lower = query.to_lowercase();
    lead.name.to_lowercase().contains(&query_lower)
        || lead.email.to_lowercase().contains(&query_lower)
        || lead.phone.contains(query)
}

/// Filters a lead set by a search query; an empty query keeps everything.
pub fn filter_leads<'a>(leads: &'a [Lead], query: &str) -> Vec<&'a Lead> {
    if query.trim().is_empty() {
        return leads.iter().collect();
    }
    leads.iter().filter(|l| matches_query(l, query)).collect()
}
