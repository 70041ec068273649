// SPDX-FileCopyrightText: 2026 Veranda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! CSV export of stored leads.

use std::io::Write;

use veranda_core::VerandaError;

use crate::model::Lead;

const HEADERS: [&str; 7] = [
    "Name",
    "Email",
    "Phone",
    "Message",
    "WhatsApp Consent",
    "Date",
    "Source",
];

/// Writes the given leads as CSV (header row first) to any writer.
///
/// Quoting and escaping follow the csv crate's defaults; timestamps are
/// written as RFC 3339 so the export round-trips.
pub fn write_csv<'a, W, I>(leads: I, writer: W) -> Result<(), VerandaError>
where
    W: Write,
    I: IntoIterator<Item = &'a Lead>,
{
    let mut out = csv::Writer::from_writer(writer);

    out.write_record(HEADERS)
        .map_err(|e| VerandaError::Internal(format!("failed to write CSV header: {e}")))?;

    for lead in leads {
        out.write_record([
            lead.name.as_str(),
            lead.email.as_str(),
            lead.phone.as_str(),
            lead.message.as_str(),
            if lead.whatsapp_consent { "yes" } else { "no" },
            &lead.timestamp.to_rfc3339(),
            lead.source.as_str(),
        ])
        .map_err(|e| VerandaError::Internal(format!("failed to write CSV record: {e}")))?;
    }

    out.flush()
        .map_err(|e| VerandaError::Internal(format!("failed to flush CSV output: {e}")))?;
    Ok(())
}

/// Suggested file name for an export on the given date, e.g.
/// `veranda-leads-2026-08-06.csv`.
pub fn export_file_name(date: chrono::NaiveDate) -> String {
    format!("veranda-leads-{date}.csv")
}
