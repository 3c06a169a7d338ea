//! Ban/unban statistics report.
//!
//! Scans the IP limit log once and prints totals plus the most banned
//! identities. A log that does not exist yet is reported as all zeros.
//!
//! # Usage
//!
//! ```bash
//! # Human-readable summary of the configured log
//! iplimit-stats stats
//!
//! # Top 10 as JSON for the panel frontend
//! iplimit-stats stats --top 10 --format json
//!
//! # Ranking as CSV, from a rotated log
//! iplimit-stats --log-path /var/log/3xipl.log.1.gz stats --format csv --output bans.csv
//! ```
//!
//! # Output
//!
//! - `table`: totals and a ranked table on stdout
//! - `json`: the snapshot with the panel's field names (`banCount`, `topEmails`, ...)
//! - `csv`: one `rank,email,bans` row per ranked identity

use crate::iplimit::{StatsAggregator, StatsSnapshot};
use crate::utils::format::{format_number, format_timestamp, truncate};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Output formats accepted by [`run`]
pub const FORMATS: [&str; 3] = ["table", "json", "csv"];

pub fn run(log_path: &Path, top: usize, format: &str, output: Option<&str>) -> Result<()> {
    if !FORMATS.contains(&format) {
        return Err(anyhow::anyhow!(
            "Invalid format: {}. Must be one of: table, json, csv",
            format
        ));
    }

    let snapshot = StatsAggregator::new()
        .compute_stats(log_path, top)
        .with_context(|| format!("Failed to compute stats for {}", log_path.display()))?;

    tracing::info!(
        path = %log_path.display(),
        bans = snapshot.ban_count,
        unbans = snapshot.unban_count,
        "computed ban statistics"
    );

    match output {
        Some(output_path) => {
            let file = File::create(output_path)
                .with_context(|| format!("Failed to create output file: {}", output_path))?;
            let mut writer = BufWriter::new(file);
            render(&snapshot, log_path, format, &mut writer)?;
            writer.flush().context("Failed to write output file")?;
            eprintln!("Output written to: {}", output_path);
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            render(&snapshot, log_path, format, &mut writer)?;
        }
    }

    Ok(())
}

fn render<W: Write>(snapshot: &StatsSnapshot, log_path: &Path, format: &str, out: &mut W) -> Result<()> {
    match format {
        "json" => write_json(snapshot, out),
        "csv" => write_csv(snapshot, out),
        _ => write_table(snapshot, log_path, out),
    }
}

fn write_json<W: Write>(snapshot: &StatsSnapshot, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, snapshot).context("Failed to serialize to JSON")?;
    writeln!(out)?;
    Ok(())
}

fn write_csv<W: Write>(snapshot: &StatsSnapshot, out: &mut W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["rank", "email", "bans"])?;
    for (rank, entry) in snapshot.top_identities.iter().enumerate() {
        writer.write_record([
            (rank + 1).to_string(),
            entry.identity.clone(),
            entry.bans.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_table<W: Write>(snapshot: &StatsSnapshot, log_path: &Path, out: &mut W) -> Result<()> {
    writeln!(out, "\n{}", "=".repeat(70))?;
    writeln!(out, "IP Limit Ban Statistics")?;
    writeln!(out, "{}", "=".repeat(70))?;
    writeln!(out, "Log:       {}", log_path.display())?;
    writeln!(out, "Generated: {}", format_timestamp(&snapshot.generated_at))?;

    writeln!(out, "\nTotals")?;
    writeln!(out, "{}", "-".repeat(70))?;
    writeln!(out, "{:<30} {:>15}", "Bans", format_number(snapshot.ban_count))?;
    writeln!(out, "{:<30} {:>15}", "Unbans", format_number(snapshot.unban_count))?;
    writeln!(
        out,
        "{:<30} {:>15}",
        "Unique IPs",
        format_number(snapshot.unique_address_count)
    )?;
    writeln!(
        out,
        "{:<30} {:>15}",
        "Unique emails",
        format_number(snapshot.unique_identity_count)
    )?;

    writeln!(out, "\nTop {} Emails by Bans", snapshot.top_identities.len())?;
    writeln!(out, "{}", "-".repeat(70))?;
    if snapshot.top_identities.is_empty() {
        writeln!(out, "No bans recorded")?;
    } else {
        writeln!(out, "{:<6} {:<50} {:>12}", "Rank", "Email", "Bans")?;
        writeln!(out, "{}", "-".repeat(70))?;
        for (rank, entry) in snapshot.top_identities.iter().enumerate() {
            writeln!(
                out,
                "{:<6} {:<50} {:>12}",
                rank + 1,
                truncate(&entry.identity, 50),
                format_number(entry.bans)
            )?;
        }
    }
    writeln!(out, "{}", "=".repeat(70))?;

    Ok(())
}
