//! Ban/unban statistics over the IP limit log.
//!
//! The aggregator makes one streaming pass over the log, classifies every
//! line with a [`LineClassifier`], and folds the events into counters and
//! distinct-value sets. Memory grows with the number of distinct identities
//! and addresses, never with the size of the log.
//!
//! A log that cannot be opened is reported as an empty snapshot: before the
//! limiter has banned anyone the file may legitimately not exist yet.
//!
//! # Example
//!
//! ```no_run
//! use iplimit_stats::iplimit::stats::StatsAggregator;
//!
//! let aggregator = StatsAggregator::new();
//! let snapshot = aggregator.compute_stats("/var/log/3xipl.log", 5).unwrap();
//! println!("{} bans, {} unbans", snapshot.ban_count, snapshot.unban_count);
//! ```

use super::error::{Error, Result};
use super::parser::LineClassifier;
use super::types::{IdentityFrequency, LogEvent, StatsSnapshot};
use crate::utils::reader::open_file;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Ranking length used when the caller asks for zero entries
pub const DEFAULT_TOP_N: usize = 5;

/// Computes [`StatsSnapshot`]s from ban logs.
///
/// Holds only the compiled line patterns, so a single instance can be shared
/// between threads; every call opens its own read handle.
#[derive(Debug, Clone, Default)]
pub struct StatsAggregator {
    classifier: LineClassifier,
}

impl StatsAggregator {
    pub fn new() -> Self {
        Self {
            classifier: LineClassifier::new(),
        }
    }

    /// Scan the log at `log_path` and return its statistics.
    ///
    /// `top_n` bounds the ranking; `0` means [`DEFAULT_TOP_N`]. Compressed
    /// rotations (`.gz`, `.zst`) are decompressed on the fly.
    ///
    /// # Errors
    ///
    /// Only a read failure after the file was opened is an error. A missing
    /// or unreadable file yields an empty snapshot.
    pub fn compute_stats(&self, log_path: impl AsRef<Path>, top_n: usize) -> Result<StatsSnapshot> {
        let log_path = log_path.as_ref();
        let generated_at = Utc::now();

        let file = match open_file(log_path) {
            Ok(file) => file,
            Err(e) => {
                debug!(path = %log_path.display(), error = %format!("{e:#}"), "ban log unavailable, reporting empty stats");
                return Ok(StatsSnapshot::empty(generated_at));
            }
        };

        self.scan(BufReader::new(file), log_path, top_n, generated_at)
    }

    /// Same pass as [`compute_stats`](Self::compute_stats) over an already
    /// open reader.
    pub fn scan_reader<R: BufRead>(&self, reader: R, top_n: usize) -> Result<StatsSnapshot> {
        self.scan(reader, Path::new("<reader>"), top_n, Utc::now())
    }

    fn scan<R: BufRead>(
        &self,
        mut reader: R,
        source: &Path,
        top_n: usize,
        generated_at: DateTime<Utc>,
    ) -> Result<StatsSnapshot> {
        let mut totals = Accumulator::default();
        let mut buf = Vec::with_capacity(256);
        let mut line_number = 0;

        loop {
            buf.clear();
            let bytes_read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source_err| Error::Read {
                    path: source.to_path_buf(),
                    line: line_number + 1,
                    source: source_err,
                })?;
            if bytes_read == 0 {
                break;
            }
            line_number += 1;

            // The limiter writes plain text, but don't let a stray invalid byte
            // end the scan.
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);
            totals.record(self.classifier.classify(line));
        }

        debug!(
            path = %source.display(),
            lines = line_number,
            bans = totals.ban_count,
            unbans = totals.unban_count,
            "scanned ban log"
        );

        Ok(totals.finish(top_n, generated_at))
    }
}

/// Scan `log_path` with a one-off [`StatsAggregator`]
pub fn compute_stats(log_path: impl AsRef<Path>, top_n: usize) -> Result<StatsSnapshot> {
    StatsAggregator::new().compute_stats(log_path, top_n)
}

/// Running totals for one scan
#[derive(Debug, Default)]
struct Accumulator {
    ban_count: usize,
    unban_count: usize,
    identities: HashSet<String>,
    addresses: HashSet<String>,
    ban_frequency: HashMap<String, usize>,
}

impl Accumulator {
    fn record(&mut self, event: LogEvent<'_>) {
        match event {
            LogEvent::Ban { identity, address } => {
                self.ban_count += 1;
                if let Some(identity) = identity {
                    insert_borrowed(&mut self.identities, identity);
                    match self.ban_frequency.get_mut(identity) {
                        Some(count) => *count += 1,
                        None => {
                            self.ban_frequency.insert(identity.to_owned(), 1);
                        }
                    }
                }
                if let Some(address) = address {
                    insert_borrowed(&mut self.addresses, address);
                }
            }
            LogEvent::Unban { identity, address } => {
                self.unban_count += 1;
                if let Some(identity) = identity {
                    insert_borrowed(&mut self.identities, identity);
                }
                if let Some(address) = address {
                    insert_borrowed(&mut self.addresses, address);
                }
            }
            LogEvent::Other => {}
        }
    }

    fn finish(self, top_n: usize, generated_at: DateTime<Utc>) -> StatsSnapshot {
        StatsSnapshot {
            generated_at,
            ban_count: self.ban_count,
            unban_count: self.unban_count,
            unique_address_count: self.addresses.len(),
            unique_identity_count: self.identities.len(),
            top_identities: rank_identities(self.ban_frequency, top_n),
        }
    }
}

/// Avoids allocating for values that are already in the set
fn insert_borrowed(set: &mut HashSet<String>, value: &str) {
    if !set.contains(value) {
        set.insert(value.to_owned());
    }
}

/// Order identities by bans descending, then identity ascending, and keep the
/// first `top_n` (`0` means [`DEFAULT_TOP_N`]).
pub fn rank_identities(ban_frequency: HashMap<String, usize>, top_n: usize) -> Vec<IdentityFrequency> {
    let top_n = if top_n == 0 { DEFAULT_TOP_N } else { top_n };

    let mut ranked: Vec<IdentityFrequency> = ban_frequency
        .into_iter()
        .map(|(identity, bans)| IdentityFrequency { identity, bans })
        .collect();
    ranked.sort_unstable_by(|a, b| b.bans.cmp(&a.bans).then_with(|| a.identity.cmp(&b.identity)));
    ranked.truncate(top_n);
    ranked
}
