//! # IP Limit Stats
//!
//! Ban/unban statistics for the IP connection-limit log, plus the
//! housekeeping that keeps that log's path usable.
//!
//! ## Overview
//!
//! The connection limiter appends a line to a plain text log every time it
//! bans or unbans an address for a client. This crate turns that log into a
//! point-in-time summary:
//!
//! - total bans and unbans
//! - distinct offending IPs and distinct affected emails
//! - the emails banned most often, ranked and deterministic on ties
//!
//! The scan streams the file line by line, so memory depends on the number of
//! distinct emails and IPs rather than on the size of the log. A log that does
//! not exist yet simply produces an all-zero snapshot.
//!
//! ## Architecture
//!
//! - [`iplimit`] - Line classification, aggregation and the snapshot types
//! - [`commands`] - The `stats` report and the `ensure-log` housekeeping job
//! - [`config`] - Where the log lives
//! - [`utils`] - Filesystem housekeeping, compressed readers, formatting
//!
//! ## Log Format
//!
//! Only two kinds of lines matter; everything else is ignored:
//!
//! ```text
//! 2024/05/01 10:00:00 BAN   [Email] = alice@example.com [IP] = 203.0.113.7 banned for 30 minutes
//! 2024/05/01 10:30:00 UNBAN [Email] = alice@example.com [IP] = 203.0.113.7
//! ```
//!
//! ## Example Usage
//!
//! ```bash
//! # Summary of the configured log
//! iplimit-stats stats
//!
//! # JSON snapshot for the panel
//! iplimit-stats stats --top 10 --format json
//!
//! # Scheduled housekeeping
//! iplimit-stats ensure-log
//! ```
//!
//! ## Library Usage
//!
//! ```no_run
//! use iplimit_stats::iplimit::StatsAggregator;
//! use iplimit_stats::utils::fs::ensure_file_exists;
//!
//! let path = iplimit_stats::config::ip_limit_log_path();
//! ensure_file_exists(&path).unwrap();
//!
//! let snapshot = StatsAggregator::new().compute_stats(&path, 5).unwrap();
//! for entry in &snapshot.top_identities {
//!     println!("{}: {}", entry.identity, entry.bans);
//! }
//! ```

pub mod commands;
pub mod config;
pub mod iplimit;
pub mod utils;
