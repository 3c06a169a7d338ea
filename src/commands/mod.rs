//! Command implementations behind the `iplimit-stats` binary.
//!
//! - [`stats`] - Scan the ban log and report totals and the most banned emails
//! - [`ensure_log`] - Housekeeping job that keeps the log path usable

pub mod ensure_log;
pub mod stats;
