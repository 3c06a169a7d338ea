//! Utility functions and helpers.
//!
//! - [`fs`] - Create the log file and its directories when missing
//! - [`reader`] - File reader with automatic decompression
//! - [`format`] - Number, timestamp and text formatting for reports
//!
//! # Examples
//!
//! ## Making sure the log path is usable
//!
//! ```no_run
//! use iplimit_stats::utils::fs::ensure_file_exists;
//!
//! ensure_file_exists("/var/log/3xipl.log").unwrap();
//! ```
//!
//! ## Reading a rotated log
//!
//! ```no_run
//! use iplimit_stats::utils::reader::open_file;
//! use std::io::BufReader;
//!
//! let reader = BufReader::new(open_file("/var/log/3xipl.log.1.zst").unwrap());
//! ```

pub mod format;
pub mod fs;
pub mod reader;
