//! Log reader with transparent decompression.
//!
//! The limiter writes a plain text log, but logrotate usually leaves older
//! generations compressed next to it. [`open_file`] picks a decoder from the
//! file extension so the same scan works on any of them.
//!
//! # Supported Formats
//!
//! - Plain text files
//! - Gzip compressed files (.gz)
//! - Zstandard compressed files (.zst)
//!
//! # Examples
//!
//! ```no_run
//! use iplimit_stats::utils::reader::open_file;
//! use std::io::{BufRead, BufReader};
//!
//! let reader = BufReader::new(open_file("/var/log/3xipl.log.1.gz").unwrap());
//! for line in reader.lines() {
//!     let line = line.unwrap();
//!     // classify line...
//! }
//! ```

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Opens a log file, decompressing `.gz` and `.zst` by extension.
pub fn open_file(path: impl AsRef<Path>) -> Result<Box<dyn Read + Send>> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("gz") => Ok(Box::new(GzDecoder::new(file))),
        Some("zst") => {
            let decoder = zstd::Decoder::new(file).with_context(|| {
                format!("Failed to create zstd decoder for: {}", path.display())
            })?;
            Ok(Box::new(decoder))
        }
        _ => Ok(Box::new(file)),
    }
}
