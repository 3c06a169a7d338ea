//! Log path housekeeping job.
//!
//! Meant to be triggered periodically by the panel's scheduler (or cron) so
//! the limiter always has a log to append to and the stats scan always has a
//! file to open, even after the log folder was wiped or rotated away.
//!
//! # Usage
//!
//! ```bash
//! # Scheduled: failures are logged and the job still exits cleanly
//! iplimit-stats ensure-log
//!
//! # Interactive: fail with a non-zero exit status
//! iplimit-stats --log-path /tmp/3xipl.log ensure-log --strict
//! ```

use crate::utils::fs::ensure_file_exists;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, warn};

/// Ensure the ban log and its folder exist.
///
/// Without `strict`, a failure is logged at warn level and swallowed so the
/// scheduler keeps running the job on its next tick.
pub fn run(log_path: &Path, strict: bool) -> Result<()> {
    match ensure_file_exists(log_path) {
        Ok(()) => {
            debug!(path = %log_path.display(), "ip limit log present");
            Ok(())
        }
        Err(e) if strict => Err(e)
            .with_context(|| format!("Failed to ensure ip limit log exists: {}", log_path.display())),
        Err(e) => {
            warn!(
                path = %log_path.display(),
                error = %e,
                cause = ?std::error::Error::source(&e),
                "failed to ensure ip limit log exists"
            );
            Ok(())
        }
    }
}
