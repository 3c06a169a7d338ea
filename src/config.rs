//! Location of the IP limit log.
//!
//! The limiter and the panel agree on a single log file inside the panel's
//! log folder. The folder comes from `XUI_LOG_FOLDER` when set, otherwise a
//! platform default. The CLI can override the whole path with `--log-path`.

use std::env;
use std::path::PathBuf;

/// Environment variable naming the log folder
pub const LOG_FOLDER_ENV: &str = "XUI_LOG_FOLDER";

/// File name of the ban/unban log inside the log folder
pub const IP_LIMIT_LOG_FILE: &str = "3xipl.log";

#[cfg(windows)]
const DEFAULT_LOG_FOLDER: &str = "log";
#[cfg(not(windows))]
const DEFAULT_LOG_FOLDER: &str = "/var/log";

/// Folder holding the panel's logs
pub fn log_folder() -> PathBuf {
    log_folder_from(env::var_os(LOG_FOLDER_ENV).map(PathBuf::from))
}

/// Canonical path of the ban/unban log
pub fn ip_limit_log_path() -> PathBuf {
    log_folder().join(IP_LIMIT_LOG_FILE)
}

/// Explicit override if given, otherwise [`ip_limit_log_path`]
pub fn resolve_log_path(explicit: Option<&str>) -> PathBuf {
    explicit.map_or_else(ip_limit_log_path, PathBuf::from)
}

fn log_folder_from(value: Option<PathBuf>) -> PathBuf {
    value
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FOLDER))
}
