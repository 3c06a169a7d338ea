//! Error type for the ban log engine.

use std::io;
use std::path::PathBuf;

/// Failures surfaced by [`ensure_file_exists`](crate::utils::fs::ensure_file_exists)
/// and [`StatsAggregator`](crate::iplimit::stats::StatsAggregator).
///
/// A log file that cannot be opened is not represented here: the aggregator
/// treats it as an empty log.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create file {}", path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read line {line} from {}", path.display())]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
