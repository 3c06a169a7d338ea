//! Ban log parsing and statistics.
//!
//! - [`types`] - Log events and the [`StatsSnapshot`](types::StatsSnapshot) result
//! - [`parser`] - Line classifier for ban/unban records
//! - [`stats`] - Streaming aggregator and identity ranking
//! - [`error`] - Error type shared with the housekeeping helpers

pub mod error;
pub mod parser;
pub mod stats;
pub mod types;

pub use error::Error;
pub use stats::{compute_stats, StatsAggregator, DEFAULT_TOP_N};
pub use types::{IdentityFrequency, LogEvent, StatsSnapshot};
