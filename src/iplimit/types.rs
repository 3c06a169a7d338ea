//! Data structures for ban log events and the statistics derived from them.
//!
//! [`LogEvent`] is the per-line classification result and only lives for the
//! duration of a scan. [`StatsSnapshot`] is the aggregate handed to callers;
//! its JSON form keeps the field names the panel frontend already consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Classification of a single log line.
///
/// Identity and address borrow from the scanned line and are `None` when the
/// corresponding field was present but empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogEvent<'a> {
    /// A connection-limit ban of `address` for `identity`
    Ban {
        identity: Option<&'a str>,
        address: Option<&'a str>,
    },
    /// The matching unban record
    Unban {
        identity: Option<&'a str>,
        address: Option<&'a str>,
    },
    /// Anything else written to the log
    Other,
}

impl<'a> LogEvent<'a> {
    /// Identity carried by a ban/unban event
    pub fn identity(&self) -> Option<&'a str> {
        match *self {
            LogEvent::Ban { identity, .. } | LogEvent::Unban { identity, .. } => identity,
            LogEvent::Other => None,
        }
    }

    /// Address carried by a ban/unban event
    pub fn address(&self) -> Option<&'a str> {
        match *self {
            LogEvent::Ban { address, .. } | LogEvent::Unban { address, .. } => address,
            LogEvent::Other => None,
        }
    }

    pub fn is_ban(&self) -> bool {
        matches!(self, LogEvent::Ban { .. })
    }

    pub fn is_unban(&self) -> bool {
        matches!(self, LogEvent::Unban { .. })
    }
}

/// Number of bans recorded against one identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityFrequency {
    #[serde(rename = "email")]
    pub identity: String,
    pub bans: usize,
}

/// Point-in-time aggregate of one pass over the ban log.
///
/// # Fields
///
/// - `generated_at`: wall clock when the scan started
/// - `ban_count` / `unban_count`: matching lines in this scan only
/// - `unique_address_count` / `unique_identity_count`: distinct non-empty
///   values seen across both ban and unban lines
/// - `top_identities`: most banned identities, bans descending then identity
///   ascending
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    #[serde(rename = "generatedAt")]
    pub generated_at: DateTime<Utc>,
    #[serde(rename = "banCount")]
    pub ban_count: usize,
    #[serde(rename = "unbanCount")]
    pub unban_count: usize,
    #[serde(rename = "uniqueIPs")]
    pub unique_address_count: usize,
    #[serde(rename = "uniqueEmails")]
    pub unique_identity_count: usize,
    #[serde(rename = "topEmails")]
    pub top_identities: Vec<IdentityFrequency>,
}

impl StatsSnapshot {
    /// Snapshot of a log with nothing in it yet
    pub fn empty(generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            ban_count: 0,
            unban_count: 0,
            unique_address_count: 0,
            unique_identity_count: 0,
            top_identities: Vec::new(),
        }
    }

    /// True when the scan saw no ban or unban records
    pub fn is_empty(&self) -> bool {
        self.ban_count == 0 && self.unban_count == 0
    }
}
