//! UTC timestamps for session bookkeeping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Point in time a session was created or last changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Whole seconds from `earlier` to `self`, clamped at zero.
    pub fn secs_since(&self, earlier: &Timestamp) -> u64 {
        let secs = (self.0 - earlier.0).num_seconds();
        u64::try_from(secs).unwrap_or(0)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}
