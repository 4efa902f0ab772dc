//! Log snapshot — the payload of `GET /api/logs`.

use serde::Deserialize;

use crate::class;
use crate::error::FetchError;

/// Number of log entries shown by default.
pub const DEFAULT_RECENT_LIMIT: usize = 20;

/// A single line of the controller's web log buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogEntry {
    /// Pre-formatted time of day; shown verbatim.
    pub timestamp: String,
    /// Level keyword such as `INFO`, `WARNING` or `ERROR`.
    pub level: String,
    pub message: String,
}

impl LogEntry {
    /// Class of the level badge, `log-{level}` in lowercase.
    #[must_use]
    pub fn level_class(&self) -> String {
        class::prefixed("log", &self.level)
    }
}

/// One full poll of the log endpoint, oldest entry first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LogSnapshot {
    pub logs: Vec<LogEntry>,
}

impl LogSnapshot {
    /// Parse a response body.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Parse`] if the body is not valid JSON or has no
    /// `logs` array.
    pub fn from_json(body: &str) -> Result<Self, FetchError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Total number of entries in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.logs.len()
    }

    /// Whether the snapshot holds no entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }

    /// The last `limit` entries, still in chronological order.
    #[must_use]
    pub fn recent(&self, limit: usize) -> &[LogEntry] {
        let start = self.logs.len().saturating_sub(limit);
        &self.logs[start..]
    }
}
