//! The reconstructed message record.
//!
//! [`MessageRecord`] is the unit the parser emits and the analyzer
//! consumes. The raw `date` and `time` strings are preserved exactly as
//! they appeared in the transcript (the timeline is keyed by the raw date
//! spelling), alongside the canonical timestamp when one could be derived.
//!
//! # Examples
//!
//! ```
//! use chatlens::MessageRecord;
//!
//! let msg = MessageRecord::new("01/01/24", "10:00:00", "Alice", "Hello there", None);
//! assert_eq!(msg.author(), "Alice");
//! assert!(!msg.has_timestamp());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The author name assigned to unattributed system-notice lines.
pub const SYSTEM_AUTHOR: &str = "System";

/// A single reconstructed chat message.
///
/// Produced only by [`parse_transcript`](crate::parse_transcript) and
/// never mutated afterward. Continuation lines are already merged into
/// `content` (separated by `\n`) by the time a record exists.
///
/// The `timestamp` field is `None` when the raw date/time pair could not
/// be normalized. Such records still count toward plain totals but are
/// excluded from every time-bucketed statistic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Raw date string, original spelling preserved.
    pub date: String,

    /// Raw time string, original spelling preserved.
    pub time: String,

    /// Free-text author name. [`SYSTEM_AUTHOR`] for unattributed lines.
    pub author: String,

    /// Message text; may contain embedded newlines from continuation lines.
    pub content: String,

    /// Canonical point in time, or `None` when normalization failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl MessageRecord {
    /// Creates a new record.
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        author: impl Into<String>,
        content: impl Into<String>,
        timestamp: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            author: author.into(),
            content: content.into(),
            timestamp,
        }
    }

    /// Returns the author name.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the canonical timestamp, if one was derived.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    /// Returns `true` if the raw date/time pair normalized successfully.
    pub fn has_timestamp(&self) -> bool {
        self.timestamp.is_some()
    }

    /// Returns `true` if this record came from an unattributed system line.
    pub fn is_system(&self) -> bool {
        self.author == SYSTEM_AUTHOR
    }
}
