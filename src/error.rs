//! Unified error types for chatlens.
//!
//! The engine is deliberately forgiving: a malformed line becomes a
//! continuation or is dropped, and an unparseable timestamp is logged and
//! marked invalid rather than surfaced. The only hard failures are the two
//! "nothing to work with" conditions below.

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::MessageRecord;
///
/// fn my_function() -> Result<Vec<MessageRecord>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// The transcript matched none of the supported line formats.
    ///
    /// Returned by [`analyze_transcript`](crate::analyze_transcript) when
    /// the parser produced zero records. Callers typically surface this as
    /// "no messages found, check the file format".
    #[error("no messages found in transcript")]
    NoMessages,

    /// The aggregator was handed an empty message sequence.
    ///
    /// Returned by [`analysis::analyze`](crate::analysis::analyze). An
    /// empty input has no meaningful report, so this is an explicit signal
    /// instead of an all-zeros structure.
    #[error("analysis failed: empty message sequence")]
    EmptyAnalysis,
}

impl ChatlensError {
    /// Returns `true` if this is the empty-transcript error.
    pub fn is_no_messages(&self) -> bool {
        matches!(self, ChatlensError::NoMessages)
    }

    /// Returns `true` if this is the empty-analysis error.
    pub fn is_empty_analysis(&self) -> bool {
        matches!(self, ChatlensError::EmptyAnalysis)
    }
}
