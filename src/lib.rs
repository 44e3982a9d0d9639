//! # Chatlens
//!
//! A Rust library that turns exported, free-form chat transcripts into a
//! single structured statistics report: participants, activity patterns,
//! sentiment, vocabulary, and social interaction structure.
//!
//! ## Overview
//!
//! Chat exports are messy: heterogeneous timestamp and author formats,
//! multi-line messages, and system notices interleaved with real
//! conversation. Chatlens handles two jobs:
//!
//! - **Parsing** — a line-oriented parser reconstructs discrete, ordered
//!   message records from ambiguous textual formats, merging
//!   continuation lines and normalizing timestamps.
//! - **Analysis** — a multi-pass aggregator derives per-participant and
//!   global metrics, labels personalities, and heuristically removes
//!   non-human "system" pseudo-authors (group names, notice senders).
//!
//! The engine is a pure, synchronous transformation — raw text in,
//! report out — with no I/O, no concurrency, and no wall-clock
//! dependence. Reading the transcript from disk and rendering the report
//! are the caller's business.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let text = "\
//! [01/01/24, 10:00:00] Alice: Hello there
//! [01/01/24, 10:01:00] Bob: Hi Alice, how are you?";
//!
//!     let report = chatlens::analyze_transcript(text)?;
//!
//!     assert_eq!(report.total_messages, 2);
//!     assert_eq!(report.users["Alice"].count, 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Two-step usage
//!
//! The parse and analyze halves are separate when you need the records
//! themselves:
//!
//! ```rust
//! use chatlens::{analysis, parse_transcript};
//!
//! let records = parse_transcript("[01/01/24, 10:00:00] Alice: Hello there");
//! assert_eq!(records[0].author(), "Alice");
//!
//! let report = analysis::analyze(&records)?;
//! assert_eq!(report.users["Alice"].count, 1);
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parsing`] — line-format cascade and timestamp normalization
//!   - [`TranscriptParser`](parsing::TranscriptParser), [`parse_transcript`]
//! - [`analysis`] — the statistical engine
//!   - [`analyze`](analysis::analyze) — ordered records in, [`StatsReport`](analysis::StatsReport) out
//! - [`message`] — [`MessageRecord`], the unit between the two halves
//! - [`error`] — [`ChatlensError`], [`Result`]
//! - [`prelude`] — convenient re-exports

pub mod analysis;
pub mod error;
pub mod message;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use message::MessageRecord;
pub use parsing::parse_transcript;

use analysis::StatsReport;

/// Parses and analyzes a transcript in one step.
///
/// Returns [`ChatlensError::NoMessages`] when no line matched a supported
/// grammar — callers typically surface that as "no messages found, check
/// the file format".
pub fn analyze_transcript(text: &str) -> Result<StatsReport> {
    let records = parse_transcript(text);
    if records.is_empty() {
        return Err(ChatlensError::NoMessages);
    }
    analysis::analyze(&records)
}

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::MessageRecord;
    pub use crate::analyze_transcript;
    pub use crate::error::{ChatlensError, Result};

    pub use crate::parsing::{TranscriptParser, parse_transcript};

    pub use crate::analysis::{
        PersonalityTag, RankedEntry, ResponseTimeAccumulator, SentimentLabel, StatsReport,
        UserStats, VocabularyStats, analyze,
    };
}
