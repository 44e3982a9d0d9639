//! The multi-pass statistical analysis engine.
//!
//! [`analyze`] folds an ordered [`MessageRecord`](crate::MessageRecord)
//! sequence into a [`StatsReport`]: one forward aggregation pass, then a
//! personality-labeling post-pass, then pseudo-author pruning, then the
//! deterministic top-N rankings.

mod aggregator;
mod freq;
mod lexical;
mod lexicon;
mod personality;
mod report;
mod sentiment;
mod system_filter;

pub use aggregator::{STARTER_THRESHOLD_MS, analyze};
pub use freq::{FreqMap, RankedEntry};
pub use personality::PersonalityTag;
pub use report::{ResponseTimeAccumulator, StatsReport, UserStats, VocabularyStats};
pub use sentiment::SentimentLabel;
