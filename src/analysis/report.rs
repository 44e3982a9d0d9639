//! The statistics report data model.
//!
//! [`StatsReport`] is the "statistics report out" side of the engine
//! contract. It is built once by the aggregator, mutated only during the
//! two post-passes, and read-only for consumers afterward.
//!
//! Per-author structures live in parallel maps keyed by author name; the
//! key set of every per-author map is identical at all times (authors are
//! created in all maps on first sight, and the system-author filter
//! removes them from all maps uniformly).

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use super::freq::{FreqMap, RankedEntry};
use super::personality::PersonalityTag;
use super::sentiment::SentimentLabel;

/// Per-author message counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserStats {
    /// Total messages by this author.
    pub count: u64,
    /// Total tokens across all messages (simple split, unfiltered).
    pub words: u64,
    /// Total content length in characters.
    pub total_chars: u64,
    /// Messages sent between 00:00 and 05:59.
    pub night_owl_count: u64,
    /// Messages sent between 06:00 and 08:59.
    pub early_bird_count: u64,
    /// Messages sent on Saturday or Sunday.
    pub weekend_count: u64,
    /// Messages matching a system-notice pattern.
    pub system_msg_count: u64,
    /// Accumulated sentiment delta over scored messages.
    pub sentiment_score: f64,
    /// Number of scored messages.
    pub sentiment_count: u64,
}

impl UserStats {
    /// Average message length in characters (0 with no messages).
    pub fn average_chars(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total_chars as f64 / self.count as f64
        }
    }

    /// Average sentiment over scored messages (0 if never scored).
    pub fn average_sentiment(&self) -> f64 {
        if self.sentiment_count == 0 {
            0.0
        } else {
            self.sentiment_score / self.sentiment_count as f64
        }
    }

    /// Classification of the average sentiment.
    pub fn sentiment_label(&self) -> SentimentLabel {
        SentimentLabel::from_average(self.average_sentiment())
    }
}

/// Accumulated response latency for one author.
///
/// A response is a sub-threshold gap after a different author's message;
/// same-author gaps and over-threshold gaps never count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResponseTimeAccumulator {
    /// Sum of response gaps, in milliseconds.
    pub total_ms: i64,
    /// Number of accumulated responses.
    pub count: u64,
}

impl ResponseTimeAccumulator {
    /// Average response time in milliseconds (0 with no responses).
    pub fn average_ms(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total_ms as f64 / self.count as f64
        }
    }
}

/// Per-author vocabulary totals over content-worthy tokens.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VocabularyStats {
    /// Distinct content-worthy tokens used by this author.
    pub unique_words: HashSet<String>,
    /// Total content-worthy token occurrences.
    pub total_words: u64,
}

/// The complete statistics report for one transcript.
///
/// All fields are always populated; empty maps and arrays, never absent,
/// when no data exists for a category.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StatsReport {
    /// Number of parsed message records, before author filtering.
    pub total_messages: usize,

    /// Per-author counters.
    pub users: HashMap<String, UserStats>,
    /// Conversations started per author.
    pub conversation_starters: HashMap<String, u64>,
    /// Response latency per author.
    pub response_times: HashMap<String, ResponseTimeAccumulator>,
    /// Media placeholder messages per author.
    pub media_counts: HashMap<String, u64>,
    /// Directed turn-taking counts: `[author][replied-to author]`.
    pub interaction_matrix: HashMap<String, HashMap<String, u64>>,
    /// Vocabulary totals per author.
    pub vocabulary: HashMap<String, VocabularyStats>,
    /// Personality labels per author.
    pub personalities: HashMap<String, Vec<PersonalityTag>>,

    /// Messages per raw date string. Two spellings of the same calendar
    /// date are distinct keys; a known limitation.
    pub timeline: HashMap<String, u64>,
    /// Messages per hour of day.
    pub hourly_activity: [u64; 24],

    /// Global word frequencies over content-worthy tokens.
    pub word_counts: FreqMap,
    /// Global bigram frequencies over the filtered, compacted token list.
    pub bigram_counts: FreqMap,
    /// Global emoji frequencies (all occurrences, sentiment or not).
    pub emoji_counts: FreqMap,

    /// Top 50 words by frequency.
    pub top_words: Vec<RankedEntry>,
    /// Top 50 bigrams by frequency.
    pub top_bigrams: Vec<RankedEntry>,
    /// Top 10 emoji by frequency.
    pub top_emojis: Vec<RankedEntry>,
}

impl StatsReport {
    /// Lazily creates zero-initialized entries for `author` in every
    /// per-author map, keeping their key sets identical.
    pub(crate) fn ensure_author(&mut self, author: &str) {
        if self.users.contains_key(author) {
            return;
        }
        self.users.insert(author.to_string(), UserStats::default());
        self.conversation_starters.insert(author.to_string(), 0);
        self.response_times
            .insert(author.to_string(), ResponseTimeAccumulator::default());
        self.media_counts.insert(author.to_string(), 0);
        self.interaction_matrix
            .insert(author.to_string(), HashMap::new());
        self.vocabulary
            .insert(author.to_string(), VocabularyStats::default());
        self.personalities.insert(author.to_string(), Vec::new());
    }

    /// Removes `author` from every per-author map.
    pub(crate) fn remove_author(&mut self, author: &str) {
        self.users.remove(author);
        self.conversation_starters.remove(author);
        self.response_times.remove(author);
        self.media_counts.remove(author);
        self.interaction_matrix.remove(author);
        self.vocabulary.remove(author);
        self.personalities.remove(author);
    }

    /// Derives the top-N rankings from the global frequency maps.
    pub(crate) fn finalize_rankings(&mut self) {
        self.top_words = self.word_counts.top_n(50);
        self.top_bigrams = self.bigram_counts.top_n(50);
        self.top_emojis = self.emoji_counts.top_n(10);
    }
}
