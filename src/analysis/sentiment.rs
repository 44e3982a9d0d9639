//! Emoji and lexicon sentiment scoring.
//!
//! Two independent signals accumulate into a per-message delta: emoji
//! with a known valence, and raw tokens present in the polarity lexicons.
//! Tokens are checked *before* the content-worthy filter on purpose —
//! short or stoplisted words like "no" and "love" carry most of the
//! signal.

use std::sync::LazyLock;

use regex::Regex;

use super::lexicon::{EMOJI_VALENCE, NEGATIVE_WORDS, POSITIVE_WORDS};

/// Matches a single emoji/pictograph code point with an optional trailing
/// variation selector, so presentation sequences like `❤️` are captured
/// whole and hit the valence table.
///
/// Uses the Unicode `Emoji_Presentation` / `Extended_Pictographic`
/// property classes rather than a fixed character range.
static EMOJI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{Emoji_Presentation}\p{Extended_Pictographic}]\x{FE0F}?").unwrap()
});

/// The sentiment signal accumulated for one message.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageSentiment {
    /// Net valence: emoji weights plus ±1 per polarity-lexicon token.
    pub delta: f64,
    /// Whether anything at all contributed to the delta. Unscored
    /// messages do not affect an author's average.
    pub scored: bool,
}

impl MessageSentiment {
    /// Adds an emoji's valence, if the emoji is in the valence table.
    pub fn add_emoji(&mut self, emoji: &str) {
        if let Some(valence) = EMOJI_VALENCE.get(emoji) {
            self.delta += valence;
            self.scored = true;
        }
    }

    /// Adds the polarity of a raw token, if the token is in a lexicon.
    pub fn add_token(&mut self, token: &str) {
        if POSITIVE_WORDS.contains(token) {
            self.delta += 1.0;
            self.scored = true;
        }
        if NEGATIVE_WORDS.contains(token) {
            self.delta -= 1.0;
            self.scored = true;
        }
    }
}

/// Iterates over the emoji occurrences in raw (uncleaned) content.
pub fn emoji_occurrences(content: &str) -> impl Iterator<Item = &str> {
    EMOJI_PATTERN.find_iter(content).map(|m| m.as_str())
}

/// Sentiment classification of an author's average score.
///
/// The thresholds are intentionally asymmetric: it takes more signal to
/// call someone positive than negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Classifies an average sentiment score.
    pub fn from_average(average: f64) -> Self {
        if average > 0.2 {
            SentimentLabel::Positive
        } else if average < -0.1 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}
