//! Content cleaning and tokenization.
//!
//! Produces the token stream behind vocabulary, word-frequency, bigram
//! and token-sentiment statistics. Cleaning normalizes emphatic
//! elongation ("sooooo" → "soo") without destroying intentional doubles,
//! and strips HTML-ish tag fragments and bracketed numeric markers left
//! behind by some export tools.

use std::sync::LazyLock;

use regex::Regex;

use super::lexicon::STOP_WORDS;

static TAG_FRAGMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static NUMERIC_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\d+.*?\]").unwrap());

/// Characters that separate tokens, besides whitespace.
const TOKEN_SEPARATORS: &str = ",.!?;:\"'()[]";

/// Builds the cleaned lowercase copy of a message used for tokenization.
pub fn clean_content(content: &str) -> String {
    let lowered = content.to_lowercase();
    let stripped = TAG_FRAGMENT.replace_all(&lowered, "");
    let stripped = NUMERIC_MARKER.replace_all(&stripped, "");
    collapse_elongation(&stripped)
}

/// Collapses runs of 3+ identical characters down to 2.
///
/// Hand-rolled because the regex crate has no backreferences.
fn collapse_elongation(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last: Option<char> = None;
    let mut run = 0usize;

    for c in text.chars() {
        if last == Some(c) {
            run += 1;
        } else {
            last = Some(c);
            run = 1;
        }
        if run <= 2 {
            out.push(c);
        }
    }

    out
}

/// Splits cleaned content into raw tokens.
///
/// Separators are whitespace plus a fixed punctuation class; empty pieces
/// are dropped.
pub fn tokenize(clean: &str) -> Vec<&str> {
    clean
        .split(|c: char| c.is_whitespace() || TOKEN_SEPARATORS.contains(c))
        .filter(|t| !t.is_empty())
        .collect()
}

/// The content-worthy predicate: is this token worth counting?
///
/// A token qualifies iff it is longer than 2 characters, not a stop word,
/// not purely numeric, not URL-like, and not a media placeholder.
pub fn is_content_worthy(token: &str) -> bool {
    token.chars().count() > 2
        && !STOP_WORDS.contains(token)
        && !token.chars().all(|c| c.is_ascii_digit())
        && !token.starts_with("http")
        && !token.starts_with("www")
        && !token.starts_with("//")
        && !token.contains('=')
        && !token.contains('&')
        && !token.contains("image")
        && !token.contains("sticker")
        && !token.contains("video")
        && !token.contains("omitted")
}
