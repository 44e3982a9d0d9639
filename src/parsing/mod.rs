//! Line-oriented transcript parsing.
//!
//! Chat exports vary by platform and locale. The parser classifies each
//! line against an ordered cascade of format matchers and reconstructs
//! discrete, ordered [`MessageRecord`]s, merging continuation lines into
//! the message they belong to.
//!
//! Supported line grammars, in priority order:
//! - Bracketed (iOS): `[24/03/24, 10:15:30] Alice: Hey there!`
//! - US with meridiem: `3/24/24, 10:15 PM - Alice: Hey there!`
//! - Dash 24-hour (Android): `24/03/24, 10:15 - Alice: Hey there!`
//! - System notice (no author): `24/03/24, 10:15 - Messages are encrypted`
//!
//! The priority is load-bearing: the dash 24-hour pattern is a structural
//! subset of the US pattern, and the system-notice pattern is a subset of
//! both dash forms. Reordering the cascade would misattribute authors.

mod timestamp;

pub use timestamp::normalize_timestamp;

use regex::Regex;

use crate::message::{MessageRecord, SYSTEM_AUTHOR};

/// The supported line grammars, in match priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFormat {
    /// Bracketed format: `[date, time] author: content`
    /// Example: `[24/03/24, 10:15:30] Alice: Hey there!`
    Bracketed,
    /// Slash date with meridiem suffix: `date, time AM/PM - author: content`
    /// Example: `3/24/24, 10:15 PM - Alice: Hey there!`
    UsMeridiem,
    /// Slash date, 24-hour clock: `date, time - author: content`
    /// Example: `24/03/24, 10:15 - Alice: Hey there!`
    Dash24h,
    /// Unattributed system notice: `date, time - content`
    /// Example: `24/03/24, 10:15 - Messages and calls are end-to-end encrypted`
    SystemNotice,
}

impl LineFormat {
    /// Returns the regex pattern for this line grammar.
    pub fn pattern(self) -> &'static str {
        match self {
            // [24/03/24, 10:15:30] Alice: Hey there!
            LineFormat::Bracketed => {
                r"^\[(\d{1,2}[./-]\d{1,2}[./-]\d{2,4}),\s(\d{1,2}:\d{2}(?::\d{2})?)\]\s(.*?):\s(.*)"
            }
            // 3/24/24, 10:15 PM - Alice: Hey there!
            LineFormat::UsMeridiem => {
                r"(?i)^(\d{1,2}/\d{1,2}/\d{2,4}),\s(\d{1,2}:\d{2}\s?[AP]M)\s-\s(.*?):\s(.*)"
            }
            // 24/03/24, 10:15 - Alice: Hey there!
            LineFormat::Dash24h => {
                r"^(\d{1,2}[./-]\d{1,2}[./-]\d{2,4}),\s(\d{1,2}:\d{2})\s-\s(.*?):\s(.*)"
            }
            // 24/03/24, 10:15 - Messages and calls are end-to-end encrypted
            LineFormat::SystemNotice => {
                r"^(\d{1,2}[./-]\d{1,2}[./-]\d{2,4}),\s(\d{1,2}:\d{2}(?::\d{2})?)\s-\s(.*)"
            }
        }
    }

    /// Returns `true` if this grammar carries no author segment.
    fn is_system(self) -> bool {
        matches!(self, LineFormat::SystemNotice)
    }

    /// Returns all grammars in match priority order.
    pub fn all() -> &'static [LineFormat] {
        &[
            LineFormat::Bracketed,
            LineFormat::UsMeridiem,
            LineFormat::Dash24h,
            LineFormat::SystemNotice,
        ]
    }
}

/// Transcript parser with the compiled matcher cascade.
///
/// Compiling the four patterns is cheap but not free; reuse one parser
/// when processing several transcripts.
///
/// # Example
///
/// ```
/// use chatlens::parsing::TranscriptParser;
///
/// let parser = TranscriptParser::new();
/// let records = parser.parse("[01/01/24, 10:00:00] Alice: Hello there");
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].author(), "Alice");
/// ```
pub struct TranscriptParser {
    matchers: Vec<(LineFormat, Regex)>,
}

impl TranscriptParser {
    /// Creates a parser with all four line grammars compiled.
    pub fn new() -> Self {
        let matchers = LineFormat::all()
            .iter()
            .map(|&format| {
                // Patterns are fixed string literals; compilation cannot fail.
                (format, Regex::new(format.pattern()).unwrap())
            })
            .collect();
        Self { matchers }
    }

    /// Parses a transcript into an ordered sequence of records.
    ///
    /// Lines matching none of the grammars are continuations of the open
    /// message (joined with `\n`), or dropped when no message is open.
    /// An empty result means the text matched no supported format.
    pub fn parse(&self, text: &str) -> Vec<MessageRecord> {
        let mut messages: Vec<MessageRecord> = Vec::new();
        let mut current: Option<MessageRecord> = None;

        for line in text.lines() {
            if let Some((format, caps)) = self.match_line(line) {
                if let Some(open) = current.take() {
                    messages.push(open);
                }

                let date = caps.get(1).map_or("", |m| m.as_str());
                let time = caps.get(2).map_or("", |m| m.as_str());
                let (author, content) = if format.is_system() {
                    (SYSTEM_AUTHOR, caps.get(3).map_or("", |m| m.as_str()))
                } else {
                    (
                        caps.get(3).map_or("", |m| m.as_str()),
                        caps.get(4).map_or("", |m| m.as_str()),
                    )
                };

                let timestamp = normalize_timestamp(date, time);
                current = Some(MessageRecord::new(date, time, author, content, timestamp));
            } else if let Some(open) = current.as_mut() {
                // Continuation of a multiline message
                open.content.push('\n');
                open.content.push_str(line);
            }
            // No match and no open message: orphan line, dropped
        }

        if let Some(open) = current {
            messages.push(open);
        }

        messages
    }

    fn match_line<'t>(&self, line: &'t str) -> Option<(LineFormat, regex::Captures<'t>)> {
        self.matchers
            .iter()
            .find_map(|(format, regex)| regex.captures(line).map(|caps| (*format, caps)))
    }
}

impl Default for TranscriptParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a transcript with a freshly built [`TranscriptParser`].
///
/// This is the "raw transcript text in" side of the engine contract. It
/// never errors; an empty vector means no line matched any supported
/// grammar.
pub fn parse_transcript(text: &str) -> Vec<MessageRecord> {
    TranscriptParser::new().parse(text)
}
