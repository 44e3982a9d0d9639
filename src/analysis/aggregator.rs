//! The single-pass statistical aggregator.
//!
//! One forward fold over the ordered record sequence builds the complete
//! [`StatsReport`]: per-author counters, activity histograms, lexical and
//! sentiment statistics, conversation-starter detection, response-latency
//! accumulation, and the turn-taking interaction matrix. Two post-passes
//! follow: personality labeling, then pseudo-author pruning (in that
//! order — the filter deletes entries the classifier already labeled).
//!
//! Consecutive messages carry sequential state (response time, starter
//! detection, adjacency), so the fold is inherently single-threaded.

use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::{Datelike, Timelike, Weekday};
use regex::Regex;

use crate::error::{ChatlensError, Result};
use crate::message::MessageRecord;

use super::lexical::{clean_content, is_content_worthy, tokenize};
use super::lexicon::is_system_notice;
use super::personality::assign_personalities;
use super::report::StatsReport;
use super::sentiment::{MessageSentiment, emoji_occurrences};
use super::system_filter::prune_pseudo_authors;

/// Gap above which a message starts a new conversation, in milliseconds.
pub const STARTER_THRESHOLD_MS: i64 = 2 * 60 * 60 * 1000;

static CREATED_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)created group "(.*?)""#).unwrap());
static CHANGED_SUBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)changed the subject to "(.*?)""#).unwrap());

/// Analyzes an ordered message sequence into a [`StatsReport`].
///
/// Returns [`ChatlensError::EmptyAnalysis`] for an empty slice; an empty
/// input has no meaningful report.
///
/// # Example
///
/// ```
/// use chatlens::{analysis, parse_transcript};
///
/// let records = parse_transcript("[01/01/24, 10:00:00] Alice: Hello there");
/// let report = analysis::analyze(&records)?;
/// assert_eq!(report.users["Alice"].count, 1);
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn analyze(messages: &[MessageRecord]) -> Result<StatsReport> {
    if messages.is_empty() {
        return Err(ChatlensError::EmptyAnalysis);
    }

    let mut report = StatsReport {
        total_messages: messages.len(),
        ..StatsReport::default()
    };
    let mut group_names: HashSet<String> = HashSet::new();
    let mut previous: Option<&MessageRecord> = None;

    for msg in messages {
        ingest(&mut report, &mut group_names, msg, previous);
        previous = Some(msg);
    }

    assign_personalities(&mut report);
    prune_pseudo_authors(&mut report, &group_names);
    report.finalize_rankings();

    Ok(report)
}

/// Folds one message into the report.
fn ingest(
    report: &mut StatsReport,
    group_names: &mut HashSet<String>,
    msg: &MessageRecord,
    previous: Option<&MessageRecord>,
) {
    let author = msg.author.as_str();
    report.ensure_author(author);

    {
        let user = report.users.get_mut(author).unwrap();
        user.count += 1;
        user.total_chars += msg.content.chars().count() as u64;

        if is_system_notice(&msg.content) {
            user.system_msg_count += 1;
        }
    }

    harvest_group_names(group_names, &msg.content);

    // Only the export's literal placeholder counts as media; the words
    // "image"/"video"/"sticker" alone appear in ordinary conversation.
    if msg.content.contains("omitted") {
        *report.media_counts.get_mut(author).unwrap() += 1;
    }

    lexical_and_sentiment(report, msg);

    // Timeline keys on the raw date spelling, not the canonical date.
    *report.timeline.entry(msg.date.clone()).or_insert(0) += 1;

    if let Some(ts) = msg.timestamp {
        let hour = ts.hour() as usize;
        report.hourly_activity[hour] += 1;

        let user = report.users.get_mut(author).unwrap();
        if hour < 6 {
            user.night_owl_count += 1;
        }
        if (6..9).contains(&hour) {
            user.early_bird_count += 1;
        }
        if matches!(ts.weekday(), Weekday::Sat | Weekday::Sun) {
            user.weekend_count += 1;
        }

        match previous.and_then(|prev| prev.timestamp.map(|pts| (prev, pts))) {
            Some((prev, prev_ts)) => {
                let gap_ms = (ts - prev_ts).num_milliseconds();

                if gap_ms > STARTER_THRESHOLD_MS {
                    *report.conversation_starters.get_mut(author).unwrap() += 1;
                }

                if msg.author != prev.author {
                    if gap_ms < STARTER_THRESHOLD_MS {
                        let acc = report.response_times.get_mut(author).unwrap();
                        acc.total_ms += gap_ms;
                        acc.count += 1;
                    }

                    *report
                        .interaction_matrix
                        .get_mut(author)
                        .unwrap()
                        .entry(prev.author.clone())
                        .or_insert(0) += 1;
                }
            }
            // No prior valid-timestamp message: this starts a conversation
            None => {
                *report.conversation_starters.get_mut(author).unwrap() += 1;
            }
        }
    }
}

/// Word, bigram, vocabulary and sentiment accounting for one message.
fn lexical_and_sentiment(report: &mut StatsReport, msg: &MessageRecord) {
    let mut sentiment = MessageSentiment::default();

    // Emoji scan runs over the raw content; every occurrence counts
    // toward the global frequency regardless of valence.
    for emoji in emoji_occurrences(&msg.content) {
        report.emoji_counts.record(emoji);
        sentiment.add_emoji(emoji);
    }

    let clean = clean_content(&msg.content);
    let tokens = tokenize(&clean);

    let user = report.users.get_mut(&msg.author).unwrap();
    user.words += tokens.len() as u64;

    let vocab = report.vocabulary.get_mut(&msg.author).unwrap();
    let mut content_tokens: Vec<&str> = Vec::new();

    for token in &tokens {
        // Polarity check runs on every raw token, before the
        // content-worthy filter: "no" and "love" must still register.
        sentiment.add_token(token);

        if is_content_worthy(token) {
            report.word_counts.record(token);
            vocab.unique_words.insert((*token).to_string());
            vocab.total_words += 1;
            content_tokens.push(token);
        }
    }

    // Bigrams come from the filtered, compacted token list: stop words
    // neither appear in a bigram nor leave an adjacency gap behind.
    for pair in content_tokens.windows(2) {
        report.bigram_counts.record(&format!("{} {}", pair[0], pair[1]));
    }

    if sentiment.scored {
        let user = report.users.get_mut(&msg.author).unwrap();
        user.sentiment_score += sentiment.delta;
        user.sentiment_count += 1;
    }
}

fn harvest_group_names(group_names: &mut HashSet<String>, content: &str) {
    if let Some(caps) = CREATED_GROUP.captures(content) {
        group_names.insert(caps[1].to_string());
    }
    if let Some(caps) = CHANGED_SUBJECT.captures(content) {
        group_names.insert(caps[1].to_string());
    }
}
