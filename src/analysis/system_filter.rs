//! Pseudo-author removal.
//!
//! Exports attribute system notices to whatever string precedes the
//! colon, which is often the group name itself or a reserved sender.
//! Four independent heuristics identify these pseudo-authors; a hit on
//! any one of them removes the author from every per-author structure.

use std::collections::HashSet;

use tracing::debug;

use super::lexicon::SYSTEM_KEYWORDS;
use super::report::StatsReport;

/// Fraction of system-notice messages (or system-flavored vocabulary)
/// above which an author is considered a pseudo-author.
const SYSTEM_RATIO: f64 = 0.5;

/// Author names that are always pseudo-authors.
const RESERVED_AUTHORS: &[&str] = &["System", "WhatsApp"];

/// Removes pseudo-authors from every per-author structure.
///
/// `group_names` holds candidate group names harvested from
/// `created group "X"` / `changed the subject to "X"` notices during
/// aggregation.
pub(crate) fn prune_pseudo_authors(report: &mut StatsReport, group_names: &HashSet<String>) {
    let excluded: Vec<String> = report
        .users
        .keys()
        .filter(|author| {
            exclusion_rule(report, group_names, author).is_some_and(|rule| {
                debug!(author = author.as_str(), rule, "excluding pseudo-author");
                true
            })
        })
        .cloned()
        .collect();

    for author in &excluded {
        report.remove_author(author);
    }
}

/// Returns the name of the heuristic that excludes `author`, if any.
fn exclusion_rule(
    report: &StatsReport,
    group_names: &HashSet<String>,
    author: &str,
) -> Option<&'static str> {
    if group_names.contains(author) {
        return Some("matched group name");
    }

    if RESERVED_AUTHORS.contains(&author) {
        return Some("reserved author name");
    }

    let stats = &report.users[author];
    if stats.count > 0 && stats.system_msg_count as f64 / stats.count as f64 > SYSTEM_RATIO {
        return Some("high system-notice ratio");
    }

    let vocab = &report.vocabulary[author];
    if !vocab.unique_words.is_empty() {
        let system_words = vocab
            .unique_words
            .iter()
            .filter(|word| SYSTEM_KEYWORDS.iter().any(|kw| word.contains(kw)))
            .count();
        if system_words as f64 / vocab.unique_words.len() as f64 > SYSTEM_RATIO {
            return Some("high system vocabulary");
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::report::UserStats;

    fn seeded_report(authors: &[&str]) -> StatsReport {
        let mut report = StatsReport::default();
        for author in authors {
            report.ensure_author(author);
            report.users.get_mut(*author).unwrap().count = 2;
        }
        report
    }

    #[test]
    fn test_group_name_match_excluded() {
        let mut report = seeded_report(&["Weekend Plans", "Alice"]);
        let groups: HashSet<String> = ["Weekend Plans".to_string()].into();
        prune_pseudo_authors(&mut report, &groups);
        assert!(!report.users.contains_key("Weekend Plans"));
        assert!(report.users.contains_key("Alice"));
    }

    #[test]
    fn test_reserved_names_excluded() {
        let mut report = seeded_report(&["System", "WhatsApp", "Alice"]);
        prune_pseudo_authors(&mut report, &HashSet::new());
        assert!(!report.users.contains_key("System"));
        assert!(!report.users.contains_key("WhatsApp"));
        assert!(report.users.contains_key("Alice"));
    }

    #[test]
    fn test_system_notice_ratio_excluded() {
        let mut report = seeded_report(&["Notices", "Alice"]);
        report.users.insert(
            "Notices".to_string(),
            UserStats {
                count: 4,
                system_msg_count: 3,
                ..UserStats::default()
            },
        );
        prune_pseudo_authors(&mut report, &HashSet::new());
        assert!(!report.users.contains_key("Notices"));
        assert!(report.users.contains_key("Alice"));
    }

    #[test]
    fn test_ratio_at_exactly_half_survives() {
        let mut report = seeded_report(&["Borderline"]);
        report.users.insert(
            "Borderline".to_string(),
            UserStats {
                count: 4,
                system_msg_count: 2,
                ..UserStats::default()
            },
        );
        prune_pseudo_authors(&mut report, &HashSet::new());
        assert!(report.users.contains_key("Borderline"));
    }

    #[test]
    fn test_system_vocabulary_excluded() {
        let mut report = seeded_report(&["Bot", "Alice"]);
        let vocab = report.vocabulary.get_mut("Bot").unwrap();
        vocab.unique_words.insert("changed".to_string());
        vocab.unique_words.insert("encrypted".to_string());
        vocab.unique_words.insert("coffee".to_string());
        vocab.total_words = 3;

        let alice_vocab = report.vocabulary.get_mut("Alice").unwrap();
        alice_vocab.unique_words.insert("coffee".to_string());
        alice_vocab.unique_words.insert("changed".to_string());
        alice_vocab.unique_words.insert("morning".to_string());
        alice_vocab.unique_words.insert("evening".to_string());
        alice_vocab.unique_words.insert("weekend".to_string());
        alice_vocab.total_words = 5;

        prune_pseudo_authors(&mut report, &HashSet::new());
        assert!(!report.users.contains_key("Bot"));
        assert!(report.users.contains_key("Alice"));
    }

    #[test]
    fn test_keyword_matches_as_substring() {
        // "unchanged" contains "changed" and must count
        let mut report = seeded_report(&["Echo"]);
        let vocab = report.vocabulary.get_mut("Echo").unwrap();
        vocab.unique_words.insert("unchanged".to_string());
        prune_pseudo_authors(&mut report, &HashSet::new());
        assert!(!report.users.contains_key("Echo"));
    }

    #[test]
    fn test_removal_spans_all_maps() {
        let mut report = seeded_report(&["System", "Alice"]);
        prune_pseudo_authors(&mut report, &HashSet::new());

        for author in ["System"] {
            assert!(!report.users.contains_key(author));
            assert!(!report.conversation_starters.contains_key(author));
            assert!(!report.response_times.contains_key(author));
            assert!(!report.media_counts.contains_key(author));
            assert!(!report.interaction_matrix.contains_key(author));
            assert!(!report.vocabulary.contains_key(author));
            assert!(!report.personalities.contains_key(author));
        }
    }
}
