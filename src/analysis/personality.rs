//! Personality label assignment.
//!
//! A post-pass over finalized per-author totals. Every rule is an
//! independent threshold check; an author can collect several labels, and
//! authors below the message floor collect none at all.

use serde::{Serialize, Serializer};

use super::report::StatsReport;

/// Minimum message count before any label is assigned.
const LABEL_FLOOR: u64 = 5;

/// Night-owl and early-bird ratio threshold.
const DAYPART_RATIO: f64 = 0.08;

/// Weekend ratio threshold.
const WEEKEND_RATIO: f64 = 0.35;

/// Average-length bounds for marathoner / rapid fire.
const MARATHONER_CHARS: f64 = 50.0;
const RAPID_FIRE_CHARS: f64 = 25.0;

/// Share of the busiest author's count that makes a chatterbox.
const CHATTERBOX_SHARE: f64 = 0.5;

/// Average-sentiment bounds for positivity guru / grumpy cat.
const POSITIVITY_AVG: f64 = 0.5;
const GRUMPY_AVG: f64 = -0.2;

/// A categorical personality label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalityTag {
    /// More than 8% of messages between midnight and 6am.
    NightOwl,
    /// More than 8% of messages between 6am and 9am.
    EarlyBird,
    /// More than 35% of messages on weekends.
    WeekendWarrior,
    /// Average message longer than 50 characters.
    Marathoner,
    /// Average message shorter than 25 characters.
    RapidFire,
    /// More than half the busiest author's message count.
    Chatterbox,
    /// Average sentiment above 0.5.
    PositivityGuru,
    /// Average sentiment below −0.2.
    GrumpyCat,
    /// No other label fired.
    Balanced,
}

impl PersonalityTag {
    /// The display label for this tag.
    pub fn label(self) -> &'static str {
        match self {
            PersonalityTag::NightOwl => "🦉 Night Owl",
            PersonalityTag::EarlyBird => "☀️ Early Bird",
            PersonalityTag::WeekendWarrior => "📅 Weekend Warrior",
            PersonalityTag::Marathoner => "📜 Marathoner",
            PersonalityTag::RapidFire => "⚡ Rapid Fire",
            PersonalityTag::Chatterbox => "📢 Chatterbox",
            PersonalityTag::PositivityGuru => "🥰 Positivity Guru",
            PersonalityTag::GrumpyCat => "😒 Grumpy Cat",
            PersonalityTag::Balanced => "⚖️ Balanced",
        }
    }
}

impl std::fmt::Display for PersonalityTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for PersonalityTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Assigns personality labels over the report's finalized totals.
pub(crate) fn assign_personalities(report: &mut StatsReport) {
    let max_messages = report.users.values().map(|u| u.count).max().unwrap_or(0);

    let users = &report.users;
    let personalities = &mut report.personalities;

    for (author, stats) in users {
        let total = stats.count;
        if total < LABEL_FLOOR {
            continue;
        }
        let Some(tags) = personalities.get_mut(author) else {
            continue;
        };
        let total_f = total as f64;

        if stats.night_owl_count as f64 / total_f > DAYPART_RATIO {
            tags.push(PersonalityTag::NightOwl);
        }
        if stats.early_bird_count as f64 / total_f > DAYPART_RATIO {
            tags.push(PersonalityTag::EarlyBird);
        }
        if stats.weekend_count as f64 / total_f > WEEKEND_RATIO {
            tags.push(PersonalityTag::WeekendWarrior);
        }

        let avg_chars = stats.average_chars();
        if avg_chars > MARATHONER_CHARS {
            tags.push(PersonalityTag::Marathoner);
        } else if avg_chars < RAPID_FIRE_CHARS {
            tags.push(PersonalityTag::RapidFire);
        }

        if total_f > max_messages as f64 * CHATTERBOX_SHARE {
            tags.push(PersonalityTag::Chatterbox);
        }

        let avg_sentiment = stats.average_sentiment();
        if avg_sentiment > POSITIVITY_AVG {
            tags.push(PersonalityTag::PositivityGuru);
        } else if avg_sentiment < GRUMPY_AVG {
            tags.push(PersonalityTag::GrumpyCat);
        }

        if tags.is_empty() {
            tags.push(PersonalityTag::Balanced);
        }
    }
}
