//! Frequency counting with deterministic rankings.

use std::collections::HashMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// An entry in a top-N ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    /// The counted token (word, bigram, or emoji).
    pub text: String,
    /// Number of occurrences.
    pub count: u64,
}

#[derive(Debug, Clone, Copy)]
struct FreqEntry {
    count: u64,
    /// First-encounter index, the stability tiebreak for rankings.
    order: u64,
}

/// A frequency map that remembers first-encounter order.
///
/// `HashMap` iteration order is arbitrary, which would make top-N
/// rankings flap between runs for tied counts. Each key records the order
/// it was first seen, and [`top_n`](FreqMap::top_n) sorts by descending
/// count with that order as the tiebreak, so rankings are deterministic
/// for a given input.
#[derive(Debug, Clone, Default)]
pub struct FreqMap {
    entries: HashMap<String, FreqEntry>,
    next_order: u64,
}

impl FreqMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `key`.
    pub fn record(&mut self, key: &str) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.count += 1;
        } else {
            self.entries.insert(
                key.to_string(),
                FreqEntry {
                    count: 1,
                    order: self.next_order,
                },
            );
            self.next_order += 1;
        }
    }

    /// Returns the count for `key` (0 if never seen).
    pub fn get(&self, key: &str) -> u64 {
        self.entries.get(key).map_or(0, |e| e.count)
    }

    /// Returns the number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e.count))
    }

    /// Returns the `n` most frequent entries, descending by count with
    /// first-encounter order breaking ties.
    pub fn top_n(&self, n: usize) -> Vec<RankedEntry> {
        let mut ranked: Vec<(&String, &FreqEntry)> = self.entries.iter().collect();
        ranked.sort_by(|(_, a), (_, b)| b.count.cmp(&a.count).then(a.order.cmp(&b.order)));
        ranked
            .into_iter()
            .take(n)
            .map(|(text, entry)| RankedEntry {
                text: text.clone(),
                count: entry.count,
            })
            .collect()
    }
}

// Serialized as a plain { key: count } map; encounter order is an
// internal detail.
impl Serialize for FreqMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, entry) in &self.entries {
            map.serialize_entry(key, &entry.count)?;
        }
        map.end()
    }
}
