//! Ranking: frequency table to ordered histogram.
//!
//! Entries are sorted by count, highest first. Equal counts are ordered by
//! the word in ascending lexical order so that output is reproducible.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::data::FrequencyTable;

/// A single row of the histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// The word
    pub word: String,
    /// Number of occurrences
    pub count: u64,
}

impl RankedEntry {
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Ranked entries ready for formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Histogram {
    /// Field width for the word column: longest word in the whole vocabulary
    pub width: usize,
    /// Number of tokens counted
    pub total_tokens: u64,
    /// Number of distinct words in the vocabulary
    pub distinct_words: usize,
    /// Entries in ranked order
    pub entries: Vec<RankedEntry>,
}

impl Histogram {
    /// Rank a frequency table, keeping at most `limit` entries.
    ///
    /// `width` always reflects the full vocabulary, even when `limit`
    /// drops the longest word.
    pub fn from_table(table: &FrequencyTable, limit: Option<usize>) -> Self {
        let mut entries = rank(table);
        if let Some(limit) = limit {
            entries.truncate(limit);
        }

        Histogram {
            width: table.max_word_width().unwrap_or(0),
            total_tokens: table.total_tokens(),
            distinct_words: table.len(),
            entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Order entries: count descending, then word ascending.
fn compare_entries(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word))
}

/// Project a frequency table into a ranked sequence.
pub fn rank(table: &FrequencyTable) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = table
        .iter()
        .map(|(word, count)| RankedEntry::new(word.as_str(), *count))
        .collect();
    entries.sort_by(compare_entries);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(words: &[&str]) -> FrequencyTable {
        FrequencyTable::from_tokens(words.iter().copied())
    }

    #[test]
    fn test_rank_by_count_descending() {
        let ranked = rank(&table(&["a", "b", "b", "c", "c", "c"]));
        let counts: Vec<u64> = ranked.iter().map(|e| e.count).collect();
        assert_eq!(counts, [3, 2, 1]);
        assert_eq!(ranked[0].word, "c");
    }

    #[test]
    fn test_ties_ordered_lexically() {
        let ranked = rank(&table(&["mouse", "ran", "dock", "clock", "up", "down"]));
        let words: Vec<&str> = ranked.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, ["clock", "dock", "down", "mouse", "ran", "up"]);
    }

    #[test]
    fn test_rank_is_stable_across_runs() {
        let t = table(&["x", "y", "z", "y", "x", "w"]);
        assert_eq!(rank(&t), rank(&t.clone()));
    }

    #[test]
    fn test_histogram_empty_table() {
        let histogram = Histogram::from_table(&FrequencyTable::new(), None);
        assert!(histogram.is_empty());
        assert_eq!(histogram.width, 0);
        assert_eq!(histogram.total_tokens, 0);
    }

    #[test]
    fn test_histogram_limit_keeps_full_width() {
        let t = table(&["the", "the", "extraordinary"]);
        let histogram = Histogram::from_table(&t, Some(1));
        assert_eq!(histogram.entries, vec![RankedEntry::new("the", 2)]);
        assert_eq!(histogram.width, "extraordinary".len());
        assert_eq!(histogram.distinct_words, 2);
        assert_eq!(histogram.total_tokens, 3);
    }

    #[test]
    fn test_histogram_limit_larger_than_vocabulary() {
        let histogram = Histogram::from_table(&table(&["a", "b"]), Some(10));
        assert_eq!(histogram.entries.len(), 2);
    }
}
