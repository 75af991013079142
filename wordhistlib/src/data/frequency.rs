//! Word frequency table.

use std::collections::hash_map;
use std::collections::HashMap;

/// Mapping from distinct word to the number of times it occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
    total_tokens: u64,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token of a sequence.
    pub fn from_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Self {
        let mut table = Self::new();
        for token in tokens {
            table.add(token);
        }
        table
    }

    /// Record one occurrence of `word`.
    pub fn add(&mut self, word: &str) {
        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.to_string(), 1);
            }
        }
        self.total_tokens += 1;
    }

    /// Occurrences of `word`, zero if never seen.
    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of tokens counted, i.e. the sum of all counts.
    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    /// Length in characters of the longest word, `None` for an empty table.
    pub fn max_word_width(&self) -> Option<usize> {
        self.counts.keys().map(|w| w.chars().count()).max()
    }

    /// Iterate `(word, count)` pairs in no particular order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, u64> {
        self.counts.iter()
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = (&'a String, &'a u64);
    type IntoIter = hash_map::Iter<'a, String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
