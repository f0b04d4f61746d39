//! Insertion-ordered frequency counter.
//!
//! Ranking by count must break ties by first-encountered order, so the
//! counter remembers the order in which keys were first seen.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Counts occurrences of string keys, preserving first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderedCounter {
    order: Vec<String>,
    counts: HashMap<String, usize>,
}

impl OrderedCounter {
    /// Create an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `by` to the count of `key`.
    pub fn add(&mut self, key: &str, by: usize) {
        match self.counts.get_mut(key) {
            Some(count) => *count += by,
            None => {
                self.order.push(key.to_string());
                self.counts.insert(key.to_string(), by);
            }
        }
    }

    /// Increment the count of `key` by one.
    pub fn increment(&mut self, key: &str) {
        self.add(key, 1);
    }

    /// Add every count of `other` into this counter, in `other`'s order.
    pub fn merge(&mut self, other: &OrderedCounter) {
        for (key, count) in other.iter() {
            self.add(key, count);
        }
    }

    /// Remove `key`, returning its count if it was present.
    pub fn remove(&mut self, key: &str) -> Option<usize> {
        let count = self.counts.remove(key)?;
        self.order.retain(|k| k != key);
        Some(count)
    }

    /// Count for `key` (0 when absent).
    pub fn get(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.counts.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Largest count, or `None` for an empty counter.
    pub fn max_count(&self) -> Option<usize> {
        self.counts.values().copied().max()
    }

    /// Iterate `(key, count)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.order
            .iter()
            .map(move |k| (k.as_str(), self.counts.get(k).copied().unwrap_or(0)))
    }

    /// The `n` highest counts, descending; equal counts keep insertion order.
    pub fn most_common(&self, n: usize) -> Vec<(String, usize)> {
        let mut entries: Vec<(String, usize)> =
            self.iter().map(|(k, c)| (k.to_string(), c)).collect();
        // sort_by is stable, so ties stay in first-seen order
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }
}

impl<'a> FromIterator<&'a str> for OrderedCounter {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut counter = OrderedCounter::new();
        for key in iter {
            counter.increment(key);
        }
        counter
    }
}
