//! Co-occurrence statistics over a project pool.
//!
//! Both tables are rebuilt from scratch whenever the pool is replaced; there
//! is no incremental update path.

use std::collections::{BTreeSet, HashMap};

use setlist_core::{OrderedCounter, VectorMath};

/// Symmetric item → item co-occurrence counts.
#[derive(Debug, Clone, Default)]
pub struct CooccurrenceTable {
    rows: HashMap<String, OrderedCounter>,
}

impl CooccurrenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every unordered pair in `items` once, in both directions.
    pub fn add_group(&mut self, items: &BTreeSet<String>) {
        let items: Vec<&String> = items.iter().collect();
        for (i, a) in items.iter().enumerate() {
            for b in &items[i + 1..] {
                self.rows.entry((*a).clone()).or_default().increment(b);
                self.rows.entry((*b).clone()).or_default().increment(a);
            }
        }
    }

    /// How often `a` and `b` appeared in the same group.
    pub fn count(&self, a: &str, b: &str) -> usize {
        self.rows.get(a).map(|row| row.get(b)).unwrap_or(0)
    }

    pub fn row(&self, item: &str) -> Option<&OrderedCounter> {
        self.rows.get(item)
    }

    /// Number of items with at least one co-occurrence.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Summed co-occurrence counts of every item seen alongside `current`,
    /// excluding the `current` items themselves.
    pub fn suggestions(&self, current: &[String]) -> OrderedCounter {
        let mut scores = OrderedCounter::new();
        for item in current {
            if let Some(row) = self.rows.get(item) {
                scores.merge(row);
            }
        }
        for item in current {
            scores.remove(item);
        }
        scores
    }

    /// Up to `limit` of the `current` items (in their given order) that
    /// co-occur with `candidate`.
    pub fn cooccurring_with<'a>(
        &self,
        current: &'a [String],
        candidate: &str,
        limit: usize,
    ) -> Vec<&'a str> {
        current
            .iter()
            .filter(|item| self.count(item, candidate) > 0)
            .map(String::as_str)
            .take(limit)
            .collect()
    }
}

/// Tempos of the projects each plugin appeared in.
#[derive(Debug, Clone, Default)]
pub struct TempoAffinity {
    tempos: HashMap<String, Vec<f64>>,
}

impl TempoAffinity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, plugin: &str, tempo: f64) {
        self.tempos.entry(plugin.to_string()).or_default().push(tempo);
    }

    pub fn tempos(&self, plugin: &str) -> &[f64] {
        self.tempos.get(plugin).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Mean recorded tempo of `plugin`, if any was recorded.
    pub fn mean(&self, math: &dyn VectorMath, plugin: &str) -> Option<f64> {
        math.mean(self.tempos(plugin))
    }

    pub fn len(&self) -> usize {
        self.tempos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tempos.is_empty()
    }

    pub fn clear(&mut self) {
        self.tempos.clear();
    }
}
