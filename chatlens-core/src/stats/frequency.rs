use ahash::RandomState;
use std::collections::HashMap;
use std::hash::Hash;

/// Counts keys while remembering the order in which each key was first seen.
///
/// Ranking is a stable sort on the count, so equal counts keep encounter
/// order and repeated runs over the same input produce the same ranking.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    index: HashMap<K, usize, RandomState>,
    entries: Vec<(K, u64)>,
}

impl<K> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            index: HashMap::default(),
            entries: Vec::new(),
        }
    }
}

impl<K> FrequencyTable<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    pub fn get(&self, key: &K) -> u64 {
        self.index.get(key).map_or(0, |&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, c)| *c).sum()
    }

    /// Entries in first-encountered order.
    pub fn into_encounter_order(self) -> Vec<(K, u64)> {
        self.entries
    }

    /// Entries by descending count, ties in first-encountered order.
    pub fn into_ranked(self) -> Vec<(K, u64)> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    pub fn into_top(self, n: usize) -> Vec<(K, u64)> {
        let mut ranked = self.into_ranked();
        ranked.truncate(n);
        ranked
    }
}

impl<K> FromIterator<K> for FrequencyTable<K>
where
    K: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = Self::new();
        for key in iter {
            table.record(key);
        }
        table
    }
}
