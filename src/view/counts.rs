//! Per-key occurrence counts
//!
//! Used for the edge-type summaries and the category histogram. Keys with
//! no occurrences are never stored.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::hash::Hash;

/// Occurrence counts keyed by a string-like label, in first-seen order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counts<K: Hash + Eq> {
    inner: IndexMap<K, usize>,
}

impl<K: Hash + Eq> Default for Counts<K> {
    fn default() -> Self {
        Counts {
            inner: IndexMap::new(),
        }
    }
}

impl<K: Hash + Eq> Counts<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: K) {
        *self.inner.entry(key).or_insert(0) += 1;
    }

    /// Count for a key; absent keys count zero
    pub fn get(&self, key: &K) -> usize {
        self.inner.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.inner.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.inner.iter().map(|(k, &v)| (k, v))
    }
}

impl<K: Hash + Eq + AsRef<str>> Counts<K> {
    /// Entries ordered by key, case-insensitively ascending
    pub fn sorted(&self) -> Vec<(&K, usize)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|(a, _), (b, _)| compare_case_insensitive(a.as_ref(), b.as_ref()));
        entries
    }

    /// Entries ordered by descending count, ties broken by key
    pub fn by_frequency(&self) -> Vec<(&K, usize)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|(ka, a), (kb, b)| {
            b.cmp(a)
                .then_with(|| compare_case_insensitive(ka.as_ref(), kb.as_ref()))
        });
        entries
    }
}

fn compare_case_insensitive(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

impl<K: Hash + Eq> FromIterator<K> for Counts<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut counts = Counts::new();
        for key in iter {
            counts.increment(key);
        }
        counts
    }
}

impl<K: Hash + Eq + AsRef<str> + Serialize> Serialize for Counts<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.sorted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeType;

    fn counts(keys: &[&str]) -> Counts<EdgeType> {
        keys.iter().map(|&k| EdgeType::new(k)).collect()
    }

    #[test]
    fn test_increment_and_get() {
        let c = counts(&["owns", "near", "owns"]);
        assert_eq!(c.get(&EdgeType::new("owns")), 2);
        assert_eq!(c.get(&EdgeType::new("near")), 1);
        assert_eq!(c.get(&EdgeType::new("missing")), 0);
        assert_eq!(c.len(), 2);
        assert_eq!(c.total(), 3);
    }

    #[test]
    fn test_no_zero_entries() {
        let c: Counts<EdgeType> = Counts::new();
        assert!(c.is_empty());
        assert_eq!(c.iter().count(), 0);
    }

    #[test]
    fn test_sorted_case_insensitive() {
        let c = counts(&["membership", "Ownership", "family_relationship", "partnership"]);
        let names: Vec<&str> = c.sorted().into_iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            names,
            vec!["family_relationship", "membership", "Ownership", "partnership"]
        );
    }

    #[test]
    fn test_by_frequency() {
        let c = counts(&["b", "a", "b", "c", "c", "c"]);
        let order: Vec<(&str, usize)> = c
            .by_frequency()
            .into_iter()
            .map(|(k, v)| (k.as_str(), v))
            .collect();
        assert_eq!(order, vec![("c", 3), ("b", 2), ("a", 1)]);
    }

    #[test]
    fn test_serializes_in_sorted_order() {
        let c = counts(&["near", "Owns", "near"]);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"near":2,"Owns":1}"#);
    }
}
