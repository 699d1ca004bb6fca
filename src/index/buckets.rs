//! Bucket table — maps classification keys to ordered registration ids.

use std::collections::HashMap;

use crate::types::SelectorKey;

/// Maps each classification key to the ids of the registrations filed under
/// it. Buckets hold ids into the set's registration store, never record
/// copies, and are created on first use. Within a bucket, ids appear in
/// insertion order, which is ascending because insertion is append-only.
#[derive(Debug, Default)]
pub struct KeyIndex {
    by_id: HashMap<String, Vec<u64>>,
    by_class: HashMap<String, Vec<u64>>,
    by_tag: HashMap<String, Vec<u64>>,
    universal: Vec<u64>,
}

impl KeyIndex {
    /// Create a new, empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// File a registration id under a classification key.
    pub fn insert(&mut self, key: SelectorKey, id: u64) {
        match key {
            SelectorKey::Id(k) => self.by_id.entry(k).or_default().push(id),
            SelectorKey::Class(k) => self.by_class.entry(k).or_default().push(id),
            SelectorKey::Tag(k) => self.by_tag.entry(k).or_default().push(id),
            SelectorKey::Universal => self.universal.push(id),
        }
    }

    /// Registration ids filed under an element id.
    pub fn id_bucket(&self, key: &str) -> &[u64] {
        self.by_id.get(key).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Registration ids filed under a class name.
    pub fn class_bucket(&self, key: &str) -> &[u64] {
        self.by_class.get(key).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Registration ids filed under an upper-cased tag name.
    pub fn tag_bucket(&self, key: &str) -> &[u64] {
        self.by_tag.get(key).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Registration ids that could match any element.
    pub fn universal(&self) -> &[u64] {
        &self.universal
    }

    /// Number of distinct id keys.
    pub fn id_key_count(&self) -> usize {
        self.by_id.len()
    }

    /// Number of distinct class keys.
    pub fn class_key_count(&self) -> usize {
        self.by_class.len()
    }

    /// Number of distinct tag keys.
    pub fn tag_key_count(&self) -> usize {
        self.by_tag.len()
    }

    /// Number of registrations in the universal bucket.
    pub fn universal_count(&self) -> usize {
        self.universal.len()
    }

    /// Total entries across all buckets. A registration indexed under
    /// several keys counts once per bucket it appears in.
    pub fn entry_count(&self) -> usize {
        self.by_id.values().map(|v| v.len()).sum::<usize>()
            + self.by_class.values().map(|v| v.len()).sum::<usize>()
            + self.by_tag.values().map(|v| v.len()).sum::<usize>()
            + self.universal.len()
    }
}
