//! The selector set — registration store, key index, and the two lookups.

use std::collections::{HashMap, HashSet};

use log::{debug, trace};

use crate::backend::{Element, SelectorBackend};
use crate::classify::classify;
use crate::index::KeyIndex;
use crate::types::{Match, QueryMatch, Registration};

/// An add-only set of (selector, payload) registrations with a key-selector
/// index for fast element-to-selector lookup.
///
/// Registrations live in a growable store indexed by their id; the index
/// buckets hold ids only, so one registration is cheaply reachable from
/// every bucket its comma alternatives classify into.
///
/// Not internally synchronized: `add` takes `&mut self`, the lookups take
/// `&self`, so the borrow checker enforces the intended single-writer
/// discipline. A fully built set can be shared across threads for read-only
/// lookups when the payload type allows it.
pub struct SelectorSet<T> {
    /// All registrations, indexed by id.
    registrations: Vec<Registration<T>>,
    /// Classification-key buckets holding registration ids.
    index: KeyIndex,
    /// Every registered selector string, in insertion order. Joined into
    /// the combined query for [`query_all`](Self::query_all).
    query_selectors: Vec<String>,
    /// Next registration id. Per-instance, never reused.
    next_id: u64,
}

impl<T> SelectorSet<T> {
    /// Create a new, empty set.
    pub fn new() -> Self {
        Self {
            registrations: Vec::new(),
            index: KeyIndex::new(),
            query_selectors: Vec::new(),
            next_id: 0,
        }
    }

    /// Number of registrations.
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Whether the set holds no registrations.
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Get a registration by id.
    pub fn get(&self, id: u64) -> Option<&Registration<T>> {
        self.registrations.get(id as usize)
    }

    /// All registrations, in insertion order.
    pub fn registrations(&self) -> &[Registration<T>] {
        &self.registrations
    }

    /// All registered selector strings, in insertion order.
    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.query_selectors.iter().map(|s| s.as_str())
    }

    /// The underlying bucket index (read-only).
    pub fn key_index(&self) -> &KeyIndex {
        &self.index
    }

    /// Register a selector with an opaque payload, returning the assigned id.
    ///
    /// Ids are assigned from a per-instance counter: the Nth call returns
    /// `N - 1`. Each comma alternative of the selector files the id into its
    /// own bucket. Identical selector text is not deduplicated; re-adding
    /// creates a fresh registration.
    pub fn add(&mut self, selector: impl Into<String>, data: T) -> u64 {
        let selector = selector.into();
        let id = self.next_id;
        self.next_id += 1;

        let keys = classify(&selector);
        debug!("add id={} selector={:?} keys={}", id, selector, keys.len());
        for key in keys {
            self.index.insert(key, id);
        }

        self.query_selectors.push(selector.clone());
        self.registrations.push(Registration { id, selector, data });
        id
    }

    /// All registrations whose selector matches `element`, in ascending id
    /// (insertion) order. `None` yields an empty vec.
    ///
    /// Candidates come from the element's id bucket, one class bucket per
    /// class token in the element's own order, the tag bucket, and the
    /// universal bucket; only candidates survive the backend's exact-match
    /// test. The backend is consulted at most once per distinct registration
    /// id per call, and its errors propagate unmodified.
    pub fn matches<'a, B>(
        &'a self,
        backend: &B,
        element: Option<&B::Element>,
    ) -> Result<Vec<Match<'a, T>>, B::Error>
    where
        B: SelectorBackend,
    {
        let Some(el) = element else {
            return Ok(Vec::new());
        };

        let mut candidates: Vec<u64> = Vec::new();
        candidates.extend_from_slice(self.index.id_bucket(el.id()));
        for class in el.class_names().split_whitespace() {
            candidates.extend_from_slice(self.index.class_bucket(class));
        }
        candidates.extend_from_slice(self.index.tag_bucket(&el.tag_name().to_uppercase()));
        candidates.extend_from_slice(self.index.universal());
        trace!("matches: {} candidates of {} registrations", candidates.len(), self.len());

        let mut seen: HashSet<u64> = HashSet::new();
        let mut matched: Vec<Match<'a, T>> = Vec::new();
        for id in candidates {
            if !seen.insert(id) {
                continue;
            }
            let reg = &self.registrations[id as usize];
            if backend.matches(el, &reg.selector)? {
                matched.push(Match {
                    id,
                    selector: &reg.selector,
                    data: &reg.data,
                });
            }
        }

        // Bucket iteration order is unspecified; insertion order is the
        // contract.
        matched.sort_unstable_by_key(|m| m.id);
        Ok(matched)
    }

    /// Group every element under `root` by the registrations it matches.
    ///
    /// Runs one combined backend query over all registered selectors, then
    /// verifies each returned element with [`matches`](Self::matches). One
    /// entry per registration that matched at least one element, in
    /// unspecified order; each entry's elements keep the backend's
    /// traversal order. An empty set returns immediately without touching
    /// the backend.
    pub fn query_all<'a, B>(
        &'a self,
        backend: &B,
        root: &B::Element,
    ) -> Result<Vec<QueryMatch<'a, T, B::Element>>, B::Error>
    where
        B: SelectorBackend,
        B::Element: Clone,
    {
        if self.query_selectors.is_empty() {
            return Ok(Vec::new());
        }

        let combined = self.query_selectors.join(", ");
        let elements = backend.query_all(&combined, root)?;
        trace!("query_all: {} elements matched the combined query", elements.len());

        let mut grouped: HashMap<u64, QueryMatch<'a, T, B::Element>> = HashMap::new();
        for el in &elements {
            for m in self.matches(backend, Some(el))? {
                grouped
                    .entry(m.id)
                    .or_insert_with(|| QueryMatch {
                        id: m.id,
                        selector: m.selector,
                        data: m.data,
                        elements: Vec::new(),
                    })
                    .elements
                    .push(el.clone());
            }
        }

        Ok(grouped.into_values().collect())
    }
}

impl<T> Default for SelectorSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
