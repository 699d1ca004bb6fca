//! Registration records and the match views returned by queries.

use serde::Serialize;

/// One (selector, payload) pair tracked by a [`SelectorSet`](crate::SelectorSet).
///
/// The set owns the canonical record in a growable store indexed by `id`;
/// index buckets hold only the `id`, never a copy of the record.
#[derive(Debug, Clone, Serialize)]
pub struct Registration<T> {
    /// Unique identifier, assigned sequentially at insertion time.
    pub id: u64,
    /// The original, unmodified selector text.
    pub selector: String,
    /// Caller-supplied payload. Never inspected by the set.
    pub data: T,
}

/// A registration whose selector matched a single element.
///
/// Returned by [`SelectorSet::matches`](crate::SelectorSet::matches) in
/// ascending `id` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Match<'a, T> {
    /// Registration id.
    pub id: u64,
    /// The registered selector text.
    pub selector: &'a str,
    /// The registered payload.
    pub data: &'a T,
}

/// A registration together with every element it matched under a subtree root.
///
/// Returned by [`SelectorSet::query_all`](crate::SelectorSet::query_all).
/// Entry order across registrations is unspecified; `elements` preserves the
/// order the backend traversal returned them in.
#[derive(Debug, Clone)]
pub struct QueryMatch<'a, T, E> {
    /// Registration id.
    pub id: u64,
    /// The registered selector text.
    pub selector: &'a str,
    /// The registered payload.
    pub data: &'a T,
    /// All elements under the queried root that matched this registration.
    pub elements: Vec<E>,
}
