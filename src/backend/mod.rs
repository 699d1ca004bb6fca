//! The capability boundary — what the set needs from a selector engine.
//!
//! The set never evaluates selector semantics itself. Exact structural
//! matching and subtree traversal are delegated to a [`SelectorBackend`],
//! which is authoritative: the index only narrows how often `matches` gets
//! called, never changes its answer.

pub mod dom;

pub use dom::{DomBackend, DomNode};

/// Read surface the set needs from an element.
///
/// Deliberately minimal: the classifier and matcher only ever look at the
/// three attributes that feed the index buckets.
pub trait Element {
    /// The element's id attribute, possibly empty.
    fn id(&self) -> &str;

    /// The element's class attribute as a whitespace-separated string,
    /// possibly empty. Token order is preserved by the matcher.
    fn class_names(&self) -> &str;

    /// The element's tag name. Compared case-insensitively; the index
    /// stores tag keys upper-cased.
    fn tag_name(&self) -> &str;
}

/// External selector-matching capability.
///
/// Both operations are assumed synchronous and side-effect-free. Errors
/// (e.g. selector syntax faults) propagate unmodified to the caller of
/// [`SelectorSet::matches`](crate::SelectorSet::matches) and
/// [`SelectorSet::query_all`](crate::SelectorSet::query_all).
pub trait SelectorBackend {
    /// The element handle this backend works with.
    type Element: Element;
    /// The backend's own error type.
    type Error;

    /// Whether `element` structurally satisfies the full selector,
    /// including combinators, attribute predicates, and pseudo-classes.
    fn matches(&self, element: &Self::Element, selector: &str) -> Result<bool, Self::Error>;

    /// Every element under `root` (root excluded) matching at least one
    /// comma-separated alternative in `selector_list`, in pre-order
    /// document order.
    fn query_all(
        &self,
        selector_list: &str,
        root: &Self::Element,
    ) -> Result<Vec<Self::Element>, Self::Error>;
}
