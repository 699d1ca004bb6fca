//! Single-element matching: id assignment, ordering, dedup, propagation.

use std::cell::Cell;

use selector_set::{
    DomBackend, DomNode, SelectorBackend, SelectorError, SelectorSet,
};

/// Wraps [`DomBackend`] and counts capability invocations.
struct CountingBackend {
    inner: DomBackend,
    match_calls: Cell<usize>,
}

impl CountingBackend {
    fn new() -> Self {
        Self {
            inner: DomBackend::new(),
            match_calls: Cell::new(0),
        }
    }
}

impl SelectorBackend for CountingBackend {
    type Element = DomNode;
    type Error = SelectorError;

    fn matches(&self, element: &DomNode, selector: &str) -> Result<bool, SelectorError> {
        self.match_calls.set(self.match_calls.get() + 1);
        self.inner.matches(element, selector)
    }

    fn query_all(&self, selector_list: &str, root: &DomNode) -> Result<Vec<DomNode>, SelectorError> {
        self.inner.query_all(selector_list, root)
    }
}

#[test]
fn test_ids_are_monotonic_across_selector_kinds() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut set = SelectorSet::new();
    let ids: Vec<u64> = vec![
        set.add("#a", 0),
        set.add(".b", 1),
        set.add("div", 2),
        set.add("[data-x]", 3),
        set.add("#a", 4), // same text, new registration
    ];
    assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    assert_eq!(set.len(), 5);
    assert_eq!(set.get(4).unwrap().selector, "#a");
    assert_eq!(set.get(4).unwrap().data, 4);
    assert!(set.get(5).is_none());
}

#[test]
fn test_results_come_back_in_insertion_order() {
    let mut set = SelectorSet::new();
    set.add(".y", "class");
    set.add("#x", "id");
    set.add("div", "tag");
    set.add("*", "universal");

    let backend = DomBackend::new();
    let el = DomNode::new("div").with_id("x").with_class("y");

    let matches = set.matches(&backend, Some(&el)).unwrap();
    let ids: Vec<u64> = matches.iter().map(|m| m.id).collect();
    // The ID bucket is probed first, but results sort by registration id.
    assert_eq!(ids, vec![0, 1, 2, 3]);
    let data: Vec<&str> = matches.iter().map(|m| *m.data).collect();
    assert_eq!(data, vec!["class", "id", "tag", "universal"]);
}

#[test]
fn test_registration_reachable_from_two_buckets_matches_once() {
    let mut set = SelectorSet::new();
    set.add("#x, .x", ());

    let backend = CountingBackend::new();
    let el = DomNode::new("div").with_id("x").with_class("x");

    let matches = set.matches(&backend, Some(&el)).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, 0);
    assert_eq!(backend.match_calls.get(), 1);
}

#[test]
fn test_exact_match_runs_once_even_when_it_fails() {
    let mut set = SelectorSet::new();
    // Reachable via both the id and class bucket, but never matches.
    set.add("#x.z, .x.z", ());

    let backend = CountingBackend::new();
    let el = DomNode::new("div").with_id("x").with_class("x");

    let matches = set.matches(&backend, Some(&el)).unwrap();
    assert!(matches.is_empty());
    assert_eq!(backend.match_calls.get(), 1);
}

#[test]
fn test_absent_element_yields_empty() {
    let mut set = SelectorSet::new();
    set.add("div", ());

    let backend = CountingBackend::new();
    let matches = set.matches(&backend, None).unwrap();
    assert!(matches.is_empty());
    assert_eq!(backend.match_calls.get(), 0);
}

#[test]
fn test_empty_set_matches_nothing() {
    let set: SelectorSet<()> = SelectorSet::new();
    let backend = CountingBackend::new();
    let el = DomNode::new("p");
    assert!(set.matches(&backend, Some(&el)).unwrap().is_empty());
    assert_eq!(backend.match_calls.get(), 0);
}

#[test]
fn test_non_matching_candidates_are_filtered() {
    let mut set = SelectorSet::new();
    set.add("p.y", ());
    set.add("div.y", ());

    let backend = DomBackend::new();
    let el = DomNode::new("div").with_class("y");

    let matches = set.matches(&backend, Some(&el)).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].selector, "div.y");
}

#[test]
fn test_class_tokens_probe_in_element_order() {
    let mut set = SelectorSet::new();
    set.add(".b", ());
    set.add(".a", ());

    let backend = DomBackend::new();
    let el = DomNode::new("span").with_class("b a");

    let ids: Vec<u64> = set
        .matches(&backend, Some(&el))
        .unwrap()
        .iter()
        .map(|m| m.id)
        .collect();
    // Probe order follows the element's class list; output is still sorted.
    assert_eq!(ids, vec![0, 1]);
}

#[test]
fn test_backend_errors_propagate() {
    let mut set = SelectorSet::new();
    // Lands in the universal bucket; the naive backend cannot evaluate it.
    set.add("[data-x]", ());

    let backend = DomBackend::new();
    let el = DomNode::new("div");

    let err = set.matches(&backend, Some(&el)).unwrap_err();
    assert!(matches!(err, SelectorError::UnsupportedSelector(_)));
}
