//! Subtree batch lookup: grouping, combined query, short-circuit.

use std::cell::{Cell, RefCell};

use selector_set::{
    DomBackend, DomNode, SelectorBackend, SelectorError, SelectorSet,
};

/// Wraps [`DomBackend`] and records combined-query invocations.
struct CountingBackend {
    inner: DomBackend,
    query_calls: Cell<usize>,
    last_query: RefCell<Option<String>>,
}

impl CountingBackend {
    fn new() -> Self {
        Self {
            inner: DomBackend::new(),
            query_calls: Cell::new(0),
            last_query: RefCell::new(None),
        }
    }
}

impl SelectorBackend for CountingBackend {
    type Element = DomNode;
    type Error = SelectorError;

    fn matches(&self, element: &DomNode, selector: &str) -> Result<bool, SelectorError> {
        self.inner.matches(element, selector)
    }

    fn query_all(&self, selector_list: &str, root: &DomNode) -> Result<Vec<DomNode>, SelectorError> {
        self.query_calls.set(self.query_calls.get() + 1);
        *self.last_query.borrow_mut() = Some(selector_list.to_string());
        self.inner.query_all(selector_list, root)
    }
}

fn sample_root() -> DomNode {
    DomNode::new("div")
        .child(DomNode::new("p"))
        .child(DomNode::new("p").with_class("highlight"))
}

#[test]
fn test_grouping_by_registration() {
    let mut set = SelectorSet::new();
    set.add("p", "A");
    set.add(".highlight", "B");

    let backend = DomBackend::new();
    let root = sample_root();

    let mut results = set.query_all(&backend, &root).unwrap();
    results.sort_by_key(|r| r.id);

    assert_eq!(results.len(), 2);

    assert_eq!(results[0].id, 0);
    assert_eq!(results[0].selector, "p");
    assert_eq!(*results[0].data, "A");
    assert_eq!(results[0].elements, vec![root.children()[0].clone(), root.children()[1].clone()]);

    assert_eq!(results[1].id, 1);
    assert_eq!(*results[1].data, "B");
    assert_eq!(results[1].elements, vec![root.children()[1].clone()]);
}

#[test]
fn test_empty_set_skips_the_backend() {
    let set: SelectorSet<()> = SelectorSet::new();
    let backend = CountingBackend::new();
    let root = sample_root();

    let results = set.query_all(&backend, &root).unwrap();
    assert!(results.is_empty());
    assert_eq!(backend.query_calls.get(), 0);
}

#[test]
fn test_one_combined_traversal() {
    let mut set = SelectorSet::new();
    set.add("p", ());
    set.add(".highlight", ());
    set.add("em", ());

    let backend = CountingBackend::new();
    let root = sample_root();

    set.query_all(&backend, &root).unwrap();
    assert_eq!(backend.query_calls.get(), 1);
    assert_eq!(
        backend.last_query.borrow().as_deref(),
        Some("p, .highlight, em")
    );
}

#[test]
fn test_unmatched_registrations_get_no_entry() {
    let mut set = SelectorSet::new();
    set.add("p", ());
    set.add(".missing", ());

    let backend = DomBackend::new();
    let root = sample_root();

    let results = set.query_all(&backend, &root).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].selector, "p");
}

#[test]
fn test_elements_keep_traversal_order() {
    let mut set = SelectorSet::new();
    set.add("li", ());

    let backend = DomBackend::new();
    let root = DomNode::new("ul")
        .child(DomNode::new("li").with_id("first"))
        .child(
            DomNode::new("li")
                .with_id("second")
                .child(DomNode::new("ul").child(DomNode::new("li").with_id("nested"))),
        )
        .child(DomNode::new("li").with_id("third"));

    let results = set.query_all(&backend, &root).unwrap();
    assert_eq!(results.len(), 1);
    let ids: Vec<&str> = results[0]
        .elements
        .iter()
        .map(|el| selector_set::Element::id(el))
        .collect();
    // Pre-order: nested list items come before later siblings.
    assert_eq!(ids, vec!["first", "second", "nested", "third"]);
}

#[test]
fn test_element_can_appear_in_several_groups() {
    let mut set = SelectorSet::new();
    set.add("p", ());
    set.add(".highlight", ());

    let backend = DomBackend::new();
    let root = sample_root();

    let results = set.query_all(&backend, &root).unwrap();
    let total: usize = results.iter().map(|r| r.elements.len()).sum();
    // p1 once, p2 twice (once per matching registration).
    assert_eq!(total, 3);
}
