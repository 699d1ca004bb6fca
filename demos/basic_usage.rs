//! Basic usage: register selectors, match one element, query a subtree.

use selector_set::{DomBackend, DomNode, SelectorSet};

fn main() {
    let mut set = SelectorSet::new();
    set.add("p", "paragraph handler");
    set.add(".highlight", "highlight handler");
    set.add("#intro", "intro handler");

    let backend = DomBackend::new();

    let root = DomNode::new("article")
        .child(DomNode::new("p").with_id("intro"))
        .child(DomNode::new("p").with_class("highlight"))
        .child(DomNode::new("aside").with_class("highlight"));

    // Which registrations apply to a single element?
    let el = DomNode::new("p").with_id("intro");
    for m in set.matches(&backend, Some(&el)).unwrap() {
        println!("element matches #{} {:?} -> {}", m.id, m.selector, m.data);
    }

    // Which elements under the root match each registration?
    for group in set.query_all(&backend, &root).unwrap() {
        println!(
            "{:?} ({}) matched {} element(s)",
            group.selector,
            group.data,
            group.elements.len()
        );
    }
}
