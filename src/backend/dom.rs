//! Naive in-memory element tree and selector backend.
//!
//! A minimal reference implementation of the capability traits, used by the
//! test suite, the benches, and the `selset` CLI. It evaluates compound
//! selectors only — tag, `#id`, `.class`, `*`, and comma lists thereof.
//! Combinators, attribute predicates, and pseudo-classes are rejected with
//! [`SelectorError::UnsupportedSelector`]; production embedders supply a
//! real engine behind [`SelectorBackend`] instead.

use crate::classify::scanner;
use crate::types::{SelectorError, SelectorResult};

use super::{Element, SelectorBackend};

/// An element in a plain owned tree: tag name, id and class attributes, and
/// child elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomNode {
    tag: String,
    id: String,
    class: String,
    children: Vec<DomNode>,
}

impl DomNode {
    /// Create an element with the given tag name and no attributes.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: String::new(),
            class: String::new(),
            children: Vec::new(),
        }
    }

    /// Set the id attribute.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the class attribute (whitespace-separated class names).
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Append a child element.
    pub fn child(mut self, child: DomNode) -> Self {
        self.children.push(child);
        self
    }

    /// The element's child elements, in document order.
    pub fn children(&self) -> &[DomNode] {
        &self.children
    }
}

impl Element for DomNode {
    fn id(&self) -> &str {
        &self.id
    }

    fn class_names(&self) -> &str {
        &self.class
    }

    fn tag_name(&self) -> &str {
        &self.tag
    }
}

/// A parsed compound selector: every listed condition must hold at once.
#[derive(Debug, Default)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    universal: bool,
}

impl Compound {
    fn matches(&self, el: &DomNode) -> bool {
        if let Some(tag) = &self.tag {
            if !tag.eq_ignore_ascii_case(el.tag_name()) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if el.id() != id {
                return false;
            }
        }
        self.classes
            .iter()
            .all(|c| el.class_names().split_whitespace().any(|ec| ec == c))
    }
}

/// Stateless selector backend over [`DomNode`] trees.
#[derive(Debug, Default)]
pub struct DomBackend;

impl DomBackend {
    /// Create a backend instance.
    pub fn new() -> Self {
        Self
    }
}

impl SelectorBackend for DomBackend {
    type Element = DomNode;
    type Error = SelectorError;

    fn matches(&self, element: &DomNode, selector: &str) -> Result<bool, SelectorError> {
        let compounds = parse_list(selector)?;
        Ok(compounds.iter().any(|c| c.matches(element)))
    }

    fn query_all(&self, selector_list: &str, root: &DomNode) -> Result<Vec<DomNode>, SelectorError> {
        let compounds = parse_list(selector_list)?;
        let mut out = Vec::new();
        collect(root, &compounds, &mut out);
        Ok(out)
    }
}

/// Pre-order walk over descendants of `node` (node itself excluded).
fn collect(node: &DomNode, compounds: &[Compound], out: &mut Vec<DomNode>) {
    for child in node.children() {
        if compounds.iter().any(|c| c.matches(child)) {
            out.push(child.clone());
        }
        collect(child, compounds, out);
    }
}

/// Parse a comma-separated selector list into compounds.
fn parse_list(selector: &str) -> SelectorResult<Vec<Compound>> {
    if !scanner::is_balanced(selector) {
        return Err(SelectorError::Unbalanced(selector.to_string()));
    }
    scanner::split_alternatives(selector)
        .into_iter()
        .map(parse_alternative)
        .collect()
}

/// Parse one alternative, rejecting anything beyond a single compound.
fn parse_alternative(alternative: &str) -> SelectorResult<Compound> {
    let trimmed = alternative.trim();
    if trimmed.is_empty() {
        return Err(SelectorError::EmptySelector);
    }
    // Combinator context would leave the key chunk shorter than the whole.
    if scanner::key_chunk(trimmed) != trimmed {
        return Err(SelectorError::UnsupportedSelector(alternative.to_string()));
    }
    parse_compound(trimmed)
}

fn parse_compound(text: &str) -> SelectorResult<Compound> {
    let chars: Vec<char> = text.chars().collect();
    let mut compound = Compound::default();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' => {
                compound.universal = true;
                i += 1;
            }
            '#' => {
                let (ident, next) = parse_ident(&chars, i + 1)
                    .ok_or_else(|| SelectorError::UnsupportedSelector(text.to_string()))?;
                compound.id = Some(ident);
                i = next;
            }
            '.' => {
                let (ident, next) = parse_ident(&chars, i + 1)
                    .ok_or_else(|| SelectorError::UnsupportedSelector(text.to_string()))?;
                compound.classes.push(ident);
                i = next;
            }
            c if i == 0 && is_ident_char(c) => {
                let (ident, next) = parse_ident(&chars, 0)
                    .ok_or_else(|| SelectorError::UnsupportedSelector(text.to_string()))?;
                compound.tag = Some(ident);
                i = next;
            }
            _ => return Err(SelectorError::UnsupportedSelector(text.to_string())),
        }
    }

    Ok(compound)
}

/// Parse a plain identifier starting at `start`; returns the identifier and
/// the index just past it. No escape support in the naive backend.
fn parse_ident(chars: &[char], start: usize) -> Option<(String, usize)> {
    let mut i = start;
    while i < chars.len() && is_ident_char(chars[i]) {
        i += 1;
    }
    if i == start {
        None
    } else {
        Some((chars[start..i].iter().collect(), i))
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}
