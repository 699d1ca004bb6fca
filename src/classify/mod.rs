//! Selector classification — turns selector text into index keys.
//!
//! For each comma-separated alternative, only the rightmost compound chunk
//! (the "key selector") is inspected: it is the part that must match for the
//! whole alternative to have any chance of matching, so it makes the best
//! cheap index key. Ancestor context to its left is deliberately ignored
//! here and verified later by the backend's exact-match capability.

pub(crate) mod scanner;

use crate::types::SelectorKey;

/// Classify a selector into one index key per comma-separated alternative.
///
/// Pure and deterministic. Never fails: anything the classifier cannot
/// narrow (attribute-only or pseudo-only chunks, `*`, empty alternatives)
/// falls back to [`SelectorKey::Universal`].
///
/// ```
/// use selector_set::{classify, SelectorKey};
///
/// let keys = classify("#a, .b, ul li.item, [data-x]");
/// assert_eq!(
///     keys,
///     vec![
///         SelectorKey::Id("a".into()),
///         SelectorKey::Class("b".into()),
///         SelectorKey::Class("item".into()),
///         SelectorKey::Universal,
///     ]
/// );
/// ```
pub fn classify(selector: &str) -> Vec<SelectorKey> {
    scanner::split_alternatives(selector)
        .into_iter()
        .map(|alt| classify_chunk(scanner::key_chunk(alt)))
        .collect()
}

/// Classify a single compound chunk, trying ID, then class, then tag.
fn classify_chunk(chunk: &str) -> SelectorKey {
    if let Some(id) = find_marked_ident(chunk, '#') {
        return SelectorKey::Id(id);
    }
    if let Some(class) = find_marked_ident(chunk, '.') {
        return SelectorKey::Class(class);
    }
    let chars: Vec<char> = chunk.chars().collect();
    if let Some(tag) = parse_ident(&chars) {
        return SelectorKey::Tag(tag.to_uppercase());
    }
    SelectorKey::Universal
}

/// Find the first occurrence of `marker` (`#` or `.`) followed by an
/// identifier. An escaped marker (`\#`, `\.`) is part of a name, not a
/// component start.
fn find_marked_ident(chunk: &str, marker: char) -> Option<String> {
    let chars: Vec<char> = chunk.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            c if c == marker => {
                if let Some(ident) = parse_ident(&chars[i + 1..]) {
                    return Some(ident);
                }
                i += 1;
            }
            _ => i += 1,
        }
    }
    None
}

/// Parse a leading identifier: ident characters and escape pairs, kept
/// verbatim (escapes included). Returns `None` if the slice does not start
/// with one.
fn parse_ident(chars: &[char]) -> Option<String> {
    let mut out = String::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if is_ident_char(c) {
            out.push(c);
            i += 1;
        } else if c == '\\' && i + 1 < chars.len() {
            out.push('\\');
            out.push(chars[i + 1]);
            i += 2;
        } else {
            break;
        }
    }
    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

/// CSS identifier characters: ASCII word characters, `-`, and everything
/// from U+00C0 up.
fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-' || (c as u32) >= 0xC0
}
