//! SelectorSet — an indexed set of CSS selector registrations.
//!
//! Answers "which registered selectors apply to this element?" without
//! re-testing every selector: each selector is classified by the rightmost
//! compound of each comma alternative into an ID, class, tag, or universal
//! bucket, and lookups only run the authoritative exact-match test against
//! the candidates those buckets produce. The exact-match and subtree-query
//! capabilities are pluggable via [`SelectorBackend`]; a naive in-memory
//! implementation ships for tests and demos.

pub mod backend;
pub mod classify;
pub mod cli;
pub mod index;
pub mod set;
pub mod types;

// Re-export commonly used types at the crate root
pub use backend::{DomBackend, DomNode, Element, SelectorBackend};
pub use classify::classify;
pub use index::KeyIndex;
pub use set::SelectorSet;
pub use types::{Match, QueryMatch, Registration, SelectorError, SelectorKey, SelectorResult};
