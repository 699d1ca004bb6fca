//! Index structures backing the selector set.

pub mod buckets;

pub use buckets::KeyIndex;
