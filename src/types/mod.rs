//! Core value types shared across the crate.

pub mod error;
pub mod key;
pub mod registration;

pub use error::{SelectorError, SelectorResult};
pub use key::SelectorKey;
pub use registration::{Match, QueryMatch, Registration};
