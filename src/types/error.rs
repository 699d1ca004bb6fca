//! Error types for the selector-set library.
//!
//! The core set API never fails on its own: classification degrades to the
//! UNIVERSAL bucket instead of erroring, and backend faults propagate
//! unmodified through the backend's associated error type. These errors
//! belong to the bundled [`DomBackend`](crate::backend::DomBackend) and the
//! CLI, which do reject selectors they cannot evaluate.

use thiserror::Error;

/// All errors produced by the bundled backend and CLI.
#[derive(Error, Debug)]
pub enum SelectorError {
    /// The selector uses syntax the naive backend does not evaluate
    /// (combinators, attribute predicates, pseudo-classes).
    #[error("Unsupported selector: {0}")]
    UnsupportedSelector(String),

    /// Unbalanced parentheses, brackets, or quotes.
    #[error("Unbalanced delimiters in selector: {0}")]
    Unbalanced(String),

    /// An empty selector where one was required.
    #[error("Empty selector")]
    EmptySelector,
}

/// Convenience result type for selector-set operations.
pub type SelectorResult<T> = Result<T, SelectorError>;
