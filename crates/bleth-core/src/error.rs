//! Core error type.
//!
//! Sub-crates define their own error enums; `CoreError` only covers the
//! value-level failures that can happen in this crate (parsing tags).

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown direction {0:?}")]
    UnknownDirection(String),
}

/// Shorthand result type for `bleth-core`.
pub type CoreResult<T> = Result<T, CoreError>;
