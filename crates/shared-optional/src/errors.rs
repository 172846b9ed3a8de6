//! # Error Types
//!
//! Errors raised by the [`Optional`](crate::Optional) container itself.
//! Errors produced by caller-supplied closures are never wrapped here.

use thiserror::Error;

/// Errors raised when reading from an [`Optional`](crate::Optional).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionalError {
    /// `get` was called on an EMPTY container.
    #[error("No value present")]
    NoValuePresent,
}
