//! Error types for identifier parsing.

use thiserror::Error;

/// Errors that can occur when parsing a todo identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TodoIdError {
    /// The input string is empty.
    #[error("todo id cannot be empty")]
    Empty,

    /// The input is not a base-10 integer.
    #[error("todo id is not an integer: '{input}'")]
    NotAnInteger { input: String },

    /// The input parsed as an integer but is not a positive id.
    #[error("todo id must be a positive integer, got '{input}'")]
    NotPositive { input: String },
}

impl TodoIdError {
    /// Returns true if the input was numeric but out of the valid range.
    pub fn is_range_error(&self) -> bool {
        matches!(self, TodoIdError::NotPositive { .. })
    }
}
