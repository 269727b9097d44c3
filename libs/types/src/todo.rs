//! Todo records and their typed identifier.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TodoIdError;

/// A typed todo identifier.
///
/// Always a positive integer once constructed; ids are stable and assigned
/// at creation. On the wire this serializes as a plain JSON number.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TodoId(NonZeroU32);

impl TodoId {
    /// Creates an id from a raw integer, rejecting zero.
    pub fn new(raw: u32) -> Result<Self, TodoIdError> {
        NonZeroU32::new(raw)
            .map(Self)
            .ok_or(TodoIdError::NotPositive {
                input: raw.to_string(),
            })
    }

    /// Returns the raw integer value.
    #[must_use]
    pub fn get(&self) -> u32 {
        self.0.get()
    }

    /// Returns the zero-based position of this id in an ordered list
    /// whose ids were assigned 1-based.
    #[must_use]
    pub fn index(&self) -> usize {
        (self.0.get() - 1) as usize
    }

    /// Parses an id from a string, rejecting empty, non-numeric,
    /// zero, and negative input.
    pub fn parse(s: &str) -> Result<Self, TodoIdError> {
        if s.is_empty() {
            return Err(TodoIdError::Empty);
        }

        let value: i64 = s.parse().map_err(|_| TodoIdError::NotAnInteger {
            input: s.to_string(),
        })?;

        if !(1..=i64::from(u32::MAX)).contains(&value) {
            return Err(TodoIdError::NotPositive {
                input: s.to_string(),
            });
        }

        // value is in [1, u32::MAX] here
        Self::new(value as u32)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = TodoIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A todo record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Stable id, assigned at creation.
    pub id: TodoId,

    /// Short title.
    pub title: String,

    /// Longer free-form description.
    pub description: String,
}
