//! Identifier types for terms and categories.
//!
//! Term identifiers are integers assigned by the store, but every serialized
//! form carries them as decimal strings (`"1"`, `"10"`), matching the record
//! shape shared with external consumers. These newtypes centralize parsing and
//! formatting to avoid ad-hoc string handling across crates.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when parsing identifiers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The input was not a decimal term id.
    #[error("invalid term id: {input}")]
    InvalidTermId {
        /// The rejected input.
        input: String,
    },
}

/// A term identifier.
///
/// Unique across the repository at all times; assigned at creation and never
/// reused. Displays as the decimal string used in serialized records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TermId(u64);

impl TermId {
    /// Constructs a term id from its numeric value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value of this id.
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the id following this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TermId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(IdError::InvalidTermId {
                input: s.to_string(),
            });
        }
        trimmed
            .parse::<u64>()
            .map(Self)
            .map_err(|_| IdError::InvalidTermId {
                input: s.to_string(),
            })
    }
}

/// A category identifier.
///
/// Categories form a small fixed set, so the id stays an opaque string; the
/// seed uses `"1"` through `"4"`. Matching is exact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    /// Constructs a category id from any string-like value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CategoryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
