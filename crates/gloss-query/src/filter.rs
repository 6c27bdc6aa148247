//! Search filters and sort modes.

use std::{fmt, str::FromStr};

use gloss_model::CategoryId;
use thiserror::Error;

/// Errors produced when parsing filter components from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// The input did not name a known sort mode.
    #[error("unknown sort mode: {input:?} (expected relevance, alphabetical or popularity)")]
    UnknownSortMode {
        /// The rejected input.
        input: String,
    },
}

/// How search results are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Matches keep the collection order.
    #[default]
    Relevance,
    /// Ascending by word, folding case and accents so "Débogage" sorts with
    /// the D words.
    Alphabetical,
    /// Most-searched first.
    Popularity,
}

impl SortMode {
    /// Returns the canonical mode name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Alphabetical => "alphabetical",
            Self::Popularity => "popularity",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "relevance" => Ok(Self::Relevance),
            "alphabetical" => Ok(Self::Alphabetical),
            "popularity" => Ok(Self::Popularity),
            _ => Err(FilterError::UnknownSortMode {
                input: s.to_string(),
            }),
        }
    }
}

/// A search request over the term collection.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    /// Substring to look for in words, definitions and usage contexts.
    ///
    /// The empty string matches every term. Anything else, including bare
    /// whitespace, is searched for literally.
    pub query: String,
    /// Restrict results to terms in this category, compared by exact id.
    pub category: Option<CategoryId>,
    /// Result ordering.
    pub sort: SortMode,
}
