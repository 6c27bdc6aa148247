//! Filtering, ranking and suggestions for the gloss term collection.
//!
//! This crate evaluates read-only queries against a slice of terms:
//!
//! - **Search**: case-insensitive substring match over words, definitions and
//!   usage contexts, with an optional exact category filter
//! - **Sorting**: relevance (collection order), locale-aware alphabetical, or
//!   popularity
//! - **Suggestions**: prefix completion against the collection's words
//! - **Popular**: the most-searched terms
//!
//! # Example
//!
//! ```
//! use gloss_model::Seed;
//! use gloss_query::{SearchFilter, search};
//!
//! let seed = Seed::builtin();
//! let filter = SearchFilter {
//!     query: "java".to_string(),
//!     ..SearchFilter::default()
//! };
//! let hits = search(&seed.terms, &filter);
//! assert_eq!(hits[0].word, "JavaScript");
//! ```

#![warn(missing_docs)]

mod collate;
mod engine;
mod filter;

pub use engine::{MIN_PREFIX_CHARS, popular, search, suggest};
pub use filter::{FilterError, SearchFilter, SortMode};
