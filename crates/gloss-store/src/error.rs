//! Error types for store operations.

use gloss_model::{CategoryId, TermId};
use thiserror::Error;

/// Errors returned by store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No term with the requested id exists.
    #[error("no term with id {id}")]
    NotFound {
        /// The missing id.
        id: TermId,
    },

    /// The referenced category is not part of the category set.
    #[error("unknown category: {id}")]
    UnknownCategory {
        /// The unresolved category id.
        id: CategoryId,
    },
}
