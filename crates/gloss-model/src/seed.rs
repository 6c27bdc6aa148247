//! Seed collections and their validation.
//!
//! The repository is initialized once from a seed: either the builtin
//! collection embedded in this crate or a user-supplied JSON document of the
//! same shape. Loading validates the repository invariants (unique ids,
//! resolving category references) so a store built from a seed starts
//! consistent.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    id::{CategoryId, TermId},
    record::{Category, Term},
};

/// The builtin seed collection, embedded at compile time.
const BUILTIN_SEED: &str = include_str!("../data/seed.json");

/// Errors that can occur when loading a seed collection.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The seed document was not valid JSON of the expected shape.
    #[error("failed to parse seed data: {source}")]
    Parse {
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// Two categories share an identifier.
    #[error("duplicate category id: {id}")]
    DuplicateCategory {
        /// The duplicated id.
        id: CategoryId,
    },

    /// Two terms share an identifier.
    #[error("duplicate term id: {id}")]
    DuplicateTerm {
        /// The duplicated id.
        id: TermId,
    },

    /// A term references a category that is not in the category set.
    #[error("term {term} references unknown category: {category}")]
    UnknownCategory {
        /// The referencing term.
        term: TermId,
        /// The unresolved category id.
        category: CategoryId,
    },

    /// A term embeds a category that differs from the declared record with
    /// the same id.
    #[error("term {term} embeds a category inconsistent with the declared category {category}")]
    CategoryMismatch {
        /// The referencing term.
        term: TermId,
        /// The inconsistent category id.
        category: CategoryId,
    },

    /// A term was last modified before it was created.
    #[error("term {term} has updatedAt earlier than createdAt")]
    TimestampOrder {
        /// The offending term.
        term: TermId,
    },
}

/// A validated seed collection: the category set plus the ordered term list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seed {
    /// The fixed category set.
    pub categories: Vec<Category>,
    /// The ordered term collection.
    pub terms: Vec<Term>,
}

impl Seed {
    /// Returns the builtin seed collection.
    ///
    /// The embedded document is covered by tests, so failing to parse it is a
    /// build defect rather than a runtime condition.
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_SEED).expect("builtin seed should parse and validate")
    }

    /// Parses and validates a seed collection from a JSON document.
    pub fn from_json(text: &str) -> Result<Self, SeedError> {
        let seed: Self =
            serde_json::from_str(text).map_err(|source| SeedError::Parse { source })?;
        seed.validate()?;
        Ok(seed)
    }

    /// Checks the repository invariants over this seed.
    ///
    /// Verifies unique category and term ids, that every term's category
    /// reference resolves to a declared category (and embeds it consistently),
    /// and that no term was modified before creation.
    pub fn validate(&self) -> Result<(), SeedError> {
        let mut category_ids: HashSet<&CategoryId> = HashSet::new();
        for category in &self.categories {
            if !category_ids.insert(&category.id) {
                return Err(SeedError::DuplicateCategory {
                    id: category.id.clone(),
                });
            }
        }

        let mut term_ids: HashSet<TermId> = HashSet::new();
        for term in &self.terms {
            if !term_ids.insert(term.id) {
                return Err(SeedError::DuplicateTerm { id: term.id });
            }

            let declared = self
                .categories
                .iter()
                .find(|c| c.id == term.category.id)
                .ok_or_else(|| SeedError::UnknownCategory {
                    term: term.id,
                    category: term.category.id.clone(),
                })?;
            if *declared != term.category {
                return Err(SeedError::CategoryMismatch {
                    term: term.id,
                    category: term.category.id.clone(),
                });
            }

            if term.updated_at < term.created_at {
                return Err(SeedError::TimestampOrder { term: term.id });
            }
        }

        Ok(())
    }
}
