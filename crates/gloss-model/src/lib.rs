//! Data model for the gloss term repository.
//!
//! Defines the `Term` and `Category` records shared with any presentation
//! layer, the identifier newtypes used across crates, and the seed collection
//! the repository is initialized from. Serialized shapes use camelCase field
//! names (`searchCount`, `createdAt`, ...) so they round-trip losslessly
//! against external consumers of the same records.

#![warn(missing_docs)]

mod id;
mod record;
mod seed;

pub use id::{CategoryId, IdError, TermId};
pub use record::{Category, Term, TermDraft, TermPatch};
pub use seed::{Seed, SeedError};
