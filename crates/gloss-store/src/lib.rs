//! The in-memory term repository for gloss.
//!
//! [`TermStore`] owns the term collection and the fixed category set, seeded
//! once from a [`gloss_model::Seed`]. [`SharedStore`] wraps it in a clonable,
//! thread-safe handle and layers the [`gloss_query`] read operations on top.
//!
//! Terms keep their collection order and new terms append at the end. Ids are
//! handed out monotonically and never reused, even after deletions. The only
//! read that mutates is a fetch by id, which records the lookup in the term's
//! search count.

#![warn(missing_docs)]

mod error;
mod shared;
mod store;

pub use error::StoreError;
pub use shared::SharedStore;
pub use store::TermStore;
