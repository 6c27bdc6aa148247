//! A clonable, thread-safe handle to the term store.

use std::sync::Arc;

use gloss_model::{Category, Seed, Term, TermDraft, TermId, TermPatch};
use gloss_query::SearchFilter;
use parking_lot::RwLock;

use crate::{error::StoreError, store::TermStore};

/// A thread-safe handle sharing one [`TermStore`].
///
/// Clones share the same underlying store. Read operations clone the matching
/// records out of the lock, so no guard ever escapes this module.
#[derive(Debug, Clone)]
pub struct SharedStore {
    /// The shared repository.
    inner: Arc<RwLock<TermStore>>,
}

impl SharedStore {
    /// Builds a shared store from a seed collection.
    pub fn from_seed(seed: Seed) -> Self {
        Self {
            inner: Arc::new(RwLock::new(TermStore::from_seed(seed))),
        }
    }

    /// Matches terms against a filter, in the filter's sort order.
    pub fn search(&self, filter: &SearchFilter) -> Vec<Term> {
        let store = self.inner.read();
        gloss_query::search(store.all(), filter)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Completes a prefix against the collection's words.
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<String> {
        gloss_query::suggest(self.inner.read().all(), prefix, limit)
    }

    /// Returns the most searched terms, highest count first.
    pub fn popular(&self, limit: usize) -> Vec<Term> {
        let store = self.inner.read();
        gloss_query::popular(store.all(), limit)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Looks up a term by id, recording the lookup in its search count.
    pub fn fetch(&self, id: TermId) -> Result<Term, StoreError> {
        self.inner.write().fetch(id).cloned()
    }

    /// Adds a new term from a draft.
    pub fn add(&self, draft: TermDraft) -> Result<Term, StoreError> {
        self.inner.write().add(draft)
    }

    /// Applies a patch to an existing term.
    pub fn update(&self, id: TermId, patch: &TermPatch) -> Result<Term, StoreError> {
        self.inner.write().update(id, patch)
    }

    /// Removes a term, reporting whether anything was removed.
    pub fn delete(&self, id: TermId) -> bool {
        self.inner.write().delete(id)
    }

    /// Returns every term in collection order.
    pub fn all(&self) -> Vec<Term> {
        self.inner.read().all().to_vec()
    }

    /// Returns the fixed category set in collection order.
    pub fn categories(&self) -> Vec<Category> {
        self.inner.read().categories().to_vec()
    }
}
