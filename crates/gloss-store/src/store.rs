//! The in-memory term repository.

use chrono::Utc;
use gloss_model::{Category, CategoryId, Seed, Term, TermDraft, TermId, TermPatch};
use log::debug;

use crate::error::StoreError;

/// An in-memory term repository built from a seed collection.
///
/// The store owns the term list and the fixed category set. Terms keep their
/// collection order and new terms append at the end. The next insertion id
/// only ever moves forward, so deleted ids are never reused.
#[derive(Debug, Clone)]
pub struct TermStore {
    /// Terms in collection order.
    terms: Vec<Term>,
    /// The fixed category set.
    categories: Vec<Category>,
    /// Id handed to the next added term.
    next_id: TermId,
}

impl TermStore {
    /// Builds a store from a validated seed collection.
    ///
    /// The next insertion id is one past the highest seeded id, or 1 for an
    /// empty collection.
    pub fn from_seed(seed: Seed) -> Self {
        let next_id = seed
            .terms
            .iter()
            .map(|term| term.id)
            .max()
            .map_or(TermId::new(1), TermId::next);
        Self {
            terms: seed.terms,
            categories: seed.categories,
            next_id,
        }
    }

    /// Returns every term in collection order.
    pub fn all(&self) -> &[Term] {
        &self.terms
    }

    /// Returns the fixed category set in collection order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Looks up a term by id and records the lookup.
    ///
    /// Each successful fetch increments the term's search count by one. This
    /// is the only read that mutates the store.
    pub fn fetch(&mut self, id: TermId) -> Result<&Term, StoreError> {
        let term = self
            .terms
            .iter_mut()
            .find(|term| term.id == id)
            .ok_or(StoreError::NotFound { id })?;
        term.search_count += 1;
        debug!("fetched term {id}, search count now {}", term.search_count);
        Ok(term)
    }

    /// Adds a new term from a draft.
    ///
    /// The draft's category id must resolve against the category set; the
    /// draft is rejected before anything is written otherwise. The new term
    /// gets the next monotonic id, a search count of zero and identical
    /// creation and update stamps.
    pub fn add(&mut self, draft: TermDraft) -> Result<Term, StoreError> {
        let category = self.resolve_category(&draft.category)?.clone();
        let now = Utc::now();
        let term = Term {
            id: self.next_id,
            word: draft.word,
            definition: draft.definition,
            phonetic: draft.phonetic,
            category,
            example: draft.example,
            context: draft.context,
            audio_url: draft.audio_url,
            search_count: 0,
            created_at: now,
            updated_at: now,
        };
        self.next_id = self.next_id.next();
        debug!("added term {} ({})", term.id, term.word);
        self.terms.push(term.clone());
        Ok(term)
    }

    /// Applies a patch to an existing term.
    ///
    /// A patched category id must resolve before anything is written. The
    /// update stamp moves to now, even for an empty patch; the id and the
    /// creation stamp never change.
    pub fn update(&mut self, id: TermId, patch: &TermPatch) -> Result<Term, StoreError> {
        let category = match &patch.category {
            Some(category_id) => Some(self.resolve_category(category_id)?.clone()),
            None => None,
        };

        let position = self
            .terms
            .iter()
            .position(|term| term.id == id)
            .ok_or(StoreError::NotFound { id })?;

        let mut updated = self.terms[position].clone();
        patch.apply(&mut updated);
        if let Some(category) = category {
            updated.category = category;
        }
        updated.updated_at = Utc::now();

        self.terms[position] = updated.clone();
        debug!("updated term {id}");
        Ok(updated)
    }

    /// Removes a term by id.
    ///
    /// Returns whether a term was actually removed; deleting an absent id is
    /// a no-op.
    pub fn delete(&mut self, id: TermId) -> bool {
        let before = self.terms.len();
        self.terms.retain(|term| term.id != id);
        let removed = self.terms.len() < before;
        if removed {
            debug!("deleted term {id}");
        }
        removed
    }

    /// Finds a category in the fixed set.
    fn resolve_category(&self, id: &CategoryId) -> Result<&Category, StoreError> {
        self.categories
            .iter()
            .find(|category| category.id == *id)
            .ok_or_else(|| StoreError::UnknownCategory { id: id.clone() })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn store() -> TermStore {
        TermStore::from_seed(Seed::builtin())
    }

    fn draft(word: &str, category: &str) -> TermDraft {
        TermDraft {
            word: word.to_string(),
            definition: format!("Définition de {word}"),
            phonetic: String::new(),
            category: CategoryId::from(category),
            example: String::new(),
            context: String::new(),
            audio_url: None,
        }
    }

    #[test]
    fn fetch_increments_search_count() {
        let mut store = store();

        // JavaScript seeds at 298.
        let term = store.fetch(TermId::new(6)).unwrap();
        assert_eq!(term.search_count, 299);

        let term = store.fetch(TermId::new(6)).unwrap();
        assert_eq!(term.search_count, 300);
    }

    #[test]
    fn fetch_unknown_id_is_not_found() {
        let mut store = store();

        let err = store.fetch(TermId::new(42)).unwrap_err();
        assert_eq!(err, StoreError::NotFound { id: TermId::new(42) });
        assert_eq!(store.all().len(), 10);
    }

    #[test]
    fn add_appends_with_fresh_id() {
        let mut store = store();

        let term = store.add(draft("Monade", "3")).unwrap();
        assert_eq!(term.id, TermId::new(11));
        assert_eq!(term.search_count, 0);
        assert_eq!(term.created_at, term.updated_at);
        assert_eq!(term.category.name, "Concepts");

        let last = store.all().last().unwrap();
        assert_eq!(last.word, "Monade");
    }

    #[test]
    fn add_rejects_unknown_category() {
        let mut store = store();

        let err = store.add(draft("Monade", "42")).unwrap_err();
        assert_eq!(
            err,
            StoreError::UnknownCategory {
                id: CategoryId::from("42")
            }
        );
        assert_eq!(store.all().len(), 10);

        // A rejected draft must not consume an id.
        let term = store.add(draft("Monade", "3")).unwrap();
        assert_eq!(term.id, TermId::new(11));
    }

    #[test]
    fn ids_stay_monotonic_after_delete() {
        let mut store = store();

        assert!(store.delete(TermId::new(10)));
        let term = store.add(draft("Monade", "3")).unwrap();
        assert_eq!(term.id, TermId::new(11));

        assert!(store.delete(TermId::new(11)));
        let term = store.add(draft("Foncteur", "3")).unwrap();
        assert_eq!(term.id, TermId::new(12));
    }

    #[test]
    fn next_id_starts_at_one_for_empty_collection() {
        let seed = Seed::builtin();
        let mut store = TermStore::from_seed(Seed {
            categories: seed.categories,
            terms: Vec::new(),
        });

        let term = store.add(draft("Monade", "3")).unwrap();
        assert_eq!(term.id, TermId::new(1));
    }

    #[test]
    fn update_patches_fields_and_bumps_stamp() {
        let mut store = store();

        let patch = TermPatch {
            definition: Some("Nouvelle définition".to_string()),
            ..TermPatch::default()
        };
        let term = store.update(TermId::new(1), &patch).unwrap();

        assert_eq!(term.id, TermId::new(1));
        assert_eq!(term.word, "Variable");
        assert_eq!(term.definition, "Nouvelle définition");
        assert_eq!(term.search_count, 245);
        assert!(term.updated_at > term.created_at);

        // The stored record changed too.
        assert_eq!(store.all()[0].definition, "Nouvelle définition");
    }

    #[test]
    fn update_resolves_new_category() {
        let mut store = store();

        let patch = TermPatch {
            category: Some(CategoryId::from("2")),
            ..TermPatch::default()
        };
        let term = store.update(TermId::new(1), &patch).unwrap();
        assert_eq!(term.category.name, "Frameworks");
    }

    #[test]
    fn update_rejects_unknown_category_without_writing() {
        let mut store = store();

        let patch = TermPatch {
            definition: Some("Nouvelle définition".to_string()),
            category: Some(CategoryId::from("42")),
            ..TermPatch::default()
        };
        let err = store.update(TermId::new(1), &patch).unwrap_err();
        assert_eq!(
            err,
            StoreError::UnknownCategory {
                id: CategoryId::from("42")
            }
        );

        // Nothing changed, not even the other patched field.
        let original = &store.all()[0];
        assert_ne!(original.definition, "Nouvelle définition");
        assert_eq!(original.created_at, original.updated_at);
    }

    #[test]
    fn update_missing_term_is_not_found() {
        let mut store = store();

        let err = store.update(TermId::new(42), &TermPatch::default()).unwrap_err();
        assert_eq!(err, StoreError::NotFound { id: TermId::new(42) });
    }

    #[test]
    fn empty_patch_still_bumps_update_stamp() {
        let mut store = store();

        let term = store.update(TermId::new(1), &TermPatch::default()).unwrap();
        assert_eq!(term.definition, store.all()[0].definition);
        assert!(term.updated_at > term.created_at);
    }

    #[test]
    fn delete_reports_whether_removed() {
        let mut store = store();

        assert!(store.delete(TermId::new(3)));
        assert_eq!(store.all().len(), 9);

        // Deleting again is a no-op.
        assert!(!store.delete(TermId::new(3)));
        assert_eq!(store.all().len(), 9);
    }

    #[test]
    fn delete_then_fetch_is_not_found() {
        let mut store = store();

        assert!(store.delete(TermId::new(5)));
        let err = store.fetch(TermId::new(5)).unwrap_err();
        assert_eq!(err, StoreError::NotFound { id: TermId::new(5) });
    }

    #[test]
    fn categories_keep_collection_order() {
        let store = store();

        let names: Vec<&str> = store.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Langages de programmation",
                "Frameworks",
                "Concepts",
                "Outils"
            ]
        );
    }
}
