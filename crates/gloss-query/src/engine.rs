//! Query evaluation over the term collection.

use gloss_model::Term;

use crate::{
    collate::{sort_alphabetical, sort_popularity},
    filter::{SearchFilter, SortMode},
};

/// Minimum number of characters, after trimming, before prefix suggestions
/// produce anything.
pub const MIN_PREFIX_CHARS: usize = 2;

/// Matches terms against a filter and orders the results.
///
/// The query is matched case-insensitively as a substring of the word, the
/// definition or the usage context. Example sentences are not searched. An
/// empty query matches every term; the category filter compares ids exactly.
pub fn search<'a>(terms: &'a [Term], filter: &SearchFilter) -> Vec<&'a Term> {
    let needle = filter.query.to_lowercase();

    let mut results: Vec<&Term> = terms
        .iter()
        .filter(|term| {
            let category_ok = filter
                .category
                .as_ref()
                .is_none_or(|category| term.category.id == *category);
            category_ok && (filter.query.is_empty() || matches_text(term, &needle))
        })
        .collect();

    match filter.sort {
        SortMode::Relevance => {}
        SortMode::Alphabetical => sort_alphabetical(&mut results),
        SortMode::Popularity => sort_popularity(&mut results),
    }

    results
}

/// Case-insensitive substring match across the searchable text fields.
fn matches_text(term: &Term, needle: &str) -> bool {
    term.word.to_lowercase().contains(needle)
        || term.definition.to_lowercase().contains(needle)
        || term.context.to_lowercase().contains(needle)
}

/// Completes a prefix against the collection's words.
///
/// The prefix is trimmed and matched case-insensitively against the start of
/// each word. Prefixes shorter than [`MIN_PREFIX_CHARS`] produce no
/// suggestions. Matches keep collection order and are capped at `limit`.
pub fn suggest(terms: &[Term], prefix: &str, limit: usize) -> Vec<String> {
    let trimmed = prefix.trim();
    if trimmed.chars().count() < MIN_PREFIX_CHARS {
        return Vec::new();
    }
    let needle = trimmed.to_lowercase();

    terms
        .iter()
        .filter(|term| term.word.to_lowercase().starts_with(&needle))
        .map(|term| term.word.clone())
        .take(limit)
        .collect()
}

/// Returns the most searched terms, highest count first, capped at `limit`.
///
/// The underlying sort is stable, so terms with equal counts keep collection
/// order.
pub fn popular<'a>(terms: &'a [Term], limit: usize) -> Vec<&'a Term> {
    let mut ranked: Vec<&Term> = terms.iter().collect();
    sort_popularity(&mut ranked);
    ranked.truncate(limit);
    ranked
}
