//! Locale-aware ordering helpers for French terms.

use deunicode::deunicode;
use gloss_model::Term;

/// Returns the collation key for a word.
///
/// Accented characters fold to their base letters and case is ignored, so
/// "Débogage" keys as "debogage" and orders between "CSS" and "Framework".
fn collation_key(word: &str) -> String {
    deunicode(word).to_lowercase()
}

/// Sorts terms alphabetically by word.
///
/// Ties on the folded key fall back to the exact word so the order is total.
pub fn sort_alphabetical(terms: &mut [&Term]) {
    terms.sort_by(|a, b| {
        collation_key(&a.word)
            .cmp(&collation_key(&b.word))
            .then_with(|| a.word.cmp(&b.word))
    });
}

/// Sorts terms by search count, most searched first.
///
/// The sort is stable: terms with equal counts keep their incoming order.
pub fn sort_popularity(terms: &mut [&Term]) {
    terms.sort_by(|a, b| b.search_count.cmp(&a.search_count));
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn key_folds_accents_and_case() {
        assert_eq!(collation_key("Débogage"), "debogage");
        assert_eq!(collation_key("Base de données"), "base de donnees");
        assert_eq!(collation_key("CSS"), "css");
    }
}
