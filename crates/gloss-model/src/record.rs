//! The term and category record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::id::{CategoryId, TermId};

/// A named grouping with display styling, referenced by terms.
///
/// Categories are immutable once created and form a small fixed set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique, stable identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Color token for the presentation layer (e.g. `#3b82f6`).
    pub color: String,
    /// Icon token for the presentation layer.
    pub icon: String,
}

/// A single glossary entry.
///
/// The serialized shape (camelCase fields, string id, embedded category
/// object) is shared verbatim with external consumers and must stay lossless.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Term {
    /// Unique, stable identifier, assigned at creation and never reused.
    #[serde_as(as = "DisplayFromStr")]
    pub id: TermId,
    /// Display word.
    pub word: String,
    /// Definition text.
    pub definition: String,
    /// Phonetic transcription.
    pub phonetic: String,
    /// The category this term belongs to. Exactly one; must resolve to an
    /// existing category in the repository.
    pub category: Category,
    /// Example text.
    pub example: String,
    /// Contextual-usage text.
    pub context: String,
    /// Optional audio clip URL.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub audio_url: Option<String>,
    /// Popularity counter, incremented on detail lookup. Monotonically
    /// non-decreasing except for delete.
    pub search_count: u64,
    /// Creation timestamp. Never changes after creation.
    pub created_at: DateTime<Utc>,
    /// Last-modified timestamp. `updated_at >= created_at` always.
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied by the caller when creating a term.
///
/// The store assigns the identifier, zeroes the popularity counter and stamps
/// both timestamps; the draft's category is a reference by id, resolved
/// against the repository's category set.
#[derive(Debug, Clone)]
pub struct TermDraft {
    /// Display word.
    pub word: String,
    /// Definition text.
    pub definition: String,
    /// Phonetic transcription.
    pub phonetic: String,
    /// Category reference.
    pub category: CategoryId,
    /// Example text.
    pub example: String,
    /// Contextual-usage text.
    pub context: String,
    /// Optional audio clip URL.
    pub audio_url: Option<String>,
}

/// An explicit all-fields-optional patch for updating a term.
///
/// Unset fields leave the record unchanged. The id, creation timestamp and
/// popularity counter are not patchable; the store stamps `updated_at`.
#[derive(Debug, Clone, Default)]
pub struct TermPatch {
    /// New display word.
    pub word: Option<String>,
    /// New definition text.
    pub definition: Option<String>,
    /// New phonetic transcription.
    pub phonetic: Option<String>,
    /// New category reference, resolved against the category set.
    pub category: Option<CategoryId>,
    /// New example text.
    pub example: Option<String>,
    /// New contextual-usage text.
    pub context: Option<String>,
    /// New audio clip URL.
    pub audio_url: Option<String>,
}

impl TermPatch {
    /// Returns true if the patch sets no fields.
    pub fn is_empty(&self) -> bool {
        self.word.is_none()
            && self.definition.is_none()
            && self.phonetic.is_none()
            && self.category.is_none()
            && self.example.is_none()
            && self.context.is_none()
            && self.audio_url.is_none()
    }

    /// Applies the set fields to `term`, leaving the rest untouched.
    ///
    /// The category field is applied by the store, which resolves the id to a
    /// full category record first; timestamps are also the store's concern.
    pub fn apply(&self, term: &mut Term) {
        if let Some(ref word) = self.word {
            term.word = word.clone();
        }
        if let Some(ref definition) = self.definition {
            term.definition = definition.clone();
        }
        if let Some(ref phonetic) = self.phonetic {
            term.phonetic = phonetic.clone();
        }
        if let Some(ref example) = self.example {
            term.example = example.clone();
        }
        if let Some(ref context) = self.context {
            term.context = context.clone();
        }
        if let Some(ref audio_url) = self.audio_url {
            term.audio_url = Some(audio_url.clone());
        }
    }
}
