//! Vocabulary data model.
//!
//! Field names match the JSON the model is asked to produce, so these types
//! deserialize straight from the completion text.

use serde::{Deserialize, Serialize};

/// One decomposition unit of a word: a kanji or kana substring and the
/// syllables it is read as within that word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Single character or short unit of the parent word.
    pub kanji: String,
    /// Syllables this unit contributes, in reading order.
    pub romaji: Vec<String>,
}

impl Part {
    /// Create a part from a unit and its syllables.
    #[must_use]
    pub fn new<S: Into<String>>(kanji: impl Into<String>, romaji: impl IntoIterator<Item = S>) -> Self {
        Self {
            kanji: kanji.into(),
            romaji: romaji.into_iter().map(Into::into).collect(),
        }
    }

    /// Syllables joined without separators (`["a", "ta", "ra"]` → `"atara"`).
    #[must_use]
    pub fn reading(&self) -> String {
        self.romaji.concat()
    }
}

/// A single vocabulary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyItem {
    /// Written form in kanji and/or kana.
    pub kanji: String,
    /// Romanized reading of the whole word.
    pub romaji: String,
    /// English translation.
    pub english: String,
    /// Ordered breakdown of `kanji` into units.
    pub parts: Vec<Part>,
}

impl VocabularyItem {
    /// Create an item with its parts.
    #[must_use]
    pub fn new(
        kanji: impl Into<String>,
        romaji: impl Into<String>,
        english: impl Into<String>,
        parts: Vec<Part>,
    ) -> Self {
        Self {
            kanji: kanji.into(),
            romaji: romaji.into(),
            english: english.into(),
            parts,
        }
    }

    /// Concatenation of every part's `kanji` unit.
    #[must_use]
    pub fn joined_parts(&self) -> String {
        self.parts.iter().map(|p| p.kanji.as_str()).collect()
    }

    /// Concatenation of every part's syllables.
    #[must_use]
    pub fn joined_reading(&self) -> String {
        self.parts.iter().map(Part::reading).collect()
    }
}

/// An ordered list of vocabulary items, serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VocabularyList(pub Vec<VocabularyItem>);

impl VocabularyList {
    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the items.
    #[must_use]
    pub fn items(&self) -> &[VocabularyItem] {
        &self.0
    }

    /// Iterate over the items.
    pub fn iter(&self) -> std::slice::Iter<'_, VocabularyItem> {
        self.0.iter()
    }

    /// Take ownership of the items.
    #[must_use]
    pub fn into_inner(self) -> Vec<VocabularyItem> {
        self.0
    }

    /// Pretty-printed JSON with two-space indentation, as shown to the user
    /// and copied to the clipboard.
    ///
    /// # Errors
    /// Returns the serializer error unchanged.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl From<Vec<VocabularyItem>> for VocabularyList {
    fn from(items: Vec<VocabularyItem>) -> Self {
        Self(items)
    }
}

impl IntoIterator for VocabularyList {
    type Item = VocabularyItem;
    type IntoIter = std::vec::IntoIter<VocabularyItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a VocabularyList {
    type Item = &'a VocabularyItem;
    type IntoIter = std::slice::Iter<'a, VocabularyItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
