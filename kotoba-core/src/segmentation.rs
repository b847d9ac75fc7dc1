//! Consistency checks on a word's part breakdown.
//!
//! The model is asked to split every word so that the parts spell the word
//! and their syllables spell its reading. Nothing rejects items that fail
//! this; the report is for logging and for callers that want to flag them.

use crate::types::VocabularyItem;

/// Outcome of comparing an item's parts against its own fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentationReport {
    /// Concatenated `parts[].kanji` equals `kanji`.
    pub kanji_matches: bool,
    /// Concatenated `parts[].romaji` equals `romaji` after normalization.
    pub romaji_matches: bool,
}

impl SegmentationReport {
    /// Both the written form and the reading are reconstructed.
    #[must_use]
    pub fn is_consistent(self) -> bool {
        self.kanji_matches && self.romaji_matches
    }
}

impl VocabularyItem {
    /// Check whether the parts reconstruct this item's kanji and romaji.
    #[must_use]
    pub fn segmentation(&self) -> SegmentationReport {
        SegmentationReport {
            kanji_matches: !self.parts.is_empty() && self.joined_parts() == self.kanji,
            romaji_matches: !self.parts.is_empty()
                && normalize_romaji(&self.joined_reading()) == normalize_romaji(&self.romaji),
        }
    }
}

/// Lowercase and drop the separators models like to insert (`"Kin-en sha"`).
#[must_use]
pub fn normalize_romaji(romaji: &str) -> String {
    romaji
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '\'' | '-' | '’'))
        .flat_map(char::to_lowercase)
        .collect()
}
