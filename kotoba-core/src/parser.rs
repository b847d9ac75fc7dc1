//! Raw model text → [`VocabularyList`].
//!
//! The completion must be a bare JSON array. Surrounding whitespace is fine;
//! prose, Markdown fences or a top-level object are parse failures. Beyond
//! the shape required to build the typed structs nothing is validated.

use tracing::debug;

use crate::error::{CoreError, Result};
use crate::types::VocabularyList;

/// Maximum number of characters of raw text kept in a parse error.
pub const EXCERPT_CHARS: usize = 120;

/// Parse a model completion into a vocabulary list.
///
/// # Errors
/// Returns [`CoreError::Parse`] if `raw` is not valid JSON or is not an
/// array of objects with `kanji`, `romaji`, `english` and `parts`. A
/// part's `romaji` must be a list of syllables; a bare string is rejected.
pub fn parse_vocabulary(raw: &str) -> Result<VocabularyList> {
    match serde_json::from_str::<VocabularyList>(raw) {
        Ok(list) => {
            debug!(items = list.len(), "Parsed vocabulary response");
            Ok(list)
        }
        Err(e) => Err(CoreError::Parse {
            message: e.to_string(),
            line: e.line(),
            column: e.column(),
            excerpt: excerpt(raw),
        }),
    }
}

/// First [`EXCERPT_CHARS`] characters of `raw`, with an ellipsis if cut.
fn excerpt(raw: &str) -> String {
    let mut chars = raw.chars();
    let head: String = chars.by_ref().take(EXCERPT_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}…")
    } else {
        head
    }
}
