//! VocabularyService: category in, parsed vocabulary list out.
//!
//! ```text
//! category ──► PromptBuilder ──► TextGenerator ──► parse_vocabulary ──► VocabularyList
//!                                      │                   │
//!                                      └──── failures ─────┴──► GenerationError
//! ```
//!
//! The service holds no mutable state. Concurrent calls are independent and
//! nothing de-duplicates them.

use kotoba_core::parser::parse_vocabulary;
use kotoba_core::VocabularyList;
use kotoba_llm::PromptBuilder;
use tracing::{debug, error, info, warn};

use crate::error::GenerationError;
use crate::generator::TextGenerator;

/// Composes prompt building, the model call and response parsing.
#[derive(Debug, Clone)]
pub struct VocabularyService<G> {
    prompts: PromptBuilder,
    generator: G,
    model: String,
}

impl<G: TextGenerator> VocabularyService<G> {
    /// Create a service using the built-in prompt template.
    #[must_use]
    pub fn new(generator: G, model: impl Into<String>) -> Self {
        Self {
            prompts: PromptBuilder::builtin(),
            generator,
            model: model.into(),
        }
    }

    /// Replace the prompt template.
    #[must_use]
    pub fn with_prompts(mut self, prompts: PromptBuilder) -> Self {
        self.prompts = prompts;
        self
    }

    /// Model identifier sent with every request.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// The completion source.
    #[must_use]
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Prompt template in use.
    #[must_use]
    pub fn prompts(&self) -> &PromptBuilder {
        &self.prompts
    }

    /// Generate a vocabulary list for a thematic category.
    ///
    /// Makes at most one model call. Items whose parts do not spell the word
    /// are logged and returned as-is.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerationError`] whose `Display` is always the generic
    /// "vocabulary generation failed"; [`GenerationError::kind`] tells blank
    /// input, auth, network and parse failures apart.
    pub async fn generate_vocabulary(&self, category: &str) -> Result<VocabularyList, GenerationError> {
        let category = category.trim();
        if category.is_empty() {
            return Err(report(GenerationError::blank_category()));
        }

        let prompt = self.prompts.build(category);
        debug!(
            category,
            model = %self.model,
            template = self.prompts.version(),
            "Requesting vocabulary"
        );

        let text = self
            .generator
            .generate_text(&self.model, &prompt)
            .await
            .map_err(|e| report(e.into()))?;

        let list = parse_vocabulary(&text).map_err(|e| report(e.into()))?;

        for item in &list {
            let seg = item.segmentation();
            if !seg.is_consistent() {
                warn!(
                    kanji = %item.kanji,
                    romaji = %item.romaji,
                    kanji_matches = seg.kanji_matches,
                    romaji_matches = seg.romaji_matches,
                    "Vocabulary item parts do not reconstruct the word"
                );
            }
        }

        info!(category, items = list.len(), "Generated vocabulary");
        Ok(list)
    }
}

fn report(err: GenerationError) -> GenerationError {
    error!(kind = %err.kind(), cause = %err.cause(), "{err}");
    err
}
