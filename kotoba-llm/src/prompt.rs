//! Prompt templates for vocabulary generation.
//!
//! The built-in template is a versioned constant. A replacement can be
//! loaded from a TOML file so the wording can be tuned without a rebuild.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::LlmError;

/// Placeholder substituted with the user's category.
pub const CATEGORY_PLACEHOLDER: &str = "{category}";

/// Instruction that closes every built-in prompt.
pub const RAW_JSON_INSTRUCTION: &str = "Send back raw JSON and nothing else";

/// Version tag of [`VOCABULARY_TEMPLATE`].
pub const BUILTIN_VERSION: &str = "builtin-1";

/// Output schema the model is asked to follow.
pub const SCHEMA_DESCRIPTION: &str = r#"{
    "kanji": "Japanese word in kanji or kana",
    "romaji": "Romanized version of the word",
    "english": "English translation",
    "parts": [
      {
        "kanji": "Individual kanji or kana character",
        "romaji": ["Syllables this character is read as in this word"]
      }
    ]
  }"#;

/// Vocabulary generation prompt. `{schema}` is expanded once at build time;
/// `{category}` per request.
pub const VOCABULARY_TEMPLATE: &str = r#"Generate a structured JSON output for Japanese vocabulary related to the theme "{category}". The output must be a JSON array of objects, where each object is one vocabulary item with this structure:
  {schema}
Generate at least 5 vocabulary items. {raw_json_instruction}: no introduction, no explanation, no Markdown code fences.

Here is an example of BAD output:
  {
    "kanji": "晴れ",
    "romaji": "hare",
    "english": "sunny",
    "parts": [
      { "kanji": "晴", "romaji": ["seki", "haru"] }
    ]
  }
This is bad for two reasons. The romaji listed for 晴 are its dictionary readings, not the sound it makes in this word: in "hare" it is read "ha". The breakdown is also incomplete: there must be two parts, one for 晴 ("ha") and one for れ ("re").

Here are GOOD examples where every character of the word has its own part and the syllables spell the reading:
  {
    "kanji": "古い",
    "romaji": "furui",
    "english": "old",
    "parts": [
      { "kanji": "古", "romaji": ["fu", "ru"] },
      { "kanji": "い", "romaji": ["i"] }
    ]
  },
  {
    "kanji": "忙しい",
    "romaji": "isogashii",
    "english": "busy",
    "parts": [
      { "kanji": "忙", "romaji": ["i", "so", "ga"] },
      { "kanji": "し", "romaji": ["shi"] },
      { "kanji": "い", "romaji": ["i"] }
    ]
  },
  {
    "kanji": "新しい",
    "romaji": "atarashii",
    "english": "new",
    "parts": [
      { "kanji": "新", "romaji": ["a", "ta", "ra"] },
      { "kanji": "し", "romaji": ["shi"] },
      { "kanji": "い", "romaji": ["i"] }
    ]
  },
  {
    "kanji": "悪い",
    "romaji": "warui",
    "english": "bad",
    "parts": [
      { "kanji": "悪", "romaji": ["wa", "ru"] },
      { "kanji": "い", "romaji": ["i"] }
    ]
  }
These are good because the parts cover every kanji and kana in the word.
"#;

/// Simple template interpolation for prompts.
///
/// Replaces `{key}` with the corresponding value.
#[must_use]
pub fn render_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{key}}}"), value);
    }
    result
}

/// Metadata and template parsed from a TOML prompt file.
#[derive(Debug, Clone, Deserialize)]
struct TomlPromptFile {
    prompt: TomlPromptData,
}

/// Inner `[prompt]` section of a TOML file.
#[derive(Debug, Clone, Deserialize)]
struct TomlPromptData {
    version: String,
    template: String,
}

/// Builds the instruction text sent to the model for a category.
///
/// # Example
///
/// ```
/// use kotoba_llm::prompt::{PromptBuilder, RAW_JSON_INSTRUCTION};
///
/// let prompt = PromptBuilder::builtin().build("weather");
/// assert!(prompt.contains("\"weather\""));
/// assert!(prompt.contains(RAW_JSON_INSTRUCTION));
/// ```
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    version: String,
    template: String,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PromptBuilder {
    /// The compiled-in template.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            version: BUILTIN_VERSION.into(),
            template: expand_static(VOCABULARY_TEMPLATE),
        }
    }

    /// Parse a `[prompt]` table (`version`, `template`) from TOML text.
    ///
    /// `{schema}` and `{raw_json_instruction}` in the template are expanded
    /// to the built-in values. Every loaded template must still carry the
    /// output schema and the raw-JSON instruction once expanded.
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Config` if the TOML is malformed, the template
    /// has no `{category}` placeholder, or it leaves out the schema or the
    /// raw-JSON instruction.
    pub fn from_toml(toml_str: &str) -> Result<Self, LlmError> {
        let parsed: TomlPromptFile = toml::from_str(toml_str)
            .map_err(|e| LlmError::Config(format!("invalid prompt TOML: {e}")))?;
        let data = parsed.prompt;
        if !data.template.contains(CATEGORY_PLACEHOLDER) {
            return Err(LlmError::Config(format!(
                "prompt template '{}' has no {CATEGORY_PLACEHOLDER} placeholder",
                data.version
            )));
        }
        let template = expand_static(&data.template);
        if !template.contains(SCHEMA_DESCRIPTION) {
            return Err(LlmError::Config(format!(
                "prompt template '{}' does not include the output schema ({{schema}})",
                data.version
            )));
        }
        if !template.contains(RAW_JSON_INSTRUCTION) {
            return Err(LlmError::Config(format!(
                "prompt template '{}' does not include the raw-JSON instruction ({{raw_json_instruction}})",
                data.version
            )));
        }
        Ok(Self {
            version: data.version,
            template,
        })
    }

    /// Load a template from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Config` if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LlmError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| LlmError::Config(format!("failed to read {}: {e}", path.display())))?;
        let builder = Self::from_toml(&content)
            .map_err(|e| LlmError::Config(format!("{}: {e}", path.display())))?;
        debug!(version = %builder.version, path = %path.display(), "Loaded prompt template");
        Ok(builder)
    }

    /// Render the prompt for a category.
    #[must_use]
    pub fn build(&self, category: &str) -> String {
        render_template(&self.template, &[("category", category)])
    }

    /// Template version, for logging.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }
}

fn expand_static(template: &str) -> String {
    render_template(
        template,
        &[
            ("schema", SCHEMA_DESCRIPTION),
            ("raw_json_instruction", RAW_JSON_INSTRUCTION),
        ],
    )
}
