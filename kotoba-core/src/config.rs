//! Configuration for KOTOBA.
//!
//! Maps directly to `kotoba.toml`. Every field has a default, so an empty
//! file (or no file at all) yields a working Groq + `gemma2-9b-it` setup.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Top-level configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KotobaConfig {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Model endpoint settings.
    #[serde(default)]
    pub llm: LlmSettings,
    /// Prompt template settings.
    #[serde(default)]
    pub prompt: PromptConfig,
}

impl KotobaConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `CoreError::Config` if the TOML is invalid or a value is
    /// unusable (blank model or base URL).
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| CoreError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Check values that parse fine but cannot work.
    ///
    /// # Errors
    /// Returns `CoreError::Config` naming the offending key.
    pub fn validate(&self) -> Result<()> {
        if self.llm.base_url.trim().is_empty() {
            return Err(CoreError::Config("llm.base_url must not be empty".into()));
        }
        if self.llm.model.trim().is_empty() {
            return Err(CoreError::Config("llm.model must not be empty".into()));
        }
        if self.llm.api_key_env.trim().is_empty() {
            return Err(CoreError::Config("llm.api_key_env must not be empty".into()));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when `RUST_LOG` is unset: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit logs as JSON lines instead of human-readable text.
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

/// Model endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// OpenAI-compatible API root (without `/chat/completions`).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Per-request timeout in milliseconds. Unset means wait indefinitely.
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            request_timeout_ms: None,
        }
    }
}

impl LlmSettings {
    /// Resolve the API key through an explicit lookup function.
    ///
    /// Pass `|name| std::env::var(name).ok()` at process start; tests pass
    /// a closure over a fixed map.
    ///
    /// # Errors
    /// Returns `CoreError::MissingApiKey` if the lookup yields nothing or a
    /// blank value.
    pub fn resolve_api_key<F>(&self, lookup: F) -> Result<ApiKey>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        match lookup(&self.api_key_env) {
            Some(key) if !key.trim().is_empty() => Ok(ApiKey(key.trim().to_string())),
            _ => Err(CoreError::MissingApiKey {
                var: self.api_key_env.clone(),
            }),
        }
    }
}

/// Prompt template settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptConfig {
    /// TOML file with a `[prompt]` table overriding the built-in template.
    #[serde(default)]
    pub template_path: Option<PathBuf>,
}

/// Bearer token for the model endpoint. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key obtained elsewhere.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key, for building the `Authorization` header.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Default OpenAI-compatible endpoint (Groq).
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gemma2-9b-it";
/// Default environment variable for the API key.
pub const DEFAULT_API_KEY_ENV: &str = "GROQ_API_KEY";

fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = KotobaConfig::from_toml("").expect("empty config");
        assert_eq!(config.llm.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.llm.model, "gemma2-9b-it");
        assert_eq!(config.llm.api_key_env, "GROQ_API_KEY");
        assert_eq!(config.llm.request_timeout_ms, None);
        assert_eq!(config.general.log_level, "info");
        assert!(!config.general.json_logs);
        assert!(config.prompt.template_path.is_none());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = KotobaConfig::from_toml(
            r#"
[llm]
model = "llama-3.1-8b-instant"
request_timeout_ms = 30000

[prompt]
template_path = "prompts/vocabulary.toml"
"#,
        )
        .expect("valid config");
        assert_eq!(config.llm.model, "llama-3.1-8b-instant");
        assert_eq!(config.llm.request_timeout_ms, Some(30_000));
        assert_eq!(config.llm.base_url, DEFAULT_BASE_URL);
        assert_eq!(
            config.prompt.template_path.as_deref(),
            Some(Path::new("prompts/vocabulary.toml"))
        );
    }

    #[test]
    fn blank_model_rejected() {
        let err = KotobaConfig::from_toml("[llm]\nmodel = \"  \"").expect_err("blank model");
        assert!(err.to_string().contains("llm.model"));
    }

    #[test]
    fn invalid_toml_rejected() {
        assert!(matches!(
            KotobaConfig::from_toml("[llm\nmodel ="),
            Err(CoreError::Config(_))
        ));
    }

    #[test]
    fn api_key_resolved_from_lookup() {
        let settings = LlmSettings::default();
        let key = settings
            .resolve_api_key(|name| (name == "GROQ_API_KEY").then(|| " gsk_test \n".to_string()))
            .expect("key present");
        assert_eq!(key.expose(), "gsk_test");
    }

    #[test]
    fn missing_or_blank_api_key_rejected() {
        let settings = LlmSettings::default();
        let err = settings.resolve_api_key(|_| None).expect_err("missing");
        assert!(matches!(err, CoreError::MissingApiKey { ref var } if var == "GROQ_API_KEY"));
        assert!(settings.resolve_api_key(|_| Some(String::new())).is_err());
    }

    #[test]
    fn api_key_debug_is_redacted() {
        let key = ApiKey::new("gsk_secret");
        assert_eq!(format!("{key:?}"), "ApiKey(<redacted>)");
    }

    #[test]
    fn from_file_reads_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("kotoba.toml");
        std::fs::write(&path, "[general]\nlog_level = \"debug\"\njson_logs = true\n").expect("write");
        let config = KotobaConfig::from_file(&path).expect("load");
        assert_eq!(config.general.log_level, "debug");
        assert!(config.general.json_logs);
    }

    #[test]
    fn from_file_missing_is_io_error() {
        let err = KotobaConfig::from_file(Path::new("/nonexistent/kotoba.toml")).expect_err("missing");
        assert!(matches!(err, CoreError::Io(_)));
    }
}
