//! Configuration → ready-to-use [`VocabularyService`].

use kotoba_core::KotobaConfig;
use kotoba_llm::{LlmClient, PromptBuilder};
use tracing::debug;

use crate::error::SetupError;
use crate::generator::ModelClient;
use crate::service::VocabularyService;

/// Build a service, reading the API key from the process environment.
///
/// This is the only place the environment is consulted.
///
/// # Errors
///
/// See [`build_service_with`].
pub fn build_service(config: &KotobaConfig) -> Result<VocabularyService<ModelClient>, SetupError> {
    build_service_with(config, |name| std::env::var(name).ok())
}

/// Build a service with an explicit API key lookup.
///
/// # Errors
///
/// - `SetupError::Core` if the configuration is invalid or the key is missing
/// - `SetupError::Llm` if the base URL is unusable or the prompt template
///   file cannot be loaded
pub fn build_service_with<F>(
    config: &KotobaConfig,
    lookup: F,
) -> Result<VocabularyService<ModelClient>, SetupError>
where
    F: FnOnce(&str) -> Option<String>,
{
    config.validate()?;
    let llm = &config.llm;
    let api_key = llm.resolve_api_key(lookup)?;
    let client = LlmClient::new(llm.base_url.clone(), api_key.expose())?;

    let prompts = match &config.prompt.template_path {
        Some(path) => PromptBuilder::from_file(path)?,
        None => PromptBuilder::builtin(),
    };

    debug!(
        base_url = %llm.base_url,
        model = %llm.model,
        template = prompts.version(),
        timeout_ms = ?llm.request_timeout_ms,
        "Vocabulary service configured"
    );

    Ok(VocabularyService::new(ModelClient::new(client, llm.request_timeout_ms), llm.model.clone())
        .with_prompts(prompts))
}
