//! The seam between the service and whatever produces completion text.

use async_trait::async_trait;
use kotoba_llm::{LlmClient, LlmError, LlmRequest};

/// Produces raw completion text for a prompt.
///
/// [`ModelClient`] is the production implementation; tests plug in stubs.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send `prompt` to `model` and return the completion text untouched.
    async fn generate_text(&self, model: &str, prompt: &str) -> Result<String, LlmError>;
}

/// [`LlmClient`] plus the per-request options taken from configuration.
#[derive(Debug, Clone)]
pub struct ModelClient {
    client: LlmClient,
    timeout_ms: Option<u64>,
}

impl ModelClient {
    /// Wrap a client. `timeout_ms: None` waits as long as the provider takes.
    #[must_use]
    pub fn new(client: LlmClient, timeout_ms: Option<u64>) -> Self {
        Self { client, timeout_ms }
    }

    /// The wrapped client.
    #[must_use]
    pub fn client(&self) -> &LlmClient {
        &self.client
    }
}

#[async_trait]
impl TextGenerator for ModelClient {
    async fn generate_text(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
        let request = LlmRequest::new(model, prompt).with_timeout(self.timeout_ms);
        let response = self.client.generate(&request).await?;
        Ok(response.text)
    }
}
