//! Core types for LLM requests and responses.
//!
//! Neither type goes over the wire as-is: the client builds the
//! chat-completions body itself and fills [`LlmResponse`] from the envelope.

/// A single-prompt completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmRequest {
    /// Model identifier, e.g. `gemma2-9b-it`.
    pub model: String,
    /// Full instruction text, sent as one user message.
    pub prompt: String,
    /// Request timeout in milliseconds. `None` waits indefinitely.
    pub timeout_ms: Option<u64>,
}

impl LlmRequest {
    /// Create a request with no timeout.
    #[must_use]
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            timeout_ms: None,
        }
    }

    /// Set the timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout_ms: Option<u64>) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

/// A response from the LLM.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    /// The generated text, untouched.
    pub text: String,
    /// Completion tokens reported by the provider (0 if not reported).
    pub tokens_generated: u32,
    /// Round-trip latency in milliseconds.
    pub latency_ms: u64,
    /// Model that served the request, as reported by the provider.
    pub model: String,
}
