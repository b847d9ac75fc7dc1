//! LLM Client — OpenAI-compatible chat completions (Groq by default).

use std::fmt;
use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode};
use serde_json::json;
use tracing::{debug, trace, warn};

use crate::error::LlmError;
use crate::types::{LlmRequest, LlmResponse};

/// Maximum number of characters of an error body kept in [`LlmError::Status`].
const ERROR_BODY_CHARS: usize = 512;

/// Where requests go and how they authenticate.
#[derive(Clone)]
pub struct Endpoint {
    /// API root, e.g. `https://api.groq.com/openai/v1`.
    pub base_url: String,
    /// Bearer token.
    pub api_key: String,
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Sends one prompt per call to a chat-completions endpoint and returns the
/// raw completion text.
#[derive(Debug, Clone)]
pub struct LlmClient {
    endpoint: Endpoint,
    http: Client,
}

impl LlmClient {
    /// Create a new LLM client.
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Config` if the base URL is not http(s) or the HTTP
    /// client cannot be built.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, LlmError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(LlmError::Config(format!(
                "base URL must start with http:// or https://, got '{base_url}'"
            )));
        }
        let http = Client::builder()
            .build()
            .map_err(|e| LlmError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            endpoint: Endpoint {
                base_url,
                api_key: api_key.into(),
            },
            http,
        })
    }

    /// The endpoint this client talks to.
    #[must_use]
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Generate a completion for a single prompt.
    ///
    /// Makes exactly one HTTP call; there is no retry.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` on HTTP 401/403
    /// - `Status` on any other non-success status
    /// - `Timeout`, `Unavailable`, `RequestFailed` on transport failures
    /// - `InvalidResponse` if a success body has no completion text
    pub async fn generate(&self, request: &LlmRequest) -> Result<LlmResponse, LlmError> {
        let url = format!("{}/chat/completions", self.endpoint.base_url);
        let body = json!({
            "model": request.model,
            "messages": [
                { "role": "user", "content": request.prompt },
            ],
        });

        let mut builder = self
            .http
            .post(&url)
            .bearer_auth(&self.endpoint.api_key)
            .json(&body);
        if let Some(timeout_ms) = request.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }

        let start = Instant::now();
        let resp = builder.send().await.map_err(|e| {
            warn!(model = %request.model, "LLM request failed: {e}");
            LlmError::from(e)
        })?;

        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!(status = status.as_u16(), "LLM provider rejected credentials");
            return Err(LlmError::Unauthorized {
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let body = truncate(&text, ERROR_BODY_CHARS);
            warn!(status = status.as_u16(), "LLM provider returned error: {body}");
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let raw = resp.text().await?;
        let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        let json: serde_json::Value = serde_json::from_str(&raw)
            .map_err(|e| LlmError::InvalidResponse(format!("body is not JSON: {e}")))?;
        let text = json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                LlmError::InvalidResponse("missing choices[0].message.content".into())
            })?
            .to_string();
        let tokens_generated = json["usage"]["completion_tokens"]
            .as_u64()
            .and_then(|t| u32::try_from(t).ok())
            .unwrap_or(0);
        let model = json["model"]
            .as_str()
            .unwrap_or(&request.model)
            .to_string();

        debug!(%model, latency_ms, tokens_generated, "LLM completion received");
        trace!(%text, "LLM completion text");

        Ok(LlmResponse {
            text,
            tokens_generated,
            latency_ms,
            model,
        })
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}…", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_http_base_url() {
        let err = LlmClient::new("api.groq.com/openai/v1", "key").expect_err("no scheme");
        assert!(matches!(err, LlmError::Config(_)));
    }

    #[test]
    fn trailing_slash_trimmed() {
        let client = LlmClient::new("https://api.groq.com/openai/v1/", "key").expect("valid");
        assert_eq!(client.endpoint().base_url, "https://api.groq.com/openai/v1");
    }

    #[test]
    fn debug_hides_api_key() {
        let client = LlmClient::new("https://example.test", "gsk_secret").expect("valid");
        let debug = format!("{client:?}");
        assert!(!debug.contains("gsk_secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("雨雨雨", 2), "雨雨…");
        assert_eq!(truncate("rain", 10), "rain");
    }
}
