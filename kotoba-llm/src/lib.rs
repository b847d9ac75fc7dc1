//! # kotoba-llm — LLM layer for KOTOBA
//!
//! Two pieces:
//!   - [`prompt`]: turns a theme ("weather", "kitchen") into the instruction
//!     text, with schema description and few-shot examples
//!   - [`client`]: one POST to an OpenAI-compatible `/chat/completions`
//!     endpoint (Groq by default), returning the completion text untouched
//!
//! There is no retry, caching or rate limiting. A call either returns text
//! or an [`LlmError`] saying whether credentials or connectivity failed.

pub mod client;
pub mod error;
pub mod prompt;
pub mod types;

pub use client::LlmClient;
pub use error::LlmError;
pub use prompt::PromptBuilder;
pub use types::{LlmRequest, LlmResponse};
