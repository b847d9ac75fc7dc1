//! # kotoba-importer — vocabulary generation service
//!
//! Glue between `kotoba-core` (data model, parsing, config) and
//! `kotoba-llm` (prompt, HTTP client). The presentation layer calls one
//! operation:
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use kotoba_core::KotobaConfig;
//!
//! let config = KotobaConfig::default();
//! kotoba_core::telemetry::init_tracing(&config.general);
//! let service = kotoba_importer::build_service(&config)?;
//! match service.generate_vocabulary("weather").await {
//!     Ok(list) => println!("{}", list.to_pretty_json()?),
//!     Err(e) => eprintln!("{}", e.user_message()),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - `service`: [`VocabularyService`], prompt → model → parse
//! - `generator`: [`TextGenerator`] seam and the HTTP-backed [`ModelClient`]
//! - `bridge`: configuration → service wiring
//! - `error`: [`GenerationError`] with a tagged [`ErrorKind`]

#![deny(clippy::unwrap_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod bridge;
pub mod error;
pub mod generator;
pub mod service;

pub use bridge::{build_service, build_service_with};
pub use error::{ErrorKind, GenerationError, SetupError};
pub use generator::{ModelClient, TextGenerator};
pub use service::VocabularyService;
