//! # KOTOBA Core Library
//!
//! Data model and parsing for themed Japanese vocabulary lists.
//!
//! A language model is asked for words on a theme and answers with a JSON
//! array. Each entry is a [`VocabularyItem`]: the written form, its romaji,
//! an English gloss, and a breakdown into [`Part`]s that map every kanji or
//! kana unit to the syllables it contributes to the reading.
//!
//! ```text
//! 新しい  atarashii  "new"
//!   ├─ 新  [a, ta, ra]
//!   ├─ し  [shi]
//!   └─ い  [i]
//! ```
//!
//! This crate owns:
//! - [`types`]: the vocabulary data model
//! - [`parser`]: raw model text → [`VocabularyList`]
//! - [`segmentation`]: non-enforcing consistency checks on part breakdowns
//! - [`config`]: `kotoba.toml` configuration
//! - [`telemetry`]: tracing subscriber setup

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod parser;
pub mod segmentation;
pub mod telemetry;
pub mod types;

pub use config::KotobaConfig;
pub use error::CoreError;
pub use parser::parse_vocabulary;
pub use types::{Part, VocabularyItem, VocabularyList};
