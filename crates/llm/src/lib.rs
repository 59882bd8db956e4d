//! Chat-completions client for form generation.
//!
//! Implements [`formgen_core::generation::FormGenerator`] against any
//! OpenAI-compatible `/chat/completions` endpoint.

pub mod api;
pub mod config;

pub use api::{ChatCompletionsGenerator, LlmError};
pub use config::LlmConfig;
