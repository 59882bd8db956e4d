//! Form pipeline orchestration.
//!
//! Sequences generator → translate → validate → resolve → store for new
//! forms, and revise → resolve → republish for edits.

pub mod form_pipeline;

pub use form_pipeline::FormPipeline;
