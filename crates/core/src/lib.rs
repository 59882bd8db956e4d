//! Form generation domain logic.
//!
//! Turns untrusted generator output into an editable [`draft::Draft`],
//! enforces the draft invariants on every write, and resolves accepted
//! drafts into fully-populated [`form::RenderableForm`] values. Everything
//! here is pure and synchronous except the [`generation::FormGenerator`]
//! port, which is implemented outside this crate.

pub mod catalog;
pub mod draft;
pub mod error;
pub mod form;
pub mod generation;
pub mod naming;
pub mod resolution;
pub mod types;
pub mod validation;
