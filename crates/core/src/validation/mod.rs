//! Draft invariant checking.
//!
//! Provides the violation record type and a pure-logic evaluator that runs
//! every invariant check against a draft and accumulates all breaches.

pub mod evaluator;
pub mod rules;
