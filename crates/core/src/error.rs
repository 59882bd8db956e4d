use crate::types::FormId;
use crate::validation::rules::Violation;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: FormId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// One or more draft invariants are broken. Always carries every
    /// violation found, in check order.
    #[error("Draft validation failed: {}", summarize(.0))]
    DraftValidation(Vec<Violation>),

    /// The generator answered, but its output is not a usable form proposal.
    #[error("Generator output error: {0}")]
    GenerationOutput(String),

    /// The generator could not be reached or refused the request.
    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}
