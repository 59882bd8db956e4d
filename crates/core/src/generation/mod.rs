//! Generation boundary: the raw generator contract, the port that produces
//! it, and the translator that turns it into a [`crate::draft::Draft`].

pub mod provider;
pub mod schema;
pub mod translator;

pub use provider::{parse_generator_output, FormGenerator, StubGenerator, SYSTEM_PROMPT};
pub use schema::{GeneratorField, GeneratorLayout, GeneratorOption, GeneratorOutput};
pub use translator::{translate_generated, translate_generated_with};
