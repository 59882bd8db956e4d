//! The generator port and its offline fallback.
//!
//! Real providers live outside this crate; they only need to turn a prompt
//! into a [`GeneratorOutput`], typically by feeding the provider's raw text
//! through [`parse_generator_output`].

use async_trait::async_trait;

use crate::error::CoreError;
use super::schema::{GeneratorField, GeneratorLayout, GeneratorOutput};

/// How much raw provider text to echo back in a parse error.
const RAW_EXCERPT_CHARS: usize = 200;

/// How much of the prompt the stub copies into its description.
const STUB_PROMPT_EXCERPT_CHARS: usize = 60;

/// Instructions sent to a text-generation provider alongside the user prompt.
pub const SYSTEM_PROMPT: &str = r#"You are a form schema generator. Given a plain English description of a form, return a JSON object matching this schema exactly (no markdown, no commentary, raw JSON only):

{
  "name": "string: short descriptive name for the form",
  "description": "string: one sentence describing the form's purpose",
  "fields": [
    {
      "key": "snake_case_unique_key",
      "type": "one of: text, email, password, number, tel, url, textarea, select, checkbox, radio, date, slider, toggle",
      "label": "Human-readable label",
      "placeholder": "optional placeholder text",
      "hint": "optional helper text shown below the field",
      "required": true or false,
      "options": [{"label": "Display", "value": "value"}]
    }
  ],
  "layout": {
    "columns": 1, 2, 3, or 4
  }
}

Rules:
- Every field key must be unique and in snake_case
- Only select and radio fields carry options, and they MUST have at least one
- Use 1 column for simple forms, 2 for medium, 3-4 for complex/wide forms
- Always include an email field for contact forms
- Return ONLY the JSON object, no other text
"#;

/// Produces a form proposal from a natural-language prompt.
///
/// Called at most once per pipeline run. Implementations may block on the
/// network; they must not retry internally.
#[async_trait]
pub trait FormGenerator: Send + Sync {
    /// Short provider name for logs.
    fn name(&self) -> &'static str;

    async fn generate(&self, prompt: &str) -> Result<GeneratorOutput, CoreError>;
}

/// Deterministic generator used when no provider is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubGenerator;

impl StubGenerator {
    /// The fixed contact form, described with a prefix of `prompt`.
    pub fn output_for(prompt: &str) -> GeneratorOutput {
        let excerpt: String = prompt.chars().take(STUB_PROMPT_EXCERPT_CHARS).collect();
        GeneratorOutput {
            name: Some("Contact Form".to_string()),
            description: Some(format!(
                "A simple contact form generated from prompt: {excerpt}"
            )),
            fields: vec![
                stub_field("full_name", "text", "Full Name", "Your name"),
                stub_field("email", "email", "Email Address", "you@example.com"),
                stub_field("message", "textarea", "Message", "Write your message here..."),
            ],
            layout: Some(GeneratorLayout { columns: Some(1) }),
        }
    }
}

fn stub_field(key: &str, field_type: &str, label: &str, placeholder: &str) -> GeneratorField {
    GeneratorField {
        key: key.to_string(),
        field_type: Some(field_type.to_string()),
        label: label.to_string(),
        placeholder: Some(placeholder.to_string()),
        hint: None,
        required: Some(true),
        options: None,
    }
}

#[async_trait]
impl FormGenerator for StubGenerator {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn generate(&self, prompt: &str) -> Result<GeneratorOutput, CoreError> {
        Ok(Self::output_for(prompt))
    }
}

/// Parse raw provider text into a [`GeneratorOutput`].
///
/// Tolerates a surrounding Markdown code fence. Anything that is not JSON,
/// or JSON that does not fit the schema, is a
/// [`CoreError::GenerationOutput`].
pub fn parse_generator_output(raw: &str) -> Result<GeneratorOutput, CoreError> {
    let body = strip_code_fence(raw.trim());

    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        let excerpt: String = raw.chars().take(RAW_EXCERPT_CHARS).collect();
        CoreError::GenerationOutput(format!(
            "Generator returned non-JSON output. Parse error: {e}. \
             Raw output (first {RAW_EXCERPT_CHARS} chars): {excerpt}"
        ))
    })?;

    serde_json::from_value(value).map_err(|e| {
        CoreError::GenerationOutput(format!(
            "Generator output did not match expected schema: {e}"
        ))
    })
}

/// Remove a leading ```` ```json ```` line and a trailing ```` ``` ```` if present.
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}
