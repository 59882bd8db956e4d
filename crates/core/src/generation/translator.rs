//! Generator output → draft translation.
//!
//! This is the only place untrusted generator data enters the domain. It
//! never fails: unknown field types become `text`, column counts are
//! clamped, and everything the generator does not control (actions,
//! identity, timestamps) is supplied here. Validation is the caller's job.

use chrono::Utc;

use crate::draft::{Draft, DraftAction, DraftField, DraftLayout, DraftStatus, FieldLayout};
use crate::form::{Columns, FieldOption, FieldType, ValidatorConfig, ValidatorKind};
use crate::types::{FormId, Timestamp};

use super::schema::{GeneratorField, GeneratorOutput};

/// Name given to drafts when the generator does not supply one.
pub const UNTITLED_FORM_NAME: &str = "Untitled Form";

/// Translate generator output into a fresh draft with a new id and the
/// current time.
pub fn translate_generated(output: &GeneratorOutput, prompt: &str) -> Draft {
    translate_generated_with(output, prompt, FormId::new_v4(), Utc::now())
}

/// Translate with an explicit identity and timestamp.
pub fn translate_generated_with(
    output: &GeneratorOutput,
    prompt: &str,
    id: FormId,
    now: Timestamp,
) -> Draft {
    let name = output
        .name
        .as_deref()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(UNTITLED_FORM_NAME)
        .to_string();

    let columns = output
        .layout
        .as_ref()
        .and_then(|layout| layout.columns)
        .map(Columns::clamped)
        .unwrap_or_default();

    let fields = output
        .fields
        .iter()
        .enumerate()
        .map(|(index, field)| translate_field(field, index))
        .collect();

    Draft {
        id,
        name,
        description: output.description.clone(),
        prompt: prompt.to_string(),
        version: 1,
        status: DraftStatus::Draft,
        created_at: now,
        updated_at: now,
        fields,
        layout: DraftLayout::with_columns(columns),
        actions: vec![DraftAction::default_submit()],
        css_overrides: None,
    }
}

fn translate_field(field: &GeneratorField, index: usize) -> DraftField {
    let field_type = field
        .field_type
        .as_deref()
        .and_then(FieldType::from_name)
        .unwrap_or(FieldType::Text);

    let validators = if field.required == Some(true) {
        vec![ValidatorConfig::bare(ValidatorKind::Required)]
    } else {
        Vec::new()
    };

    let options = field
        .options
        .iter()
        .flatten()
        .map(|option| FieldOption {
            label: option.label.clone(),
            value: option.value.clone(),
        })
        .collect();

    DraftField {
        key: field.key.clone(),
        field_type,
        label: field.label.clone(),
        placeholder: field.placeholder.clone(),
        hint: field.hint.clone(),
        default_value: None,
        validators,
        options,
        layout: Some(FieldLayout {
            col_span: Some(1),
            order: Some(i32::try_from(index).unwrap_or(i32::MAX)),
        }),
        conditional: None,
    }
}
