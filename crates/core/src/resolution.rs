//! Draft → renderable resolution.
//!
//! Replaces every optional on an accepted [`Draft`] with a concrete value so
//! that renderers never null-check. Callers must validate the draft first;
//! nothing here checks invariants.

use crate::draft::{Draft, DraftAction, DraftField, DraftLayout};
use crate::form::{
    BreakpointLayout, Breakpoints, RenderableAction, RenderableField, RenderableForm,
    RenderableLayout,
};
use crate::naming::{action_css_class, field_css_class};

/// Grid gap used when the draft does not set one.
pub const DEFAULT_GAP: &str = "16px";

/// Column count at the `sm` breakpoint when the draft sets no breakpoints.
const SM_COLUMNS: u8 = 1;

/// Upper bound for the `md` breakpoint when the draft sets no breakpoints.
const MD_MAX_COLUMNS: u8 = 2;

/// Resolve an accepted draft into a new, independent renderable form.
pub fn resolve_renderable(draft: &Draft) -> RenderableForm {
    RenderableForm {
        id: draft.id,
        name: draft.name.clone(),
        layout: resolve_layout(&draft.layout),
        fields: draft
            .fields
            .iter()
            .enumerate()
            .map(|(index, field)| resolve_field(field, index))
            .collect(),
        actions: draft.actions.iter().map(resolve_action).collect(),
        css_overrides: draft.css_overrides.clone(),
    }
}

fn resolve_layout(layout: &DraftLayout) -> RenderableLayout {
    let gap = layout
        .gap
        .as_deref()
        .filter(|gap| !gap.is_empty())
        .unwrap_or(DEFAULT_GAP)
        .to_string();

    let breakpoints = layout
        .breakpoints
        .clone()
        .unwrap_or_else(|| default_breakpoints(layout.columns.get()));

    RenderableLayout {
        columns: layout.columns,
        gap,
        breakpoints,
    }
}

/// `sm` → 1 column, `md` → up to 2 columns. Depends on the draft's own
/// column count, so it is computed per call.
fn default_breakpoints(columns: u8) -> Breakpoints {
    Breakpoints::from([
        ("sm".to_string(), BreakpointLayout { columns: SM_COLUMNS }),
        (
            "md".to_string(),
            BreakpointLayout {
                columns: columns.min(MD_MAX_COLUMNS),
            },
        ),
    ])
}

fn resolve_field(field: &DraftField, index: usize) -> RenderableField {
    let position = i32::try_from(index).unwrap_or(i32::MAX);
    let order = field.layout.and_then(|l| l.order).unwrap_or(position);
    let col_span = field.layout.and_then(|l| l.col_span).unwrap_or(1);

    RenderableField {
        key: field.key.clone(),
        field_type: field.field_type,
        label: field.label.clone(),
        placeholder: field.placeholder.clone().unwrap_or_default(),
        hint: field.hint.clone().unwrap_or_default(),
        default_value: field.default_value.clone(),
        validators: field.validators.clone(),
        options: field.options.clone(),
        col_span,
        order,
        css_class: field_css_class(&field.key),
    }
}

fn resolve_action(action: &DraftAction) -> RenderableAction {
    RenderableAction {
        action_type: action.action_type,
        label: action.label.clone(),
        color: action.color.unwrap_or_default(),
        css_class: action_css_class(action.action_type),
    }
}
