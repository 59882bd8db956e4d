//! The editable form document and its update semantics.
//!
//! A [`Draft`] may be structurally invalid while it is being assembled or
//! patched; nothing in this module enforces the invariants. Every write goes
//! through [`revise`] (or, for fresh drafts, the generation pipeline), which
//! runs [`crate::validation::evaluator::validate_draft`] before anything is
//! persisted.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::form::{
    ActionColor, ActionType, Breakpoints, Columns, FieldOption, FieldType, ValidatorConfig,
};
use crate::types::{FormId, Timestamp};
use crate::validation::evaluator::ensure_valid;

/// Label given to the default action when none is supplied.
pub const DEFAULT_ACTION_LABEL: &str = "Submit";

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DraftLayout {
    #[serde(default)]
    pub columns: Columns,
    #[serde(default)]
    pub gap: Option<String>,
    #[serde(default)]
    pub breakpoints: Option<Breakpoints>,
}

impl DraftLayout {
    pub fn with_columns(columns: Columns) -> Self {
        Self {
            columns,
            gap: None,
            breakpoints: None,
        }
    }
}

/// Per-field placement override within the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldLayout {
    #[serde(default)]
    pub col_span: Option<i32>,
    #[serde(default)]
    pub order: Option<i32>,
}

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionalOperator {
    #[serde(rename = "==")]
    Equals,
    #[serde(rename = "!=")]
    NotEquals,
    #[serde(rename = "in")]
    In,
}

/// Show the owning field only when another field's value matches.
///
/// Stored and passed through as-is; no evaluation happens server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conditional {
    pub field: String,
    pub operator: ConditionalOperator,
    pub value: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftField {
    pub key: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(default)]
    pub default_value: Option<serde_json::Value>,
    #[serde(default)]
    pub validators: Vec<ValidatorConfig>,
    #[serde(default)]
    pub options: Vec<FieldOption>,
    #[serde(default)]
    pub layout: Option<FieldLayout>,
    #[serde(default)]
    pub conditional: Option<Conditional>,
}

impl DraftField {
    /// Column span used by the layout check: the override when present and
    /// positive, otherwise 1.
    pub fn effective_col_span(&self) -> u32 {
        self.layout
            .and_then(|l| l.col_span)
            .and_then(|span| u32::try_from(span).ok())
            .filter(|span| *span > 0)
            .unwrap_or(1)
    }
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftAction {
    #[serde(rename = "type", default)]
    pub action_type: ActionType,
    #[serde(default = "default_action_label")]
    pub label: String,
    #[serde(default)]
    pub color: Option<ActionColor>,
}

fn default_action_label() -> String {
    DEFAULT_ACTION_LABEL.to_string()
}

impl DraftAction {
    /// The `Submit` button every generated draft starts with.
    pub fn default_submit() -> Self {
        Self {
            action_type: ActionType::Submit,
            label: default_action_label(),
            color: Some(ActionColor::Primary),
        }
    }
}

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftStatus {
    /// Freshly generated, never edited.
    #[default]
    Draft,
    /// Edited at least once.
    Saved,
}

impl DraftStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Saved => "saved",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "draft" => Some(Self::Draft),
            "saved" => Some(Self::Saved),
            _ => None,
        }
    }
}

/// Editable, versioned form definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub id: FormId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub prompt: String,
    pub version: i32,
    #[serde(default)]
    pub status: DraftStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub fields: Vec<DraftField>,
    pub layout: DraftLayout,
    #[serde(default)]
    pub actions: Vec<DraftAction>,
    #[serde(default)]
    pub css_overrides: Option<String>,
}

impl Draft {
    pub fn summary(&self) -> DraftSummary {
        DraftSummary {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            status: self.status,
            version: self.version,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Listing projection of a draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftSummary {
    pub id: FormId,
    pub name: String,
    pub description: Option<String>,
    pub status: DraftStatus,
    pub version: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Updates
// ---------------------------------------------------------------------------

/// Partial update of a draft. Absent attributes keep their current value;
/// supplied ones replace the whole attribute.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub fields: Option<Vec<DraftField>>,
    pub layout: Option<DraftLayout>,
    pub actions: Option<Vec<DraftAction>>,
    pub css_overrides: Option<String>,
}

/// Overlay `update` onto `current`, bumping the version and marking the
/// draft saved. Does not validate.
pub fn apply_update(current: &Draft, update: &DraftUpdate, now: Timestamp) -> Draft {
    let mut next = current.clone();

    if let Some(name) = &update.name {
        next.name = name.clone();
    }
    if let Some(description) = &update.description {
        next.description = Some(description.clone());
    }
    if let Some(fields) = &update.fields {
        next.fields = fields.clone();
    }
    if let Some(layout) = &update.layout {
        next.layout = layout.clone();
    }
    if let Some(actions) = &update.actions {
        next.actions = actions.clone();
    }
    if let Some(css) = &update.css_overrides {
        next.css_overrides = Some(css.clone());
    }

    next.version = current.version + 1;
    next.status = DraftStatus::Saved;
    next.updated_at = now;
    next
}

/// Apply `update` and validate the result.
///
/// On rejection the caller must not persist anything; `current` is never
/// touched either way.
pub fn revise(current: &Draft, update: &DraftUpdate, now: Timestamp) -> Result<Draft, CoreError> {
    let next = apply_update(current, update, now);
    ensure_valid(&next)?;
    Ok(next)
}
