//! Shared form vocabulary and the resolved, render-ready form shape.
//!
//! The enums here are shared by drafts and renderables. The `Renderable*`
//! structs are the optional-free projection produced by
//! [`crate::resolution::resolve_renderable`]; consumers never need to
//! null-check them.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::FormId;

// ---------------------------------------------------------------------------
// Field types
// ---------------------------------------------------------------------------

/// The closed set of field kinds a form can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Password,
    Number,
    Tel,
    Url,
    Textarea,
    Select,
    Checkbox,
    Radio,
    Date,
    Slider,
    Toggle,
}

impl FieldType {
    /// Every recognized field type, in declaration order.
    pub const ALL: [FieldType; 13] = [
        Self::Text,
        Self::Email,
        Self::Password,
        Self::Number,
        Self::Tel,
        Self::Url,
        Self::Textarea,
        Self::Select,
        Self::Checkbox,
        Self::Radio,
        Self::Date,
        Self::Slider,
        Self::Toggle,
    ];

    /// Wire name, e.g. `"textarea"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Date => "date",
            Self::Slider => "slider",
            Self::Toggle => "toggle",
        }
    }

    /// Parse an exact wire name. Returns `None` for anything unrecognized.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }

    /// Whether fields of this type pick from a list of options.
    pub fn requires_options(self) -> bool {
        matches!(self, Self::Select | Self::Radio)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Validators and options
// ---------------------------------------------------------------------------

/// Client-side validator kinds attachable to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidatorKind {
    Required,
    MinLength,
    MaxLength,
    Min,
    Max,
    Pattern,
    Email,
}

/// One validator attached to a field. `value` is the constraint (length,
/// bound, regex) and is left untyped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    #[serde(rename = "type")]
    pub kind: ValidatorKind,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ValidatorConfig {
    /// A validator with no constraint value and no custom message.
    pub fn bare(kind: ValidatorKind) -> Self {
        Self {
            kind,
            value: None,
            message: None,
        }
    }
}

/// The submitted value of an option: text or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Text(String),
    Number(serde_json::Number),
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldOption {
    pub label: String,
    pub value: OptionValue,
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    #[default]
    Submit,
    Reset,
    Custom,
}

impl ActionType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Submit => "submit",
            Self::Reset => "reset",
            Self::Custom => "custom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionColor {
    #[default]
    Primary,
    Accent,
    Warn,
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Smallest allowed grid column count.
pub const MIN_COLUMNS: u8 = 1;

/// Largest allowed grid column count.
pub const MAX_COLUMNS: u8 = 4;

/// Grid column count, always within `MIN_COLUMNS..=MAX_COLUMNS`.
///
/// Deserializing an out-of-range number fails, so a stored or submitted
/// layout can never carry e.g. zero columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Columns(u8);

impl Columns {
    pub const ONE: Columns = Columns(1);

    /// Clamp an arbitrary integer into the allowed range.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(i64::from(MIN_COLUMNS), i64::from(MAX_COLUMNS)) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Columns {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<u8> for Columns {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (MIN_COLUMNS..=MAX_COLUMNS).contains(&value) {
            Ok(Self(value))
        } else {
            Err(format!(
                "columns must be between {MIN_COLUMNS} and {MAX_COLUMNS}, got {value}"
            ))
        }
    }
}

impl From<Columns> for u8 {
    fn from(value: Columns) -> Self {
        value.0
    }
}

impl fmt::Display for Columns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Column count used at one responsive breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakpointLayout {
    pub columns: u8,
}

/// Breakpoint name (`sm`, `md`, ...) to its column count.
pub type Breakpoints = BTreeMap<String, BreakpointLayout>;

// ---------------------------------------------------------------------------
// Renderable form
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderableLayout {
    pub columns: Columns,
    pub gap: String,
    pub breakpoints: Breakpoints,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderableField {
    pub key: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    pub placeholder: String,
    pub hint: String,
    #[serde(default)]
    pub default_value: Option<serde_json::Value>,
    pub validators: Vec<ValidatorConfig>,
    pub options: Vec<FieldOption>,
    pub col_span: i32,
    pub order: i32,
    pub css_class: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderableAction {
    #[serde(rename = "type")]
    pub action_type: ActionType,
    pub label: String,
    pub color: ActionColor,
    pub css_class: String,
}

/// A fully-resolved form, ready for a renderer.
///
/// `id` is the id of the draft it was resolved from. `css_overrides` is raw
/// stylesheet text and stays optional: there is nothing to default it to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderableForm {
    pub id: FormId,
    pub name: String,
    pub layout: RenderableLayout,
    pub fields: Vec<RenderableField>,
    pub actions: Vec<RenderableAction>,
    #[serde(default)]
    pub css_overrides: Option<String>,
}
