//! Raw generator output. Untrusted: nothing here is validated beyond JSON
//! shape, and `type` is a free-form string.

use serde::{Deserialize, Serialize};

use crate::form::OptionValue;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorOption {
    pub label: String,
    pub value: OptionValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorField {
    pub key: String,
    #[serde(rename = "type", default)]
    pub field_type: Option<String>,
    pub label: String,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(default)]
    pub required: Option<bool>,
    #[serde(default)]
    pub options: Option<Vec<GeneratorOption>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeneratorLayout {
    #[serde(default)]
    pub columns: Option<i64>,
}

/// A form proposal as returned by the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorOutput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub fields: Vec<GeneratorField>,
    #[serde(default)]
    pub layout: Option<GeneratorLayout>,
}
