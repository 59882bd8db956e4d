//! Violation record and the field paths it reports against.

use serde::{Deserialize, Serialize};

/// Path reported when the draft name is blank.
pub const PATH_NAME: &str = "name";

/// Path reported for duplicated field keys.
pub const PATH_FIELDS: &str = "fields";

/// Path reported when the draft has no actions.
pub const PATH_ACTIONS: &str = "actions";

/// A single broken invariant: where it is and what is wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Dotted path to the offending element, e.g. `fields.email.options`.
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// `fields.<key>.layout.col_span`
pub fn col_span_path(key: &str) -> String {
    format!("{PATH_FIELDS}.{key}.layout.col_span")
}

/// `fields.<key>.options`
pub fn options_path(key: &str) -> String {
    format!("{PATH_FIELDS}.{key}.options")
}
