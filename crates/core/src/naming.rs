//! CSS class naming for rendered forms.
//!
//! Class names are derived deterministically from field keys and action
//! types so that stylesheet overrides can target them by name.

use std::sync::LazyLock;

use regex::Regex;

use crate::form::ActionType;

/// Prefix for every field wrapper class.
pub const FIELD_CLASS_PREFIX: &str = "formgen-field--";

/// Prefix for every action button class.
pub const ACTION_CLASS_PREFIX: &str = "formgen-action--";

static NON_ALNUM_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"));

/// Lowercase `text`, collapse every run of non `[a-z0-9]` characters to a
/// single hyphen and trim hyphens from both ends.
///
/// # Examples
///
/// ```
/// use formgen_core::naming::slugify;
///
/// assert_eq!(slugify("Full Name"), "full-name");
/// assert_eq!(slugify("__email__"), "email");
/// assert_eq!(slugify("a--b  c"), "a-b-c");
/// ```
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    NON_ALNUM_RUN
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Class for a field wrapper, e.g. `formgen-field--full-name`.
pub fn field_css_class(key: &str) -> String {
    format!("{FIELD_CLASS_PREFIX}{}", slugify(key))
}

/// Class for an action button, e.g. `formgen-action--submit`.
pub fn action_css_class(action: ActionType) -> String {
    format!("{ACTION_CLASS_PREFIX}{}", slugify(action.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_keys_become_hyphenated() {
        assert_eq!(slugify("full_name"), "full-name");
        assert_eq!(slugify("cover_letter_2"), "cover-letter-2");
    }

    #[test]
    fn uppercase_is_lowered() {
        assert_eq!(slugify("EmailAddress"), "emailaddress");
    }

    #[test]
    fn runs_collapse_and_edges_trim() {
        assert_eq!(slugify("  --Hello,   World!--  "), "hello-world");
    }

    #[test]
    fn non_ascii_letters_are_separators() {
        assert_eq!(slugify("café menu"), "caf-menu");
    }

    #[test]
    fn empty_and_symbol_only_inputs_yield_empty_slug() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("***"), "");
    }

    #[test]
    fn class_names_use_prefixes() {
        assert_eq!(field_css_class("email"), "formgen-field--email");
        assert_eq!(action_css_class(ActionType::Reset), "formgen-action--reset");
    }
}
