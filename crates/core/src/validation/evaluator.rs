//! Draft evaluator — pure logic, no storage access.
//!
//! Every check runs on every call and contributes its own violations, so a
//! caller always sees the complete list of problems in one pass.

use std::collections::{BTreeSet, HashSet};

use crate::draft::Draft;
use crate::error::CoreError;

use super::rules::{col_span_path, options_path, Violation, PATH_ACTIONS, PATH_FIELDS, PATH_NAME};

/// Evaluate all draft invariants. An empty result means the draft is valid.
///
/// Violations are ordered by check: name, duplicate keys, column spans
/// (in field order), missing options (in field order), actions.
pub fn validate_draft(draft: &Draft) -> Vec<Violation> {
    let mut violations = Vec::new();

    check_name(draft, &mut violations);
    check_unique_keys(draft, &mut violations);
    check_col_spans(draft, &mut violations);
    check_options(draft, &mut violations);
    check_actions(draft, &mut violations);

    violations
}

/// Like [`validate_draft`], but folds a non-empty result into
/// [`CoreError::DraftValidation`].
pub fn ensure_valid(draft: &Draft) -> Result<(), CoreError> {
    let violations = validate_draft(draft);
    if violations.is_empty() {
        Ok(())
    } else {
        tracing::debug!(
            draft_id = %draft.id,
            violation_count = violations.len(),
            "Draft failed validation",
        );
        Err(CoreError::DraftValidation(violations))
    }
}

fn check_name(draft: &Draft, out: &mut Vec<Violation>) {
    if draft.name.trim().is_empty() {
        out.push(Violation::new(PATH_NAME, "Draft name must not be empty."));
    }
}

fn check_unique_keys(draft: &Draft, out: &mut Vec<Violation>) {
    let mut seen = HashSet::new();
    let mut duplicates = BTreeSet::new();
    for field in &draft.fields {
        if !seen.insert(field.key.as_str()) {
            duplicates.insert(field.key.as_str());
        }
    }

    if !duplicates.is_empty() {
        let listed = duplicates.into_iter().collect::<Vec<_>>().join(", ");
        out.push(Violation::new(
            PATH_FIELDS,
            format!("Duplicate field keys found: {listed}"),
        ));
    }
}

fn check_col_spans(draft: &Draft, out: &mut Vec<Violation>) {
    let columns = u32::from(draft.layout.columns.get());
    for field in &draft.fields {
        let col_span = field.effective_col_span();
        if col_span > columns {
            out.push(Violation::new(
                col_span_path(&field.key),
                format!(
                    "Field '{}' col_span ({col_span}) exceeds layout columns ({columns}).",
                    field.key
                ),
            ));
        }
    }
}

fn check_options(draft: &Draft, out: &mut Vec<Violation>) {
    for field in &draft.fields {
        if field.field_type.requires_options() && field.options.is_empty() {
            out.push(Violation::new(
                options_path(&field.key),
                format!(
                    "Field '{}' of type '{}' must have at least one option.",
                    field.key, field.field_type
                ),
            ));
        }
    }
}

fn check_actions(draft: &Draft, out: &mut Vec<Violation>) {
    if draft.actions.is_empty() {
        out.push(Violation::new(
            PATH_ACTIONS,
            "Draft must have at least one action.",
        ));
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::draft::test_support::{field, option, valid_draft, with_span};
    use crate::draft::DraftLayout;
    use crate::form::{Columns, FieldType};

    fn paths(violations: &[Violation]) -> Vec<&str> {
        violations.iter().map(|v| v.field.as_str()).collect()
    }

    #[test]
    fn valid_draft_has_no_violations() {
        assert!(validate_draft(&valid_draft()).is_empty());
        assert!(ensure_valid(&valid_draft()).is_ok());
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut draft = valid_draft();
        draft.name = " \t\n".to_string();
        let violations = validate_draft(&draft);
        assert_eq!(paths(&violations), vec!["name"]);
    }

    #[test]
    fn duplicate_keys_report_the_key() {
        let mut draft = valid_draft();
        draft.fields = vec![field("x", FieldType::Text), field("x", FieldType::Text)];
        let violations = validate_draft(&draft);
        assert_eq!(paths(&violations), vec!["fields"]);
        assert!(violations[0].message.contains('x'));
    }

    #[test]
    fn duplicate_keys_list_only_duplicated_values() {
        let mut draft = valid_draft();
        draft.fields = vec![
            field("x", FieldType::Text),
            field("x", FieldType::Text),
            field("y", FieldType::Text),
        ];
        let violations = validate_draft(&draft);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, "Duplicate field keys found: x");
    }

    #[test]
    fn every_distinct_duplicate_is_reported() {
        let mut draft = valid_draft();
        draft.fields = vec![
            field("b", FieldType::Text),
            field("a", FieldType::Text),
            field("b", FieldType::Text),
            field("a", FieldType::Text),
            field("a", FieldType::Text),
        ];
        let violations = validate_draft(&draft);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, "Duplicate field keys found: a, b");
    }

    #[test]
    fn col_span_equal_to_columns_passes() {
        let mut draft = valid_draft();
        draft.layout = DraftLayout::with_columns(Columns::clamped(2));
        draft.fields = vec![with_span(field("wide", FieldType::Text), 2)];
        assert!(validate_draft(&draft).is_empty());
    }

    #[test]
    fn col_span_above_columns_fails() {
        let mut draft = valid_draft();
        draft.layout = DraftLayout::with_columns(Columns::clamped(2));
        draft.fields = vec![with_span(field("wide", FieldType::Text), 3)];
        let violations = validate_draft(&draft);
        assert_eq!(paths(&violations), vec!["fields.wide.layout.col_span"]);
        assert!(violations[0].message.contains("col_span"));
        assert!(violations[0].message.contains("(3)"));
    }

    #[test]
    fn non_positive_col_span_counts_as_one() {
        let mut draft = valid_draft();
        draft.fields = vec![
            with_span(field("zero", FieldType::Text), 0),
            with_span(field("negative", FieldType::Text), -4),
        ];
        assert!(validate_draft(&draft).is_empty());
    }

    #[test]
    fn select_and_radio_need_options() {
        let mut draft = valid_draft();
        draft.fields = vec![
            field("plan", FieldType::Select),
            field("size", FieldType::Radio),
        ];
        let violations = validate_draft(&draft);
        assert_eq!(
            paths(&violations),
            vec!["fields.plan.options", "fields.size.options"]
        );
        assert_eq!(
            violations[0].message,
            "Field 'plan' of type 'select' must have at least one option."
        );
    }

    #[test]
    fn options_check_skips_other_types() {
        let mut draft = valid_draft();
        let mut checkbox = field("agree", FieldType::Checkbox);
        checkbox.options = vec![option("yes")];
        draft.fields = vec![checkbox, field("tags", FieldType::Toggle)];
        let mut select = field("plan", FieldType::Select);
        select.options = vec![option("basic")];
        draft.fields.push(select);
        assert!(validate_draft(&draft).is_empty());
    }

    #[test]
    fn missing_actions_are_rejected() {
        let mut draft = valid_draft();
        draft.actions.clear();
        assert_eq!(paths(&validate_draft(&draft)), vec!["actions"]);
    }

    #[test]
    fn all_breaches_are_accumulated_in_check_order() {
        let mut draft = valid_draft();
        draft.name = String::new();
        draft.fields = vec![
            with_span(field("dup", FieldType::Radio), 2),
            field("dup", FieldType::Text),
        ];
        draft.actions.clear();

        let violations = validate_draft(&draft);
        assert_eq!(
            paths(&violations),
            vec![
                "name",
                "fields",
                "fields.dup.layout.col_span",
                "fields.dup.options",
                "actions",
            ]
        );
    }

    #[test]
    fn validation_is_repeatable() {
        let mut draft = valid_draft();
        draft.actions.clear();
        assert_eq!(validate_draft(&draft), validate_draft(&draft));
    }

    #[test]
    fn ensure_valid_carries_full_list() {
        let mut draft = valid_draft();
        draft.name = String::new();
        draft.actions.clear();
        assert_matches!(
            ensure_valid(&draft),
            Err(CoreError::DraftValidation(v)) if v.len() == 2
        );
    }
}
