//! Sample forms published at startup when `SEED_SAMPLES=true`.
//!
//! Samples go through the same translate → validate → resolve → store path
//! as generated forms; only the generator call is skipped.

use formgen_core::form::OptionValue;
use formgen_core::generation::{GeneratorField, GeneratorLayout, GeneratorOption, GeneratorOutput};

use crate::engine::FormPipeline;
use crate::error::AppResult;

/// Publish every sample form. Returns how many were stored.
pub async fn seed_samples(pipeline: &FormPipeline) -> AppResult<usize> {
    let samples = sample_outputs();
    let count = samples.len();

    for output in &samples {
        let prompt = format!("Seed: {}", output.name.as_deref().unwrap_or_default());
        let (draft, published) = pipeline.publish_generated(output, &prompt).await?;
        tracing::info!(
            draft_id = %draft.id,
            published_id = %published.id,
            name = %draft.name,
            "Seeded sample form",
        );
    }

    Ok(count)
}

/// Job application, event registration and customer feedback forms.
pub fn sample_outputs() -> Vec<GeneratorOutput> {
    vec![
        GeneratorOutput {
            name: Some("Job Application".to_string()),
            description: Some("Apply for an open position at our company.".to_string()),
            fields: vec![
                field("full_name", "text", "Full Name", Some("Jane Smith"), true),
                field("email", "email", "Email Address", Some("jane@example.com"), true),
                field("phone", "tel", "Phone Number", Some("+1 555 000 0000"), false),
                with_options(
                    field("position", "select", "Position Applied For", None, true),
                    &[
                        ("Software Engineer", "swe"),
                        ("Product Designer", "design"),
                        ("Product Manager", "pm"),
                    ],
                ),
                field(
                    "cover_letter",
                    "textarea",
                    "Cover Letter",
                    Some("Tell us why you'd be a great fit..."),
                    true,
                ),
            ],
            layout: Some(GeneratorLayout { columns: Some(2) }),
        },
        GeneratorOutput {
            name: Some("Event Registration".to_string()),
            description: Some("Register your attendance for our upcoming event.".to_string()),
            fields: vec![
                field("first_name", "text", "First Name", None, true),
                field("last_name", "text", "Last Name", None, true),
                field("email", "email", "Email Address", None, true),
                with_options(
                    field("ticket_type", "radio", "Ticket Type", None, true),
                    &[
                        ("General Admission", "general"),
                        ("VIP", "vip"),
                        ("Student (with valid ID)", "student"),
                    ],
                ),
                field(
                    "dietary",
                    "textarea",
                    "Dietary Requirements",
                    Some("e.g. vegetarian, nut allergy..."),
                    false,
                ),
                field("newsletter", "checkbox", "Send me event updates", None, false),
            ],
            layout: Some(GeneratorLayout { columns: Some(2) }),
        },
        GeneratorOutput {
            name: Some("Customer Feedback".to_string()),
            description: Some("Share your experience with our product.".to_string()),
            fields: vec![
                field("name", "text", "Your Name", Some("Optional"), false),
                field("email", "email", "Email Address", None, false),
                with_options(
                    field("rating", "select", "Overall Rating", None, true),
                    &[
                        ("Poor", "1"),
                        ("Fair", "2"),
                        ("Good", "3"),
                        ("Very Good", "4"),
                        ("Excellent", "5"),
                    ],
                ),
                field(
                    "comments",
                    "textarea",
                    "Comments",
                    Some("Tell us what you loved or how we can improve..."),
                    true,
                ),
            ],
            layout: Some(GeneratorLayout { columns: Some(1) }),
        },
    ]
}

fn field(
    key: &str,
    field_type: &str,
    label: &str,
    placeholder: Option<&str>,
    required: bool,
) -> GeneratorField {
    GeneratorField {
        key: key.to_string(),
        field_type: Some(field_type.to_string()),
        label: label.to_string(),
        placeholder: placeholder.map(str::to_string),
        hint: None,
        required: Some(required),
        options: None,
    }
}

fn with_options(mut field: GeneratorField, options: &[(&str, &str)]) -> GeneratorField {
    field.options = Some(
        options
            .iter()
            .map(|(label, value)| GeneratorOption {
                label: label.to_string(),
                value: OptionValue::from(*value),
            })
            .collect(),
    );
    field
}

#[cfg(test)]
mod tests {
    use formgen_core::generation::translate_generated;
    use formgen_core::validation::evaluator::validate_draft;

    use super::*;

    #[test]
    fn every_sample_translates_to_a_valid_draft() {
        for output in sample_outputs() {
            let draft = translate_generated(&output, "seed");
            assert!(
                validate_draft(&draft).is_empty(),
                "sample '{}' should be valid",
                draft.name
            );
        }
    }
}
