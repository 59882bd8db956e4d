//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use uuid::Uuid;

use formgen_api::error::AppError;
use formgen_core::error::CoreError;
use formgen_core::validation::rules::Violation;
use formgen_db::StoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404 with NOT_FOUND code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let id = Uuid::nil();
    let err = AppError::Core(CoreError::NotFound { entity: "Draft", id });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], format!("Draft with id {id} not found"));
}

// ---------------------------------------------------------------------------
// Test: draft rejection maps to 422 with every violation in details
// ---------------------------------------------------------------------------

#[tokio::test]
async fn draft_validation_returns_422_with_details() {
    let err = AppError::Core(CoreError::DraftValidation(vec![
        Violation::new("name", "Draft name must not be empty."),
        Violation::new("actions", "Draft must have at least one action."),
    ]));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["details"].as_array().unwrap().len(), 2);
    assert_eq!(json["details"][0]["field"], "name");
    assert_eq!(json["details"][1]["message"], "Draft must have at least one action.");
}

// ---------------------------------------------------------------------------
// Test: generation failures map to 502
// ---------------------------------------------------------------------------

#[tokio::test]
async fn generation_errors_return_502() {
    for err in [
        CoreError::Generation("timeout".into()),
        CoreError::GenerationOutput("bad json".into()),
    ] {
        let (status, json) = error_to_response(AppError::Core(err)).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["code"], "GENERATION_ERROR");
        assert!(json.get("details").is_none());
    }
}

// ---------------------------------------------------------------------------
// Test: CoreError::Validation maps to 400 with VALIDATION_ERROR code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("Prompt must not be empty".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Prompt must not be empty");
    assert!(json.get("details").is_none());
}

// ---------------------------------------------------------------------------
// Test: store failures are sanitized, domain errors from the store are not
// ---------------------------------------------------------------------------

#[tokio::test]
async fn store_error_returns_500_and_sanitizes_message() {
    let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = AppError::from(StoreError::Serialization(serde_err));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn core_error_inside_store_error_keeps_its_mapping() {
    let err = AppError::from(StoreError::Core(CoreError::DraftValidation(vec![
        Violation::new("actions", "Draft must have at least one action."),
    ])));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["details"][0]["field"], "actions");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Internal maps to 500 and sanitizes the message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::Core(CoreError::Internal("secret database credentials leaked".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}
