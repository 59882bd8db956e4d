//! Handlers for the design workspace: generating and editing drafts.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use formgen_core::draft::DraftUpdate;
use formgen_core::types::FormId;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /design/generate`.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

/// POST /api/v1/design/generate
///
/// Generate a draft from a prompt and publish it. Returns 201 with the draft.
pub async fn generate(
    State(state): State<AppState>,
    AppJson(input): AppJson<GenerateRequest>,
) -> AppResult<impl IntoResponse> {
    let draft = state.pipeline.generate(&input.prompt).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: draft })))
}

/// GET /api/v1/design/drafts
pub async fn list_drafts(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let drafts = state.pipeline.list_drafts().await?;

    Ok(Json(DataResponse { data: drafts }))
}

/// GET /api/v1/design/drafts/{id}
pub async fn get_draft(
    State(state): State<AppState>,
    AppPath(id): AppPath<FormId>,
) -> AppResult<impl IntoResponse> {
    let draft = state.pipeline.get_draft(id).await?;

    Ok(Json(DataResponse { data: draft }))
}

/// PATCH /api/v1/design/drafts/{id}
///
/// Partially update a draft. Omitted attributes keep their value. A draft
/// that would break an invariant is rejected with 422 and nothing changes.
pub async fn update_draft(
    State(state): State<AppState>,
    AppPath(id): AppPath<FormId>,
    AppJson(update): AppJson<DraftUpdate>,
) -> AppResult<impl IntoResponse> {
    let draft = state.pipeline.update_draft(id, update).await?;

    Ok(Json(DataResponse { data: draft }))
}

/// DELETE /api/v1/design/drafts/{id}
///
/// The draft's published form stays in the catalog.
pub async fn delete_draft(
    State(state): State<AppState>,
    AppPath(id): AppPath<FormId>,
) -> AppResult<impl IntoResponse> {
    state.pipeline.delete_draft(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
