//! Handlers for the read-only catalog of published forms.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use formgen_core::types::FormId;

use crate::error::AppResult;
use crate::extract::AppPath;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/catalog/forms
pub async fn list_forms(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let entries = state.pipeline.list_catalog().await?;

    Ok(Json(DataResponse { data: entries }))
}

/// GET /api/v1/catalog/forms/{id}
///
/// Returns the renderable form of a published form.
pub async fn get_form(
    State(state): State<AppState>,
    AppPath(id): AppPath<FormId>,
) -> AppResult<impl IntoResponse> {
    let renderable = state.pipeline.get_renderable(id).await?;

    Ok(Json(DataResponse { data: renderable }))
}
