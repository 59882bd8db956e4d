//! Route definitions for the design workspace, mounted at `/design`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::design;
use crate::state::AppState;

/// ```text
/// POST   /generate       -> generate
/// GET    /drafts         -> list_drafts
/// GET    /drafts/{id}    -> get_draft
/// PATCH  /drafts/{id}    -> update_draft
/// DELETE /drafts/{id}    -> delete_draft
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate", post(design::generate))
        .route("/drafts", get(design::list_drafts))
        .route(
            "/drafts/{id}",
            get(design::get_draft)
                .patch(design::update_draft)
                .delete(design::delete_draft),
        )
}
