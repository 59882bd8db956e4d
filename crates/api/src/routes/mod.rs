pub mod catalog;
pub mod design;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /design/generate                 generate a draft (POST)
/// /design/drafts                   list drafts
/// /design/drafts/{id}              get, update (PATCH), delete
///
/// /catalog/forms                   list published forms
/// /catalog/forms/{id}              renderable form
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/design", design::router())
        .nest("/catalog", catalog::router())
}
