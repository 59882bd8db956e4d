//! Route definitions for the catalog, mounted at `/catalog`.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// ```text
/// GET /forms         -> list_forms
/// GET /forms/{id}    -> get_form
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/forms", get(catalog::list_forms))
        .route("/forms/{id}", get(catalog::get_form))
}
