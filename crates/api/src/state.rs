use std::sync::Arc;

use crate::engine::FormPipeline;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Generate/revise/publish orchestration over the configured store.
    pub pipeline: Arc<FormPipeline>,
}
