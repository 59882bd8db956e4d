//! The storage seam between orchestration and a concrete backend.

use async_trait::async_trait;

use formgen_core::catalog::{CatalogEntry, PublishedForm};
use formgen_core::draft::{Draft, DraftSummary};
use formgen_core::error::CoreError;
use formgen_core::form::RenderableForm;
use formgen_core::types::FormId;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Stored document could not be (de)serialized: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A domain error, typically the rejection returned by a revision.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Pure step run against the locked current draft. Returns the next draft
/// and its renderable, or rejects without anything being written.
pub type DraftRevision =
    Box<dyn FnOnce(&Draft) -> Result<(Draft, RenderableForm), CoreError> + Send>;

/// Draft and catalog persistence.
///
/// Implementations guarantee that publishing is atomic per draft and that
/// revisions of one draft are serialized.
#[async_trait]
pub trait FormStore: Send + Sync {
    /// Short backend name for logs.
    fn backend(&self) -> &'static str;

    async fn health_check(&self) -> Result<(), StoreError>;

    /// Persist a new draft and publish `renderable` for it in one step.
    async fn insert_draft(
        &self,
        draft: &Draft,
        renderable: &RenderableForm,
    ) -> Result<PublishedForm, StoreError>;

    async fn find_draft(&self, id: FormId) -> Result<Option<Draft>, StoreError>;

    /// Summaries of every draft, newest `created_at` first.
    async fn list_drafts(&self) -> Result<Vec<DraftSummary>, StoreError>;

    /// Run `revision` against the current draft while holding that draft
    /// exclusively, then store the result and republish it.
    ///
    /// Returns `Ok(None)` for an unknown id. A rejected revision surfaces as
    /// [`StoreError::Core`] and leaves both draft and published form as they
    /// were.
    async fn revise_draft(
        &self,
        id: FormId,
        revision: DraftRevision,
    ) -> Result<Option<(Draft, PublishedForm)>, StoreError>;

    /// Delete a draft. Its published form stays in the catalog.
    async fn delete_draft(&self, id: FormId) -> Result<bool, StoreError>;

    /// Catalog listing, newest `published_at` first.
    async fn list_catalog(&self) -> Result<Vec<CatalogEntry>, StoreError>;

    /// Look up a published form by its own id.
    async fn find_published(&self, id: FormId) -> Result<Option<PublishedForm>, StoreError>;
}
