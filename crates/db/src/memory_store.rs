//! In-process [`FormStore`] for running without a database.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use formgen_core::catalog::{CatalogEntry, PublishedForm};
use formgen_core::draft::{Draft, DraftSummary};
use formgen_core::form::RenderableForm;
use formgen_core::types::FormId;

use crate::store::{DraftRevision, FormStore, StoreError};

#[derive(Debug, Default)]
struct Inner {
    drafts: HashMap<FormId, Draft>,
    /// Keyed by draft id; at most one published form per draft.
    published: HashMap<FormId, PublishedForm>,
}

impl Inner {
    fn publish(&mut self, draft: &Draft, renderable: &RenderableForm) -> PublishedForm {
        let id = self
            .published
            .get(&draft.id)
            .map(|existing| existing.id)
            .unwrap_or_else(FormId::new_v4);

        let published = PublishedForm {
            id,
            draft_id: draft.id,
            name: draft.name.clone(),
            description: draft.description.clone(),
            published_at: draft.updated_at,
            renderable: renderable.clone(),
        };
        self.published.insert(draft.id, published.clone());
        published
    }
}

/// Both maps sit behind one lock, so every write is atomic and revisions
/// are serialized.
#[derive(Debug, Default)]
pub struct MemoryFormStore {
    inner: RwLock<Inner>,
}

impl MemoryFormStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FormStore for MemoryFormStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn insert_draft(
        &self,
        draft: &Draft,
        renderable: &RenderableForm,
    ) -> Result<PublishedForm, StoreError> {
        let mut inner = self.inner.write().await;
        inner.drafts.insert(draft.id, draft.clone());
        Ok(inner.publish(draft, renderable))
    }

    async fn find_draft(&self, id: FormId) -> Result<Option<Draft>, StoreError> {
        Ok(self.inner.read().await.drafts.get(&id).cloned())
    }

    async fn list_drafts(&self) -> Result<Vec<DraftSummary>, StoreError> {
        let inner = self.inner.read().await;
        let mut summaries: Vec<DraftSummary> = inner.drafts.values().map(Draft::summary).collect();
        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(summaries)
    }

    async fn revise_draft(
        &self,
        id: FormId,
        revision: DraftRevision,
    ) -> Result<Option<(Draft, PublishedForm)>, StoreError> {
        let mut inner = self.inner.write().await;

        let Some(current) = inner.drafts.get(&id) else {
            return Ok(None);
        };
        let (next, renderable) = revision(current)?;

        inner.drafts.insert(id, next.clone());
        let published = inner.publish(&next, &renderable);
        Ok(Some((next, published)))
    }

    async fn delete_draft(&self, id: FormId) -> Result<bool, StoreError> {
        Ok(self.inner.write().await.drafts.remove(&id).is_some())
    }

    async fn list_catalog(&self) -> Result<Vec<CatalogEntry>, StoreError> {
        let inner = self.inner.read().await;
        let mut entries: Vec<CatalogEntry> =
            inner.published.values().map(PublishedForm::entry).collect();
        entries.sort_by(|a, b| b.published_at.cmp(&a.published_at).then(a.id.cmp(&b.id)));
        Ok(entries)
    }

    async fn find_published(&self, id: FormId) -> Result<Option<PublishedForm>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.published.values().find(|p| p.id == id).cloned())
    }
}
