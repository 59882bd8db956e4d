//! Postgres-backed [`FormStore`].

use async_trait::async_trait;
use sqlx::PgPool;

use formgen_core::catalog::{CatalogEntry, PublishedForm};
use formgen_core::draft::{Draft, DraftSummary};
use formgen_core::form::RenderableForm;
use formgen_core::types::FormId;

use crate::models::draft::DraftDocuments;
use crate::repositories::published_form_repo::PublishInput;
use crate::repositories::{DraftRepo, PgTx, PublishedFormRepo};
use crate::store::{DraftRevision, FormStore, StoreError};

#[derive(Debug, Clone)]
pub struct PgFormStore {
    pool: PgPool,
}

impl PgFormStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Upsert the published copy of `draft` inside `tx`.
    async fn publish(
        tx: &mut PgTx<'_>,
        draft: &Draft,
        renderable: &RenderableForm,
    ) -> Result<PublishedForm, StoreError> {
        let input = PublishInput {
            new_id: FormId::new_v4(),
            draft_id: draft.id,
            name: &draft.name,
            description: draft.description.as_deref(),
            renderable: serde_json::to_value(renderable)?,
            published_at: draft.updated_at,
        };
        let row = PublishedFormRepo::upsert(tx, &input).await?;
        PublishedForm::try_from(row)
    }
}

#[async_trait]
impl FormStore for PgFormStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn insert_draft(
        &self,
        draft: &Draft,
        renderable: &RenderableForm,
    ) -> Result<PublishedForm, StoreError> {
        let docs = DraftDocuments::encode(draft)?;

        let mut tx = self.pool.begin().await?;
        DraftRepo::create(&mut tx, draft, &docs).await?;
        let published = Self::publish(&mut tx, draft, renderable).await?;
        tx.commit().await?;

        Ok(published)
    }

    async fn find_draft(&self, id: FormId) -> Result<Option<Draft>, StoreError> {
        DraftRepo::find_by_id(&self.pool, id)
            .await?
            .map(Draft::try_from)
            .transpose()
    }

    async fn list_drafts(&self) -> Result<Vec<DraftSummary>, StoreError> {
        DraftRepo::list(&self.pool)
            .await?
            .into_iter()
            .map(DraftSummary::try_from)
            .collect()
    }

    async fn revise_draft(
        &self,
        id: FormId,
        revision: DraftRevision,
    ) -> Result<Option<(Draft, PublishedForm)>, StoreError> {
        let mut tx = self.pool.begin().await?;

        let Some(row) = DraftRepo::find_for_update(&mut tx, id).await? else {
            return Ok(None);
        };
        let current = Draft::try_from(row)?;

        // Dropping `tx` on the error path rolls back and releases the lock.
        let (next, renderable) = revision(&current)?;

        let docs = DraftDocuments::encode(&next)?;
        let stored = Draft::try_from(DraftRepo::update(&mut tx, &next, &docs).await?)?;
        let published = Self::publish(&mut tx, &stored, &renderable).await?;
        tx.commit().await?;

        Ok(Some((stored, published)))
    }

    async fn delete_draft(&self, id: FormId) -> Result<bool, StoreError> {
        Ok(DraftRepo::delete(&self.pool, id).await?)
    }

    async fn list_catalog(&self) -> Result<Vec<CatalogEntry>, StoreError> {
        Ok(PublishedFormRepo::list_entries(&self.pool)
            .await?
            .into_iter()
            .map(CatalogEntry::from)
            .collect())
    }

    async fn find_published(&self, id: FormId) -> Result<Option<PublishedForm>, StoreError> {
        PublishedFormRepo::find_by_id(&self.pool, id)
            .await?
            .map(PublishedForm::try_from)
            .transpose()
    }
}
