//! The form pipeline: every draft write goes through here.
//!
//! New forms: generate → translate → validate → resolve → insert + publish.
//! Edits: revise (apply + validate) → resolve → store + republish, under the
//! store's per-draft lock. A rejected draft never reaches the store.

use std::sync::Arc;

use chrono::Utc;

use formgen_core::catalog::{CatalogEntry, PublishedForm};
use formgen_core::draft::{revise, Draft, DraftSummary, DraftUpdate};
use formgen_core::error::CoreError;
use formgen_core::form::RenderableForm;
use formgen_core::generation::{translate_generated, FormGenerator, GeneratorOutput};
use formgen_core::resolution::resolve_renderable;
use formgen_core::types::FormId;
use formgen_core::validation::evaluator::ensure_valid;
use formgen_db::{DraftRevision, FormStore};

use crate::error::AppResult;

const DRAFT_ENTITY: &str = "Draft";
const PUBLISHED_ENTITY: &str = "Published form";

/// Orchestrates the generator and the store.
pub struct FormPipeline {
    generator: Arc<dyn FormGenerator>,
    store: Arc<dyn FormStore>,
}

impl FormPipeline {
    pub fn new(generator: Arc<dyn FormGenerator>, store: Arc<dyn FormStore>) -> Self {
        Self { generator, store }
    }

    pub fn generator_name(&self) -> &'static str {
        self.generator.name()
    }

    pub fn store_backend(&self) -> &'static str {
        self.store.backend()
    }

    pub async fn store_healthy(&self) -> bool {
        match self.store.health_check().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    backend = self.store.backend(),
                    "Store health check failed",
                );
                false
            }
        }
    }

    // -----------------------------------------------------------------------
    // Creation
    // -----------------------------------------------------------------------

    /// Generate a draft from `prompt`, validate it, and publish it.
    ///
    /// The generator is called exactly once. Nothing is stored unless the
    /// translated draft passes validation.
    pub async fn generate(&self, prompt: &str) -> AppResult<Draft> {
        if prompt.trim().is_empty() {
            return Err(CoreError::Validation("Prompt must not be empty".to_string()).into());
        }

        tracing::info!(
            generator = self.generator.name(),
            prompt_len = prompt.len(),
            "Generating form",
        );
        let output = self.generator.generate(prompt).await?;

        let (draft, _) = self.publish_generated(&output, prompt).await?;
        Ok(draft)
    }

    /// Translate, validate, resolve and store already-available generator
    /// output. Used by [`Self::generate`] and by startup seeding.
    pub async fn publish_generated(
        &self,
        output: &GeneratorOutput,
        prompt: &str,
    ) -> AppResult<(Draft, PublishedForm)> {
        let draft = translate_generated(output, prompt);
        if let Err(e) = ensure_valid(&draft) {
            tracing::info!(draft_id = %draft.id, error = %e, "Generated draft rejected");
            return Err(e.into());
        }

        let renderable = resolve_renderable(&draft);
        let published = self.store.insert_draft(&draft, &renderable).await?;

        tracing::info!(
            draft_id = %draft.id,
            published_id = %published.id,
            field_count = draft.fields.len(),
            "Draft created and published",
        );
        Ok((draft, published))
    }

    // -----------------------------------------------------------------------
    // Drafts
    // -----------------------------------------------------------------------

    pub async fn get_draft(&self, id: FormId) -> AppResult<Draft> {
        self.store
            .find_draft(id)
            .await?
            .ok_or_else(|| not_found(DRAFT_ENTITY, id).into())
    }

    pub async fn list_drafts(&self) -> AppResult<Vec<DraftSummary>> {
        Ok(self.store.list_drafts().await?)
    }

    /// Apply a partial update and republish. A rejected update leaves the
    /// stored draft and its published form untouched.
    pub async fn update_draft(&self, id: FormId, update: DraftUpdate) -> AppResult<Draft> {
        let revision: DraftRevision = Box::new(
            move |current: &Draft| -> Result<(Draft, RenderableForm), CoreError> {
                let next = revise(current, &update, Utc::now())?;
                let renderable = resolve_renderable(&next);
                Ok((next, renderable))
            },
        );

        let result = self.store.revise_draft(id, revision).await.map_err(|e| {
            tracing::info!(draft_id = %id, error = %e, "Draft update not applied");
            e
        })?;
        let (draft, published) = result.ok_or_else(|| not_found(DRAFT_ENTITY, id))?;

        tracing::info!(
            draft_id = %draft.id,
            version = draft.version,
            published_id = %published.id,
            field_count = draft.fields.len(),
            "Draft updated and republished",
        );
        Ok(draft)
    }

    pub async fn delete_draft(&self, id: FormId) -> AppResult<()> {
        if !self.store.delete_draft(id).await? {
            return Err(not_found(DRAFT_ENTITY, id).into());
        }
        tracing::info!(draft_id = %id, "Draft deleted");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Catalog
    // -----------------------------------------------------------------------

    pub async fn list_catalog(&self) -> AppResult<Vec<CatalogEntry>> {
        Ok(self.store.list_catalog().await?)
    }

    /// The renderable of a published form, looked up by published-form id.
    pub async fn get_renderable(&self, published_id: FormId) -> AppResult<RenderableForm> {
        self.store
            .find_published(published_id)
            .await?
            .map(|published| published.renderable)
            .ok_or_else(|| not_found(PUBLISHED_ENTITY, published_id).into())
    }
}

fn not_found(entity: &'static str, id: FormId) -> CoreError {
    CoreError::NotFound { entity, id }
}
