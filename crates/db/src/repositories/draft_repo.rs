//! Repository for the `form_drafts` table.

use sqlx::PgPool;

use formgen_core::draft::Draft;
use formgen_core::types::FormId;

use crate::models::draft::{DraftDocuments, DraftRow, DraftSummaryRow};
use crate::repositories::PgTx;

/// Column list for full `form_drafts` queries.
const COLUMNS: &str = "\
    id, name, description, prompt, version, status, \
    fields, layout, actions, css_overrides, created_at, updated_at";

/// Column list for listing queries.
const SUMMARY_COLUMNS: &str = "\
    id, name, description, status, version, created_at, updated_at";

/// Provides data access for drafts.
pub struct DraftRepo;

impl DraftRepo {
    /// Insert a new draft inside an open transaction.
    pub async fn create(
        tx: &mut PgTx<'_>,
        draft: &Draft,
        docs: &DraftDocuments,
    ) -> Result<DraftRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO form_drafts \
                 (id, name, description, prompt, version, status, \
                  fields, layout, actions, css_overrides, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DraftRow>(&query)
            .bind(draft.id)
            .bind(&draft.name)
            .bind(&draft.description)
            .bind(&draft.prompt)
            .bind(draft.version)
            .bind(draft.status.as_str())
            .bind(&docs.fields)
            .bind(&docs.layout)
            .bind(&docs.actions)
            .bind(&draft.css_overrides)
            .bind(draft.created_at)
            .bind(draft.updated_at)
            .fetch_one(&mut **tx)
            .await
    }

    /// Find a draft by its ID.
    pub async fn find_by_id(pool: &PgPool, id: FormId) -> Result<Option<DraftRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM form_drafts WHERE id = $1");
        sqlx::query_as::<_, DraftRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Load a draft and hold its row lock until the transaction ends.
    ///
    /// Concurrent revisions of the same draft queue behind this lock.
    pub async fn find_for_update(
        tx: &mut PgTx<'_>,
        id: FormId,
    ) -> Result<Option<DraftRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM form_drafts WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, DraftRow>(&query)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// List all drafts, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<DraftSummaryRow>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM form_drafts ORDER BY created_at DESC, id"
        );
        sqlx::query_as::<_, DraftSummaryRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Overwrite every mutable column of a draft. Identity, prompt and
    /// `created_at` never change.
    pub async fn update(
        tx: &mut PgTx<'_>,
        draft: &Draft,
        docs: &DraftDocuments,
    ) -> Result<DraftRow, sqlx::Error> {
        let query = format!(
            "UPDATE form_drafts SET \
                 name = $2, description = $3, version = $4, status = $5, \
                 fields = $6, layout = $7, actions = $8, css_overrides = $9, \
                 updated_at = $10 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DraftRow>(&query)
            .bind(draft.id)
            .bind(&draft.name)
            .bind(&draft.description)
            .bind(draft.version)
            .bind(draft.status.as_str())
            .bind(&docs.fields)
            .bind(&docs.layout)
            .bind(&docs.actions)
            .bind(&draft.css_overrides)
            .bind(draft.updated_at)
            .fetch_one(&mut **tx)
            .await
    }

    /// Delete a draft. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: FormId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM form_drafts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
