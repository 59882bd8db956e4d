//! Repository for the `published_forms` table.

use serde_json::Value;
use sqlx::PgPool;

use formgen_core::types::{FormId, Timestamp};

use crate::models::published_form::{CatalogEntryRow, PublishedFormRow};
use crate::repositories::PgTx;

/// Column list for full `published_forms` queries.
const COLUMNS: &str = "id, draft_id, name, description, renderable, published_at";

/// Values written on every publish of a draft.
#[derive(Debug, Clone)]
pub struct PublishInput<'a> {
    /// Used only when the draft has never been published.
    pub new_id: FormId,
    pub draft_id: FormId,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub renderable: Value,
    pub published_at: Timestamp,
}

/// Provides data access for published forms.
pub struct PublishedFormRepo;

impl PublishedFormRepo {
    /// Insert or replace the published form of a draft.
    ///
    /// Uses `ON CONFLICT (draft_id) DO UPDATE`, so an existing row keeps its
    /// id and has everything else replaced.
    pub async fn upsert(
        tx: &mut PgTx<'_>,
        input: &PublishInput<'_>,
    ) -> Result<PublishedFormRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO published_forms \
                 (id, draft_id, name, description, renderable, published_at) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             ON CONFLICT (draft_id) DO UPDATE SET \
                 name = EXCLUDED.name, \
                 description = EXCLUDED.description, \
                 renderable = EXCLUDED.renderable, \
                 published_at = EXCLUDED.published_at \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PublishedFormRow>(&query)
            .bind(input.new_id)
            .bind(input.draft_id)
            .bind(input.name)
            .bind(input.description)
            .bind(&input.renderable)
            .bind(input.published_at)
            .fetch_one(&mut **tx)
            .await
    }

    /// Find a published form by its own ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: FormId,
    ) -> Result<Option<PublishedFormRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM published_forms WHERE id = $1");
        sqlx::query_as::<_, PublishedFormRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List catalog entries, most recently published first.
    pub async fn list_entries(pool: &PgPool) -> Result<Vec<CatalogEntryRow>, sqlx::Error> {
        sqlx::query_as::<_, CatalogEntryRow>(
            "SELECT id, name, description, published_at FROM published_forms \
             ORDER BY published_at DESC, id",
        )
        .fetch_all(pool)
        .await
    }
}
