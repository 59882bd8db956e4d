//! Row model for the `published_forms` table.

use serde_json::Value;
use sqlx::FromRow;

use formgen_core::catalog::{CatalogEntry, PublishedForm};
use formgen_core::types::{FormId, Timestamp};

use crate::store::StoreError;

/// A row from the `published_forms` table.
#[derive(Debug, Clone, FromRow)]
pub struct PublishedFormRow {
    pub id: FormId,
    pub draft_id: FormId,
    pub name: String,
    pub description: Option<String>,
    pub renderable: Value,
    pub published_at: Timestamp,
}

/// Listing projection; skips the renderable document.
#[derive(Debug, Clone, FromRow)]
pub struct CatalogEntryRow {
    pub id: FormId,
    pub name: String,
    pub description: Option<String>,
    pub published_at: Timestamp,
}

impl TryFrom<PublishedFormRow> for PublishedForm {
    type Error = StoreError;

    fn try_from(row: PublishedFormRow) -> Result<Self, Self::Error> {
        Ok(PublishedForm {
            id: row.id,
            draft_id: row.draft_id,
            name: row.name,
            description: row.description,
            published_at: row.published_at,
            renderable: serde_json::from_value(row.renderable)?,
        })
    }
}

impl From<CatalogEntryRow> for CatalogEntry {
    fn from(row: CatalogEntryRow) -> Self {
        CatalogEntry {
            id: row.id,
            name: row.name,
            description: row.description,
            published_at: row.published_at,
        }
    }
}
