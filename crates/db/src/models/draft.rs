//! Row model for the `form_drafts` table.

use serde_json::Value;
use sqlx::FromRow;

use formgen_core::draft::{Draft, DraftStatus, DraftSummary};
use formgen_core::error::CoreError;
use formgen_core::types::{FormId, Timestamp};

use crate::store::StoreError;

/// A row from the `form_drafts` table. Document columns are raw JSONB.
#[derive(Debug, Clone, FromRow)]
pub struct DraftRow {
    pub id: FormId,
    pub name: String,
    pub description: Option<String>,
    pub prompt: String,
    pub version: i32,
    pub status: String,
    pub fields: Value,
    pub layout: Value,
    pub actions: Value,
    pub css_overrides: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Listing projection of `form_drafts`; skips the document columns.
#[derive(Debug, Clone, FromRow)]
pub struct DraftSummaryRow {
    pub id: FormId,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub version: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// JSONB-encoded document columns of a draft, ready to bind.
#[derive(Debug, Clone)]
pub struct DraftDocuments {
    pub fields: Value,
    pub layout: Value,
    pub actions: Value,
}

impl DraftDocuments {
    pub fn encode(draft: &Draft) -> Result<Self, StoreError> {
        Ok(Self {
            fields: serde_json::to_value(&draft.fields)?,
            layout: serde_json::to_value(&draft.layout)?,
            actions: serde_json::to_value(&draft.actions)?,
        })
    }
}

fn parse_status(status: &str, id: FormId) -> Result<DraftStatus, StoreError> {
    DraftStatus::from_name(status).ok_or_else(|| {
        StoreError::Core(CoreError::Internal(format!(
            "Unknown draft status '{status}' for draft {id}"
        )))
    })
}

impl TryFrom<DraftRow> for Draft {
    type Error = StoreError;

    fn try_from(row: DraftRow) -> Result<Self, Self::Error> {
        let status = parse_status(&row.status, row.id)?;

        Ok(Draft {
            id: row.id,
            name: row.name,
            description: row.description,
            prompt: row.prompt,
            version: row.version,
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
            fields: serde_json::from_value(row.fields)?,
            layout: serde_json::from_value(row.layout)?,
            actions: serde_json::from_value(row.actions)?,
            css_overrides: row.css_overrides,
        })
    }
}

impl TryFrom<DraftSummaryRow> for DraftSummary {
    type Error = StoreError;

    fn try_from(row: DraftSummaryRow) -> Result<Self, Self::Error> {
        Ok(DraftSummary {
            status: parse_status(&row.status, row.id)?,
            id: row.id,
            name: row.name,
            description: row.description,
            version: row.version,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
