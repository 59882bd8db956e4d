//! Published catalog records.
//!
//! A published form wraps the renderable resolved from a draft. There is at
//! most one per draft: re-publishing replaces it and keeps its id.

use serde::{Deserialize, Serialize};

use crate::form::RenderableForm;
use crate::types::{FormId, Timestamp};

/// The current render-ready copy of one draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishedForm {
    pub id: FormId,
    pub draft_id: FormId,
    pub name: String,
    pub description: Option<String>,
    pub published_at: Timestamp,
    pub renderable: RenderableForm,
}

impl PublishedForm {
    pub fn entry(&self) -> CatalogEntry {
        CatalogEntry {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            published_at: self.published_at,
        }
    }
}

/// Listing projection of a published form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: FormId,
    pub name: String,
    pub description: Option<String>,
    pub published_at: Timestamp,
}
