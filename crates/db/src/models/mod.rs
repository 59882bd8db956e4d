//! Database row types and their conversions to domain values.

pub mod draft;
pub mod published_form;

pub use draft::{DraftDocuments, DraftRow, DraftSummaryRow};
pub use published_form::{CatalogEntryRow, PublishedFormRow};
