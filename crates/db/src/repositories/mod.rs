//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` or an open transaction as the first argument.

pub mod draft_repo;
pub mod published_form_repo;

pub use draft_repo::DraftRepo;
pub use published_form_repo::PublishedFormRepo;

/// Transaction handle shared by the write paths.
pub type PgTx<'c> = sqlx::Transaction<'c, sqlx::Postgres>;
