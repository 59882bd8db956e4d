//! Integration tests for the Postgres form store.
//!
//! Exercises the repositories against a real database:
//! - Insert writes the draft and its published form in one transaction
//! - Re-publishing upserts on `draft_id` and keeps the published id
//! - A rejected revision leaves both rows untouched
//! - Deleting a draft keeps its catalog row

use std::sync::Arc;

use assert_matches::assert_matches;
use chrono::{Duration, SubsecRound, Utc};
use sqlx::PgPool;

use formgen_core::draft::{revise, Draft, DraftStatus, DraftUpdate};
use formgen_core::error::CoreError;
use formgen_core::form::RenderableForm;
use formgen_core::generation::{translate_generated_with, StubGenerator};
use formgen_core::resolution::resolve_renderable;
use formgen_core::types::{FormId, Timestamp};
use formgen_db::{DraftRevision, FormStore, PgFormStore, StoreError};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Current time at the precision `TIMESTAMPTZ` stores.
fn db_now() -> Timestamp {
    Utc::now().trunc_subsecs(6)
}

fn generated_at(prompt: &str, at: Timestamp) -> Draft {
    translate_generated_with(&StubGenerator::output_for(prompt), prompt, FormId::new_v4(), at)
}

fn generated(prompt: &str) -> Draft {
    generated_at(prompt, db_now())
}

fn rename(name: &str) -> DraftRevision {
    let update = DraftUpdate {
        name: Some(name.to_string()),
        ..DraftUpdate::default()
    };
    Box::new(move |current: &Draft| -> Result<(Draft, RenderableForm), CoreError> {
        let next = revise(current, &update, db_now())?;
        let renderable = resolve_renderable(&next);
        Ok((next, renderable))
    })
}

// ---------------------------------------------------------------------------
// Insert and lookup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn insert_persists_draft_and_publishes(pool: PgPool) {
    let store = PgFormStore::new(pool);
    store.health_check().await.unwrap();

    let draft = generated("contact us");
    let renderable = resolve_renderable(&draft);
    let published = store.insert_draft(&draft, &renderable).await.unwrap();

    assert_eq!(published.draft_id, draft.id);
    assert_eq!(published.name, draft.name);
    assert_eq!(published.description, draft.description);
    assert_eq!(published.published_at, draft.updated_at);
    assert_eq!(published.renderable, renderable);

    assert_eq!(store.find_draft(draft.id).await.unwrap(), Some(draft.clone()));
    assert_eq!(
        store.find_published(published.id).await.unwrap(),
        Some(published.clone())
    );

    let summaries = store.list_drafts().await.unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].id, draft.id);
    assert_eq!(summaries[0].status, DraftStatus::Draft);

    assert_eq!(store.list_catalog().await.unwrap(), vec![published.entry()]);
}

#[sqlx::test(migrations = "./migrations")]
async fn unknown_ids_are_absent(pool: PgPool) {
    let store = PgFormStore::new(pool);
    assert_eq!(store.find_draft(FormId::new_v4()).await.unwrap(), None);
    assert_eq!(store.find_published(FormId::new_v4()).await.unwrap(), None);
    assert!(!store.delete_draft(FormId::new_v4()).await.unwrap());
    assert!(store
        .revise_draft(FormId::new_v4(), rename("x"))
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn listings_are_newest_first(pool: PgPool) {
    let store = PgFormStore::new(pool);
    let now = db_now();
    let old = generated_at("old", now - Duration::minutes(10));
    let new = generated_at("new", now - Duration::minutes(1));
    store.insert_draft(&old, &resolve_renderable(&old)).await.unwrap();
    store.insert_draft(&new, &resolve_renderable(&new)).await.unwrap();

    let ids: Vec<_> = store
        .list_drafts()
        .await
        .unwrap()
        .iter()
        .map(|d| d.id)
        .collect();
    assert_eq!(ids, vec![new.id, old.id]);

    let published: Vec<_> = store
        .list_catalog()
        .await
        .unwrap()
        .into_iter()
        .map(|entry| entry.published_at)
        .collect();
    assert_eq!(published, vec![new.updated_at, old.updated_at]);
}

// ---------------------------------------------------------------------------
// Revisions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn republishing_keeps_published_id(pool: PgPool) {
    let store = PgFormStore::new(pool);
    let draft = generated("contact us");
    let first = store
        .insert_draft(&draft, &resolve_renderable(&draft))
        .await
        .unwrap();

    let (next, published) = store
        .revise_draft(draft.id, rename("Renamed"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(next.version, 2);
    assert_eq!(next.status, DraftStatus::Saved);
    assert_eq!(next.created_at, draft.created_at);
    assert_eq!(published.id, first.id);
    assert_eq!(published.name, "Renamed");
    assert_eq!(published.renderable.name, "Renamed");
    assert_eq!(published.published_at, next.updated_at);

    let catalog = store.list_catalog().await.unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog[0].id, first.id);
    assert_eq!(store.find_draft(draft.id).await.unwrap(), Some(next));
}

#[sqlx::test(migrations = "./migrations")]
async fn rejected_revision_leaves_rows_unchanged(pool: PgPool) {
    let store = PgFormStore::new(pool);
    let draft = generated("contact us");
    let first = store
        .insert_draft(&draft, &resolve_renderable(&draft))
        .await
        .unwrap();

    let err = store
        .revise_draft(draft.id, rename("   "))
        .await
        .unwrap_err();

    assert_matches!(err, StoreError::Core(CoreError::DraftValidation(ref v)) if v.len() == 1);
    assert_eq!(store.find_draft(draft.id).await.unwrap(), Some(draft));
    assert_eq!(store.find_published(first.id).await.unwrap(), Some(first));
}

#[sqlx::test(migrations = "./migrations")]
async fn concurrent_revisions_are_serialized(pool: PgPool) {
    let store = Arc::new(PgFormStore::new(pool));
    let draft = generated("contact us");
    store
        .insert_draft(&draft, &resolve_renderable(&draft))
        .await
        .unwrap();
    let id = draft.id;

    let tasks: Vec<_> = (0..5)
        .map(|i| {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                store
                    .revise_draft(id, rename(&format!("Edit {i}")))
                    .await
                    .unwrap()
                    .unwrap()
            })
        })
        .collect();

    let mut versions = Vec::new();
    for task in tasks {
        versions.push(task.await.unwrap().0.version);
    }
    versions.sort_unstable();

    assert_eq!(versions, (2..=6).collect::<Vec<_>>());
    assert_eq!(store.find_draft(id).await.unwrap().unwrap().version, 6);
    assert_eq!(store.list_catalog().await.unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn delete_keeps_catalog_row(pool: PgPool) {
    let store = PgFormStore::new(pool);
    let draft = generated("contact us");
    let published = store
        .insert_draft(&draft, &resolve_renderable(&draft))
        .await
        .unwrap();

    assert!(store.delete_draft(draft.id).await.unwrap());
    assert!(!store.delete_draft(draft.id).await.unwrap());
    assert_eq!(store.find_draft(draft.id).await.unwrap(), None);
    assert!(store.list_drafts().await.unwrap().is_empty());
    assert_eq!(
        store.find_published(published.id).await.unwrap(),
        Some(published.clone())
    );
    assert_eq!(store.list_catalog().await.unwrap(), vec![published.entry()]);
}
