//! Behavioral tests for the memory store over an in-memory Milvus
//!
//! These tests exercise the store end to end and verify:
//! - Collection setup is idempotent and never builds an index twice
//! - Upserted records read back with the same embedding
//! - Nearest-match ranking and relevance cut-off
//! - Batch reads, removals and empty batches
//! - Local validation happens before any call reaches the server

mod common;

use std::sync::Arc;

use common::FakeMilvus;
use domain_memory::*;
use milvus_client::CancellationToken;

const COLLECTION: &str = "test";

fn store_on(fake: &Arc<FakeMilvus>) -> MilvusMemoryStore<FakeMilvus> {
    MilvusMemoryStore::with_shared_client(Arc::clone(fake), MemoryStoreConfig::new(3)).unwrap()
}

async fn ready_store() -> (Arc<FakeMilvus>, MilvusMemoryStore<FakeMilvus>) {
    let fake = Arc::new(FakeMilvus::new());
    let store = store_on(&fake);
    store
        .create_collection(COLLECTION, &CancellationToken::new())
        .await
        .unwrap();
    (fake, store)
}

fn records() -> Vec<MemoryRecord> {
    vec![
        MemoryRecord::local("Id", "text", "description", vec![1.0, 1.0, 1.0]),
        MemoryRecord::local("Id2", "text2", "description2", vec![2.0, 2.0, 2.0]),
        MemoryRecord::local("Id3", "text3", "description3", vec![3.0, 3.0, 3.0]),
    ]
}

// ============================================================================
// Collection lifecycle
// ============================================================================

#[tokio::test]
async fn test_create_collection_builds_index_and_loads() {
    let (fake, store) = ready_store().await;

    assert_eq!(
        fake.calls(),
        vec![
            "has_collection",
            "create_collection",
            "get_index_state",
            "create_index",
            "load_collection",
        ]
    );
    assert_eq!(fake.index_builds(), 1);
    assert!(fake.is_loaded(COLLECTION));
    assert!(store
        .does_collection_exist(COLLECTION, &CancellationToken::new())
        .await
        .unwrap());
}

#[tokio::test]
async fn test_create_collection_twice_is_idempotent() {
    let (fake, store) = ready_store().await;
    let cancel = CancellationToken::new();

    // index is InProgress on the second check, Finished on the third
    store.create_collection(COLLECTION, &cancel).await.unwrap();
    store.create_collection(COLLECTION, &cancel).await.unwrap();

    assert_eq!(fake.index_builds(), 1);
    assert_eq!(
        fake.calls().iter().filter(|c| **c == "create_collection").count(),
        1
    );
    assert_eq!(
        fake.calls().iter().filter(|c| **c == "load_collection").count(),
        3
    );
    assert_eq!(store.list_collections(&cancel).await.unwrap(), vec![COLLECTION.to_string()]);
}

#[tokio::test]
async fn test_delete_collection() {
    let (_fake, store) = ready_store().await;
    let cancel = CancellationToken::new();

    store.delete_collection(COLLECTION, &cancel).await.unwrap();

    assert!(!store.does_collection_exist(COLLECTION, &cancel).await.unwrap());
    assert!(store.list_collections(&cancel).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_collection_surfaces_database_error() {
    let fake = Arc::new(FakeMilvus::new());
    let store = store_on(&fake);

    let err = store
        .delete_collection("nope", &CancellationToken::new())
        .await
        .unwrap_err();
    assert_eq!(err.code(), Some(milvus_client::ErrorCode::CollectionNotExists));
}

// ============================================================================
// Upsert and get
// ============================================================================

#[tokio::test]
async fn test_upsert_then_get_round_trips_embedding() {
    let (_fake, store) = ready_store().await;
    let cancel = CancellationToken::new();
    let record = MemoryRecord::local("Id", "text", "description", vec![0.25, -1.5, 3.0]);

    let id = store.upsert(COLLECTION, record.clone(), &cancel).await.unwrap();
    assert_eq!(id, "Id");

    let stored = store.get(COLLECTION, &id, true, &cancel).await.unwrap().unwrap();
    assert_eq!(stored.metadata, record.metadata);
    let embedding = stored.embedding.unwrap();
    for (got, want) in embedding.iter().zip([0.25, -1.5, 3.0]) {
        assert!((got - want).abs() < 1e-6);
    }
}

#[tokio::test]
async fn test_get_without_embedding_leaves_it_out() {
    let (_fake, store) = ready_store().await;
    let cancel = CancellationToken::new();
    store.upsert_batch(COLLECTION, records(), &cancel).await.unwrap();

    let stored = store.get(COLLECTION, "Id2", false, &cancel).await.unwrap().unwrap();
    assert_eq!(stored.metadata.text, "text2");
    assert!(stored.embedding.is_none());
}

#[tokio::test]
async fn test_get_unknown_key_is_none() {
    let (_fake, store) = ready_store().await;

    let stored = store
        .get(COLLECTION, "missing", true, &CancellationToken::new())
        .await
        .unwrap();
    assert!(stored.is_none());
}

#[tokio::test]
async fn test_upsert_batch_returns_permutation_of_keys() {
    let (fake, store) = ready_store().await;

    let mut ids = store
        .upsert_batch(COLLECTION, records(), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(fake.row_count(COLLECTION), 3);
    ids.sort();
    assert_eq!(ids, vec!["Id", "Id2", "Id3"]);
}

#[tokio::test]
async fn test_empty_upsert_batch_makes_no_call() {
    let (fake, store) = ready_store().await;
    let before = fake.call_count();

    let ids = store
        .upsert_batch(COLLECTION, Vec::new(), &CancellationToken::new())
        .await
        .unwrap();

    assert!(ids.is_empty());
    assert_eq!(fake.call_count(), before);
}

#[tokio::test]
async fn test_get_batch_streams_existing_records() {
    let (_fake, store) = ready_store().await;
    let cancel = CancellationToken::new();
    store.upsert_batch(COLLECTION, records(), &cancel).await.unwrap();

    let keys = vec!["Id".to_string(), "Id3".to_string(), "unknown".to_string()];
    let batch = store.get_batch(COLLECTION, &keys, true, &cancel).await.unwrap();
    assert_eq!(batch.len(), 2);

    let mut found: Vec<MemoryRecord> = batch.collect::<MemoryResult<_>>().unwrap();
    found.sort_by(|a, b| a.key().cmp(b.key()));
    assert_eq!(found[0].key(), "Id");
    assert_eq!(found[1].embedding, Some(vec![3.0, 3.0, 3.0]));
}

// ============================================================================
// Nearest matches
// ============================================================================

#[tokio::test]
async fn test_nearest_match_ranks_by_inner_product() {
    let (_fake, store) = ready_store().await;
    let cancel = CancellationToken::new();
    store.upsert_batch(COLLECTION, records(), &cancel).await.unwrap();

    let (best, score) = store
        .get_nearest_match(COLLECTION, &[1.0, 1.0, 1.0], 0.0, false, &cancel)
        .await
        .unwrap()
        .unwrap();

    // inner product favours the largest vector
    assert_eq!(best.key(), "Id3");
    assert!((score - 9.0).abs() < 1e-6);
    assert!(best.embedding.is_none());
}

#[tokio::test]
async fn test_relevance_above_top_score_yields_nothing() {
    let (_fake, store) = ready_store().await;
    let cancel = CancellationToken::new();
    store.upsert_batch(COLLECTION, records(), &cancel).await.unwrap();

    let best = store
        .get_nearest_match(COLLECTION, &[1.0, 1.0, 1.0], 9.5, false, &cancel)
        .await
        .unwrap();
    assert!(best.is_none());
}

#[tokio::test]
async fn test_nearest_matches_keep_server_order_and_embeddings() {
    let (_fake, store) = ready_store().await;
    let cancel = CancellationToken::new();
    store.upsert_batch(COLLECTION, records(), &cancel).await.unwrap();

    let matches: Vec<(MemoryRecord, f64)> = store
        .get_nearest_matches(COLLECTION, &[1.0, 1.0, 1.0], 3, 6.0, true, &cancel)
        .await
        .unwrap()
        .collect::<MemoryResult<_>>()
        .unwrap();

    let keys: Vec<&str> = matches.iter().map(|(r, _)| r.key()).collect();
    assert_eq!(keys, vec!["Id3", "Id2"]);
    assert_eq!(matches[1].0.embedding, Some(vec![2.0, 2.0, 2.0]));
    assert!(matches[0].1 >= matches[1].1);
}

// ============================================================================
// Removal
// ============================================================================

#[tokio::test]
async fn test_remove_single_key() {
    let (fake, store) = ready_store().await;
    let cancel = CancellationToken::new();
    store.upsert_batch(COLLECTION, records(), &cancel).await.unwrap();

    store.remove(COLLECTION, "Id2", &cancel).await.unwrap();

    assert_eq!(fake.row_count(COLLECTION), 2);
    assert!(store.get(COLLECTION, "Id2", false, &cancel).await.unwrap().is_none());
}

#[tokio::test]
async fn test_remove_batch_then_get_finds_nothing() {
    let (_fake, store) = ready_store().await;
    let cancel = CancellationToken::new();
    store.upsert_batch(COLLECTION, records(), &cancel).await.unwrap();

    let removed = vec!["Id".to_string(), "Id3".to_string()];
    store.remove_batch(COLLECTION, &removed, &cancel).await.unwrap();

    for key in &removed {
        assert!(store.get(COLLECTION, key, false, &cancel).await.unwrap().is_none());
    }
    assert!(store.get(COLLECTION, "Id2", false, &cancel).await.unwrap().is_some());
}

// ============================================================================
// Validation, cancellation and disposal
// ============================================================================

#[tokio::test]
async fn test_validation_errors_make_no_calls() {
    let fake = Arc::new(FakeMilvus::new());
    let store = store_on(&fake);
    let cancel = CancellationToken::new();

    assert!(store.create_collection("", &cancel).await.is_err());
    assert!(store.does_collection_exist("  ", &cancel).await.is_err());
    assert!(store.remove("", "key", &cancel).await.is_err());
    assert!(store.get(COLLECTION, "", false, &cancel).await.is_err());
    assert!(store
        .get_nearest_matches(COLLECTION, &[1.0], 1, 0.0, false, &cancel)
        .await
        .is_err());
    assert!(store
        .upsert(COLLECTION, MemoryRecord::local("", "t", "d", vec![1.0, 1.0, 1.0]), &cancel)
        .await
        .is_err());

    assert_eq!(fake.call_count(), 0);
}

#[tokio::test]
async fn test_cancelled_token_fails_with_cancellation() {
    let (_fake, store) = ready_store().await;
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = store.get(COLLECTION, "Id", false, &cancel).await.unwrap_err();
    assert!(err.is_cancelled());
}

#[tokio::test]
async fn test_close_releases_client() {
    let (fake, store) = ready_store().await;

    store.close();

    assert!(fake.is_closed());
    let result = store
        .does_collection_exist(COLLECTION, &CancellationToken::new())
        .await;
    assert!(matches!(
        result,
        Err(MemoryError::Milvus(milvus_client::MilvusError::Transport(_)))
    ));
}
