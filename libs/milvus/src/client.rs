//! Transport-neutral client contract.
//!
//! Each capability group is its own trait so callers can depend on just
//! what they use. `MilvusClient` bundles them; both transports implement
//! every group, and any type that does gets `MilvusClient` for free.
//!
//! Every operation takes a `CancellationToken`. Firing it abandons the
//! in-flight call and yields [`MilvusError::Cancelled`].

use std::collections::HashMap;
use std::future::Future;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio_util::sync::CancellationToken;

use crate::error::{MilvusError, MilvusResult};
use crate::request::{
    CalcDistanceRequest, CreateCollectionRequest, CreateIndexRequest, DeleteRequest,
    InsertRequest, QueryRequest, SearchRequest,
};
use crate::results::{
    CollectionDescription, CollectionInfo, CompactionPlans, DistanceMatrix, FlushResult,
    HealthState, IndexBuildProgress, IndexDescription, MetricsResponse, MutationResult,
    PartitionInfo, PersistentSegmentInfo, QueryResult, QuerySegmentInfo, SearchResult,
};
use crate::types::{CompactionState, IndexState, ShowType};

#[async_trait]
pub trait CollectionClient: Send + Sync {
    async fn create_collection(
        &self,
        request: CreateCollectionRequest,
        cancel: &CancellationToken,
    ) -> MilvusResult<()>;

    async fn drop_collection(
        &self,
        collection_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<()>;

    async fn describe_collection(
        &self,
        collection_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<CollectionDescription>;

    /// Existence check, optionally as of a point in time.
    async fn has_collection(
        &self,
        collection_name: &str,
        as_of: Option<DateTime<Utc>>,
        cancel: &CancellationToken,
    ) -> MilvusResult<bool>;

    async fn show_collections(
        &self,
        collection_names: &[String],
        show_type: ShowType,
        cancel: &CancellationToken,
    ) -> MilvusResult<Vec<CollectionInfo>>;

    async fn load_collection(
        &self,
        collection_name: &str,
        replica_number: i32,
        cancel: &CancellationToken,
    ) -> MilvusResult<()>;

    async fn release_collection(
        &self,
        collection_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<()>;

    /// Percentage loaded, for the collection or just the named partitions.
    async fn get_loading_progress(
        &self,
        collection_name: &str,
        partition_names: &[String],
        cancel: &CancellationToken,
    ) -> MilvusResult<i64>;

    async fn get_collection_statistics(
        &self,
        collection_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<HashMap<String, String>>;
}

#[async_trait]
pub trait PartitionClient: Send + Sync {
    async fn create_partition(
        &self,
        collection_name: &str,
        partition_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<()>;

    async fn drop_partition(
        &self,
        collection_name: &str,
        partition_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<()>;

    async fn has_partition(
        &self,
        collection_name: &str,
        partition_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<bool>;

    async fn show_partitions(
        &self,
        collection_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<Vec<PartitionInfo>>;

    async fn load_partitions(
        &self,
        collection_name: &str,
        partition_names: &[String],
        replica_number: i32,
        cancel: &CancellationToken,
    ) -> MilvusResult<()>;

    async fn release_partitions(
        &self,
        collection_name: &str,
        partition_names: &[String],
        cancel: &CancellationToken,
    ) -> MilvusResult<()>;

    async fn get_partition_statistics(
        &self,
        collection_name: &str,
        partition_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<HashMap<String, String>>;
}

#[async_trait]
pub trait AliasClient: Send + Sync {
    async fn create_alias(
        &self,
        collection_name: &str,
        alias: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<()>;

    async fn drop_alias(&self, alias: &str, cancel: &CancellationToken) -> MilvusResult<()>;

    async fn alter_alias(
        &self,
        collection_name: &str,
        alias: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<()>;
}

#[async_trait]
pub trait IndexClient: Send + Sync {
    async fn create_index(
        &self,
        request: CreateIndexRequest,
        cancel: &CancellationToken,
    ) -> MilvusResult<()>;

    async fn drop_index(
        &self,
        collection_name: &str,
        field_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<()>;

    async fn describe_index(
        &self,
        collection_name: &str,
        field_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<Vec<IndexDescription>>;

    async fn get_index_build_progress(
        &self,
        collection_name: &str,
        field_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<IndexBuildProgress>;

    async fn get_index_state(
        &self,
        collection_name: &str,
        field_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<IndexState>;
}

#[async_trait]
pub trait EntityClient: Send + Sync {
    async fn insert(
        &self,
        request: InsertRequest,
        cancel: &CancellationToken,
    ) -> MilvusResult<MutationResult>;

    async fn delete(
        &self,
        request: DeleteRequest,
        cancel: &CancellationToken,
    ) -> MilvusResult<MutationResult>;

    async fn query(
        &self,
        request: QueryRequest,
        cancel: &CancellationToken,
    ) -> MilvusResult<QueryResult>;

    async fn search(
        &self,
        request: SearchRequest,
        cancel: &CancellationToken,
    ) -> MilvusResult<SearchResult>;

    async fn calc_distance(
        &self,
        request: CalcDistanceRequest,
        cancel: &CancellationToken,
    ) -> MilvusResult<DistanceMatrix>;

    async fn flush(
        &self,
        collection_names: &[String],
        cancel: &CancellationToken,
    ) -> MilvusResult<FlushResult>;

    /// True once every listed segment is flushed.
    async fn get_flush_state(
        &self,
        segment_ids: &[i64],
        cancel: &CancellationToken,
    ) -> MilvusResult<bool>;

    async fn get_persistent_segment_info(
        &self,
        collection_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<Vec<PersistentSegmentInfo>>;

    async fn get_query_segment_info(
        &self,
        collection_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<Vec<QuerySegmentInfo>>;
}

#[async_trait]
pub trait CredentialClient: Send + Sync {
    async fn create_credential(
        &self,
        username: &str,
        password: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<()>;

    async fn update_credential(
        &self,
        username: &str,
        old_password: &str,
        new_password: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<()>;

    async fn delete_credential(
        &self,
        username: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<()>;

    async fn list_users(&self, cancel: &CancellationToken) -> MilvusResult<Vec<String>>;
}

#[async_trait]
pub trait ServerClient: Send + Sync {
    /// A non-success health check is reported as an unhealthy state, not an error.
    async fn health(&self, cancel: &CancellationToken) -> MilvusResult<HealthState>;

    async fn version(&self, cancel: &CancellationToken) -> MilvusResult<String>;

    async fn metrics(
        &self,
        request: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<MetricsResponse>;

    /// Returns the compaction id.
    async fn manual_compaction(
        &self,
        collection_id: i64,
        travel_timestamp: Option<DateTime<Utc>>,
        cancel: &CancellationToken,
    ) -> MilvusResult<i64>;

    async fn get_compaction_state(
        &self,
        compaction_id: i64,
        cancel: &CancellationToken,
    ) -> MilvusResult<CompactionState>;

    async fn get_compaction_plans(
        &self,
        compaction_id: i64,
        cancel: &CancellationToken,
    ) -> MilvusResult<CompactionPlans>;

    /// Server address this client talks to.
    fn address(&self) -> String;

    /// Releases the connection. Later calls fail.
    fn close(&self);
}

/// Every capability group.
pub trait MilvusClient:
    CollectionClient
    + PartitionClient
    + AliasClient
    + IndexClient
    + EntityClient
    + CredentialClient
    + ServerClient
{
}

impl<T> MilvusClient for T where
    T: CollectionClient
        + PartitionClient
        + AliasClient
        + IndexClient
        + EntityClient
        + CredentialClient
        + ServerClient
{
}

/// Runs `future` unless either token fires first. `shutdown` is the
/// client's own token, fired by `close()`.
pub(crate) async fn cancellable<T, F>(
    cancel: &CancellationToken,
    shutdown: &CancellationToken,
    future: F,
) -> MilvusResult<T>
where
    F: Future<Output = MilvusResult<T>>,
{
    if shutdown.is_cancelled() {
        return Err(MilvusError::Transport("client is closed".to_string()));
    }
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(MilvusError::Cancelled),
        _ = shutdown.cancelled() => Err(MilvusError::Transport("client is closed".to_string())),
        result = future => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_cancellable_passes_result_through() {
        let cancel = CancellationToken::new();
        let shutdown = CancellationToken::new();
        let result = cancellable(&cancel, &shutdown, async { Ok(7) }).await;
        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_cancellable_stops_on_cancel() {
        let cancel = CancellationToken::new();
        let shutdown = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            trigger.cancel();
        });

        let result: MilvusResult<()> = cancellable(&cancel, &shutdown, async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(())
        })
        .await;
        assert!(matches!(result, Err(MilvusError::Cancelled)));
    }

    #[tokio::test]
    async fn test_cancellable_rejects_after_close() {
        let cancel = CancellationToken::new();
        let shutdown = CancellationToken::new();
        shutdown.cancel();
        let result = cancellable(&cancel, &shutdown, async { Ok(1) }).await;
        assert!(matches!(result, Err(MilvusError::Transport(_))));
    }

    #[tokio::test]
    async fn test_precancelled_token_wins() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let shutdown = CancellationToken::new();
        let result = cancellable(&cancel, &shutdown, async { Ok(1) }).await;
        assert!(matches!(result, Err(MilvusError::Cancelled)));
    }
}
