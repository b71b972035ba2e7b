use std::sync::Arc;

use milvus_client::request::Validate;
use milvus_client::{
    CollectionClient, Column, CreateCollectionRequest, CreateIndexRequest, DeleteRequest,
    EntityClient, ErrorCode, FieldSchema, IndexClient, IndexState, IndexType, InsertRequest,
    MilvusConfig, MilvusError, MilvusGrpcClient, MilvusRestClient, QueryRequest, SearchRequest,
    ServerClient, ShowType, VectorData,
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::config::MemoryStoreConfig;
use crate::error::{MemoryError, MemoryResult};
use crate::record::MemoryRecord;
use crate::rows::{MemoryMatches, MemoryRecords};

pub const ID_FIELD: &str = "Id";
pub const EMBEDDING_FIELD: &str = "embedding";
pub const METADATA_FIELD: &str = "metadata";
pub const DEFAULT_INDEX_NAME: &str = "_default_idx";
pub const KEY_MAX_LENGTH: i32 = 100;

/// Key/embedding/metadata store over one Milvus client.
///
/// Every collection it manages has the same three-field layout: a varchar
/// primary key, one float vector, and the record metadata as a JSON string.
pub struct MilvusMemoryStore<C> {
    client: Arc<C>,
    config: MemoryStoreConfig,
}

impl MilvusMemoryStore<MilvusGrpcClient> {
    /// Opens a gRPC connection and builds a store on it.
    pub async fn connect(connection: MilvusConfig, vector_size: i64) -> MemoryResult<Self> {
        let config = MemoryStoreConfig::for_connection(&connection, vector_size);
        let client = MilvusGrpcClient::connect(connection).await?;
        Self::new(client, config)
    }
}

impl MilvusMemoryStore<MilvusRestClient> {
    pub fn connect_rest(connection: MilvusConfig, vector_size: i64) -> MemoryResult<Self> {
        let config = MemoryStoreConfig::for_connection(&connection, vector_size);
        let client = MilvusRestClient::new(connection)?;
        Self::new(client, config)
    }
}

impl<C> MilvusMemoryStore<C>
where
    C: CollectionClient + IndexClient + EntityClient,
{
    pub fn new(client: C, config: MemoryStoreConfig) -> MemoryResult<Self> {
        Self::with_shared_client(Arc::new(client), config)
    }

    /// Builds a store on a client that other code keeps using.
    pub fn with_shared_client(client: Arc<C>, config: MemoryStoreConfig) -> MemoryResult<Self> {
        config.validate()?;
        Ok(Self { client, config })
    }

    pub fn client(&self) -> &Arc<C> {
        &self.client
    }

    pub fn config(&self) -> &MemoryStoreConfig {
        &self.config
    }

    // ===== Collections =====

    /// Creates the collection, its vector index and loads it. Each step is
    /// skipped when already done, so calling this again is harmless.
    pub async fn create_collection(
        &self,
        collection: &str,
        cancel: &CancellationToken,
    ) -> MemoryResult<()> {
        let result: MemoryResult<()> = async {
            require_collection(collection)?;

            if !self.client.has_collection(collection, None, cancel).await? {
                let request = CreateCollectionRequest::new(collection, self.schema_fields())
                    .with_consistency_level(self.config.consistency_level);
                request.validate()?;
                self.client.create_collection(request, cancel).await?;
                info!(target: "domain_memory", collection = %collection, "Created collection");
            }

            let lookup = self
                .client
                .get_index_state(collection, EMBEDDING_FIELD, cancel)
                .await;
            let state = match lookup {
                Ok(state) => state,
                Err(err) if err.code() == Some(ErrorCode::IndexNotExist) => IndexState::None,
                Err(err) => return Err(err.into()),
            };
            debug!(
                target: "domain_memory",
                collection = %collection,
                state = ?state,
                "Index state"
            );

            if state == IndexState::None {
                let request = self.index_request(collection);
                request.validate()?;
                self.client.create_index(request, cancel).await?;
                info!(
                    target: "domain_memory",
                    collection = %collection,
                    index_type = self.config.effective_index_type().as_str(),
                    "Created vector index"
                );
            }

            self.client
                .load_collection(collection, self.config.replica_number, cancel)
                .await?;
            Ok(())
        }
        .await;
        logged("create_collection", collection, result)
    }

    pub async fn delete_collection(
        &self,
        collection: &str,
        cancel: &CancellationToken,
    ) -> MemoryResult<()> {
        let result: MemoryResult<()> = async {
            require_collection(collection)?;
            self.client.drop_collection(collection, cancel).await?;
            Ok(())
        }
        .await;
        logged("delete_collection", collection, result)
    }

    pub async fn does_collection_exist(
        &self,
        collection: &str,
        cancel: &CancellationToken,
    ) -> MemoryResult<bool> {
        let result: MemoryResult<bool> = async {
            require_collection(collection)?;
            Ok(self.client.has_collection(collection, None, cancel).await?)
        }
        .await;
        logged("does_collection_exist", collection, result)
    }

    /// Names of every collection in the database.
    pub async fn list_collections(&self, cancel: &CancellationToken) -> MemoryResult<Vec<String>> {
        let result: MemoryResult<Vec<String>> = async {
            let collections = self.client.show_collections(&[], ShowType::All, cancel).await?;
            Ok(collections.into_iter().map(|c| c.name).collect())
        }
        .await;
        logged("list_collections", "*", result)
    }

    // ===== Reads =====

    /// The record stored under `key`, or `None`.
    pub async fn get(
        &self,
        collection: &str,
        key: &str,
        with_embedding: bool,
        cancel: &CancellationToken,
    ) -> MemoryResult<Option<MemoryRecord>> {
        let result: MemoryResult<Option<MemoryRecord>> = async {
            require_key(key)?;
            let mut records = self
                .query_records(collection, &[key.to_string()], with_embedding, cancel)
                .await?;
            records.next().transpose()
        }
        .await;
        logged("get", collection, result)
    }

    /// All records whose key is listed, in one query. Missing keys are
    /// simply absent from the result.
    pub async fn get_batch(
        &self,
        collection: &str,
        keys: &[String],
        with_embeddings: bool,
        cancel: &CancellationToken,
    ) -> MemoryResult<MemoryRecords> {
        let result: MemoryResult<MemoryRecords> = async {
            require_collection(collection)?;
            keys.iter().try_for_each(|k| require_key(k))?;
            if keys.is_empty() {
                return Ok(MemoryRecords::empty());
            }
            self.query_records(collection, keys, with_embeddings, cancel).await
        }
        .await;
        logged("get_batch", collection, result)
    }

    /// The single best match scoring at least `min_relevance_score`.
    pub async fn get_nearest_match(
        &self,
        collection: &str,
        embedding: &[f32],
        min_relevance_score: f64,
        with_embedding: bool,
        cancel: &CancellationToken,
    ) -> MemoryResult<Option<(MemoryRecord, f64)>> {
        let mut matches = self
            .get_nearest_matches(
                collection,
                embedding,
                1,
                min_relevance_score,
                with_embedding,
                cancel,
            )
            .await?;
        matches.next().transpose()
    }

    /// Up to `limit` matches, best first as ranked by the server. Hits
    /// scoring below `min_relevance_score` are dropped.
    pub async fn get_nearest_matches(
        &self,
        collection: &str,
        embedding: &[f32],
        limit: i64,
        min_relevance_score: f64,
        with_embeddings: bool,
        cancel: &CancellationToken,
    ) -> MemoryResult<MemoryMatches> {
        let result: MemoryResult<MemoryMatches> = async {
            self.require_dimension(embedding)?;

            let mut output_fields = vec![METADATA_FIELD.to_string()];
            if with_embeddings {
                output_fields.push(EMBEDDING_FIELD.to_string());
            }
            let request = SearchRequest::new(
                collection,
                EMBEDDING_FIELD,
                VectorData::Float(vec![embedding.to_vec()]),
                limit,
                self.config.metric_type,
            )
            .with_params(self.config.search_params.clone())
            .with_output_fields(output_fields)
            .with_consistency_level(self.config.consistency_level);
            request.validate()?;

            let mut result = self.client.search(request, cancel).await?;
            let hits: Vec<_> = result
                .hits(0)
                .into_iter()
                .filter(|hit| f64::from(hit.score) >= min_relevance_score)
                .collect();
            debug!(
                target: "domain_memory",
                collection = %collection,
                returned = result.ids.len(),
                kept = hits.len(),
                "Search finished"
            );
            MemoryMatches::new(std::mem::take(&mut result.columns), hits, with_embeddings)
        }
        .await;
        logged("get_nearest_matches", collection, result)
    }

    // ===== Writes =====

    /// Stores one record and returns the key the server assigned to it.
    pub async fn upsert(
        &self,
        collection: &str,
        record: MemoryRecord,
        cancel: &CancellationToken,
    ) -> MemoryResult<String> {
        let ids = self.upsert_batch(collection, vec![record], cancel).await?;
        ids.into_iter().next().ok_or_else(|| {
            MemoryError::Milvus(MilvusError::Transport(
                "Insert returned no primary keys".to_string(),
            ))
        })
    }

    /// Stores all records in one insert. Keys come back in the order the
    /// server reports them, which need not match the input order.
    pub async fn upsert_batch(
        &self,
        collection: &str,
        records: Vec<MemoryRecord>,
        cancel: &CancellationToken,
    ) -> MemoryResult<Vec<String>> {
        let result: MemoryResult<Vec<String>> = async {
            require_collection(collection)?;
            if records.is_empty() {
                return Ok(Vec::new());
            }

            let request = InsertRequest::new(collection, self.record_columns(records)?);
            request.validate()?;
            let mutation = self.client.insert(request, cancel).await?;
            debug!(
                target: "domain_memory",
                collection = %collection,
                inserted = mutation.insert_count,
                "Upserted records"
            );
            Ok(mutation.ids.to_strings())
        }
        .await;
        logged("upsert_batch", collection, result)
    }

    pub async fn remove(
        &self,
        collection: &str,
        key: &str,
        cancel: &CancellationToken,
    ) -> MemoryResult<()> {
        let result: MemoryResult<()> = async {
            require_key(key)?;
            self.delete_keys(collection, &[key.to_string()], cancel).await
        }
        .await;
        logged("remove", collection, result)
    }

    pub async fn remove_batch(
        &self,
        collection: &str,
        keys: &[String],
        cancel: &CancellationToken,
    ) -> MemoryResult<()> {
        let result: MemoryResult<()> = async {
            require_collection(collection)?;
            keys.iter().try_for_each(|k| require_key(k))?;
            if keys.is_empty() {
                return Ok(());
            }
            self.delete_keys(collection, keys, cancel).await
        }
        .await;
        logged("remove_batch", collection, result)
    }

    // ===== Internals =====

    fn schema_fields(&self) -> Vec<FieldSchema> {
        vec![
            FieldSchema::varchar(ID_FIELD, KEY_MAX_LENGTH).primary_key(false),
            FieldSchema::float_vector(EMBEDDING_FIELD, self.config.vector_size),
            FieldSchema::varchar(METADATA_FIELD, self.config.metadata_max_length),
        ]
    }

    fn index_request(&self, collection: &str) -> CreateIndexRequest {
        let index_type = self.config.effective_index_type();
        let mut request = CreateIndexRequest::new(
            collection,
            EMBEDDING_FIELD,
            index_type,
            self.config.metric_type,
        )
        .with_index_name(DEFAULT_INDEX_NAME);
        // AUTOINDEX picks its own build parameters
        if index_type != IndexType::AutoIndex {
            for (key, value) in &self.config.index_params {
                request = request.with_param(key.clone(), value.clone());
            }
        }
        request
    }

    fn require_dimension(&self, embedding: &[f32]) -> MemoryResult<()> {
        if embedding.len() as i64 != self.config.vector_size {
            return Err(MemoryError::validation(format!(
                "embedding has dimension {}, collection expects {}",
                embedding.len(),
                self.config.vector_size
            )));
        }
        Ok(())
    }

    /// Splits records into the id, embedding and metadata columns.
    fn record_columns(&self, records: Vec<MemoryRecord>) -> MemoryResult<Vec<Column>> {
        let mut ids = Vec::with_capacity(records.len());
        let mut embeddings = Vec::with_capacity(records.len());
        let mut metadata = Vec::with_capacity(records.len());

        for record in records {
            require_key(record.key())?;
            if record.key().len() > KEY_MAX_LENGTH as usize {
                return Err(MemoryError::validation(format!(
                    "key '{}' is longer than {} characters",
                    record.key(),
                    KEY_MAX_LENGTH
                )));
            }
            let json = record.serialized_metadata()?;
            if json.len() > self.config.metadata_max_length as usize {
                return Err(MemoryError::validation(format!(
                    "metadata of '{}' is {} bytes, limit is {}",
                    record.key(),
                    json.len(),
                    self.config.metadata_max_length
                )));
            }
            let embedding = record.embedding.ok_or_else(|| {
                MemoryError::validation(format!("record '{}' has no embedding", record.metadata.id))
            })?;
            self.require_dimension(&embedding)?;

            ids.push(record.metadata.id);
            embeddings.push(embedding);
            metadata.push(json);
        }

        Ok(vec![
            Column::varchar(ID_FIELD, ids),
            Column::float_vector(EMBEDDING_FIELD, embeddings),
            Column::varchar(METADATA_FIELD, metadata),
        ])
    }

    async fn query_records(
        &self,
        collection: &str,
        keys: &[String],
        with_embeddings: bool,
        cancel: &CancellationToken,
    ) -> MemoryResult<MemoryRecords> {
        let mut output_fields = vec![METADATA_FIELD.to_string()];
        if with_embeddings {
            output_fields.push(EMBEDDING_FIELD.to_string());
        }
        let request = QueryRequest::new(collection, key_filter(keys))
            .with_output_fields(output_fields)
            .with_consistency_level(self.config.consistency_level);
        request.validate()?;

        let result = self.client.query(request, cancel).await?;
        MemoryRecords::from_columns(result.columns, with_embeddings)
    }

    async fn delete_keys(
        &self,
        collection: &str,
        keys: &[String],
        cancel: &CancellationToken,
    ) -> MemoryResult<()> {
        let request = DeleteRequest::new(collection, key_filter(keys));
        request.validate()?;
        let mutation = self.client.delete(request, cancel).await?;
        debug!(
            target: "domain_memory",
            collection = %collection,
            deleted = mutation.delete_count,
            "Removed records"
        );
        Ok(())
    }
}

impl<C> MilvusMemoryStore<C>
where
    C: CollectionClient + IndexClient + EntityClient + ServerClient,
{
    /// Closes the underlying connection. The store is unusable afterwards.
    pub fn close(&self) {
        debug!(target: "domain_memory", address = %self.client.address(), "Closing memory store");
        self.client.close();
    }
}

/// `Id in ["a", "b"]`, with quotes and backslashes in keys escaped.
pub(crate) fn key_filter(keys: &[String]) -> String {
    let quoted: Vec<String> = keys
        .iter()
        .map(|key| format!("\"{}\"", key.replace('\\', "\\\\").replace('"', "\\\"")))
        .collect();
    format!("{} in [{}]", ID_FIELD, quoted.join(", "))
}

fn require_collection(collection: &str) -> MemoryResult<()> {
    if collection.trim().is_empty() {
        return Err(MemoryError::validation("collection name cannot be empty"));
    }
    Ok(())
}

fn require_key(key: &str) -> MemoryResult<()> {
    if key.trim().is_empty() {
        return Err(MemoryError::validation("key cannot be empty"));
    }
    Ok(())
}

fn logged<T>(
    operation: &'static str,
    collection: &str,
    result: MemoryResult<T>,
) -> MemoryResult<T> {
    if let Err(err) = &result {
        error!(
            target: "domain_memory",
            operation,
            collection = %collection,
            error = %err,
            "Memory store operation failed"
        );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use milvus_client::{
        CalcDistanceRequest, CollectionDescription, CollectionInfo, DistanceMatrix, FlushResult,
        Ids, IndexBuildProgress, IndexDescription, MetricType, MilvusResult, MutationResult,
        PersistentSegmentInfo, QueryResult, QuerySegmentInfo, SearchResult,
    };
    use mockall::{Sequence, mock, predicate::*};

    mock! {
        pub Client {}

        #[async_trait]
        impl CollectionClient for Client {
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
        impl IndexClient for Client {
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
        impl EntityClient for Client {
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
    }

    fn store(client: MockClient) -> MilvusMemoryStore<MockClient> {
        MilvusMemoryStore::new(client, MemoryStoreConfig::new(3)).unwrap()
    }

    fn metadata_json(id: &str) -> String {
        MemoryRecord::local(id, "text", "description", vec![0.0; 3])
            .serialized_metadata()
            .unwrap()
    }

    // ===== create_collection =====

    #[tokio::test]
    async fn test_create_collection_runs_every_step_for_new_collection() {
        let mut client = MockClient::new();
        let mut seq = Sequence::new();

        client
            .expect_has_collection()
            .with(eq("books"), eq(None), always())
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok(false));
        client
            .expect_create_collection()
            .withf(|request, _| {
                request.schema.fields.len() == 3
                    && request.schema.primary_field().map(|f| f.name.as_str()) == Some(ID_FIELD)
                    && request.schema.vector_field().and_then(|f| f.dimension) == Some(3)
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        client
            .expect_get_index_state()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok(IndexState::None));
        client
            .expect_create_index()
            .withf(|request, _| {
                request.field_name == EMBEDDING_FIELD
                    && request.index_type == IndexType::IvfFlat
                    && request.metric_type == MetricType::IP
                    && request.extra_params.get("nlist").map(String::as_str) == Some("1024")
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        client
            .expect_load_collection()
            .with(eq("books"), eq(1), always())
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok(()));

        store(client)
            .create_collection("books", &CancellationToken::new())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_collection_skips_existing_index() {
        for state in [IndexState::InProgress, IndexState::Finished, IndexState::Failed] {
            let mut client = MockClient::new();
            client.expect_has_collection().returning(|_, _, _| Ok(true));
            client.expect_create_collection().never();
            client.expect_get_index_state().returning(move |_, _, _| Ok(state));
            client.expect_create_index().never();
            client.expect_load_collection().times(1).returning(|_, _, _| Ok(()));

            store(client)
                .create_collection("books", &CancellationToken::new())
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn test_missing_index_error_counts_as_no_index() {
        let mut client = MockClient::new();
        client.expect_has_collection().returning(|_, _, _| Ok(true));
        client.expect_get_index_state().returning(|_, _, _| {
            Err(MilvusError::database(ErrorCode::IndexNotExist, "index doesn't exist"))
        });
        client.expect_create_index().times(1).returning(|_, _| Ok(()));
        client.expect_load_collection().times(1).returning(|_, _, _| Ok(()));

        store(client)
            .create_collection("books", &CancellationToken::new())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_cloud_builds_autoindex_without_params() {
        let mut client = MockClient::new();
        client.expect_has_collection().returning(|_, _, _| Ok(true));
        client.expect_get_index_state().returning(|_, _, _| Ok(IndexState::None));
        client
            .expect_create_index()
            .withf(|request, _| {
                request.index_type == IndexType::AutoIndex && request.extra_params.is_empty()
            })
            .times(1)
            .returning(|_, _| Ok(()));
        client.expect_load_collection().returning(|_, _, _| Ok(()));

        let config = MemoryStoreConfig::new(3).with_zilliz_cloud(true);
        MilvusMemoryStore::new(client, config)
            .unwrap()
            .create_collection("books", &CancellationToken::new())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_collection_surfaces_server_error() {
        let mut client = MockClient::new();
        client.expect_has_collection().returning(|_, _, _| Ok(false));
        client.expect_create_collection().returning(|_, _| {
            Err(MilvusError::database(ErrorCode::UnexpectedError, "already exists"))
        });
        client.expect_get_index_state().never();
        client.expect_load_collection().never();

        let err = store(client)
            .create_collection("books", &CancellationToken::new())
            .await
            .unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::UnexpectedError));
    }

    // ===== Validation =====

    #[tokio::test]
    async fn test_invalid_input_never_reaches_client() {
        // no expectations: any call panics
        let store = store(MockClient::new());
        let cancel = CancellationToken::new();

        assert!(matches!(
            store.create_collection(" ", &cancel).await,
            Err(MemoryError::Validation(_))
        ));
        assert!(matches!(
            store.get("books", "", false, &cancel).await,
            Err(MemoryError::Validation(_))
        ));
        assert!(matches!(
            store.get_nearest_matches("books", &[1.0, 2.0], 5, 0.0, false, &cancel).await,
            Err(MemoryError::Validation(_))
        ));
        assert!(matches!(
            store.get_nearest_matches("books", &[1.0, 2.0, 3.0], 0, 0.0, false, &cancel).await,
            Err(MemoryError::Milvus(MilvusError::Validation(_)))
        ));
        assert!(matches!(
            store
                .upsert("books", MemoryRecord::local("k", "t", "d", vec![1.0]), &cancel)
                .await,
            Err(MemoryError::Validation(_))
        ));
        assert!(matches!(
            store
                .upsert("", MemoryRecord::local("k", "t", "d", vec![1.0, 2.0, 3.0]), &cancel)
                .await,
            Err(MemoryError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_oversized_metadata_is_rejected() {
        let config = MemoryStoreConfig::new(3).with_metadata_max_length(10);
        let store = MilvusMemoryStore::new(MockClient::new(), config).unwrap();
        let record = MemoryRecord::local("k", "a long text body", "d", vec![1.0, 2.0, 3.0]);

        let result = store.upsert("books", record, &CancellationToken::new()).await;
        assert!(matches!(result, Err(MemoryError::Validation(_))));
    }

    // ===== Reads and writes =====

    #[tokio::test]
    async fn test_get_queries_single_key_and_decodes() {
        let mut client = MockClient::new();
        client
            .expect_query()
            .withf(|request, _| {
                request.expr == "Id in [\"k1\"]"
                    && request.output_fields
                        == vec![METADATA_FIELD.to_string(), EMBEDDING_FIELD.to_string()]
            })
            .times(1)
            .returning(|_, _| {
                Ok(QueryResult {
                    columns: vec![
                        Column::float_vector(EMBEDDING_FIELD, vec![vec![1.0, 2.0, 3.0]]),
                        Column::varchar(METADATA_FIELD, vec![metadata_json("k1")]),
                    ],
                })
            });

        let record = store(client)
            .get("books", "k1", true, &CancellationToken::new())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record.key(), "k1");
        assert_eq!(record.embedding, Some(vec![1.0, 2.0, 3.0]));
    }

    #[tokio::test]
    async fn test_get_returns_none_for_zero_rows() {
        let mut client = MockClient::new();
        client.expect_query().returning(|_, _| {
            Ok(QueryResult {
                columns: vec![Column::varchar(METADATA_FIELD, Vec::new())],
            })
        });

        let record = store(client)
            .get("books", "missing", false, &CancellationToken::new())
            .await
            .unwrap();
        assert!(record.is_none());
    }

    #[tokio::test]
    async fn test_batch_reads_and_deletes_use_one_in_list() {
        let mut client = MockClient::new();
        client
            .expect_query()
            .withf(|request, _| request.expr == "Id in [\"a\", \"b\"]")
            .times(1)
            .returning(|_, _| {
                Ok(QueryResult {
                    columns: vec![Column::varchar(
                        METADATA_FIELD,
                        vec![metadata_json("b"), metadata_json("a")],
                    )],
                })
            });
        client
            .expect_delete()
            .withf(|request, _| request.expr == "Id in [\"a\", \"b\"]")
            .times(1)
            .returning(|_, _| Ok(MutationResult { delete_count: 2, ..Default::default() }));

        let store = store(client);
        let cancel = CancellationToken::new();
        let keys = vec!["a".to_string(), "b".to_string()];

        let records: Vec<_> = store
            .get_batch("books", &keys, false, &cancel)
            .await
            .unwrap()
            .collect::<MemoryResult<_>>()
            .unwrap();
        assert_eq!(records.len(), 2);
        store.remove_batch("books", &keys, &cancel).await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_batches_make_no_calls() {
        let store = store(MockClient::new());
        let cancel = CancellationToken::new();

        assert!(store.upsert_batch("books", Vec::new(), &cancel).await.unwrap().is_empty());
        assert_eq!(store.get_batch("books", &[], true, &cancel).await.unwrap().len(), 0);
        store.remove_batch("books", &[], &cancel).await.unwrap();
    }

    #[tokio::test]
    async fn test_upsert_batch_builds_three_parallel_columns() {
        let mut client = MockClient::new();
        client
            .expect_insert()
            .withf(|request, _| {
                let names: Vec<&str> = request.columns.iter().map(Column::name).collect();
                names == vec![ID_FIELD, EMBEDDING_FIELD, METADATA_FIELD]
                    && request.columns.iter().all(|c| c.len() == 2)
            })
            .times(1)
            .returning(|_, _| {
                Ok(MutationResult {
                    insert_count: 2,
                    ids: Ids::Str(vec!["b".to_string(), "a".to_string()]),
                    ..Default::default()
                })
            });

        let ids = store(client)
            .upsert_batch(
                "books",
                vec![
                    MemoryRecord::local("a", "t", "d", vec![1.0, 1.0, 1.0]),
                    MemoryRecord::local("b", "t", "d", vec![2.0, 2.0, 2.0]),
                ],
                &CancellationToken::new(),
            )
            .await
            .unwrap();
        assert_eq!(ids, vec!["b".to_string(), "a".to_string()]);
    }

    #[tokio::test]
    async fn test_nearest_matches_filter_on_score() {
        let mut client = MockClient::new();
        client
            .expect_search()
            .withf(|request, _| {
                request.top_k == 3
                    && request.output_fields == vec![METADATA_FIELD.to_string()]
                    && request.params.get("nprobe").map(String::as_str) == Some("10")
            })
            .times(1)
            .returning(|_, _| {
                Ok(SearchResult {
                    collection_name: "books".to_string(),
                    num_queries: 1,
                    top_k: 3,
                    ids: Ids::Str(vec!["c".into(), "b".into(), "a".into()]),
                    scores: vec![9.0, 6.0, 3.0],
                    columns: vec![Column::varchar(
                        METADATA_FIELD,
                        vec![metadata_json("c"), metadata_json("b"), metadata_json("a")],
                    )],
                    top_ks: vec![3],
                    output_fields: vec![METADATA_FIELD.to_string()],
                })
            });

        let matches: Vec<_> = store(client)
            .get_nearest_matches(
                "books",
                &[1.0, 1.0, 1.0],
                3,
                6.0,
                false,
                &CancellationToken::new(),
            )
            .await
            .unwrap()
            .collect::<MemoryResult<_>>()
            .unwrap();

        // 6.0 equals the threshold and is kept
        let keys: Vec<&str> = matches.iter().map(|(r, _)| r.key()).collect();
        assert_eq!(keys, vec!["c", "b"]);
        assert!(matches.iter().all(|(r, _)| r.embedding.is_none()));
    }

    #[tokio::test]
    async fn test_errors_pass_through_unchanged() {
        let mut client = MockClient::new();
        client.expect_query().returning(|_, _| Err(MilvusError::Cancelled));

        let err = store(client)
            .get("books", "k", false, &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(err.is_cancelled());
    }

    #[test]
    fn test_key_filter_escapes_quotes() {
        assert_eq!(key_filter(&["a\"b".to_string()]), "Id in [\"a\\\"b\"]");
        assert_eq!(key_filter(&["x".to_string(), "y".to_string()]), "Id in [\"x\", \"y\"]");
    }
}
