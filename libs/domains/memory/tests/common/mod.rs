//! In-memory stand-in for a Milvus server.
//!
//! Keeps rows per collection, evaluates `field in ["a", ...]` filters,
//! ranks by inner product, and counts every call it receives. Index
//! builds advance from InProgress to Finished on the next state check.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use milvus_client::request::Validate;
use milvus_client::{
    CalcDistanceRequest, CollectionClient, CollectionDescription, CollectionInfo,
    CollectionSchema, Column, CompactionPlans, CompactionState, ConsistencyLevel,
    CreateCollectionRequest, CreateIndexRequest, DeleteRequest, DistanceMatrix, EntityClient,
    ErrorCode, FlushResult, HealthState, Ids, IndexBuildProgress, IndexClient, IndexDescription,
    IndexState, InsertRequest, MetricsResponse, MilvusError, MilvusResult, MutationResult,
    PersistentSegmentInfo, QueryRequest, QueryResult, QuerySegmentInfo, ScalarColumn, ScalarData,
    SearchRequest, SearchResult, ServerClient, ShowType, VectorColumn, VectorData,
};
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone)]
struct Row {
    id: String,
    embedding: Vec<f32>,
    payload: String,
}

#[derive(Debug)]
struct Collection {
    schema: CollectionSchema,
    rows: Vec<Row>,
    index: IndexState,
    loaded: bool,
}

impl Collection {
    fn id_field(&self) -> String {
        self.schema.primary_field().map(|f| f.name.clone()).unwrap_or_default()
    }

    fn vector_field(&self) -> String {
        self.schema.vector_field().map(|f| f.name.clone()).unwrap_or_default()
    }

    /// The one varchar field that is neither key nor vector.
    fn payload_field(&self) -> String {
        self.schema
            .fields
            .iter()
            .find(|f| !f.is_primary_key && !f.data_type.is_vector())
            .map(|f| f.name.clone())
            .unwrap_or_default()
    }

    fn columns(&self, rows: &[&Row], output_fields: &[String]) -> Vec<Column> {
        // reversed so callers cannot rely on column order
        output_fields
            .iter()
            .rev()
            .filter_map(|name| {
                if *name == self.vector_field() {
                    Some(Column::float_vector(
                        name.clone(),
                        rows.iter().map(|r| r.embedding.clone()).collect(),
                    ))
                } else if *name == self.payload_field() {
                    Some(Column::varchar(
                        name.clone(),
                        rows.iter().map(|r| r.payload.clone()).collect(),
                    ))
                } else if *name == self.id_field() {
                    Some(Column::varchar(name.clone(), rows.iter().map(|r| r.id.clone()).collect()))
                } else {
                    None
                }
            })
            .collect()
    }
}

#[derive(Default)]
pub struct FakeMilvus {
    collections: Mutex<HashMap<String, Collection>>,
    calls: Mutex<Vec<&'static str>>,
    index_builds: AtomicUsize,
    closed: AtomicBool,
}

impl FakeMilvus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every operation received so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn index_builds(&self) -> usize {
        self.index_builds.load(Ordering::SeqCst)
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.collections
            .lock()
            .unwrap()
            .get(name)
            .is_some_and(|c| c.loaded)
    }

    pub fn row_count(&self, name: &str) -> usize {
        self.collections
            .lock()
            .unwrap()
            .get(name)
            .map_or(0, |c| c.rows.len())
    }

    fn enter(&self, operation: &'static str, cancel: &CancellationToken) -> MilvusResult<()> {
        self.calls.lock().unwrap().push(operation);
        if cancel.is_cancelled() {
            return Err(MilvusError::Cancelled);
        }
        if self.is_closed() {
            return Err(MilvusError::Transport("client is closed".to_string()));
        }
        Ok(())
    }

    fn with_collection<T>(
        &self,
        name: &str,
        f: impl FnOnce(&mut Collection) -> MilvusResult<T>,
    ) -> MilvusResult<T> {
        let mut collections = self.collections.lock().unwrap();
        let collection = collections.get_mut(name).ok_or_else(|| {
            MilvusError::database(
                ErrorCode::CollectionNotExists,
                format!("can't find collection: {}", name),
            )
        })?;
        f(collection)
    }
}

/// Parses `field in ["a", "b"]` into the field and its keys.
fn parse_in_filter(expr: &str) -> MilvusResult<(String, Vec<String>)> {
    let invalid = || {
        MilvusError::database(
            ErrorCode::IllegalArgument,
            format!("cannot parse expression: {}", expr),
        )
    };
    let (field, rest) = expr.split_once(" in ").ok_or_else(invalid)?;
    let list = rest
        .trim()
        .strip_prefix('[')
        .and_then(|r| r.strip_suffix(']'))
        .ok_or_else(invalid)?;

    let mut keys = Vec::new();
    let mut chars = list.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => {
                let mut key = String::new();
                loop {
                    match chars.next() {
                        Some('\\') => key.extend(chars.next()),
                        Some('"') => break,
                        Some(other) => key.push(other),
                        None => return Err(invalid()),
                    }
                }
                keys.push(key);
            }
            ',' | ' ' => {}
            _ => return Err(invalid()),
        }
    }
    Ok((field.trim().to_string(), keys))
}

fn varchar(columns: &[Column], name: &str) -> Vec<String> {
    columns
        .iter()
        .find_map(|c| match c {
            Column::Scalar(ScalarColumn {
                name: n,
                data: ScalarData::VarChar(v),
            }) if n == name => Some(v.clone()),
            _ => None,
        })
        .unwrap_or_default()
}

fn float_vectors(columns: &[Column], name: &str) -> Vec<Vec<f32>> {
    columns
        .iter()
        .find_map(|c| match c {
            Column::Vector(VectorColumn {
                name: n,
                data: VectorData::Float(v),
                ..
            }) if n == name => Some(v.clone()),
            _ => None,
        })
        .unwrap_or_default()
}

#[async_trait]
impl CollectionClient for FakeMilvus {
    async fn create_collection(
        &self,
        request: CreateCollectionRequest,
        cancel: &CancellationToken,
    ) -> MilvusResult<()> {
        self.enter("create_collection", cancel)?;
        request.validate()?;
        let mut collections = self.collections.lock().unwrap();
        if collections.contains_key(&request.schema.name) {
            return Err(MilvusError::database(
                ErrorCode::UnexpectedError,
                format!("collection {} already exists", request.schema.name),
            ));
        }
        collections.insert(
            request.schema.name.clone(),
            Collection {
                schema: request.schema,
                rows: Vec::new(),
                index: IndexState::None,
                loaded: false,
            },
        );
        Ok(())
    }

    async fn drop_collection(
        &self,
        collection_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<()> {
        self.enter("drop_collection", cancel)?;
        self.with_collection(collection_name, |_| Ok(()))?;
        self.collections.lock().unwrap().remove(collection_name);
        Ok(())
    }

    async fn describe_collection(
        &self,
        collection_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<CollectionDescription> {
        self.enter("describe_collection", cancel)?;
        self.with_collection(collection_name, |c| {
            Ok(CollectionDescription {
                collection_id: 1,
                collection_name: collection_name.to_string(),
                schema: c.schema.clone(),
                shards_num: 1,
                consistency_level: ConsistencyLevel::Strong,
                aliases: Vec::new(),
                created_at: None,
                virtual_channel_names: Vec::new(),
                physical_channel_names: Vec::new(),
            })
        })
    }

    async fn has_collection(
        &self,
        collection_name: &str,
        _as_of: Option<DateTime<Utc>>,
        cancel: &CancellationToken,
    ) -> MilvusResult<bool> {
        self.enter("has_collection", cancel)?;
        Ok(self.collections.lock().unwrap().contains_key(collection_name))
    }

    async fn show_collections(
        &self,
        _collection_names: &[String],
        _show_type: ShowType,
        cancel: &CancellationToken,
    ) -> MilvusResult<Vec<CollectionInfo>> {
        self.enter("show_collections", cancel)?;
        let collections = self.collections.lock().unwrap();
        let mut names: Vec<&String> = collections.keys().collect();
        names.sort();
        Ok(names
            .into_iter()
            .enumerate()
            .map(|(i, name)| CollectionInfo {
                id: i as i64 + 1,
                name: name.clone(),
                created_at: None,
                in_memory_percentage: -1,
            })
            .collect())
    }

    async fn load_collection(
        &self,
        collection_name: &str,
        _replica_number: i32,
        cancel: &CancellationToken,
    ) -> MilvusResult<()> {
        self.enter("load_collection", cancel)?;
        self.with_collection(collection_name, |c| {
            c.loaded = true;
            Ok(())
        })
    }

    async fn release_collection(
        &self,
        collection_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<()> {
        self.enter("release_collection", cancel)?;
        self.with_collection(collection_name, |c| {
            c.loaded = false;
            Ok(())
        })
    }

    async fn get_loading_progress(
        &self,
        collection_name: &str,
        _partition_names: &[String],
        cancel: &CancellationToken,
    ) -> MilvusResult<i64> {
        self.enter("get_loading_progress", cancel)?;
        self.with_collection(collection_name, |c| Ok(if c.loaded { 100 } else { 0 }))
    }

    async fn get_collection_statistics(
        &self,
        collection_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<HashMap<String, String>> {
        self.enter("get_collection_statistics", cancel)?;
        self.with_collection(collection_name, |c| {
            Ok(HashMap::from([("row_count".to_string(), c.rows.len().to_string())]))
        })
    }
}

#[async_trait]
impl IndexClient for FakeMilvus {
    async fn create_index(
        &self,
        request: CreateIndexRequest,
        cancel: &CancellationToken,
    ) -> MilvusResult<()> {
        self.enter("create_index", cancel)?;
        request.validate()?;
        self.with_collection(&request.collection_name, |c| {
            c.index = IndexState::InProgress;
            Ok(())
        })?;
        self.index_builds.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn drop_index(
        &self,
        collection_name: &str,
        _field_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<()> {
        self.enter("drop_index", cancel)?;
        self.with_collection(collection_name, |c| {
            c.index = IndexState::None;
            Ok(())
        })
    }

    async fn describe_index(
        &self,
        collection_name: &str,
        field_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<Vec<IndexDescription>> {
        self.enter("describe_index", cancel)?;
        self.with_collection(collection_name, |c| {
            Ok(vec![IndexDescription {
                index_name: "_default_idx".to_string(),
                index_id: 1,
                field_name: field_name.to_string(),
                params: HashMap::new(),
                indexed_rows: c.rows.len() as i64,
                total_rows: c.rows.len() as i64,
                state: c.index,
                fail_reason: String::new(),
            }])
        })
    }

    async fn get_index_build_progress(
        &self,
        collection_name: &str,
        _field_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<IndexBuildProgress> {
        self.enter("get_index_build_progress", cancel)?;
        self.with_collection(collection_name, |c| {
            Ok(IndexBuildProgress {
                indexed_rows: c.rows.len() as i64,
                total_rows: c.rows.len() as i64,
            })
        })
    }

    async fn get_index_state(
        &self,
        collection_name: &str,
        _field_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<IndexState> {
        self.enter("get_index_state", cancel)?;
        self.with_collection(collection_name, |c| {
            let observed = c.index;
            if c.index == IndexState::InProgress {
                c.index = IndexState::Finished;
            }
            Ok(observed)
        })
    }
}

#[async_trait]
impl EntityClient for FakeMilvus {
    async fn insert(
        &self,
        request: InsertRequest,
        cancel: &CancellationToken,
    ) -> MilvusResult<MutationResult> {
        self.enter("insert", cancel)?;
        request.validate()?;
        self.with_collection(&request.collection_name, |c| {
            let ids = varchar(&request.columns, &c.id_field());
            let embeddings = float_vectors(&request.columns, &c.vector_field());
            let payloads = varchar(&request.columns, &c.payload_field());
            if ids.len() != embeddings.len() || ids.len() != payloads.len() {
                return Err(MilvusError::database(
                    ErrorCode::IllegalArgument,
                    "column lengths differ",
                ));
            }

            for ((id, embedding), payload) in ids.iter().zip(embeddings).zip(payloads) {
                c.rows.retain(|r| r.id != *id);
                c.rows.push(Row {
                    id: id.clone(),
                    embedding,
                    payload,
                });
            }

            // servers do not promise to echo keys in input order
            let mut echoed = ids.clone();
            echoed.reverse();
            Ok(MutationResult {
                insert_count: ids.len() as i64,
                ids: Ids::Str(echoed),
                ..Default::default()
            })
        })
    }

    async fn delete(
        &self,
        request: DeleteRequest,
        cancel: &CancellationToken,
    ) -> MilvusResult<MutationResult> {
        self.enter("delete", cancel)?;
        request.validate()?;
        let (field, keys) = parse_in_filter(&request.expr)?;
        self.with_collection(&request.collection_name, |c| {
            if field != c.id_field() {
                return Err(MilvusError::database(
                    ErrorCode::IllegalArgument,
                    format!("delete only supports the primary key, got {}", field),
                ));
            }
            let before = c.rows.len();
            c.rows.retain(|r| !keys.contains(&r.id));
            Ok(MutationResult {
                delete_count: (before - c.rows.len()) as i64,
                ids: Ids::Str(keys.clone()),
                ..Default::default()
            })
        })
    }

    async fn query(
        &self,
        request: QueryRequest,
        cancel: &CancellationToken,
    ) -> MilvusResult<QueryResult> {
        self.enter("query", cancel)?;
        request.validate()?;
        let (field, keys) = parse_in_filter(&request.expr)?;
        self.with_collection(&request.collection_name, |c| {
            if !c.loaded {
                return Err(MilvusError::database(
                    ErrorCode::UnexpectedError,
                    "collection not loaded",
                ));
            }
            if field != c.id_field() {
                return Err(MilvusError::database(ErrorCode::IllegalArgument, "unsupported filter"));
            }
            let rows: Vec<&Row> = c.rows.iter().filter(|r| keys.contains(&r.id)).collect();
            Ok(QueryResult {
                columns: c.columns(&rows, &request.output_fields),
            })
        })
    }

    async fn search(
        &self,
        request: SearchRequest,
        cancel: &CancellationToken,
    ) -> MilvusResult<SearchResult> {
        self.enter("search", cancel)?;
        request.validate()?;
        let VectorData::Float(queries) = &request.vectors else {
            return Err(MilvusError::database(ErrorCode::IllegalArgument, "float vectors only"));
        };
        self.with_collection(&request.collection_name, |c| {
            if !c.loaded {
                return Err(MilvusError::database(
                    ErrorCode::UnexpectedError,
                    "collection not loaded",
                ));
            }
            let query = queries.first().cloned().unwrap_or_default();
            let mut scored: Vec<(f32, &Row)> = c
                .rows
                .iter()
                .map(|r| (r.embedding.iter().zip(&query).map(|(a, b)| a * b).sum(), r))
                .collect();
            scored.sort_by(|a, b| b.0.total_cmp(&a.0));
            scored.truncate(request.top_k as usize);

            let rows: Vec<&Row> = scored.iter().map(|(_, r)| *r).collect();
            Ok(SearchResult {
                collection_name: request.collection_name.clone(),
                num_queries: 1,
                top_k: request.top_k,
                ids: Ids::Str(rows.iter().map(|r| r.id.clone()).collect()),
                scores: scored.iter().map(|(s, _)| *s).collect(),
                columns: c.columns(&rows, &request.output_fields),
                top_ks: vec![rows.len() as i64],
                output_fields: request.output_fields.clone(),
            })
        })
    }

    async fn calc_distance(
        &self,
        _request: CalcDistanceRequest,
        cancel: &CancellationToken,
    ) -> MilvusResult<DistanceMatrix> {
        self.enter("calc_distance", cancel)?;
        Err(MilvusError::database(ErrorCode::UnexpectedError, "not supported by the fake"))
    }

    async fn flush(
        &self,
        _collection_names: &[String],
        cancel: &CancellationToken,
    ) -> MilvusResult<FlushResult> {
        self.enter("flush", cancel)?;
        Ok(FlushResult::default())
    }

    async fn get_flush_state(
        &self,
        _segment_ids: &[i64],
        cancel: &CancellationToken,
    ) -> MilvusResult<bool> {
        self.enter("get_flush_state", cancel)?;
        Ok(true)
    }

    async fn get_persistent_segment_info(
        &self,
        _collection_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<Vec<PersistentSegmentInfo>> {
        self.enter("get_persistent_segment_info", cancel)?;
        Ok(Vec::new())
    }

    async fn get_query_segment_info(
        &self,
        _collection_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<Vec<QuerySegmentInfo>> {
        self.enter("get_query_segment_info", cancel)?;
        Ok(Vec::new())
    }
}

#[async_trait]
impl ServerClient for FakeMilvus {
    async fn health(&self, cancel: &CancellationToken) -> MilvusResult<HealthState> {
        self.enter("health", cancel)?;
        Ok(HealthState::healthy())
    }

    async fn version(&self, cancel: &CancellationToken) -> MilvusResult<String> {
        self.enter("version", cancel)?;
        Ok("v2.2.8".to_string())
    }

    async fn metrics(
        &self,
        _request: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<MetricsResponse> {
        self.enter("metrics", cancel)?;
        Ok(MetricsResponse {
            response: "{}".to_string(),
            component_name: "fake".to_string(),
        })
    }

    async fn manual_compaction(
        &self,
        _collection_id: i64,
        _travel_timestamp: Option<DateTime<Utc>>,
        cancel: &CancellationToken,
    ) -> MilvusResult<i64> {
        self.enter("manual_compaction", cancel)?;
        Ok(1)
    }

    async fn get_compaction_state(
        &self,
        _compaction_id: i64,
        cancel: &CancellationToken,
    ) -> MilvusResult<CompactionState> {
        self.enter("get_compaction_state", cancel)?;
        Ok(CompactionState::Completed)
    }

    async fn get_compaction_plans(
        &self,
        _compaction_id: i64,
        cancel: &CancellationToken,
    ) -> MilvusResult<CompactionPlans> {
        self.enter("get_compaction_plans", cancel)?;
        Ok(CompactionPlans {
            state: CompactionState::Completed,
            merge_infos: Vec::new(),
        })
    }

    fn address(&self) -> String {
        "memory://fake".to_string()
    }

    fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}
