//! Milvus Client Library
//!
//! Typed client for the Milvus vector database with two interchangeable
//! transports behind one set of capability traits.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ MilvusClient = Collection + Partition + Alias │
//! │   + Index + Entity + Credential + Server      │
//! └──────────────┬──────────────────┬────────────┘
//!                │                  │
//!      ┌─────────▼───────┐  ┌───────▼─────────┐
//!      │ MilvusGrpcClient│  │ MilvusRestClient│
//!      │  (tonic, proto) │  │ (reqwest, JSON) │
//!      └─────────────────┘  └─────────────────┘
//! ```
//!
//! Requests validate themselves before anything is sent. A non-success
//! server status surfaces as [`MilvusError::Database`] on either transport.
//!
//! # Usage
//!
//! ```rust,no_run
//! use milvus_client::{
//!     CancellationToken, CollectionClient, CreateCollectionRequest, FieldSchema,
//!     MilvusConfig, MilvusGrpcClient,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = MilvusGrpcClient::connect(MilvusConfig::from_env()?).await?;
//! let cancel = CancellationToken::new();
//!
//! let request = CreateCollectionRequest::new(
//!     "books",
//!     vec![
//!         FieldSchema::varchar("id", 100).primary_key(false),
//!         FieldSchema::float_vector("embedding", 768),
//!     ],
//! );
//! if !client.has_collection("books", None, &cancel).await? {
//!     client.create_collection(request, &cancel).await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod column;
pub mod config;
pub mod error;
mod grpc;
pub mod request;
mod rest;
pub mod results;
pub mod schema;
pub mod types;

pub use client::{
    AliasClient, CollectionClient, CredentialClient, EntityClient, IndexClient, MilvusClient,
    PartitionClient, ServerClient,
};
pub use column::{Column, FieldValue, ScalarColumn, ScalarData, VectorColumn, VectorData};
pub use config::MilvusConfig;
pub use error::{ErrorCode, MilvusError, MilvusResult};
pub use grpc::MilvusGrpcClient;
pub use request::{
    CalcDistanceRequest, CreateCollectionRequest, CreateIndexRequest, DeleteRequest,
    InsertRequest, QueryRequest, SearchRequest,
};
pub use rest::MilvusRestClient;
pub use results::{
    CollectionDescription, CollectionInfo, CompactionMerge, CompactionPlans, DistanceMatrix,
    DistanceValues, FlushResult, HealthState, Id, Ids, IndexBuildProgress, IndexDescription,
    MetricsResponse, MutationResult, PartitionInfo, PersistentSegmentInfo, QueryResult,
    QuerySegmentInfo, SearchHit, SearchResult,
};
pub use schema::{CollectionSchema, FieldSchema};
pub use tokio_util::sync::CancellationToken;
pub use types::{
    CompactionState, ConsistencyLevel, DataType, IndexState, IndexType, MetricType, SegmentState,
    ShowType,
};
