//! Memory Domain Library
//!
//! Stores application "memory records" (a key, an embedding and JSON
//! metadata) in Milvus collections, hiding the columnar schema behind a
//! record-oriented API.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────┐
//! │ MilvusMemoryStore │  ← records in, records out
//! └─────────┬─────────┘
//!           │  three columns: Id | embedding | metadata
//! ┌─────────▼─────────┐
//! │ Collection + Index│
//! │ + Entity clients  │  (milvus-client traits)
//! └─────────┬─────────┘
//!           │
//!   ┌───────┴────────┐
//!   ▼                ▼
//! MilvusGrpcClient  MilvusRestClient
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_memory::{MemoryRecord, MilvusMemoryStore};
//! use milvus_client::{CancellationToken, MilvusConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = MilvusMemoryStore::connect(MilvusConfig::from_env()?, 3).await?;
//! let cancel = CancellationToken::new();
//!
//! store.create_collection("notes", &cancel).await?;
//! let record = MemoryRecord::local("note-1", "buy milk", "todo", vec![0.1, 0.2, 0.3]);
//! store.upsert("notes", record, &cancel).await?;
//!
//! if let Some((best, score)) = store
//!     .get_nearest_match("notes", &[0.1, 0.2, 0.3], 0.0, false, &cancel)
//!     .await?
//! {
//!     println!("{} scored {}", best.key(), score);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod record;
pub mod rows;
pub mod store;

pub use config::MemoryStoreConfig;
pub use error::{MemoryError, MemoryResult};
pub use record::{MemoryRecord, MemoryRecordMetadata};
pub use rows::{MemoryMatches, MemoryRecords};
pub use store::{
    DEFAULT_INDEX_NAME, EMBEDDING_FIELD, ID_FIELD, KEY_MAX_LENGTH, METADATA_FIELD,
    MilvusMemoryStore,
};
