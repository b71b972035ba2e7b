use std::collections::HashMap;

use milvus_client::{ConsistencyLevel, IndexType, MetricType, MilvusConfig};

use crate::error::{MemoryError, MemoryResult};

/// How the memory store lays out and searches its collections.
#[derive(Debug, Clone)]
pub struct MemoryStoreConfig {
    /// Dimension of every embedding
    pub vector_size: i64,
    /// Managed Zilliz Cloud only builds `AUTOINDEX`
    pub zilliz_cloud: bool,
    pub index_type: IndexType,
    pub metric_type: MetricType,
    pub index_params: HashMap<String, String>,
    pub metadata_max_length: i32,
    pub search_params: HashMap<String, String>,
    pub consistency_level: ConsistencyLevel,
    pub replica_number: i32,
}

impl MemoryStoreConfig {
    pub fn new(vector_size: i64) -> Self {
        Self {
            vector_size,
            zilliz_cloud: false,
            index_type: IndexType::IvfFlat,
            metric_type: MetricType::IP,
            index_params: HashMap::from([("nlist".to_string(), "1024".to_string())]),
            metadata_max_length: 1000,
            search_params: HashMap::from([("nprobe".to_string(), "10".to_string())]),
            consistency_level: ConsistencyLevel::Strong,
            replica_number: 1,
        }
    }

    /// Picks up the managed-cloud flag from the connection settings.
    pub fn for_connection(connection: &MilvusConfig, vector_size: i64) -> Self {
        Self::new(vector_size).with_zilliz_cloud(connection.is_zilliz_cloud())
    }

    pub fn with_zilliz_cloud(mut self, zilliz_cloud: bool) -> Self {
        self.zilliz_cloud = zilliz_cloud;
        self
    }

    pub fn with_index(mut self, index_type: IndexType, metric_type: MetricType) -> Self {
        self.index_type = index_type;
        self.metric_type = metric_type;
        self
    }

    pub fn with_index_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.index_params.insert(key.into(), value.into());
        self
    }

    pub fn with_search_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.search_params.insert(key.into(), value.into());
        self
    }

    pub fn with_metadata_max_length(mut self, max_length: i32) -> Self {
        self.metadata_max_length = max_length;
        self
    }

    pub fn with_consistency_level(mut self, level: ConsistencyLevel) -> Self {
        self.consistency_level = level;
        self
    }

    pub fn effective_index_type(&self) -> IndexType {
        if self.zilliz_cloud {
            IndexType::AutoIndex
        } else {
            self.index_type
        }
    }

    pub fn validate(&self) -> MemoryResult<()> {
        if self.vector_size <= 0 {
            return Err(MemoryError::validation(format!(
                "vector_size must be positive, got {}",
                self.vector_size
            )));
        }
        if self.metadata_max_length <= 0 {
            return Err(MemoryError::validation(format!(
                "metadata_max_length must be positive, got {}",
                self.metadata_max_length
            )));
        }
        if self.replica_number <= 0 {
            return Err(MemoryError::validation(format!(
                "replica_number must be positive, got {}",
                self.replica_number
            )));
        }
        Ok(())
    }
}
