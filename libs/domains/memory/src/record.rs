use serde::{Deserialize, Serialize};

use crate::error::MemoryResult;

/// Metadata stored next to each embedding, serialized as one JSON string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryRecordMetadata {
    /// True when the record points at data held elsewhere
    #[serde(default)]
    pub is_reference: bool,
    #[serde(default)]
    pub external_source_name: String,
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub text: String,
    /// Free-form caller data, stored verbatim
    #[serde(default)]
    pub additional_metadata: String,
}

/// The adapter's unit of storage: metadata keyed by its id, plus the embedding.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryRecord {
    pub metadata: MemoryRecordMetadata,
    /// Absent when a read did not ask for embeddings
    pub embedding: Option<Vec<f32>>,
}

impl MemoryRecord {
    /// A record whose text lives in the store itself.
    pub fn local(
        id: impl Into<String>,
        text: impl Into<String>,
        description: impl Into<String>,
        embedding: Vec<f32>,
    ) -> Self {
        Self {
            metadata: MemoryRecordMetadata {
                is_reference: false,
                external_source_name: String::new(),
                id: id.into(),
                description: description.into(),
                text: text.into(),
                additional_metadata: String::new(),
            },
            embedding: Some(embedding),
        }
    }

    /// A record that only references content held by an external source.
    pub fn reference(
        external_id: impl Into<String>,
        source_name: impl Into<String>,
        description: impl Into<String>,
        embedding: Vec<f32>,
    ) -> Self {
        Self {
            metadata: MemoryRecordMetadata {
                is_reference: true,
                external_source_name: source_name.into(),
                id: external_id.into(),
                description: description.into(),
                text: String::new(),
                additional_metadata: String::new(),
            },
            embedding: Some(embedding),
        }
    }

    /// Primary key in the collection.
    pub fn key(&self) -> &str {
        &self.metadata.id
    }

    pub fn with_additional_metadata(mut self, additional: impl Into<String>) -> Self {
        self.metadata.additional_metadata = additional.into();
        self
    }

    /// Rebuilds a record from the stored metadata column.
    pub fn from_json_metadata(json: &str, embedding: Option<Vec<f32>>) -> MemoryResult<Self> {
        let metadata: MemoryRecordMetadata = serde_json::from_str(json)?;
        Ok(Self { metadata, embedding })
    }

    pub fn serialized_metadata(&self) -> MemoryResult<String> {
        Ok(serde_json::to_string(&self.metadata)?)
    }

    pub fn without_embedding(mut self) -> Self {
        self.embedding = None;
        self
    }
}
