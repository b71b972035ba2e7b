use milvus_client::{ErrorCode, MilvusError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MemoryError {
    #[error(transparent)]
    Milvus(#[from] MilvusError),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Metadata error: {0}")]
    Metadata(String),
}

pub type MemoryResult<T> = Result<T, MemoryError>;

impl MemoryError {
    pub fn validation(message: impl Into<String>) -> Self {
        MemoryError::Validation(message.into())
    }

    /// Server error code when the failure came back from Milvus.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            MemoryError::Milvus(err) => err.code(),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, MemoryError::Milvus(MilvusError::Cancelled))
    }
}

impl From<serde_json::Error> for MemoryError {
    fn from(err: serde_json::Error) -> Self {
        MemoryError::Metadata(format!("JSON error: {}", err))
    }
}
