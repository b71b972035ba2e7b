use std::fmt;

use grpc_client::GrpcError;
use thiserror::Error;

/// Milvus `common.ErrorCode`.
///
/// Only the codes the client reasons about are named; everything else is
/// carried through `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Success,
    UnexpectedError,
    ConnectFailed,
    PermissionDenied,
    CollectionNotExists,
    IllegalArgument,
    IllegalDimension,
    IllegalIndexType,
    IllegalCollectionName,
    IllegalTopk,
    IllegalMetricType,
    IndexNotExist,
    EmptyCollection,
    CollectionNameNotFound,
    CreateCredentialFailure,
    UpdateCredentialFailure,
    DeleteCredentialFailure,
    ListCredUsersFailure,
    RateLimit,
    Other(i32),
}

impl ErrorCode {
    pub fn is_success(self) -> bool {
        self == ErrorCode::Success
    }

    pub fn as_i32(self) -> i32 {
        match self {
            ErrorCode::Success => 0,
            ErrorCode::UnexpectedError => 1,
            ErrorCode::ConnectFailed => 2,
            ErrorCode::PermissionDenied => 3,
            ErrorCode::CollectionNotExists => 4,
            ErrorCode::IllegalArgument => 5,
            ErrorCode::IllegalDimension => 7,
            ErrorCode::IllegalIndexType => 8,
            ErrorCode::IllegalCollectionName => 9,
            ErrorCode::IllegalTopk => 10,
            ErrorCode::IllegalMetricType => 23,
            ErrorCode::IndexNotExist => 25,
            ErrorCode::EmptyCollection => 26,
            ErrorCode::CollectionNameNotFound => 28,
            ErrorCode::CreateCredentialFailure => 29,
            ErrorCode::UpdateCredentialFailure => 30,
            ErrorCode::DeleteCredentialFailure => 31,
            ErrorCode::ListCredUsersFailure => 33,
            ErrorCode::RateLimit => 49,
            ErrorCode::Other(code) => code,
        }
    }
}

impl From<i32> for ErrorCode {
    fn from(code: i32) -> Self {
        match code {
            0 => ErrorCode::Success,
            1 => ErrorCode::UnexpectedError,
            2 => ErrorCode::ConnectFailed,
            3 => ErrorCode::PermissionDenied,
            4 => ErrorCode::CollectionNotExists,
            5 => ErrorCode::IllegalArgument,
            7 => ErrorCode::IllegalDimension,
            8 => ErrorCode::IllegalIndexType,
            9 => ErrorCode::IllegalCollectionName,
            10 => ErrorCode::IllegalTopk,
            23 => ErrorCode::IllegalMetricType,
            25 => ErrorCode::IndexNotExist,
            26 => ErrorCode::EmptyCollection,
            28 => ErrorCode::CollectionNameNotFound,
            29 => ErrorCode::CreateCredentialFailure,
            30 => ErrorCode::UpdateCredentialFailure,
            31 => ErrorCode::DeleteCredentialFailure,
            33 => ErrorCode::ListCredUsersFailure,
            49 => ErrorCode::RateLimit,
            other => ErrorCode::Other(other),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Other(code) => write!(f, "{}", code),
            named => write!(f, "{:?}({})", named, named.as_i32()),
        }
    }
}

#[derive(Debug, Error)]
pub enum MilvusError {
    /// Rejected locally, nothing was sent.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The server answered with a non-success status.
    #[error("Milvus error {code}: {reason}")]
    Database { code: ErrorCode, reason: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type MilvusResult<T> = Result<T, MilvusError>;

impl MilvusError {
    pub fn validation(message: impl Into<String>) -> Self {
        MilvusError::Validation(message.into())
    }

    pub fn database(code: impl Into<ErrorCode>, reason: impl Into<String>) -> Self {
        MilvusError::Database {
            code: code.into(),
            reason: reason.into(),
        }
    }

    /// Server error code, when the failure came from a server status.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            MilvusError::Database { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<tonic::Status> for MilvusError {
    fn from(status: tonic::Status) -> Self {
        MilvusError::Transport(format!(
            "gRPC error ({:?}): {}",
            status.code(),
            status.message()
        ))
    }
}

impl From<reqwest::Error> for MilvusError {
    fn from(err: reqwest::Error) -> Self {
        MilvusError::Transport(format!("HTTP error: {}", err))
    }
}

impl From<serde_json::Error> for MilvusError {
    fn from(err: serde_json::Error) -> Self {
        MilvusError::Transport(format!("JSON error: {}", err))
    }
}

impl From<prost::DecodeError> for MilvusError {
    fn from(err: prost::DecodeError) -> Self {
        MilvusError::Transport(format!("Protobuf decode error: {}", err))
    }
}

impl From<GrpcError> for MilvusError {
    fn from(err: GrpcError) -> Self {
        if err.is_config() {
            MilvusError::Config(err.to_string())
        } else {
            MilvusError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_round_trip_for_named_and_unknown() {
        assert_eq!(ErrorCode::from(0), ErrorCode::Success);
        assert_eq!(ErrorCode::from(4), ErrorCode::CollectionNotExists);
        assert_eq!(ErrorCode::from(4).as_i32(), 4);
        assert_eq!(ErrorCode::from(1100), ErrorCode::Other(1100));
        assert_eq!(ErrorCode::Other(1100).as_i32(), 1100);
    }

    #[test]
    fn test_database_error_display() {
        let err = MilvusError::database(4, "collection not found[collection=books]");
        assert_eq!(
            err.to_string(),
            "Milvus error CollectionNotExists(4): collection not found[collection=books]"
        );
        assert_eq!(err.code(), Some(ErrorCode::CollectionNotExists));
    }

    #[test]
    fn test_tonic_status_is_transport() {
        let err: MilvusError = tonic::Status::unavailable("connection refused").into();
        assert!(matches!(err, MilvusError::Transport(msg) if msg.contains("connection refused")));
    }

    #[test]
    fn test_grpc_config_error_is_config() {
        let err: MilvusError = GrpcError::InvalidConfig("bad".into()).into();
        assert!(matches!(err, MilvusError::Config(_)));
    }
}
