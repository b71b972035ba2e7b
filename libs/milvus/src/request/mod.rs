//! Typed request model.
//!
//! Every operation has a request type that validates itself and renders
//! into either wire format: a prost message for the gRPC transport or a
//! method/path/JSON body triple for the REST transport. Rendering always
//! validates first, so invalid input never reaches the wire.

use std::collections::HashMap;

use protos::milvus::proto::common::KeyValuePair;
use reqwest::Method;
use serde_json::{Map, Value};

use crate::error::{MilvusError, MilvusResult};

pub mod alias;
pub mod collection;
pub mod credential;
pub mod entity;
pub mod index;
pub mod partition;
pub mod server;

pub use alias::{AlterAliasRequest, CreateAliasRequest, DropAliasRequest};
pub use collection::{
    CreateCollectionRequest, DescribeCollectionRequest, DropCollectionRequest,
    GetCollectionStatisticsRequest, GetLoadingProgressRequest, GetPersistentSegmentInfoRequest,
    GetQuerySegmentInfoRequest, HasCollectionRequest, LoadCollectionRequest,
    ReleaseCollectionRequest, ShowCollectionsRequest,
};
pub use credential::{
    CreateCredentialRequest, DeleteCredentialRequest, ListCredUsersRequest,
    UpdateCredentialRequest,
};
pub use entity::{
    CalcDistanceRequest, DeleteRequest, FlushRequest, GetFlushStateRequest, InsertRequest,
    QueryRequest, SearchRequest,
};
pub use index::{
    CreateIndexRequest, DescribeIndexRequest, DropIndexRequest, GetIndexBuildProgressRequest,
    GetIndexStateRequest,
};
pub use partition::{
    CreatePartitionRequest, DropPartitionRequest, GetPartitionStatisticsRequest,
    HasPartitionRequest, LoadPartitionsRequest, ReleasePartitionsRequest, ShowPartitionsRequest,
};
pub use server::{
    CheckHealthRequest, GetCompactionPlansRequest, GetCompactionStateRequest, GetMetricsRequest,
    GetVersionRequest, ManualCompactionRequest,
};

/// A request rendered for the REST transport. `path` is relative to `/api/v1`.
#[derive(Debug, Clone, PartialEq)]
pub struct RestRequest {
    pub method: Method,
    pub path: &'static str,
    pub body: Value,
}

impl RestRequest {
    pub fn new(method: Method, path: &'static str, body: Value) -> Self {
        Self { method, path, body }
    }
}

pub trait Validate {
    fn validate(&self) -> MilvusResult<()>;
}

pub trait MilvusRequest: Validate {
    type Grpc;

    fn to_grpc(&self, db_name: &str) -> Self::Grpc;

    fn to_rest(&self, db_name: &str) -> RestRequest;

    fn build_grpc(&self, db_name: &str) -> MilvusResult<Self::Grpc> {
        self.validate()?;
        Ok(self.to_grpc(db_name))
    }

    fn build_rest(&self, db_name: &str) -> MilvusResult<RestRequest> {
        self.validate()?;
        Ok(self.to_rest(db_name))
    }
}

pub(crate) fn require_name(what: &str, value: &str) -> MilvusResult<()> {
    if value.trim().is_empty() {
        return Err(MilvusError::validation(format!("{} cannot be empty", what)));
    }
    Ok(())
}

pub(crate) fn require_names(what: &str, values: &[String]) -> MilvusResult<()> {
    if values.is_empty() {
        return Err(MilvusError::validation(format!("{} cannot be empty", what)));
    }
    values.iter().try_for_each(|v| require_name(what, v))
}

pub(crate) fn require_positive(what: &str, value: i64) -> MilvusResult<()> {
    if value <= 0 {
        return Err(MilvusError::validation(format!(
            "{} must be positive, got {}",
            what, value
        )));
    }
    Ok(())
}

/// Joins free-form parameters into the JSON object Milvus expects in its
/// `params` entry. Values that parse as JSON (numbers, booleans) stay raw.
pub(crate) fn combine_params(params: &HashMap<String, String>) -> String {
    let mut keys: Vec<&String> = params.keys().collect();
    keys.sort();
    let object: Map<String, Value> = keys
        .into_iter()
        .map(|key| {
            let raw = &params[key];
            let value =
                serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
            (key.clone(), value)
        })
        .collect();
    Value::Object(object).to_string()
}

pub(crate) fn key_value(key: impl Into<String>, value: impl Into<String>) -> KeyValuePair {
    KeyValuePair {
        key: key.into(),
        value: value.into(),
    }
}

pub(crate) fn key_values_json(pairs: &[KeyValuePair]) -> Value {
    Value::Array(
        pairs
            .iter()
            .map(|kv| serde_json::json!({ "key": kv.key, "value": kv.value }))
            .collect(),
    )
}

/// Request over a single collection name.
macro_rules! collection_request {
    ($(#[$meta:meta])* $name:ident => $proto:ident, $method:ident, $path:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            pub collection_name: String,
        }

        impl $name {
            pub fn new(collection_name: impl Into<String>) -> Self {
                Self {
                    collection_name: collection_name.into(),
                }
            }
        }

        impl $crate::request::Validate for $name {
            fn validate(&self) -> $crate::error::MilvusResult<()> {
                $crate::request::require_name("collection_name", &self.collection_name)
            }
        }

        impl $crate::request::MilvusRequest for $name {
            type Grpc = ::protos::milvus::proto::milvus::$proto;

            fn to_grpc(&self, db_name: &str) -> Self::Grpc {
                ::protos::milvus::proto::milvus::$proto {
                    db_name: db_name.to_string(),
                    collection_name: self.collection_name.clone(),
                    ..Default::default()
                }
            }

            fn to_rest(&self, db_name: &str) -> $crate::request::RestRequest {
                $crate::request::RestRequest::new(
                    ::reqwest::Method::$method,
                    $path,
                    ::serde_json::json!({
                        "collection_name": self.collection_name,
                        "db_name": db_name,
                    }),
                )
            }
        }
    };
}

pub(crate) use collection_request;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_params_keeps_numbers_raw() {
        let params = HashMap::from([
            ("nlist".to_string(), "1024".to_string()),
            ("level".to_string(), "high".to_string()),
        ]);
        assert_eq!(combine_params(&params), r#"{"level":"high","nlist":1024}"#);
        assert_eq!(combine_params(&HashMap::new()), "{}");
    }

    #[test]
    fn test_require_helpers() {
        assert!(require_name("collection_name", "  ").is_err());
        assert!(require_names("partition_names", &[]).is_err());
        assert!(require_names("partition_names", &["p".to_string(), "".to_string()]).is_err());
        assert!(require_positive("replica_number", 0).is_err());
        assert!(require_positive("replica_number", 1).is_ok());
    }
}
