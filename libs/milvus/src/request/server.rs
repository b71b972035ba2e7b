//! Server-wide requests: health, version, metrics and compaction.

use chrono::{DateTime, Utc};
use protos::milvus::proto::milvus as proto;
use reqwest::Method;
use serde_json::json;

use super::{MilvusRequest, RestRequest, Validate, require_name};
use crate::error::{MilvusError, MilvusResult};
use crate::types::to_hybrid_timestamp;

/// Request without parameters.
macro_rules! empty_request {
    ($name:ident, $path:literal) => {
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name;

        impl Validate for $name {
            fn validate(&self) -> MilvusResult<()> {
                Ok(())
            }
        }

        impl MilvusRequest for $name {
            type Grpc = proto::$name;

            fn to_grpc(&self, _db_name: &str) -> Self::Grpc {
                proto::$name::default()
            }

            fn to_rest(&self, _db_name: &str) -> RestRequest {
                RestRequest::new(Method::GET, $path, json!({}))
            }
        }
    };
}

empty_request!(CheckHealthRequest, "/health");
empty_request!(GetVersionRequest, "/version");

/// Metrics query. `request` is a JSON document such as `{"metric_type": "system_info"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetMetricsRequest {
    pub request: String,
}

impl GetMetricsRequest {
    pub fn new(request: impl Into<String>) -> Self {
        Self {
            request: request.into(),
        }
    }
}

impl Validate for GetMetricsRequest {
    fn validate(&self) -> MilvusResult<()> {
        require_name("request", &self.request)?;
        serde_json::from_str::<serde_json::Value>(&self.request)
            .map(|_| ())
            .map_err(|e| MilvusError::validation(format!("Metrics request is not JSON: {}", e)))
    }
}

impl MilvusRequest for GetMetricsRequest {
    type Grpc = proto::GetMetricsRequest;

    fn to_grpc(&self, _db_name: &str) -> Self::Grpc {
        proto::GetMetricsRequest {
            request: self.request.clone(),
            ..Default::default()
        }
    }

    fn to_rest(&self, _db_name: &str) -> RestRequest {
        RestRequest::new(Method::GET, "/metrics", json!({ "request": self.request }))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualCompactionRequest {
    pub collection_id: i64,
    pub travel_timestamp: Option<DateTime<Utc>>,
}

impl ManualCompactionRequest {
    pub fn new(collection_id: i64, travel_timestamp: Option<DateTime<Utc>>) -> Self {
        Self {
            collection_id,
            travel_timestamp,
        }
    }

    fn timetravel(&self) -> u64 {
        self.travel_timestamp.map(to_hybrid_timestamp).unwrap_or(0)
    }
}

impl Validate for ManualCompactionRequest {
    fn validate(&self) -> MilvusResult<()> {
        if self.collection_id <= 0 {
            return Err(MilvusError::validation("collection_id must be positive"));
        }
        Ok(())
    }
}

impl MilvusRequest for ManualCompactionRequest {
    type Grpc = proto::ManualCompactionRequest;

    fn to_grpc(&self, _db_name: &str) -> Self::Grpc {
        proto::ManualCompactionRequest {
            collection_id: self.collection_id,
            timetravel: self.timetravel(),
        }
    }

    fn to_rest(&self, _db_name: &str) -> RestRequest {
        RestRequest::new(
            Method::POST,
            "/compaction",
            json!({
                "collectionID": self.collection_id,
                "timetravel": self.timetravel(),
            }),
        )
    }
}

macro_rules! compaction_request {
    ($name:ident, $path:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            pub compaction_id: i64,
        }

        impl $name {
            pub fn new(compaction_id: i64) -> Self {
                Self { compaction_id }
            }
        }

        impl Validate for $name {
            fn validate(&self) -> MilvusResult<()> {
                if self.compaction_id <= 0 {
                    return Err(MilvusError::validation("compaction_id must be positive"));
                }
                Ok(())
            }
        }

        impl MilvusRequest for $name {
            type Grpc = proto::$name;

            fn to_grpc(&self, _db_name: &str) -> Self::Grpc {
                proto::$name {
                    compaction_id: self.compaction_id,
                }
            }

            fn to_rest(&self, _db_name: &str) -> RestRequest {
                RestRequest::new(
                    Method::GET,
                    $path,
                    json!({ "compactionID": self.compaction_id }),
                )
            }
        }
    };
}

compaction_request!(GetCompactionStateRequest, "/compaction/state");
compaction_request!(GetCompactionPlansRequest, "/compaction/plans");

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_metrics_request_must_be_json() {
        assert!(GetMetricsRequest::new("system_info").validate().is_err());
        let rest = GetMetricsRequest::new(r#"{"metric_type":"system_info"}"#)
            .build_rest("default")
            .unwrap();
        assert_eq!(rest.path, "/metrics");
    }

    #[test]
    fn test_manual_compaction_timetravel() {
        let time = Utc.with_ymd_and_hms(2023, 3, 1, 0, 0, 0).unwrap();
        let grpc = ManualCompactionRequest::new(42, Some(time)).build_grpc("default").unwrap();
        assert_eq!(grpc.collection_id, 42);
        assert_eq!(grpc.timetravel, to_hybrid_timestamp(time));

        let rest = ManualCompactionRequest::new(42, None).build_rest("default").unwrap();
        assert_eq!(rest.body["collectionID"], 42);
        assert_eq!(rest.body["timetravel"], 0);

        assert!(ManualCompactionRequest::new(0, None).validate().is_err());
    }

    #[test]
    fn test_compaction_id_requests() {
        assert!(GetCompactionPlansRequest::new(-1).validate().is_err());
        let rest = GetCompactionStateRequest::new(7).build_rest("default").unwrap();
        assert_eq!(rest.path, "/compaction/state");
        assert_eq!(rest.body["compactionID"], 7);
    }
}
