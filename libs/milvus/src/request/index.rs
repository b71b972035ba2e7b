use std::collections::HashMap;

use protos::milvus::proto::milvus as proto;
use reqwest::Method;
use serde_json::json;

use super::{
    MilvusRequest, RestRequest, Validate, combine_params, key_value, key_values_json, require_name,
};
use crate::error::MilvusResult;
use crate::types::{IndexType, MetricType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateIndexRequest {
    pub collection_name: String,
    pub field_name: String,
    /// Left to the server when unset
    pub index_name: Option<String>,
    pub index_type: IndexType,
    pub metric_type: MetricType,
    /// Build parameters such as `nlist` or `M`
    pub extra_params: HashMap<String, String>,
}

impl CreateIndexRequest {
    pub fn new(
        collection_name: impl Into<String>,
        field_name: impl Into<String>,
        index_type: IndexType,
        metric_type: MetricType,
    ) -> Self {
        Self {
            collection_name: collection_name.into(),
            field_name: field_name.into(),
            index_name: None,
            index_type,
            metric_type,
            extra_params: HashMap::new(),
        }
    }

    pub fn with_index_name(mut self, index_name: impl Into<String>) -> Self {
        self.index_name = Some(index_name.into());
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_params.insert(key.into(), value.into());
        self
    }

    fn params(&self) -> Vec<protos::milvus::proto::common::KeyValuePair> {
        vec![
            key_value("index_type", self.index_type.as_str()),
            key_value("metric_type", self.metric_type.as_str()),
            key_value("params", combine_params(&self.extra_params)),
        ]
    }
}

impl Validate for CreateIndexRequest {
    fn validate(&self) -> MilvusResult<()> {
        require_name("collection_name", &self.collection_name)?;
        require_name("field_name", &self.field_name)?;
        if let Some(index_name) = &self.index_name {
            require_name("index_name", index_name)?;
        }
        Ok(())
    }
}

impl MilvusRequest for CreateIndexRequest {
    type Grpc = proto::CreateIndexRequest;

    fn to_grpc(&self, db_name: &str) -> Self::Grpc {
        proto::CreateIndexRequest {
            db_name: db_name.to_string(),
            collection_name: self.collection_name.clone(),
            field_name: self.field_name.clone(),
            extra_params: self.params(),
            index_name: self.index_name.clone().unwrap_or_default(),
            ..Default::default()
        }
    }

    fn to_rest(&self, db_name: &str) -> RestRequest {
        RestRequest::new(
            Method::POST,
            "/index",
            json!({
                "collection_name": self.collection_name,
                "field_name": self.field_name,
                "index_name": self.index_name.clone().unwrap_or_default(),
                "extra_params": key_values_json(&self.params()),
                "db_name": db_name,
            }),
        )
    }
}

/// Request addressing the index on one field.
macro_rules! field_index_request {
    ($name:ident, $method:ident, $path:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            pub collection_name: String,
            pub field_name: String,
        }

        impl $name {
            pub fn new(collection_name: impl Into<String>, field_name: impl Into<String>) -> Self {
                Self {
                    collection_name: collection_name.into(),
                    field_name: field_name.into(),
                }
            }
        }

        impl Validate for $name {
            fn validate(&self) -> MilvusResult<()> {
                require_name("collection_name", &self.collection_name)?;
                require_name("field_name", &self.field_name)
            }
        }

        impl MilvusRequest for $name {
            type Grpc = proto::$name;

            fn to_grpc(&self, db_name: &str) -> Self::Grpc {
                proto::$name {
                    db_name: db_name.to_string(),
                    collection_name: self.collection_name.clone(),
                    field_name: self.field_name.clone(),
                    ..Default::default()
                }
            }

            fn to_rest(&self, db_name: &str) -> RestRequest {
                RestRequest::new(
                    Method::$method,
                    $path,
                    json!({
                        "collection_name": self.collection_name,
                        "field_name": self.field_name,
                        "db_name": db_name,
                    }),
                )
            }
        }
    };
}

field_index_request!(DropIndexRequest, DELETE, "/index");
field_index_request!(DescribeIndexRequest, GET, "/index");
field_index_request!(GetIndexBuildProgressRequest, GET, "/index/progress");
field_index_request!(GetIndexStateRequest, GET, "/index/state");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_index_params() {
        let request =
            CreateIndexRequest::new("books", "book_intro", IndexType::IvfFlat, MetricType::L2)
                .with_param("nlist", "1024");
        let grpc = request.build_grpc("default").unwrap();

        assert_eq!(grpc.index_name, "");
        let params: Vec<(&str, &str)> = grpc
            .extra_params
            .iter()
            .map(|kv| (kv.key.as_str(), kv.value.as_str()))
            .collect();
        assert_eq!(
            params,
            vec![
                ("index_type", "IVF_FLAT"),
                ("metric_type", "L2"),
                ("params", r#"{"nlist":1024}"#),
            ]
        );
    }

    #[test]
    fn test_create_index_rest_body() {
        let request =
            CreateIndexRequest::new("books", "book_intro", IndexType::AutoIndex, MetricType::IP)
                .with_index_name("intro_idx");
        let rest = request.build_rest("default").unwrap();

        assert_eq!(rest.path, "/index");
        assert_eq!(rest.body["index_name"], "intro_idx");
        assert_eq!(rest.body["extra_params"][0]["value"], "AUTOINDEX");
        assert_eq!(rest.body["extra_params"][2]["value"], "{}");
    }

    #[test]
    fn test_field_index_requests() {
        assert!(GetIndexStateRequest::new("books", "").validate().is_err());

        let rest = GetIndexStateRequest::new("books", "book_intro").build_rest("default").unwrap();
        assert_eq!(rest.method, Method::GET);
        assert_eq!(rest.path, "/index/state");

        let grpc = DropIndexRequest::new("books", "book_intro").build_grpc("default").unwrap();
        assert_eq!(grpc.field_name, "book_intro");
    }
}
