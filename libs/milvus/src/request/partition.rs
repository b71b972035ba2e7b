use protos::milvus::proto::milvus as proto;
use reqwest::Method;
use serde_json::json;

use super::{MilvusRequest, RestRequest, Validate, require_name, require_names, require_positive};
use crate::error::MilvusResult;

/// Request over one partition of a collection.
macro_rules! partition_request {
    ($name:ident, $method:ident, $path:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            pub collection_name: String,
            pub partition_name: String,
        }

        impl $name {
            pub fn new(
                collection_name: impl Into<String>,
                partition_name: impl Into<String>,
            ) -> Self {
                Self {
                    collection_name: collection_name.into(),
                    partition_name: partition_name.into(),
                }
            }
        }

        impl Validate for $name {
            fn validate(&self) -> MilvusResult<()> {
                require_name("collection_name", &self.collection_name)?;
                require_name("partition_name", &self.partition_name)
            }
        }

        impl MilvusRequest for $name {
            type Grpc = proto::$name;

            fn to_grpc(&self, db_name: &str) -> Self::Grpc {
                proto::$name {
                    db_name: db_name.to_string(),
                    collection_name: self.collection_name.clone(),
                    partition_name: self.partition_name.clone(),
                    ..Default::default()
                }
            }

            fn to_rest(&self, db_name: &str) -> RestRequest {
                RestRequest::new(
                    Method::$method,
                    $path,
                    json!({
                        "collection_name": self.collection_name,
                        "partition_name": self.partition_name,
                        "db_name": db_name,
                    }),
                )
            }
        }
    };
}

partition_request!(CreatePartitionRequest, POST, "/partition");
partition_request!(DropPartitionRequest, DELETE, "/partition");
partition_request!(HasPartitionRequest, GET, "/partition/existence");
partition_request!(GetPartitionStatisticsRequest, GET, "/partition/statistics");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadPartitionsRequest {
    pub collection_name: String,
    pub partition_names: Vec<String>,
    pub replica_number: i32,
}

impl LoadPartitionsRequest {
    pub fn new(collection_name: impl Into<String>, partition_names: Vec<String>) -> Self {
        Self {
            collection_name: collection_name.into(),
            partition_names,
            replica_number: 1,
        }
    }

    pub fn with_replica_number(mut self, replica_number: i32) -> Self {
        self.replica_number = replica_number;
        self
    }
}

impl Validate for LoadPartitionsRequest {
    fn validate(&self) -> MilvusResult<()> {
        require_name("collection_name", &self.collection_name)?;
        require_names("partition_names", &self.partition_names)?;
        require_positive("replica_number", i64::from(self.replica_number))
    }
}

impl MilvusRequest for LoadPartitionsRequest {
    type Grpc = proto::LoadPartitionsRequest;

    fn to_grpc(&self, db_name: &str) -> Self::Grpc {
        proto::LoadPartitionsRequest {
            db_name: db_name.to_string(),
            collection_name: self.collection_name.clone(),
            partition_names: self.partition_names.clone(),
            replica_number: self.replica_number,
            ..Default::default()
        }
    }

    fn to_rest(&self, db_name: &str) -> RestRequest {
        RestRequest::new(
            Method::POST,
            "/partitions/load",
            json!({
                "collection_name": self.collection_name,
                "partition_names": self.partition_names,
                "replica_number": self.replica_number,
                "db_name": db_name,
            }),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasePartitionsRequest {
    pub collection_name: String,
    pub partition_names: Vec<String>,
}

impl ReleasePartitionsRequest {
    pub fn new(collection_name: impl Into<String>, partition_names: Vec<String>) -> Self {
        Self {
            collection_name: collection_name.into(),
            partition_names,
        }
    }
}

impl Validate for ReleasePartitionsRequest {
    fn validate(&self) -> MilvusResult<()> {
        require_name("collection_name", &self.collection_name)?;
        require_names("partition_names", &self.partition_names)
    }
}

impl MilvusRequest for ReleasePartitionsRequest {
    type Grpc = proto::ReleasePartitionsRequest;

    fn to_grpc(&self, db_name: &str) -> Self::Grpc {
        proto::ReleasePartitionsRequest {
            db_name: db_name.to_string(),
            collection_name: self.collection_name.clone(),
            partition_names: self.partition_names.clone(),
            ..Default::default()
        }
    }

    fn to_rest(&self, db_name: &str) -> RestRequest {
        RestRequest::new(
            Method::DELETE,
            "/partitions/load",
            json!({
                "collection_name": self.collection_name,
                "partition_names": self.partition_names,
                "db_name": db_name,
            }),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowPartitionsRequest {
    pub collection_name: String,
}

impl ShowPartitionsRequest {
    pub fn new(collection_name: impl Into<String>) -> Self {
        Self {
            collection_name: collection_name.into(),
        }
    }
}

impl Validate for ShowPartitionsRequest {
    fn validate(&self) -> MilvusResult<()> {
        require_name("collection_name", &self.collection_name)
    }
}

impl MilvusRequest for ShowPartitionsRequest {
    type Grpc = proto::ShowPartitionsRequest;

    fn to_grpc(&self, db_name: &str) -> Self::Grpc {
        proto::ShowPartitionsRequest {
            db_name: db_name.to_string(),
            collection_name: self.collection_name.clone(),
            r#type: proto::ShowType::All as i32,
            ..Default::default()
        }
    }

    fn to_rest(&self, db_name: &str) -> RestRequest {
        RestRequest::new(
            Method::GET,
            "/partitions",
            json!({
                "collection_name": self.collection_name,
                "db_name": db_name,
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_requests_need_both_names() {
        assert!(CreatePartitionRequest::new("books", "").validate().is_err());
        assert!(HasPartitionRequest::new("", "novels").validate().is_err());

        let rest = HasPartitionRequest::new("books", "novels").build_rest("default").unwrap();
        assert_eq!(rest.method, Method::GET);
        assert_eq!(rest.path, "/partition/existence");
        assert_eq!(rest.body["partition_name"], "novels");
    }

    #[test]
    fn test_load_partitions() {
        let request = LoadPartitionsRequest::new("books", vec!["novels".to_string()])
            .with_replica_number(2);
        let grpc = request.build_grpc("default").unwrap();
        assert_eq!(grpc.partition_names, vec!["novels"]);
        assert_eq!(grpc.replica_number, 2);

        assert!(LoadPartitionsRequest::new("books", vec![]).validate().is_err());
    }

    #[test]
    fn test_release_partitions_rest() {
        let rest = ReleasePartitionsRequest::new("books", vec!["novels".to_string()])
            .build_rest("default")
            .unwrap();
        assert_eq!(rest.method, Method::DELETE);
        assert_eq!(rest.path, "/partitions/load");
        assert_eq!(rest.body["partition_names"][0], "novels");
    }
}
