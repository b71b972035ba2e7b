use chrono::{DateTime, Utc};
use prost::Message;
use protos::milvus::proto::milvus as proto;
use reqwest::Method;
use serde_json::json;

use super::{
    MilvusRequest, RestRequest, Validate, collection_request, require_name, require_positive,
};
use crate::error::MilvusResult;
use crate::grpc::convert::schema_to_proto;
use crate::rest::wire::schema_json;
use crate::schema::{CollectionSchema, FieldSchema};
use crate::types::{ConsistencyLevel, ShowType, to_hybrid_timestamp};

#[derive(Debug, Clone, PartialEq)]
pub struct CreateCollectionRequest {
    pub schema: CollectionSchema,
    pub consistency_level: ConsistencyLevel,
    pub shards_num: i32,
}

impl CreateCollectionRequest {
    pub fn new(collection_name: impl Into<String>, fields: Vec<FieldSchema>) -> Self {
        Self {
            schema: CollectionSchema::new(collection_name, fields),
            consistency_level: ConsistencyLevel::Session,
            shards_num: 1,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.schema.description = description.into();
        self
    }

    pub fn with_consistency_level(mut self, level: ConsistencyLevel) -> Self {
        self.consistency_level = level;
        self
    }

    pub fn with_shards_num(mut self, shards_num: i32) -> Self {
        self.shards_num = shards_num;
        self
    }

    pub fn collection_name(&self) -> &str {
        &self.schema.name
    }
}

impl Validate for CreateCollectionRequest {
    fn validate(&self) -> MilvusResult<()> {
        self.schema.validate()?;
        require_positive("shards_num", i64::from(self.shards_num))
    }
}

impl MilvusRequest for CreateCollectionRequest {
    type Grpc = proto::CreateCollectionRequest;

    fn to_grpc(&self, db_name: &str) -> Self::Grpc {
        proto::CreateCollectionRequest {
            db_name: db_name.to_string(),
            collection_name: self.schema.name.clone(),
            schema: schema_to_proto(&self.schema).encode_to_vec(),
            shards_num: self.shards_num,
            consistency_level: self.consistency_level.as_i32(),
            ..Default::default()
        }
    }

    fn to_rest(&self, db_name: &str) -> RestRequest {
        RestRequest::new(
            Method::POST,
            "/collection",
            json!({
                "collection_name": self.schema.name,
                "db_name": db_name,
                "schema": schema_json(&self.schema),
                "shards_num": self.shards_num,
                "consistency_level": self.consistency_level.as_i32(),
            }),
        )
    }
}

collection_request!(DropCollectionRequest => DropCollectionRequest, DELETE, "/collection");
collection_request!(DescribeCollectionRequest => DescribeCollectionRequest, GET, "/collection");
collection_request!(
    ReleaseCollectionRequest => ReleaseCollectionRequest, DELETE, "/collection/load"
);
collection_request!(
    GetCollectionStatisticsRequest => GetCollectionStatisticsRequest, GET, "/collection/statistics"
);
collection_request!(
    GetPersistentSegmentInfoRequest => GetPersistentSegmentInfoRequest, GET, "/persist/segment-info"
);
collection_request!(
    GetQuerySegmentInfoRequest => GetQuerySegmentInfoRequest, GET, "/query-segment-info"
);

/// Existence check, optionally as of a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HasCollectionRequest {
    pub collection_name: String,
    pub as_of: Option<DateTime<Utc>>,
}

impl HasCollectionRequest {
    pub fn new(collection_name: impl Into<String>) -> Self {
        Self {
            collection_name: collection_name.into(),
            as_of: None,
        }
    }

    pub fn as_of(mut self, time: Option<DateTime<Utc>>) -> Self {
        self.as_of = time;
        self
    }

    fn time_stamp(&self) -> u64 {
        self.as_of.map(to_hybrid_timestamp).unwrap_or(0)
    }
}

impl Validate for HasCollectionRequest {
    fn validate(&self) -> MilvusResult<()> {
        require_name("collection_name", &self.collection_name)
    }
}

impl MilvusRequest for HasCollectionRequest {
    type Grpc = proto::HasCollectionRequest;

    fn to_grpc(&self, db_name: &str) -> Self::Grpc {
        proto::HasCollectionRequest {
            db_name: db_name.to_string(),
            collection_name: self.collection_name.clone(),
            time_stamp: self.time_stamp(),
            ..Default::default()
        }
    }

    fn to_rest(&self, db_name: &str) -> RestRequest {
        RestRequest::new(
            Method::GET,
            "/collection/existence",
            json!({
                "collection_name": self.collection_name,
                "db_name": db_name,
                "time_stamp": self.time_stamp(),
            }),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowCollectionsRequest {
    /// Restrict the listing to these names; empty lists everything
    pub collection_names: Vec<String>,
    pub show_type: ShowType,
}

impl ShowCollectionsRequest {
    pub fn new(collection_names: Vec<String>, show_type: ShowType) -> Self {
        Self {
            collection_names,
            show_type,
        }
    }
}

impl Validate for ShowCollectionsRequest {
    fn validate(&self) -> MilvusResult<()> {
        self.collection_names
            .iter()
            .try_for_each(|name| require_name("collection_names", name))
    }
}

impl MilvusRequest for ShowCollectionsRequest {
    type Grpc = proto::ShowCollectionsRequest;

    fn to_grpc(&self, db_name: &str) -> Self::Grpc {
        proto::ShowCollectionsRequest {
            db_name: db_name.to_string(),
            r#type: self.show_type.as_i32(),
            collection_names: self.collection_names.clone(),
            ..Default::default()
        }
    }

    fn to_rest(&self, db_name: &str) -> RestRequest {
        RestRequest::new(
            Method::GET,
            "/collections",
            json!({
                "db_name": db_name,
                "type": self.show_type.as_i32(),
                "collection_names": self.collection_names,
            }),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadCollectionRequest {
    pub collection_name: String,
    pub replica_number: i32,
}

impl LoadCollectionRequest {
    pub fn new(collection_name: impl Into<String>, replica_number: i32) -> Self {
        Self {
            collection_name: collection_name.into(),
            replica_number,
        }
    }
}

impl Validate for LoadCollectionRequest {
    fn validate(&self) -> MilvusResult<()> {
        require_name("collection_name", &self.collection_name)?;
        require_positive("replica_number", i64::from(self.replica_number))
    }
}

impl MilvusRequest for LoadCollectionRequest {
    type Grpc = proto::LoadCollectionRequest;

    fn to_grpc(&self, db_name: &str) -> Self::Grpc {
        proto::LoadCollectionRequest {
            db_name: db_name.to_string(),
            collection_name: self.collection_name.clone(),
            replica_number: self.replica_number,
            ..Default::default()
        }
    }

    fn to_rest(&self, db_name: &str) -> RestRequest {
        RestRequest::new(
            Method::POST,
            "/collection/load",
            json!({
                "collection_name": self.collection_name,
                "db_name": db_name,
                "replica_number": self.replica_number,
            }),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetLoadingProgressRequest {
    pub collection_name: String,
    /// Empty means the whole collection
    pub partition_names: Vec<String>,
}

impl GetLoadingProgressRequest {
    pub fn new(collection_name: impl Into<String>, partition_names: Vec<String>) -> Self {
        Self {
            collection_name: collection_name.into(),
            partition_names,
        }
    }
}

impl Validate for GetLoadingProgressRequest {
    fn validate(&self) -> MilvusResult<()> {
        require_name("collection_name", &self.collection_name)?;
        self.partition_names
            .iter()
            .try_for_each(|name| require_name("partition_names", name))
    }
}

impl MilvusRequest for GetLoadingProgressRequest {
    type Grpc = proto::GetLoadingProgressRequest;

    fn to_grpc(&self, db_name: &str) -> Self::Grpc {
        proto::GetLoadingProgressRequest {
            db_name: db_name.to_string(),
            collection_name: self.collection_name.clone(),
            partition_names: self.partition_names.clone(),
            ..Default::default()
        }
    }

    fn to_rest(&self, db_name: &str) -> RestRequest {
        RestRequest::new(
            Method::GET,
            "/loading_progress",
            json!({
                "collection_name": self.collection_name,
                "db_name": db_name,
                "partition_names": self.partition_names,
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MilvusError;
    use crate::types::DataType;
    use chrono::TimeZone;
    use protos::milvus::proto::schema as proto_schema;

    fn fields() -> Vec<FieldSchema> {
        vec![
            FieldSchema::scalar("book_id", DataType::Int64).primary_key(false),
            FieldSchema::float_vector("book_intro", 2),
        ]
    }

    #[test]
    fn test_create_collection_embeds_encoded_schema() {
        let request = CreateCollectionRequest::new("books", fields())
            .with_consistency_level(ConsistencyLevel::Strong)
            .with_shards_num(2);
        let grpc = request.build_grpc("default").unwrap();

        assert_eq!(grpc.collection_name, "books");
        assert_eq!(grpc.shards_num, 2);
        assert_eq!(grpc.consistency_level, 0);
        let schema = proto_schema::CollectionSchema::decode(grpc.schema.as_slice()).unwrap();
        assert_eq!(schema.fields.len(), 2);
        assert!(schema.fields[0].is_primary_key);
        assert_eq!(schema.fields[1].type_params[0].key, "dim");
        assert_eq!(schema.fields[1].type_params[0].value, "2");
    }

    #[test]
    fn test_create_collection_rest_body() {
        let request = CreateCollectionRequest::new("books", fields());
        let rest = request.build_rest("default").unwrap();

        assert_eq!(rest.method, Method::POST);
        assert_eq!(rest.path, "/collection");
        assert_eq!(rest.body["collection_name"], "books");
        assert_eq!(rest.body["schema"]["fields"][0]["is_primary_key"], true);
        assert_eq!(rest.body["schema"]["fields"][1]["data_type"], 101);
    }

    #[test]
    fn test_create_collection_validation() {
        let request = CreateCollectionRequest::new("", fields());
        assert!(matches!(request.build_grpc("default"), Err(MilvusError::Validation(_))));

        let request = CreateCollectionRequest::new("books", fields()).with_shards_num(0);
        assert!(request.build_rest("default").is_err());
    }

    #[test]
    fn test_has_collection_as_of() {
        let time = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let request = HasCollectionRequest::new("books").as_of(Some(time));
        let grpc = request.build_grpc("default").unwrap();
        assert_eq!(grpc.time_stamp, to_hybrid_timestamp(time));

        let grpc = HasCollectionRequest::new("books").build_grpc("default").unwrap();
        assert_eq!(grpc.time_stamp, 0);
    }

    #[test]
    fn test_simple_collection_requests() {
        let rest = DropCollectionRequest::new("books").build_rest("db1").unwrap();
        assert_eq!(rest.method, Method::DELETE);
        assert_eq!(rest.path, "/collection");
        assert_eq!(rest.body["db_name"], "db1");

        let grpc = ReleaseCollectionRequest::new("books").build_grpc("db1").unwrap();
        assert_eq!(grpc.collection_name, "books");
        assert_eq!(grpc.db_name, "db1");

        assert!(DescribeCollectionRequest::new(" ").validate().is_err());
    }

    #[test]
    fn test_load_collection_needs_replicas() {
        assert!(LoadCollectionRequest::new("books", 0).validate().is_err());
        let grpc = LoadCollectionRequest::new("books", 2).build_grpc("default").unwrap();
        assert_eq!(grpc.replica_number, 2);
    }
}
