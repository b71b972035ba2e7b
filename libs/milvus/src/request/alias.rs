use protos::milvus::proto::milvus as proto;
use reqwest::Method;
use serde_json::json;

use super::{MilvusRequest, RestRequest, Validate, require_name};
use crate::error::MilvusResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAliasRequest {
    pub collection_name: String,
    pub alias: String,
}

impl CreateAliasRequest {
    pub fn new(collection_name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            collection_name: collection_name.into(),
            alias: alias.into(),
        }
    }
}

impl Validate for CreateAliasRequest {
    fn validate(&self) -> MilvusResult<()> {
        require_name("collection_name", &self.collection_name)?;
        require_name("alias", &self.alias)
    }
}

impl MilvusRequest for CreateAliasRequest {
    type Grpc = proto::CreateAliasRequest;

    fn to_grpc(&self, db_name: &str) -> Self::Grpc {
        proto::CreateAliasRequest {
            db_name: db_name.to_string(),
            collection_name: self.collection_name.clone(),
            alias: self.alias.clone(),
            ..Default::default()
        }
    }

    fn to_rest(&self, db_name: &str) -> RestRequest {
        RestRequest::new(
            Method::POST,
            "/alias",
            json!({
                "collection_name": self.collection_name,
                "alias": self.alias,
                "db_name": db_name,
            }),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropAliasRequest {
    pub alias: String,
}

impl DropAliasRequest {
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
        }
    }
}

impl Validate for DropAliasRequest {
    fn validate(&self) -> MilvusResult<()> {
        require_name("alias", &self.alias)
    }
}

impl MilvusRequest for DropAliasRequest {
    type Grpc = proto::DropAliasRequest;

    fn to_grpc(&self, db_name: &str) -> Self::Grpc {
        proto::DropAliasRequest {
            db_name: db_name.to_string(),
            alias: self.alias.clone(),
            ..Default::default()
        }
    }

    fn to_rest(&self, db_name: &str) -> RestRequest {
        RestRequest::new(
            Method::DELETE,
            "/alias",
            json!({ "alias": self.alias, "db_name": db_name }),
        )
    }
}

/// Points an existing alias at another collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterAliasRequest {
    pub collection_name: String,
    pub alias: String,
}

impl AlterAliasRequest {
    pub fn new(collection_name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            collection_name: collection_name.into(),
            alias: alias.into(),
        }
    }
}

impl Validate for AlterAliasRequest {
    fn validate(&self) -> MilvusResult<()> {
        require_name("collection_name", &self.collection_name)?;
        require_name("alias", &self.alias)
    }
}

impl MilvusRequest for AlterAliasRequest {
    type Grpc = proto::AlterAliasRequest;

    fn to_grpc(&self, db_name: &str) -> Self::Grpc {
        proto::AlterAliasRequest {
            db_name: db_name.to_string(),
            collection_name: self.collection_name.clone(),
            alias: self.alias.clone(),
            ..Default::default()
        }
    }

    fn to_rest(&self, db_name: &str) -> RestRequest {
        RestRequest::new(
            Method::PATCH,
            "/alias",
            json!({
                "collection_name": self.collection_name,
                "alias": self.alias,
                "db_name": db_name,
            }),
        )
    }
}
