use async_trait::async_trait;
use protos::milvus::proto::milvus as proto;
use tokio_util::sync::CancellationToken;

use super::MilvusRestClient;
use super::wire;
use crate::client::IndexClient;
use crate::error::MilvusResult;
use crate::request::{
    CreateIndexRequest, DescribeIndexRequest, DropIndexRequest, GetIndexBuildProgressRequest,
    GetIndexStateRequest,
};
use crate::results::{IndexBuildProgress, IndexDescription};
use crate::types::IndexState;

#[async_trait]
impl IndexClient for MilvusRestClient {
    async fn create_index(
        &self,
        request: CreateIndexRequest,
        cancel: &CancellationToken,
    ) -> MilvusResult<()> {
        let rest = self.build(&request)?;
        self.execute("CreateIndex", &request.collection_name, rest, cancel)
            .await
    }

    async fn drop_index(
        &self,
        collection_name: &str,
        field_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<()> {
        let rest = self.build(&DropIndexRequest::new(collection_name, field_name))?;
        self.execute("DropIndex", collection_name, rest, cancel).await
    }

    async fn describe_index(
        &self,
        collection_name: &str,
        field_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<Vec<IndexDescription>> {
        let rest = self.build(&DescribeIndexRequest::new(collection_name, field_name))?;
        let response: wire::DescribeIndexResponse = self
            .invoke("DescribeIndex", collection_name, rest, cancel)
            .await?;
        Ok(response
            .index_descriptions
            .into_iter()
            .map(|d| IndexDescription::from(proto::IndexDescription::from(d)))
            .collect())
    }

    async fn get_index_build_progress(
        &self,
        collection_name: &str,
        field_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<IndexBuildProgress> {
        let rest = self.build(&GetIndexBuildProgressRequest::new(collection_name, field_name))?;
        let response: wire::IndexBuildProgressResponse = self
            .invoke("GetIndexBuildProgress", collection_name, rest, cancel)
            .await?;
        Ok(IndexBuildProgress {
            indexed_rows: response.indexed_rows,
            total_rows: response.total_rows,
        })
    }

    async fn get_index_state(
        &self,
        collection_name: &str,
        field_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<IndexState> {
        let rest = self.build(&GetIndexStateRequest::new(collection_name, field_name))?;
        let response: wire::IndexStateResponse = self
            .invoke("GetIndexState", collection_name, rest, cancel)
            .await?;
        Ok(IndexState::from_i32(response.state))
    }
}
