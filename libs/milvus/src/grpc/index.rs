use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::MilvusGrpcClient;
use crate::client::IndexClient;
use crate::error::MilvusResult;
use crate::request::{
    CreateIndexRequest, DescribeIndexRequest, DropIndexRequest, GetIndexBuildProgressRequest,
    GetIndexStateRequest,
};
use crate::results::{IndexBuildProgress, IndexDescription};
use crate::types::IndexState;

#[async_trait]
impl IndexClient for MilvusGrpcClient {
    async fn create_index(
        &self,
        request: CreateIndexRequest,
        cancel: &CancellationToken,
    ) -> MilvusResult<()> {
        let grpc = self.build(&request)?;
        self.invoke("CreateIndex", &request.collection_name, cancel, |mut c| async move {
            c.create_index(grpc).await
        })
        .await?;
        Ok(())
    }

    async fn drop_index(
        &self,
        collection_name: &str,
        field_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<()> {
        let grpc = self.build(&DropIndexRequest::new(collection_name, field_name))?;
        self.invoke("DropIndex", collection_name, cancel, |mut c| async move {
            c.drop_index(grpc).await
        })
        .await?;
        Ok(())
    }

    async fn describe_index(
        &self,
        collection_name: &str,
        field_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<Vec<IndexDescription>> {
        let grpc = self.build(&DescribeIndexRequest::new(collection_name, field_name))?;
        let response = self
            .invoke("DescribeIndex", collection_name, cancel, |mut c| async move {
                c.describe_index(grpc).await
            })
            .await?;
        Ok(response
            .index_descriptions
            .into_iter()
            .map(IndexDescription::from)
            .collect())
    }

    async fn get_index_build_progress(
        &self,
        collection_name: &str,
        field_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<IndexBuildProgress> {
        let grpc = self.build(&GetIndexBuildProgressRequest::new(collection_name, field_name))?;
        let response = self
            .invoke("GetIndexBuildProgress", collection_name, cancel, |mut c| async move {
                c.get_index_build_progress(grpc).await
            })
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
        let grpc = self.build(&GetIndexStateRequest::new(collection_name, field_name))?;
        let response = self
            .invoke("GetIndexState", collection_name, cancel, |mut c| async move {
                c.get_index_state(grpc).await
            })
            .await?;
        Ok(IndexState::from_i32(response.state))
    }
}
