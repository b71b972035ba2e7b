use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio_util::sync::CancellationToken;

use super::MilvusRestClient;
use super::wire;
use crate::client::{AliasClient, CollectionClient, PartitionClient};
use crate::error::MilvusResult;
use crate::grpc::convert::{description_from_proto, zip_listing};
use crate::request::{
    AlterAliasRequest, CreateAliasRequest, CreateCollectionRequest, CreatePartitionRequest,
    DescribeCollectionRequest, DropAliasRequest, DropCollectionRequest, DropPartitionRequest,
    GetCollectionStatisticsRequest, GetLoadingProgressRequest, GetPartitionStatisticsRequest,
    HasCollectionRequest, HasPartitionRequest, LoadCollectionRequest, LoadPartitionsRequest,
    ReleaseCollectionRequest, ReleasePartitionsRequest, ShowCollectionsRequest,
    ShowPartitionsRequest,
};
use crate::results::{CollectionDescription, CollectionInfo, PartitionInfo};
use crate::types::ShowType;

fn statistics(response: wire::StatisticsResponse) -> HashMap<String, String> {
    response.stats.into_iter().map(|kv| (kv.key, kv.value)).collect()
}

#[async_trait]
impl CollectionClient for MilvusRestClient {
    async fn create_collection(
        &self,
        request: CreateCollectionRequest,
        cancel: &CancellationToken,
    ) -> MilvusResult<()> {
        let rest = self.build(&request)?;
        self.execute("CreateCollection", request.collection_name(), rest, cancel)
            .await
    }

    async fn drop_collection(
        &self,
        collection_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<()> {
        let rest = self.build(&DropCollectionRequest::new(collection_name))?;
        self.execute("DropCollection", collection_name, rest, cancel).await
    }

    async fn describe_collection(
        &self,
        collection_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<CollectionDescription> {
        let rest = self.build(&DescribeCollectionRequest::new(collection_name))?;
        let response: wire::DescribeCollectionResponse = self
            .invoke("DescribeCollection", collection_name, rest, cancel)
            .await?;
        description_from_proto(response.into())
    }

    async fn has_collection(
        &self,
        collection_name: &str,
        as_of: Option<DateTime<Utc>>,
        cancel: &CancellationToken,
    ) -> MilvusResult<bool> {
        let rest = self.build(&HasCollectionRequest::new(collection_name).as_of(as_of))?;
        let response: wire::BoolResponse = self
            .invoke("HasCollection", collection_name, rest, cancel)
            .await?;
        Ok(response.value)
    }

    async fn show_collections(
        &self,
        collection_names: &[String],
        show_type: ShowType,
        cancel: &CancellationToken,
    ) -> MilvusResult<Vec<CollectionInfo>> {
        let rest = self.build(&ShowCollectionsRequest::new(collection_names.to_vec(), show_type))?;
        let response: wire::ShowCollectionsResponse =
            self.invoke("ShowCollections", "*", rest, cancel).await?;

        Ok(zip_listing(
            response.collection_names,
            response.collection_ids,
            response.created_timestamps,
            response.in_memory_percentages,
        )
        .into_iter()
        .map(|(name, id, created_at, in_memory_percentage)| CollectionInfo {
            id,
            name,
            created_at,
            in_memory_percentage,
        })
        .collect())
    }

    async fn load_collection(
        &self,
        collection_name: &str,
        replica_number: i32,
        cancel: &CancellationToken,
    ) -> MilvusResult<()> {
        let rest = self.build(&LoadCollectionRequest::new(collection_name, replica_number))?;
        self.execute("LoadCollection", collection_name, rest, cancel).await
    }

    async fn release_collection(
        &self,
        collection_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<()> {
        let rest = self.build(&ReleaseCollectionRequest::new(collection_name))?;
        self.execute("ReleaseCollection", collection_name, rest, cancel).await
    }

    async fn get_loading_progress(
        &self,
        collection_name: &str,
        partition_names: &[String],
        cancel: &CancellationToken,
    ) -> MilvusResult<i64> {
        let rest = self.build(&GetLoadingProgressRequest::new(
            collection_name,
            partition_names.to_vec(),
        ))?;
        let response: wire::LoadingProgressResponse = self
            .invoke("GetLoadingProgress", collection_name, rest, cancel)
            .await?;
        Ok(response.progress)
    }

    async fn get_collection_statistics(
        &self,
        collection_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<HashMap<String, String>> {
        let rest = self.build(&GetCollectionStatisticsRequest::new(collection_name))?;
        let response = self
            .invoke("GetCollectionStatistics", collection_name, rest, cancel)
            .await?;
        Ok(statistics(response))
    }
}

#[async_trait]
impl PartitionClient for MilvusRestClient {
    async fn create_partition(
        &self,
        collection_name: &str,
        partition_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<()> {
        let rest = self.build(&CreatePartitionRequest::new(collection_name, partition_name))?;
        self.execute("CreatePartition", collection_name, rest, cancel).await
    }

    async fn drop_partition(
        &self,
        collection_name: &str,
        partition_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<()> {
        let rest = self.build(&DropPartitionRequest::new(collection_name, partition_name))?;
        self.execute("DropPartition", collection_name, rest, cancel).await
    }

    async fn has_partition(
        &self,
        collection_name: &str,
        partition_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<bool> {
        let rest = self.build(&HasPartitionRequest::new(collection_name, partition_name))?;
        let response: wire::BoolResponse = self
            .invoke("HasPartition", collection_name, rest, cancel)
            .await?;
        Ok(response.value)
    }

    async fn show_partitions(
        &self,
        collection_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<Vec<PartitionInfo>> {
        let rest = self.build(&ShowPartitionsRequest::new(collection_name))?;
        let response: wire::ShowPartitionsResponse = self
            .invoke("ShowPartitions", collection_name, rest, cancel)
            .await?;

        Ok(zip_listing(
            response.partition_names,
            response.partition_ids,
            response.created_timestamps,
            response.in_memory_percentages,
        )
        .into_iter()
        .map(|(name, id, created_at, in_memory_percentage)| PartitionInfo {
            id,
            name,
            created_at,
            in_memory_percentage,
        })
        .collect())
    }

    async fn load_partitions(
        &self,
        collection_name: &str,
        partition_names: &[String],
        replica_number: i32,
        cancel: &CancellationToken,
    ) -> MilvusResult<()> {
        let rest = self.build(
            &LoadPartitionsRequest::new(collection_name, partition_names.to_vec())
                .with_replica_number(replica_number),
        )?;
        self.execute("LoadPartitions", collection_name, rest, cancel).await
    }

    async fn release_partitions(
        &self,
        collection_name: &str,
        partition_names: &[String],
        cancel: &CancellationToken,
    ) -> MilvusResult<()> {
        let rest = self.build(&ReleasePartitionsRequest::new(
            collection_name,
            partition_names.to_vec(),
        ))?;
        self.execute("ReleasePartitions", collection_name, rest, cancel).await
    }

    async fn get_partition_statistics(
        &self,
        collection_name: &str,
        partition_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<HashMap<String, String>> {
        let rest =
            self.build(&GetPartitionStatisticsRequest::new(collection_name, partition_name))?;
        let response = self
            .invoke("GetPartitionStatistics", collection_name, rest, cancel)
            .await?;
        Ok(statistics(response))
    }
}

#[async_trait]
impl AliasClient for MilvusRestClient {
    async fn create_alias(
        &self,
        collection_name: &str,
        alias: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<()> {
        let rest = self.build(&CreateAliasRequest::new(collection_name, alias))?;
        self.execute("CreateAlias", collection_name, rest, cancel).await
    }

    async fn drop_alias(&self, alias: &str, cancel: &CancellationToken) -> MilvusResult<()> {
        let rest = self.build(&DropAliasRequest::new(alias))?;
        self.execute("DropAlias", alias, rest, cancel).await
    }

    async fn alter_alias(
        &self,
        collection_name: &str,
        alias: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<()> {
        let rest = self.build(&AlterAliasRequest::new(collection_name, alias))?;
        self.execute("AlterAlias", collection_name, rest, cancel).await
    }
}
