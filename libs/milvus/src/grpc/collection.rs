use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio_util::sync::CancellationToken;

use super::MilvusGrpcClient;
use super::convert::{description_from_proto, key_value_map, zip_listing};
use crate::client::{AliasClient, CollectionClient, PartitionClient};
use crate::error::MilvusResult;
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

#[async_trait]
impl CollectionClient for MilvusGrpcClient {
    async fn create_collection(
        &self,
        request: CreateCollectionRequest,
        cancel: &CancellationToken,
    ) -> MilvusResult<()> {
        let grpc = self.build(&request)?;
        self.invoke("CreateCollection", request.collection_name(), cancel, |mut c| async move {
            c.create_collection(grpc).await
        })
        .await?;
        Ok(())
    }

    async fn drop_collection(
        &self,
        collection_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<()> {
        let grpc = self.build(&DropCollectionRequest::new(collection_name))?;
        self.invoke("DropCollection", collection_name, cancel, |mut c| async move {
            c.drop_collection(grpc).await
        })
        .await?;
        Ok(())
    }

    async fn describe_collection(
        &self,
        collection_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<CollectionDescription> {
        let grpc = self.build(&DescribeCollectionRequest::new(collection_name))?;
        let response = self
            .invoke("DescribeCollection", collection_name, cancel, |mut c| async move {
                c.describe_collection(grpc).await
            })
            .await?;
        description_from_proto(response)
    }

    async fn has_collection(
        &self,
        collection_name: &str,
        as_of: Option<DateTime<Utc>>,
        cancel: &CancellationToken,
    ) -> MilvusResult<bool> {
        let grpc = self.build(&HasCollectionRequest::new(collection_name).as_of(as_of))?;
        let response = self
            .invoke("HasCollection", collection_name, cancel, |mut c| async move {
                c.has_collection(grpc).await
            })
            .await?;
        Ok(response.value)
    }

    async fn show_collections(
        &self,
        collection_names: &[String],
        show_type: ShowType,
        cancel: &CancellationToken,
    ) -> MilvusResult<Vec<CollectionInfo>> {
        let grpc = self.build(&ShowCollectionsRequest::new(collection_names.to_vec(), show_type))?;
        let response = self
            .invoke("ShowCollections", "*", cancel, |mut c| async move {
                c.show_collections(grpc).await
            })
            .await?;

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
        let grpc = self.build(&LoadCollectionRequest::new(collection_name, replica_number))?;
        self.invoke("LoadCollection", collection_name, cancel, |mut c| async move {
            c.load_collection(grpc).await
        })
        .await?;
        Ok(())
    }

    async fn release_collection(
        &self,
        collection_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<()> {
        let grpc = self.build(&ReleaseCollectionRequest::new(collection_name))?;
        self.invoke("ReleaseCollection", collection_name, cancel, |mut c| async move {
            c.release_collection(grpc).await
        })
        .await?;
        Ok(())
    }

    async fn get_loading_progress(
        &self,
        collection_name: &str,
        partition_names: &[String],
        cancel: &CancellationToken,
    ) -> MilvusResult<i64> {
        let grpc = self.build(&GetLoadingProgressRequest::new(
            collection_name,
            partition_names.to_vec(),
        ))?;
        let response = self
            .invoke("GetLoadingProgress", collection_name, cancel, |mut c| async move {
                c.get_loading_progress(grpc).await
            })
            .await?;
        Ok(response.progress)
    }

    async fn get_collection_statistics(
        &self,
        collection_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<HashMap<String, String>> {
        let grpc = self.build(&GetCollectionStatisticsRequest::new(collection_name))?;
        let response = self
            .invoke("GetCollectionStatistics", collection_name, cancel, |mut c| async move {
                c.get_collection_statistics(grpc).await
            })
            .await?;
        Ok(key_value_map(response.stats))
    }
}

#[async_trait]
impl PartitionClient for MilvusGrpcClient {
    async fn create_partition(
        &self,
        collection_name: &str,
        partition_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<()> {
        let grpc = self.build(&CreatePartitionRequest::new(collection_name, partition_name))?;
        self.invoke("CreatePartition", collection_name, cancel, |mut c| async move {
            c.create_partition(grpc).await
        })
        .await?;
        Ok(())
    }

    async fn drop_partition(
        &self,
        collection_name: &str,
        partition_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<()> {
        let grpc = self.build(&DropPartitionRequest::new(collection_name, partition_name))?;
        self.invoke("DropPartition", collection_name, cancel, |mut c| async move {
            c.drop_partition(grpc).await
        })
        .await?;
        Ok(())
    }

    async fn has_partition(
        &self,
        collection_name: &str,
        partition_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<bool> {
        let grpc = self.build(&HasPartitionRequest::new(collection_name, partition_name))?;
        let response = self
            .invoke("HasPartition", collection_name, cancel, |mut c| async move {
                c.has_partition(grpc).await
            })
            .await?;
        Ok(response.value)
    }

    async fn show_partitions(
        &self,
        collection_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<Vec<PartitionInfo>> {
        let grpc = self.build(&ShowPartitionsRequest::new(collection_name))?;
        let response = self
            .invoke("ShowPartitions", collection_name, cancel, |mut c| async move {
                c.show_partitions(grpc).await
            })
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
        let request = LoadPartitionsRequest::new(collection_name, partition_names.to_vec())
            .with_replica_number(replica_number);
        let grpc = self.build(&request)?;
        self.invoke("LoadPartitions", collection_name, cancel, |mut c| async move {
            c.load_partitions(grpc).await
        })
        .await?;
        Ok(())
    }

    async fn release_partitions(
        &self,
        collection_name: &str,
        partition_names: &[String],
        cancel: &CancellationToken,
    ) -> MilvusResult<()> {
        let grpc = self.build(&ReleasePartitionsRequest::new(
            collection_name,
            partition_names.to_vec(),
        ))?;
        self.invoke("ReleasePartitions", collection_name, cancel, |mut c| async move {
            c.release_partitions(grpc).await
        })
        .await?;
        Ok(())
    }

    async fn get_partition_statistics(
        &self,
        collection_name: &str,
        partition_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<HashMap<String, String>> {
        let grpc =
            self.build(&GetPartitionStatisticsRequest::new(collection_name, partition_name))?;
        let response = self
            .invoke("GetPartitionStatistics", collection_name, cancel, |mut c| async move {
                c.get_partition_statistics(grpc).await
            })
            .await?;
        Ok(key_value_map(response.stats))
    }
}

#[async_trait]
impl AliasClient for MilvusGrpcClient {
    async fn create_alias(
        &self,
        collection_name: &str,
        alias: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<()> {
        let grpc = self.build(&CreateAliasRequest::new(collection_name, alias))?;
        self.invoke("CreateAlias", collection_name, cancel, |mut c| async move {
            c.create_alias(grpc).await
        })
        .await?;
        Ok(())
    }

    async fn drop_alias(&self, alias: &str, cancel: &CancellationToken) -> MilvusResult<()> {
        let grpc = self.build(&DropAliasRequest::new(alias))?;
        self.invoke("DropAlias", alias, cancel, |mut c| async move {
            c.drop_alias(grpc).await
        })
        .await?;
        Ok(())
    }

    async fn alter_alias(
        &self,
        collection_name: &str,
        alias: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<()> {
        let grpc = self.build(&AlterAliasRequest::new(collection_name, alias))?;
        self.invoke("AlterAlias", collection_name, cancel, |mut c| async move {
            c.alter_alias(grpc).await
        })
        .await?;
        Ok(())
    }
}
