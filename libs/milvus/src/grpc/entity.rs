use std::collections::HashMap;

use async_trait::async_trait;
use protos::milvus::proto::milvus::calc_distance_results::Array as DistanceArray;
use tokio_util::sync::CancellationToken;

use super::MilvusGrpcClient;
use super::convert::{columns_from_proto, search_result_from_proto};
use crate::client::EntityClient;
use crate::error::{MilvusError, MilvusResult};
use crate::request::{
    CalcDistanceRequest, DeleteRequest, FlushRequest, GetFlushStateRequest,
    GetPersistentSegmentInfoRequest, GetQuerySegmentInfoRequest, InsertRequest, QueryRequest,
    SearchRequest,
};
use crate::results::{
    DistanceMatrix, DistanceValues, FlushResult, MutationResult, PersistentSegmentInfo,
    QueryResult, QuerySegmentInfo, SearchResult,
};

#[async_trait]
impl EntityClient for MilvusGrpcClient {
    async fn insert(
        &self,
        request: InsertRequest,
        cancel: &CancellationToken,
    ) -> MilvusResult<MutationResult> {
        let grpc = self.build(&request)?;
        let response = self
            .invoke("Insert", &request.collection_name, cancel, |mut c| async move {
                c.insert(grpc).await
            })
            .await?;
        Ok(MutationResult::from(response))
    }

    async fn delete(
        &self,
        request: DeleteRequest,
        cancel: &CancellationToken,
    ) -> MilvusResult<MutationResult> {
        let grpc = self.build(&request)?;
        let response = self
            .invoke("Delete", &request.collection_name, cancel, |mut c| async move {
                c.delete(grpc).await
            })
            .await?;
        Ok(MutationResult::from(response))
    }

    async fn query(
        &self,
        request: QueryRequest,
        cancel: &CancellationToken,
    ) -> MilvusResult<QueryResult> {
        let grpc = self.build(&request)?;
        let response = self
            .invoke("Query", &request.collection_name, cancel, |mut c| async move {
                c.query(grpc).await
            })
            .await?;
        Ok(QueryResult {
            columns: columns_from_proto(response.fields_data)?,
        })
    }

    async fn search(
        &self,
        request: SearchRequest,
        cancel: &CancellationToken,
    ) -> MilvusResult<SearchResult> {
        let grpc = self.build(&request)?;
        let response = self
            .invoke("Search", &request.collection_name, cancel, |mut c| async move {
                c.search(grpc).await
            })
            .await?;
        search_result_from_proto(response)
    }

    async fn calc_distance(
        &self,
        request: CalcDistanceRequest,
        cancel: &CancellationToken,
    ) -> MilvusResult<DistanceMatrix> {
        let grpc = self.build(&request)?;
        let response = self
            .invoke("CalcDistance", "-", cancel, |mut c| async move {
                c.calc_distance(grpc).await
            })
            .await?;
        let values = match response.array {
            Some(DistanceArray::IntDist(a)) => DistanceValues::Int(a.data),
            Some(DistanceArray::FloatDist(a)) => DistanceValues::Float(a.data),
            None => {
                return Err(MilvusError::Transport(
                    "CalcDistance response carries no distances".to_string(),
                ));
            }
        };
        Ok(DistanceMatrix {
            columns: request.right.len(),
            values,
        })
    }

    async fn flush(
        &self,
        collection_names: &[String],
        cancel: &CancellationToken,
    ) -> MilvusResult<FlushResult> {
        let grpc = self.build(&FlushRequest::new(collection_names.to_vec()))?;
        let response = self
            .invoke("Flush", &collection_names.join(","), cancel, |mut c| async move {
                c.flush(grpc).await
            })
            .await?;
        let unpack = |ids: HashMap<String, protos::milvus::proto::schema::LongArray>| {
            ids.into_iter().map(|(name, a)| (name, a.data)).collect()
        };
        Ok(FlushResult {
            segment_ids: unpack(response.coll_seg_i_ds),
            flushed_segment_ids: unpack(response.flush_coll_seg_i_ds),
            seal_times: response.coll_seal_times,
        })
    }

    async fn get_flush_state(
        &self,
        segment_ids: &[i64],
        cancel: &CancellationToken,
    ) -> MilvusResult<bool> {
        let grpc = self.build(&GetFlushStateRequest::new(segment_ids.to_vec()))?;
        let response = self
            .invoke("GetFlushState", "-", cancel, |mut c| async move {
                c.get_flush_state(grpc).await
            })
            .await?;
        Ok(response.flushed)
    }

    async fn get_persistent_segment_info(
        &self,
        collection_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<Vec<PersistentSegmentInfo>> {
        let grpc = self.build(&GetPersistentSegmentInfoRequest::new(collection_name))?;
        let response = self
            .invoke("GetPersistentSegmentInfo", collection_name, cancel, |mut c| async move {
                c.get_persistent_segment_info(grpc).await
            })
            .await?;
        Ok(response.infos.into_iter().map(PersistentSegmentInfo::from).collect())
    }

    async fn get_query_segment_info(
        &self,
        collection_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<Vec<QuerySegmentInfo>> {
        let grpc = self.build(&GetQuerySegmentInfoRequest::new(collection_name))?;
        let response = self
            .invoke("GetQuerySegmentInfo", collection_name, cancel, |mut c| async move {
                c.get_query_segment_info(grpc).await
            })
            .await?;
        Ok(response.infos.into_iter().map(QuerySegmentInfo::from).collect())
    }
}
