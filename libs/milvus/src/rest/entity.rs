use std::collections::HashMap;

use async_trait::async_trait;
use protos::milvus::proto::milvus as proto;
use tokio_util::sync::CancellationToken;

use super::MilvusRestClient;
use super::wire;
use crate::client::EntityClient;
use crate::error::{MilvusError, MilvusResult};
use crate::grpc::convert::{columns_from_proto, search_result_from_proto};
use crate::request::{
    CalcDistanceRequest, DeleteRequest, FlushRequest, GetFlushStateRequest,
    GetPersistentSegmentInfoRequest, GetQuerySegmentInfoRequest, InsertRequest, QueryRequest,
    SearchRequest,
};
use crate::results::{
    DistanceMatrix, DistanceValues, FlushResult, MutationResult, PersistentSegmentInfo,
    QueryResult, QuerySegmentInfo, SearchResult,
};

fn segment_map(ids: HashMap<String, wire::WireArray<i64>>) -> HashMap<String, Vec<i64>> {
    ids.into_iter().map(|(name, a)| (name, a.data)).collect()
}

#[async_trait]
impl EntityClient for MilvusRestClient {
    async fn insert(
        &self,
        request: InsertRequest,
        cancel: &CancellationToken,
    ) -> MilvusResult<MutationResult> {
        let rest = self.build(&request)?;
        let response: wire::MutationResponse = self
            .invoke("Insert", &request.collection_name, rest, cancel)
            .await?;
        Ok(MutationResult::from(proto::MutationResult::from(response)))
    }

    async fn delete(
        &self,
        request: DeleteRequest,
        cancel: &CancellationToken,
    ) -> MilvusResult<MutationResult> {
        let rest = self.build(&request)?;
        let response: wire::MutationResponse = self
            .invoke("Delete", &request.collection_name, rest, cancel)
            .await?;
        Ok(MutationResult::from(proto::MutationResult::from(response)))
    }

    async fn query(
        &self,
        request: QueryRequest,
        cancel: &CancellationToken,
    ) -> MilvusResult<QueryResult> {
        let rest = self.build(&request)?;
        let response: wire::QueryResponse = self
            .invoke("Query", &request.collection_name, rest, cancel)
            .await?;
        Ok(QueryResult {
            columns: columns_from_proto(wire::fields_to_proto(response.fields_data)?)?,
        })
    }

    async fn search(
        &self,
        request: SearchRequest,
        cancel: &CancellationToken,
    ) -> MilvusResult<SearchResult> {
        let rest = self.build(&request)?;
        let response: wire::SearchResponse = self
            .invoke("Search", &request.collection_name, rest, cancel)
            .await?;
        search_result_from_proto(response.try_into()?)
    }

    async fn calc_distance(
        &self,
        request: CalcDistanceRequest,
        cancel: &CancellationToken,
    ) -> MilvusResult<DistanceMatrix> {
        let rest = self.build(&request)?;
        let response: wire::CalcDistanceResponse =
            self.invoke("CalcDistance", "-", rest, cancel).await?;
        let values = match response.array {
            Some(wire::DistanceArray::IntDist(a)) => DistanceValues::Int(a.data),
            Some(wire::DistanceArray::FloatDist(a)) => DistanceValues::Float(a.data),
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
        let rest = self.build(&FlushRequest::new(collection_names.to_vec()))?;
        let response: wire::FlushResponse = self
            .invoke("Flush", &collection_names.join(","), rest, cancel)
            .await?;
        Ok(FlushResult {
            segment_ids: segment_map(response.segment_ids),
            flushed_segment_ids: segment_map(response.flushed_segment_ids),
            seal_times: response.coll_seal_times,
        })
    }

    async fn get_flush_state(
        &self,
        segment_ids: &[i64],
        cancel: &CancellationToken,
    ) -> MilvusResult<bool> {
        let rest = self.build(&GetFlushStateRequest::new(segment_ids.to_vec()))?;
        let response: wire::FlushStateResponse =
            self.invoke("GetFlushState", "-", rest, cancel).await?;
        Ok(response.flushed)
    }

    async fn get_persistent_segment_info(
        &self,
        collection_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<Vec<PersistentSegmentInfo>> {
        let rest = self.build(&GetPersistentSegmentInfoRequest::new(collection_name))?;
        let response: wire::SegmentInfoResponse<wire::WirePersistentSegmentInfo> = self
            .invoke("GetPersistentSegmentInfo", collection_name, rest, cancel)
            .await?;
        Ok(response
            .infos
            .into_iter()
            .map(|info| PersistentSegmentInfo::from(proto::PersistentSegmentInfo::from(info)))
            .collect())
    }

    async fn get_query_segment_info(
        &self,
        collection_name: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<Vec<QuerySegmentInfo>> {
        let rest = self.build(&GetQuerySegmentInfoRequest::new(collection_name))?;
        let response: wire::SegmentInfoResponse<wire::WireQuerySegmentInfo> = self
            .invoke("GetQuerySegmentInfo", collection_name, rest, cancel)
            .await?;
        Ok(response
            .infos
            .into_iter()
            .map(|info| QuerySegmentInfo::from(proto::QuerySegmentInfo::from(info)))
            .collect())
    }
}
