use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::MilvusRestClient;
use super::wire;
use crate::client::{CredentialClient, ServerClient};
use crate::error::{MilvusError, MilvusResult};
use crate::request::{
    CheckHealthRequest, CreateCredentialRequest, DeleteCredentialRequest,
    GetCompactionPlansRequest, GetCompactionStateRequest, GetMetricsRequest, GetVersionRequest,
    ListCredUsersRequest, ManualCompactionRequest, UpdateCredentialRequest,
};
use crate::results::{CompactionMerge, CompactionPlans, HealthState, MetricsResponse};
use crate::types::CompactionState;

#[async_trait]
impl CredentialClient for MilvusRestClient {
    async fn create_credential(
        &self,
        username: &str,
        password: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<()> {
        let rest = self.build(&CreateCredentialRequest::new(username, password))?;
        self.execute("CreateCredential", username, rest, cancel).await
    }

    async fn update_credential(
        &self,
        username: &str,
        old_password: &str,
        new_password: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<()> {
        let rest = self.build(&UpdateCredentialRequest::new(username, old_password, new_password))?;
        self.execute("UpdateCredential", username, rest, cancel).await
    }

    async fn delete_credential(
        &self,
        username: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<()> {
        let rest = self.build(&DeleteCredentialRequest::new(username))?;
        self.execute("DeleteCredential", username, rest, cancel).await
    }

    async fn list_users(&self, cancel: &CancellationToken) -> MilvusResult<Vec<String>> {
        let rest = self.build(&ListCredUsersRequest)?;
        let response: wire::ListUsersResponse =
            self.invoke("ListCredUsers", "-", rest, cancel).await?;
        Ok(response.usernames)
    }
}

#[async_trait]
impl ServerClient for MilvusRestClient {
    /// The HTTP API reports no structured code with the health check, so an
    /// unhealthy state carries reasons only.
    async fn health(&self, cancel: &CancellationToken) -> MilvusResult<HealthState> {
        let rest = self.build(&CheckHealthRequest)?;
        let response: MilvusResult<wire::HealthResponse> =
            self.invoke("CheckHealth", "-", rest, cancel).await;

        match response {
            Ok(health) if health.is_healthy => Ok(HealthState::healthy()),
            Ok(health) => Ok(HealthState::unhealthy(health.reasons, None)),
            Err(MilvusError::Database { reason, .. }) => {
                warn!(
                    target: "milvus_client",
                    reason = %reason,
                    "Health check returned an error status"
                );
                Ok(HealthState::unhealthy(vec![reason], None))
            }
            Err(other) => Err(other),
        }
    }

    async fn version(&self, cancel: &CancellationToken) -> MilvusResult<String> {
        let rest = self.build(&GetVersionRequest)?;
        let response: wire::VersionResponse = self.invoke("GetVersion", "-", rest, cancel).await?;
        Ok(response.version)
    }

    async fn metrics(
        &self,
        request: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<MetricsResponse> {
        let rest = self.build(&GetMetricsRequest::new(request))?;
        let response: wire::MetricsResponse = self.invoke("GetMetrics", "-", rest, cancel).await?;
        Ok(MetricsResponse {
            response: response.response,
            component_name: response.component_name,
        })
    }

    async fn manual_compaction(
        &self,
        collection_id: i64,
        travel_timestamp: Option<DateTime<Utc>>,
        cancel: &CancellationToken,
    ) -> MilvusResult<i64> {
        let rest = self.build(&ManualCompactionRequest::new(collection_id, travel_timestamp))?;
        let response: wire::ManualCompactionResponse = self
            .invoke("ManualCompaction", &collection_id.to_string(), rest, cancel)
            .await?;
        Ok(response.compaction_id)
    }

    async fn get_compaction_state(
        &self,
        compaction_id: i64,
        cancel: &CancellationToken,
    ) -> MilvusResult<CompactionState> {
        let rest = self.build(&GetCompactionStateRequest::new(compaction_id))?;
        let response: wire::CompactionStateResponse = self
            .invoke("GetCompactionState", &compaction_id.to_string(), rest, cancel)
            .await?;
        Ok(CompactionState::from_i32(response.state))
    }

    async fn get_compaction_plans(
        &self,
        compaction_id: i64,
        cancel: &CancellationToken,
    ) -> MilvusResult<CompactionPlans> {
        let rest = self.build(&GetCompactionPlansRequest::new(compaction_id))?;
        let response: wire::CompactionPlansResponse = self
            .invoke("GetCompactionPlans", &compaction_id.to_string(), rest, cancel)
            .await?;
        Ok(CompactionPlans {
            state: CompactionState::from_i32(response.state),
            merge_infos: response
                .merge_infos
                .into_iter()
                .map(|m| CompactionMerge {
                    sources: m.sources,
                    target: m.target,
                })
                .collect(),
        })
    }

    fn address(&self) -> String {
        self.base_url.clone()
    }

    fn close(&self) {
        debug!(target: "milvus_client", base_url = %self.base_url, "Closing REST client");
        self.shutdown.cancel();
    }
}
