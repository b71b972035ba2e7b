//! Credentials and server-wide operations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::MilvusGrpcClient;
use crate::client::{CredentialClient, ServerClient};
use crate::error::{ErrorCode, MilvusResult};
use crate::request::{
    CheckHealthRequest, CreateCredentialRequest, DeleteCredentialRequest,
    GetCompactionPlansRequest, GetCompactionStateRequest, GetMetricsRequest, GetVersionRequest,
    ListCredUsersRequest, ManualCompactionRequest, UpdateCredentialRequest,
};
use crate::results::{CompactionMerge, CompactionPlans, HealthState, MetricsResponse};
use crate::types::CompactionState;

#[async_trait]
impl CredentialClient for MilvusGrpcClient {
    async fn create_credential(
        &self,
        username: &str,
        password: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<()> {
        let grpc = self.build(&CreateCredentialRequest::new(username, password))?;
        self.invoke("CreateCredential", username, cancel, |mut c| async move {
            c.create_credential(grpc).await
        })
        .await?;
        Ok(())
    }

    async fn update_credential(
        &self,
        username: &str,
        old_password: &str,
        new_password: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<()> {
        let grpc = self.build(&UpdateCredentialRequest::new(username, old_password, new_password))?;
        self.invoke("UpdateCredential", username, cancel, |mut c| async move {
            c.update_credential(grpc).await
        })
        .await?;
        Ok(())
    }

    async fn delete_credential(
        &self,
        username: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<()> {
        let grpc = self.build(&DeleteCredentialRequest::new(username))?;
        self.invoke("DeleteCredential", username, cancel, |mut c| async move {
            c.delete_credential(grpc).await
        })
        .await?;
        Ok(())
    }

    async fn list_users(&self, cancel: &CancellationToken) -> MilvusResult<Vec<String>> {
        let grpc = self.build(&ListCredUsersRequest)?;
        let response = self
            .invoke("ListCredUsers", "-", cancel, |mut c| async move {
                c.list_cred_users(grpc).await
            })
            .await?;
        Ok(response.usernames)
    }
}

#[async_trait]
impl ServerClient for MilvusGrpcClient {
    async fn health(&self, cancel: &CancellationToken) -> MilvusResult<HealthState> {
        let grpc = self.build(&CheckHealthRequest)?;
        let response = self
            .call("CheckHealth", "-", cancel, |mut c| async move {
                c.check_health(grpc).await
            })
            .await?;

        match response.status {
            Some(status) if status.error_code != 0 || status.code != 0 => {
                warn!(
                    target: "milvus_client",
                    code = status.error_code,
                    reason = %status.reason,
                    "Health check returned an error status"
                );
                let code = if status.error_code != 0 {
                    ErrorCode::from(status.error_code)
                } else {
                    ErrorCode::UnexpectedError
                };
                Ok(HealthState::unhealthy(vec![status.reason], Some(code)))
            }
            _ if response.is_healthy => Ok(HealthState::healthy()),
            _ => Ok(HealthState::unhealthy(response.reasons, None)),
        }
    }

    async fn version(&self, cancel: &CancellationToken) -> MilvusResult<String> {
        let grpc = self.build(&GetVersionRequest)?;
        let response = self
            .invoke("GetVersion", "-", cancel, |mut c| async move {
                c.get_version(grpc).await
            })
            .await?;
        Ok(response.version)
    }

    async fn metrics(
        &self,
        request: &str,
        cancel: &CancellationToken,
    ) -> MilvusResult<MetricsResponse> {
        let grpc = self.build(&GetMetricsRequest::new(request))?;
        let response = self
            .invoke("GetMetrics", "-", cancel, |mut c| async move {
                c.get_metrics(grpc).await
            })
            .await?;
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
        let grpc = self.build(&ManualCompactionRequest::new(collection_id, travel_timestamp))?;
        let response = self
            .invoke("ManualCompaction", &collection_id.to_string(), cancel, |mut c| async move {
                c.manual_compaction(grpc).await
            })
            .await?;
        Ok(response.compaction_id)
    }

    async fn get_compaction_state(
        &self,
        compaction_id: i64,
        cancel: &CancellationToken,
    ) -> MilvusResult<CompactionState> {
        let grpc = self.build(&GetCompactionStateRequest::new(compaction_id))?;
        let response = self
            .invoke("GetCompactionState", &compaction_id.to_string(), cancel, |mut c| async move {
                c.get_compaction_state(grpc).await
            })
            .await?;
        Ok(CompactionState::from_i32(response.state))
    }

    async fn get_compaction_plans(
        &self,
        compaction_id: i64,
        cancel: &CancellationToken,
    ) -> MilvusResult<CompactionPlans> {
        let grpc = self.build(&GetCompactionPlansRequest::new(compaction_id))?;
        let response = self
            .invoke("GetCompactionPlans", &compaction_id.to_string(), cancel, |mut c| async move {
                c.get_compaction_state_with_plans(grpc).await
            })
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
        self.config.grpc_endpoint()
    }

    fn close(&self) {
        debug!(
            target: "milvus_client",
            endpoint = %self.config.grpc_endpoint(),
            "Closing gRPC client"
        );
        self.shutdown.cancel();
    }
}
