//! gRPC transport.
//!
//! One `MilvusServiceClient` over a shared tonic channel. Authorization and
//! database selection ride on every call as metadata, injected by the
//! `grpc-client` interceptors.

mod admin;
mod collection;
pub(crate) mod convert;
mod entity;
mod index;

use std::future::Future;

use grpc_client::{
    AuthInterceptor, ChannelConfig, ComposedInterceptor, TracingInterceptor, compose_interceptors,
    create_channel_lazy_with_config, create_channel_with_config,
};
use protos::milvus::proto::common as proto_common;
use protos::milvus::proto::milvus as proto;
use protos::milvus::proto::milvus::milvus_service_client::MilvusServiceClient;
use tokio_util::sync::CancellationToken;
use tonic::codec::CompressionEncoding;
use tonic::service::interceptor::InterceptedService;
use tonic::transport::Channel;
use tracing::{debug, error};

use crate::client::cancellable;
use crate::config::MilvusConfig;
use crate::error::{ErrorCode, MilvusError, MilvusResult};
use crate::request::MilvusRequest;

/// Largest message accepted in either direction.
const MAX_MESSAGE_SIZE: usize = 64 * 1024 * 1024;

type Interceptor = ComposedInterceptor<AuthInterceptor, TracingInterceptor>;
type ServiceClient = MilvusServiceClient<InterceptedService<Channel, Interceptor>>;

/// Milvus client speaking the native gRPC protocol.
#[derive(Debug, Clone)]
pub struct MilvusGrpcClient {
    client: ServiceClient,
    config: MilvusConfig,
    shutdown: CancellationToken,
}

impl MilvusGrpcClient {
    /// Connects eagerly; fails if the server is unreachable.
    pub async fn connect(config: MilvusConfig) -> MilvusResult<Self> {
        config.validate()?;
        let channel =
            create_channel_with_config(config.grpc_endpoint(), channel_config(&config)).await?;
        Self::from_channel(channel, config)
    }

    /// Connects on the first call.
    pub fn connect_lazy(config: MilvusConfig) -> MilvusResult<Self> {
        config.validate()?;
        let channel =
            create_channel_lazy_with_config(config.grpc_endpoint(), channel_config(&config))?;
        Self::from_channel(channel, config)
    }

    /// Wraps a channel built by the caller. `config` still supplies the
    /// credentials and database name.
    pub fn from_channel(channel: Channel, config: MilvusConfig) -> MilvusResult<Self> {
        config.validate()?;
        let auth = AuthInterceptor::custom(config.authorization())
            .with_database(config.database.clone());
        let client = MilvusServiceClient::with_interceptor(
            channel,
            compose_interceptors(auth, TracingInterceptor::new()),
        )
        .accept_compressed(CompressionEncoding::Zstd)
        .max_decoding_message_size(MAX_MESSAGE_SIZE)
        .max_encoding_message_size(MAX_MESSAGE_SIZE);

        debug!(
            target: "milvus_client",
            endpoint = %config.grpc_endpoint(),
            database = %config.database,
            "Created gRPC client"
        );

        Ok(Self {
            client,
            config,
            shutdown: CancellationToken::new(),
        })
    }

    pub fn config(&self) -> &MilvusConfig {
        &self.config
    }

    fn build<R: MilvusRequest>(&self, request: &R) -> MilvusResult<R::Grpc> {
        request.build_grpc(&self.config.database)
    }

    /// Issues one unary call, without inspecting the response status.
    async fn call<T, F, Fut>(
        &self,
        operation: &'static str,
        name: &str,
        cancel: &CancellationToken,
        rpc: F,
    ) -> MilvusResult<T>
    where
        F: FnOnce(ServiceClient) -> Fut,
        Fut: Future<Output = Result<tonic::Response<T>, tonic::Status>>,
    {
        debug!(target: "milvus_client", operation, name = %name, "gRPC call");
        let client = self.client.clone();
        cancellable(cancel, &self.shutdown, async move {
            rpc(client)
                .await
                .map(tonic::Response::into_inner)
                .map_err(|status| {
                    error!(
                        target: "milvus_client",
                        operation,
                        code = ?status.code(),
                        message = %status.message(),
                        "gRPC call failed"
                    );
                    MilvusError::from(status)
                })
        })
        .await
    }

    /// Issues one unary call and turns a non-success status into an error.
    async fn invoke<T, F, Fut>(
        &self,
        operation: &'static str,
        name: &str,
        cancel: &CancellationToken,
        rpc: F,
    ) -> MilvusResult<T>
    where
        T: WithStatus,
        F: FnOnce(ServiceClient) -> Fut,
        Fut: Future<Output = Result<tonic::Response<T>, tonic::Status>>,
    {
        let response = self.call(operation, name, cancel, rpc).await?;
        check_status(operation, name, response.status())?;
        Ok(response)
    }
}

fn channel_config(config: &MilvusConfig) -> ChannelConfig {
    let mut channel = ChannelConfig::default().with_connect_timeout(config.connect_timeout);
    if let Some(timeout) = config.request_timeout {
        channel = channel.with_request_timeout(timeout);
    }
    if config.use_tls {
        channel = channel.with_tls();
    }
    channel
}

/// Responses that carry a `common.Status`.
pub(crate) trait WithStatus {
    fn status(&self) -> Option<&proto_common::Status>;
}

impl WithStatus for proto_common::Status {
    fn status(&self) -> Option<&proto_common::Status> {
        Some(self)
    }
}

macro_rules! with_status {
    ($($response:ident),* $(,)?) => {
        $(
            impl WithStatus for proto::$response {
                fn status(&self) -> Option<&proto_common::Status> {
                    self.status.as_ref()
                }
            }
        )*
    };
}

with_status!(
    BoolResponse,
    CalcDistanceResults,
    CheckHealthResponse,
    DescribeCollectionResponse,
    DescribeIndexResponse,
    FlushResponse,
    GetCollectionStatisticsResponse,
    GetCompactionPlansResponse,
    GetCompactionStateResponse,
    GetFlushStateResponse,
    GetIndexBuildProgressResponse,
    GetIndexStateResponse,
    GetLoadingProgressResponse,
    GetMetricsResponse,
    GetPartitionStatisticsResponse,
    GetPersistentSegmentInfoResponse,
    GetQuerySegmentInfoResponse,
    GetVersionResponse,
    ListCredUsersResponse,
    ManualCompactionResponse,
    MutationResult,
    QueryResults,
    SearchResults,
    ShowCollectionsResponse,
    ShowPartitionsResponse,
);

/// Maps a non-success status to `MilvusError::Database`.
///
/// Newer servers may leave the legacy `error_code` at zero and report the
/// failure through `code` alone.
pub(crate) fn check_status(
    operation: &str,
    name: &str,
    status: Option<&proto_common::Status>,
) -> MilvusResult<()> {
    let Some(status) = status else {
        return Ok(());
    };
    let (code, reason) = match (status.error_code, status.code) {
        (0, 0) => return Ok(()),
        (0, code) => (
            ErrorCode::UnexpectedError,
            format!("{} (code {})", status.reason, code),
        ),
        (error_code, _) => (ErrorCode::from(error_code), status.reason.clone()),
    };
    error!(
        target: "milvus_client",
        operation,
        name = %name,
        code = %code,
        reason = %reason,
        "Milvus returned an error status"
    );
    Err(MilvusError::Database { code, reason })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn status(error_code: i32, code: i32, reason: &str) -> proto_common::Status {
        proto_common::Status {
            error_code,
            reason: reason.to_string(),
            code,
            ..Default::default()
        }
    }

    #[test]
    fn test_check_status_success() {
        assert!(check_status("HasCollection", "books", None).is_ok());
        assert!(check_status("HasCollection", "books", Some(&status(0, 0, ""))).is_ok());
    }

    #[test]
    fn test_check_status_legacy_code() {
        let err = check_status("DescribeCollection", "books", Some(&status(4, 100, "not found")))
            .unwrap_err();
        match err {
            MilvusError::Database { code, reason } => {
                assert_eq!(code, ErrorCode::CollectionNotExists);
                assert_eq!(reason, "not found");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_check_status_new_code_only() {
        let err = check_status("Search", "books", Some(&status(0, 65535, "boom"))).unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::UnexpectedError));
        assert!(err.to_string().contains("code 65535"));
    }

    #[test]
    fn test_channel_config_follows_client_config() {
        let config = MilvusConfig::new("https://in01.vectordb.zillizcloud.com")
            .with_request_timeout(Duration::from_secs(30));
        let channel = channel_config(&config);
        assert!(channel.tls);
        assert_eq!(channel.timeout, Some(Duration::from_secs(30)));
        assert_eq!(channel.connect_timeout, config.connect_timeout);
    }

    #[tokio::test]
    async fn test_lazy_client_reports_address() {
        use crate::client::ServerClient;

        let client = MilvusGrpcClient::connect_lazy(MilvusConfig::new("localhost")).unwrap();
        assert_eq!(client.address(), "http://localhost:19530");
    }

    #[tokio::test]
    async fn test_closed_client_rejects_calls() {
        use crate::client::{CollectionClient, ServerClient};

        let client = MilvusGrpcClient::connect_lazy(MilvusConfig::new("localhost")).unwrap();
        client.close();
        let result = client
            .has_collection("books", None, &CancellationToken::new())
            .await;
        assert!(matches!(result, Err(MilvusError::Transport(_))));
    }

    #[tokio::test]
    async fn test_invalid_request_never_reaches_the_wire() {
        use crate::client::CollectionClient;

        // nothing listens here; a validation error proves no call was made
        let config = MilvusConfig::new("localhost").with_port(1);
        let client = MilvusGrpcClient::connect_lazy(config).unwrap();
        let result = client.drop_collection("", &CancellationToken::new()).await;
        assert!(matches!(result, Err(MilvusError::Validation(_))));
    }
}
