pub mod config;

pub use config::ChannelConfig;

use crate::error::{GrpcError, GrpcResult};
use tonic::transport::{Channel, Endpoint};

/// Creates a gRPC channel with the default configuration
///
/// ## Example
/// ```ignore
/// use grpc_client::create_channel;
/// use protos::milvus::proto::milvus::milvus_service_client::MilvusServiceClient;
///
/// let channel = create_channel("http://localhost:19530").await?;
/// let client = MilvusServiceClient::new(channel);
/// ```
pub async fn create_channel(addr: impl Into<String>) -> GrpcResult<Channel> {
  create_channel_with_config(addr, ChannelConfig::default()).await
}

/// Creates a lazy gRPC channel that connects on first request
pub fn create_channel_lazy(addr: impl Into<String>) -> GrpcResult<Channel> {
  create_channel_lazy_with_config(addr, ChannelConfig::default())
}

fn endpoint(addr: &str, config: ChannelConfig) -> GrpcResult<Endpoint> {
  let endpoint = Endpoint::from_shared(addr.to_string()).map_err(|e| {
    tracing::error!(target: "grpc_client", addr = %addr, error = ?e, "Invalid URI");
    GrpcError::InvalidUri(e)
  })?;

  config.apply_to_endpoint(endpoint).inspect_err(|e| {
    tracing::error!(
      target: "grpc_client",
      addr = %addr,
      error = ?e,
      "Invalid channel configuration"
    );
  })
}

/// Creates a lazy gRPC channel with custom configuration
///
/// Returns immediately; the connection is made when the first RPC is
/// invoked.
pub fn create_channel_lazy_with_config(
  addr: impl Into<String>,
  config: ChannelConfig,
) -> GrpcResult<Channel> {
  let addr = addr.into();
  let endpoint = endpoint(&addr, config)?;

  tracing::debug!(
    target: "grpc_client",
    addr = %addr,
    "Creating lazy gRPC channel (connects on first request)"
  );

  Ok(endpoint.connect_lazy())
}

/// Creates a gRPC channel with custom configuration and connects eagerly
///
/// ## Example
/// ```ignore
/// use grpc_client::{create_channel_with_config, ChannelConfig};
/// use std::time::Duration;
///
/// let config = ChannelConfig::default()
///     .with_connect_timeout(Duration::from_secs(10))
///     .with_request_timeout(Duration::from_secs(120));
///
/// let channel = create_channel_with_config("http://localhost:19530", config).await?;
/// ```
pub async fn create_channel_with_config(
  addr: impl Into<String>,
  config: ChannelConfig,
) -> GrpcResult<Channel> {
  let addr = addr.into();
  let endpoint = endpoint(&addr, config)?;

  tracing::debug!(
    target: "grpc_client",
    addr = %addr,
    "Creating gRPC channel"
  );

  endpoint.connect().await.map_err(|e| {
    tracing::error!(
      target: "grpc_client",
      addr = %addr,
      error = ?e,
      "Failed to connect to gRPC service"
    );
    GrpcError::ConnectionFailed(e)
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_invalid_uri() {
    let result = create_channel("not a valid uri").await;
    assert!(matches!(result, Err(GrpcError::InvalidUri(_))));
  }

  #[tokio::test]
  async fn test_connection_failed() {
    // Nothing listens on the discard port
    let result = create_channel("http://127.0.0.1:9").await;
    assert!(matches!(result, Err(GrpcError::ConnectionFailed(_))));
  }

  #[tokio::test]
  async fn test_lazy_channel_does_not_connect() {
    let result = create_channel_lazy("http://127.0.0.1:9");
    assert!(result.is_ok());
  }

  #[tokio::test]
  async fn test_lazy_channel_with_tls() {
    let config = ChannelConfig::new().with_tls();
    let result = create_channel_lazy_with_config("https://localhost:19530", config);
    assert!(result.is_ok());
  }
}
