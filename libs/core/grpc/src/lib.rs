//! # gRPC Client Library
//!
//! Channel creation with HTTP/2 tuning and TLS, plus the client interceptors
//! every Milvus call goes through (authorization, database selection and
//! request tracing).
//!
//! ## Quick Start
//!
//! ```ignore
//! use grpc_client::{create_channel_with_config, ChannelConfig, interceptors::*};
//! use protos::milvus::proto::milvus::milvus_service_client::MilvusServiceClient;
//!
//! let channel =
//!   create_channel_with_config("http://localhost:19530", ChannelConfig::default()).await?;
//! let auth = AuthInterceptor::basic("root", "milvus").with_database("default");
//! let interceptor = compose_interceptors(auth, TracingInterceptor::new());
//!
//! let client = MilvusServiceClient::with_interceptor(channel, interceptor)
//!     .max_decoding_message_size(64 * 1024 * 1024);
//! ```
//!
//! ### With Custom Configuration
//! ```ignore
//! use grpc_client::{create_channel_lazy_with_config, ChannelConfig};
//! use std::time::Duration;
//!
//! let config = ChannelConfig::default()
//!     .with_connect_timeout(Duration::from_secs(10))
//!     .with_request_timeout(Duration::from_secs(120))
//!     .with_tls();
//!
//! let endpoint = "https://in01-xxx.vectordb.zillizcloud.com:19530";
//! let channel = create_channel_lazy_with_config(endpoint, config)?;
//! ```

pub mod channel;
pub mod error;
pub mod interceptors;

pub use channel::{
  ChannelConfig, create_channel, create_channel_lazy, create_channel_lazy_with_config,
  create_channel_with_config,
};
pub use error::{GrpcError, GrpcResult};

pub use interceptors::{
  AuthInterceptor, ComposedInterceptor, TracingInterceptor, compose_interceptors,
};
