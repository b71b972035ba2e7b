//! HTTP/JSON transport over the proxy's `/api/v1` endpoints.
//!
//! Reads go out as GET with a JSON body, which the proxy accepts. Every
//! response is checked twice: first the HTTP status, then the Milvus status
//! embedded in the body.

mod admin;
mod collection;
mod entity;
mod index;
pub(crate) mod wire;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

use crate::client::cancellable;
use crate::config::MilvusConfig;
use crate::error::{ErrorCode, MilvusError, MilvusResult};
use crate::grpc::check_status;
use crate::request::{MilvusRequest, RestRequest};

/// Milvus client speaking the v1 HTTP API.
#[derive(Debug, Clone)]
pub struct MilvusRestClient {
    http: reqwest::Client,
    config: MilvusConfig,
    base_url: String,
    shutdown: CancellationToken,
}

impl MilvusRestClient {
    pub fn new(config: MilvusConfig) -> MilvusResult<Self> {
        config.validate()?;
        let mut builder = reqwest::Client::builder().connect_timeout(config.connect_timeout);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| MilvusError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Self::with_http_client(http, config)
    }

    /// Uses a caller-owned HTTP client. `config` still supplies the base URL,
    /// credentials and database name.
    pub fn with_http_client(http: reqwest::Client, config: MilvusConfig) -> MilvusResult<Self> {
        config.validate()?;
        let base_url = config.rest_base_url();
        debug!(
            target: "milvus_client",
            base_url = %base_url,
            database = %config.database,
            "Created REST client"
        );
        Ok(Self {
            http,
            config,
            base_url,
            shutdown: CancellationToken::new(),
        })
    }

    pub fn config(&self) -> &MilvusConfig {
        &self.config
    }

    fn build<R: MilvusRequest>(&self, request: &R) -> MilvusResult<RestRequest> {
        request.build_rest(&self.config.database)
    }

    /// Sends one request and returns the body once the HTTP status is a
    /// success. The embedded Milvus status is left to the caller.
    async fn call(
        &self,
        operation: &'static str,
        name: &str,
        request: RestRequest,
        cancel: &CancellationToken,
    ) -> MilvusResult<Value> {
        let url = format!("{}{}", self.base_url, request.path);
        debug!(
            target: "milvus_client",
            operation,
            name = %name,
            method = %request.method,
            url = %url,
            "REST call"
        );

        let send = self
            .http
            .request(request.method, &url)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.authorization()))
            .header(ACCEPT, "application/json")
            .json(&request.body)
            .send();

        cancellable(cancel, &self.shutdown, async move {
            let response = send.await.map_err(|e| {
                error!(target: "milvus_client", operation, error = %e, "REST call failed");
                MilvusError::from(e)
            })?;
            let status = response.status();
            let text = response.text().await?;
            let body: Option<Value> = if text.trim().is_empty() {
                Some(Value::Object(Default::default()))
            } else {
                serde_json::from_str(&text).ok()
            };

            if !status.is_success() {
                // prefer the Milvus status when the body carries one
                if let Some(body) = &body {
                    check_status(operation, name, wire::embedded_status(body)?.as_ref())?;
                }
                error!(
                    target: "milvus_client",
                    operation,
                    http_status = status.as_u16(),
                    body = %text,
                    "REST call returned an HTTP error"
                );
                return Err(MilvusError::database(
                    ErrorCode::UnexpectedError,
                    format!("HTTP {}: {}", status, text),
                ));
            }

            body.ok_or_else(|| {
                MilvusError::Transport(format!(
                    "{} returned a body that is not JSON: {}",
                    operation, text
                ))
            })
        })
        .await
    }

    /// Sends one request, checks the embedded status and decodes the body.
    async fn invoke<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        name: &str,
        request: RestRequest,
        cancel: &CancellationToken,
    ) -> MilvusResult<T> {
        let body = self.call(operation, name, request, cancel).await?;
        check_status(operation, name, wire::embedded_status(&body)?.as_ref())?;
        Ok(serde_json::from_value(body)?)
    }

    /// For operations whose only answer is a status.
    async fn execute(
        &self,
        operation: &'static str,
        name: &str,
        request: RestRequest,
        cancel: &CancellationToken,
    ) -> MilvusResult<()> {
        let body = self.call(operation, name, request, cancel).await?;
        check_status(operation, name, wire::embedded_status(&body)?.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{CollectionClient, ServerClient};
    use std::time::Duration;

    #[test]
    fn test_base_url_follows_config() {
        let config = MilvusConfig::new("https://in01.vectordb.zillizcloud.com").with_port(443);
        let client = MilvusRestClient::new(config).unwrap();
        assert_eq!(client.base_url, "https://in01.vectordb.zillizcloud.com:443/api/v1");
        assert_eq!(client.address(), "https://in01.vectordb.zillizcloud.com:443/api/v1");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = MilvusRestClient::new(MilvusConfig::new(""));
        assert!(matches!(result, Err(MilvusError::Config(_))));
    }

    #[tokio::test]
    async fn test_invalid_request_never_reaches_the_wire() {
        // port 1 refuses connections; a validation error proves nothing was sent
        let config = MilvusConfig::new("localhost")
            .with_port(1)
            .with_connect_timeout(Duration::from_millis(100));
        let client = MilvusRestClient::new(config).unwrap();
        let result = client.has_collection(" ", None, &CancellationToken::new()).await;
        assert!(matches!(result, Err(MilvusError::Validation(_))));
    }

    #[tokio::test]
    async fn test_closed_client_rejects_calls() {
        let client = MilvusRestClient::new(MilvusConfig::new("localhost").with_port(1)).unwrap();
        client.close();
        let result = client.drop_collection("books", &CancellationToken::new()).await;
        assert!(matches!(result, Err(MilvusError::Transport(_))));
    }
}
