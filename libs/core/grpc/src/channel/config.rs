use std::time::Duration;
use tonic::transport::{ClientTlsConfig, Endpoint};

use crate::error::{GrpcError, GrpcResult};

/// Configuration for gRPC channel creation
///
/// Builder over the HTTP/2, TCP and TLS settings applied to a tonic
/// `Endpoint`. Milvus proxies keep long-lived connections, so keep-alive is
/// on by default.
#[derive(Debug, Clone)]
pub struct ChannelConfig {
  // HTTP/2 Keep-Alive
  pub http2_keep_alive_interval: Option<Duration>,
  pub keep_alive_timeout: Duration,
  pub keep_alive_while_idle: bool,

  // Connection settings
  pub connect_timeout: Duration,
  pub timeout: Option<Duration>,

  // Window sizes (HTTP/2 flow control)
  pub initial_connection_window_size: Option<u32>,
  pub initial_stream_window_size: Option<u32>,
  pub http2_adaptive_window: bool,

  // TCP settings
  pub tcp_nodelay: bool,
  pub tcp_keepalive: Option<Duration>,

  // TLS with the bundled webpki roots
  pub tls: bool,
  pub tls_domain: Option<String>,
}

impl Default for ChannelConfig {
  fn default() -> Self {
    Self {
      http2_keep_alive_interval: Some(Duration::from_secs(30)),
      keep_alive_timeout: Duration::from_secs(10),
      keep_alive_while_idle: true,
      connect_timeout: Duration::from_secs(5),
      timeout: None,
      initial_connection_window_size: Some(1024 * 1024), // 1MB
      initial_stream_window_size: Some(1024 * 1024),     // 1MB
      http2_adaptive_window: true,
      tcp_nodelay: true,
      tcp_keepalive: Some(Duration::from_secs(30)),
      tls: false,
      tls_domain: None,
    }
  }
}

impl ChannelConfig {
  /// Create a new configuration with the defaults
  pub fn new() -> Self {
    Self::default()
  }

  /// Set the connection timeout
  pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
    self.connect_timeout = timeout;
    self
  }

  /// Set the request timeout for individual RPCs
  ///
  /// Unset by default: a call then only ends when the server answers or the
  /// caller cancels it.
  pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = Some(timeout);
    self
  }

  /// Set the HTTP/2 keep-alive interval
  pub fn with_keep_alive_interval(mut self, interval: Duration) -> Self {
    self.http2_keep_alive_interval = Some(interval);
    self
  }

  /// Disable HTTP/2 keep-alive
  pub fn without_keep_alive(mut self) -> Self {
    self.http2_keep_alive_interval = None;
    self
  }

  /// Set both connection and stream window sizes to the same value
  pub fn with_window_size(mut self, size: u32) -> Self {
    self.initial_connection_window_size = Some(size);
    self.initial_stream_window_size = Some(size);
    self
  }

  /// Enable TLS using the webpki root store
  ///
  /// # Example
  /// ```ignore
  /// let config = ChannelConfig::new().with_tls();
  /// ```
  pub fn with_tls(mut self) -> Self {
    self.tls = true;
    self
  }

  /// Override the domain name checked against the server certificate
  pub fn with_tls_domain(mut self, domain: impl Into<String>) -> Self {
    self.tls = true;
    self.tls_domain = Some(domain.into());
    self
  }

  /// Apply this configuration to a tonic Endpoint
  pub(crate) fn apply_to_endpoint(self, mut endpoint: Endpoint) -> GrpcResult<Endpoint> {
    // HTTP/2 keep-alive
    if let Some(interval) = self.http2_keep_alive_interval {
      endpoint = endpoint.http2_keep_alive_interval(interval);
    }
    endpoint = endpoint
      .keep_alive_timeout(self.keep_alive_timeout)
      .keep_alive_while_idle(self.keep_alive_while_idle);

    // Connection settings
    endpoint = endpoint.connect_timeout(self.connect_timeout);
    if let Some(timeout) = self.timeout {
      endpoint = endpoint.timeout(timeout);
    }

    // Window sizes
    if let Some(size) = self.initial_connection_window_size {
      endpoint = endpoint.initial_connection_window_size(size);
    }
    if let Some(size) = self.initial_stream_window_size {
      endpoint = endpoint.initial_stream_window_size(size);
    }
    endpoint = endpoint.http2_adaptive_window(self.http2_adaptive_window);

    // TCP settings
    endpoint = endpoint.tcp_nodelay(self.tcp_nodelay);
    if let Some(keepalive) = self.tcp_keepalive {
      endpoint = endpoint.tcp_keepalive(Some(keepalive));
    }

    if self.tls {
      let mut tls = ClientTlsConfig::new().with_webpki_roots();
      if let Some(domain) = self.tls_domain {
        tls = tls.domain_name(domain);
      }
      endpoint = endpoint.tls_config(tls).map_err(GrpcError::Tls)?;
    }

    Ok(endpoint)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_config() {
    let config = ChannelConfig::default();
    assert_eq!(config.connect_timeout, Duration::from_secs(5));
    assert_eq!(config.timeout, None);
    assert_eq!(config.initial_connection_window_size, Some(1024 * 1024));
    assert_eq!(config.initial_stream_window_size, Some(1024 * 1024));
    assert!(config.tcp_nodelay);
    assert!(config.http2_adaptive_window);
    assert!(!config.tls);
  }

  #[test]
  fn test_builder_pattern() {
    let config = ChannelConfig::new()
      .with_connect_timeout(Duration::from_secs(10))
      .with_request_timeout(Duration::from_secs(120))
      .with_window_size(2 * 1024 * 1024)
      .with_tls_domain("in01.vectordb.zillizcloud.com");

    assert_eq!(config.connect_timeout, Duration::from_secs(10));
    assert_eq!(config.timeout, Some(Duration::from_secs(120)));
    assert_eq!(config.initial_connection_window_size, Some(2 * 1024 * 1024));
    assert_eq!(config.initial_stream_window_size, Some(2 * 1024 * 1024));
    assert!(config.tls);
    assert_eq!(
      config.tls_domain.as_deref(),
      Some("in01.vectordb.zillizcloud.com")
    );
  }

  #[test]
  fn test_disable_keep_alive() {
    let config = ChannelConfig::new().without_keep_alive();
    assert_eq!(config.http2_keep_alive_interval, None);
  }
}
