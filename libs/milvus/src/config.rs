use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::{MilvusError, MilvusResult};

pub const DEFAULT_PORT: u16 = 19530;
pub const DEFAULT_DATABASE: &str = "default";

const ZILLIZ_CLOUD_DOMAIN: &str = "vectordb.zillizcloud.com";

/// Milvus connection configuration
#[derive(Debug, Clone)]
pub struct MilvusConfig {
    /// Host name without scheme
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Takes precedence over username/password
    pub api_key: Option<String>,
    pub database: String,
    pub use_tls: bool,
    pub connect_timeout: Duration,
    pub request_timeout: Option<Duration>,
    pub zilliz_cloud: bool,
}

impl MilvusConfig {
    /// `host` may carry a scheme; `https://` switches TLS on.
    pub fn new(host: impl Into<String>) -> Self {
        let host = host.into();
        let (host, use_tls) = match host.split_once("://") {
            Some((scheme, rest)) => (rest.trim_end_matches('/').to_string(), scheme == "https"),
            None => (host, false),
        };

        Self {
            host,
            use_tls,
            ..Self::default()
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    pub fn with_tls(mut self, use_tls: bool) -> Self {
        self.use_tls = use_tls;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn with_zilliz_cloud(mut self, zilliz_cloud: bool) -> Self {
        self.zilliz_cloud = zilliz_cloud;
        self
    }

    pub fn from_env() -> MilvusResult<Self> {
        let host = std::env::var("MILVUS_HOST").unwrap_or_else(|_| "localhost".to_string());
        let mut config = Self::new(host);

        if let Ok(port) = std::env::var("MILVUS_PORT") {
            config.port = port
                .parse()
                .map_err(|_| MilvusError::Config(format!("MILVUS_PORT is not a port: {}", port)))?;
        }
        if let Ok(username) = std::env::var("MILVUS_USERNAME") {
            config.username = username;
        }
        if let Ok(password) = std::env::var("MILVUS_PASSWORD") {
            config.password = password;
        }
        config.api_key = std::env::var("MILVUS_API_KEY").ok().filter(|k| !k.is_empty());
        if let Ok(database) = std::env::var("MILVUS_DATABASE") {
            config.database = database;
        }
        if let Ok(secs) = std::env::var("MILVUS_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                MilvusError::Config(format!("MILVUS_TIMEOUT_SECS is not a number: {}", secs))
            })?;
            config.request_timeout = Some(Duration::from_secs(secs));
        }
        if let Ok(flag) = std::env::var("MILVUS_ZILLIZ_CLOUD") {
            config.zilliz_cloud = flag.parse().map_err(|_| {
                MilvusError::Config(format!("MILVUS_ZILLIZ_CLOUD is not a boolean: {}", flag))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> MilvusResult<()> {
        if self.host.trim().is_empty() {
            return Err(MilvusError::Config("host cannot be empty".to_string()));
        }
        if self.port == 0 {
            return Err(MilvusError::Config("port cannot be 0".to_string()));
        }
        if self.database.trim().is_empty() {
            return Err(MilvusError::Config("database cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Credential value: the raw API key, or base64 of `username:password`.
    pub fn authorization(&self) -> String {
        match &self.api_key {
            Some(key) => key.clone(),
            None => STANDARD.encode(format!("{}:{}", self.username, self.password)),
        }
    }

    pub fn is_zilliz_cloud(&self) -> bool {
        self.zilliz_cloud || self.host.contains(ZILLIZ_CLOUD_DOMAIN)
    }

    fn scheme(&self) -> &'static str {
        if self.use_tls { "https" } else { "http" }
    }

    pub fn grpc_endpoint(&self) -> String {
        format!("{}://{}:{}", self.scheme(), self.host, self.port)
    }

    pub fn rest_base_url(&self) -> String {
        format!("{}://{}:{}/api/v1", self.scheme(), self.host, self.port)
    }
}

impl Default for MilvusConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: DEFAULT_PORT,
            username: "root".to_string(),
            password: "milvus".to_string(),
            api_key: None,
            database: DEFAULT_DATABASE.to_string(),
            use_tls: false,
            connect_timeout: Duration::from_secs(5),
            request_timeout: None,
            zilliz_cloud: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MilvusConfig::default();
        assert_eq!(config.port, 19530);
        assert_eq!(config.username, "root");
        assert_eq!(config.password, "milvus");
        assert_eq!(config.database, "default");
        assert_eq!(config.grpc_endpoint(), "http://localhost:19530");
    }

    #[test]
    fn test_scheme_in_host() {
        let config = MilvusConfig::new("https://in01-abc.aws-us-west-2.vectordb.zillizcloud.com/");
        assert!(config.use_tls);
        assert_eq!(config.host, "in01-abc.aws-us-west-2.vectordb.zillizcloud.com");
        assert!(config.is_zilliz_cloud());
        assert_eq!(
            config.rest_base_url(),
            "https://in01-abc.aws-us-west-2.vectordb.zillizcloud.com:19530/api/v1"
        );
    }

    #[test]
    fn test_authorization() {
        let config = MilvusConfig::new("localhost");
        assert_eq!(config.authorization(), "cm9vdDptaWx2dXM=");

        let config = config.with_api_key("secret-key");
        assert_eq!(config.authorization(), "secret-key");
    }

    #[test]
    fn test_from_env() {
        temp_env::with_vars(
            [
                ("MILVUS_HOST", Some("milvus.internal")),
                ("MILVUS_PORT", Some("29530")),
                ("MILVUS_USERNAME", Some("admin")),
                ("MILVUS_PASSWORD", Some("hunter2")),
                ("MILVUS_API_KEY", None),
                ("MILVUS_DATABASE", Some("memories")),
                ("MILVUS_TIMEOUT_SECS", Some("45")),
                ("MILVUS_ZILLIZ_CLOUD", Some("true")),
            ],
            || {
                let config = MilvusConfig::from_env().unwrap();
                assert_eq!(config.host, "milvus.internal");
                assert_eq!(config.port, 29530);
                assert_eq!(config.username, "admin");
                assert_eq!(config.password, "hunter2");
                assert_eq!(config.database, "memories");
                assert_eq!(config.request_timeout, Some(Duration::from_secs(45)));
                assert!(config.zilliz_cloud);
            },
        );
    }

    #[test]
    fn test_from_env_defaults() {
        temp_env::with_vars_unset(
            [
                "MILVUS_HOST",
                "MILVUS_PORT",
                "MILVUS_USERNAME",
                "MILVUS_PASSWORD",
                "MILVUS_API_KEY",
                "MILVUS_DATABASE",
                "MILVUS_TIMEOUT_SECS",
                "MILVUS_ZILLIZ_CLOUD",
            ],
            || {
                let config = MilvusConfig::from_env().unwrap();
                assert_eq!(config.host, "localhost");
                assert_eq!(config.port, DEFAULT_PORT);
                assert_eq!(config.request_timeout, None);
                assert!(!config.is_zilliz_cloud());
            },
        );
    }

    #[test]
    fn test_from_env_rejects_bad_port() {
        temp_env::with_var("MILVUS_PORT", Some("not-a-port"), || {
            let err = MilvusConfig::from_env().unwrap_err();
            assert!(matches!(err, MilvusError::Config(_)));
        });
    }

    #[test]
    fn test_validate_empty_database() {
        let config = MilvusConfig::new("localhost").with_database(" ");
        assert!(matches!(config.validate(), Err(MilvusError::Config(_))));
    }
}
