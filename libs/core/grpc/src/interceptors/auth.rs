use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tonic::{Request, Status};

/// Interceptor for injecting Milvus credentials and database selection
///
/// Milvus reads the `authorization` metadata as either the base64 encoding
/// of `username:password` or a raw API key, and the target database from
/// `dbname`.
///
/// # Example
/// ```ignore
/// use grpc_client::interceptors::AuthInterceptor;
///
/// let auth = AuthInterceptor::basic("root", "milvus").with_database("default");
/// let client = MilvusServiceClient::with_interceptor(channel, auth);
/// ```
#[derive(Clone, Debug)]
pub struct AuthInterceptor {
    header_value: String,
    database: Option<String>,
}

impl AuthInterceptor {
    /// Username/password credential, sent base64 encoded
    pub fn basic(username: impl AsRef<str>, password: impl AsRef<str>) -> Self {
        let raw = format!("{}:{}", username.as_ref(), password.as_ref());
        Self {
            header_value: STANDARD.encode(raw),
            database: None,
        }
    }

    /// Managed-cloud API key, sent as is
    pub fn api_key(key: impl Into<String>) -> Self {
        Self {
            header_value: key.into(),
            database: None,
        }
    }

    /// Pre-computed authorization value
    pub fn custom(value: impl Into<String>) -> Self {
        Self::api_key(value)
    }

    /// Route every call to the given database
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    pub fn header_value(&self) -> &str {
        &self.header_value
    }
}

impl tonic::service::Interceptor for AuthInterceptor {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        request.metadata_mut().insert(
            "authorization",
            self.header_value
                .parse()
                .map_err(|_| Status::internal("Invalid auth header"))?,
        );
        if let Some(database) = &self.database {
            request.metadata_mut().insert(
                "dbname",
                database
                    .parse()
                    .map_err(|_| Status::internal("Invalid database header"))?,
            );
        }
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::service::Interceptor;

    #[test]
    fn test_basic_credentials() {
        let mut auth = AuthInterceptor::basic("root", "milvus");
        let req = auth.call(Request::new(())).unwrap();
        let auth_header = req.metadata().get("authorization").unwrap();
        assert_eq!(auth_header, "cm9vdDptaWx2dXM=");
        assert!(req.metadata().get("dbname").is_none());
    }

    #[test]
    fn test_api_key() {
        let mut auth = AuthInterceptor::api_key("my-key");
        let req = auth.call(Request::new(())).unwrap();
        let auth_header = req.metadata().get("authorization").unwrap();
        assert_eq!(auth_header, "my-key");
    }

    #[test]
    fn test_database_header() {
        let mut auth = AuthInterceptor::basic("root", "milvus").with_database("analytics");
        let req = auth.call(Request::new(())).unwrap();
        assert_eq!(req.metadata().get("dbname").unwrap(), "analytics");
    }

    #[test]
    fn test_invalid_header_value() {
        let mut auth = AuthInterceptor::custom("line\nbreak");
        let err = auth.call(Request::new(())).unwrap_err();
        assert_eq!(err.code(), tonic::Code::Internal);
    }
}
