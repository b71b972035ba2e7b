use tonic::{Request, Status};

/// Interceptor for request correlation
///
/// Injects `x-request-id` and a W3C `traceparent` header into every outgoing
/// call and logs both at debug level.
///
/// # Example
/// ```ignore
/// use grpc_client::interceptors::TracingInterceptor;
///
/// let client = MilvusServiceClient::with_interceptor(channel, TracingInterceptor::new());
/// ```
#[derive(Clone, Debug, Default)]
pub struct TracingInterceptor;

impl TracingInterceptor {
    /// Create a new tracing interceptor
    pub fn new() -> Self {
        Self
    }

    /// Format: {version}-{trace_id}-{parent_id}-{trace_flags}
    fn generate_traceparent() -> String {
        let trace_id = uuid::Uuid::new_v4().as_simple().to_string();
        let span_id = &uuid::Uuid::new_v4().as_simple().to_string()[..16];
        format!("00-{trace_id}-{span_id}-01")
    }
}

impl tonic::service::Interceptor for TracingInterceptor {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let traceparent = Self::generate_traceparent();

        request.metadata_mut().insert(
            "x-request-id",
            request_id
                .parse()
                .map_err(|_| Status::internal("Failed to create request ID"))?,
        );
        request.metadata_mut().insert(
            "traceparent",
            traceparent
                .parse()
                .map_err(|_| Status::internal("Failed to create traceparent header"))?,
        );

        tracing::debug!(
            target: "grpc_client",
            request_id = %request_id,
            traceparent = %traceparent,
            "Outgoing gRPC request"
        );

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::service::Interceptor;

    #[test]
    fn test_tracing_interceptor() {
        let mut tracing = TracingInterceptor::new();
        let req = tracing.call(Request::new(())).unwrap();
        let request_id = req.metadata().get("x-request-id").unwrap().to_str().unwrap();
        assert!(uuid::Uuid::parse_str(request_id).is_ok());
    }

    #[test]
    fn test_traceparent_format() {
        let mut tracing = TracingInterceptor::new();
        let req = tracing.call(Request::new(())).unwrap();
        let traceparent = req.metadata().get("traceparent").unwrap().to_str().unwrap();
        let parts: Vec<&str> = traceparent.split('-').collect();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0], "00");
        assert_eq!(parts[1].len(), 32);
        assert_eq!(parts[2].len(), 16);
        assert_eq!(parts[3], "01");
    }
}
