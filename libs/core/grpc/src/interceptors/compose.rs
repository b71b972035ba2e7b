use tonic::{Request, Status};

/// Chains two interceptors; `first` runs before `second` and an error from
/// either one rejects the call before it reaches the channel.
///
/// # Example
/// ```ignore
/// use grpc_client::interceptors::{AuthInterceptor, TracingInterceptor, compose_interceptors};
///
/// let auth = AuthInterceptor::basic("root", "milvus");
/// let tracing = TracingInterceptor::new();
/// let composed = compose_interceptors(auth, tracing);
///
/// let client = MilvusServiceClient::with_interceptor(channel, composed);
/// ```
pub fn compose_interceptors<A, B>(first: A, second: B) -> ComposedInterceptor<A, B>
where
  A: tonic::service::Interceptor,
  B: tonic::service::Interceptor,
{
  ComposedInterceptor { first, second }
}

/// Interceptor pair built by [`compose_interceptors`].
#[derive(Clone, Debug)]
pub struct ComposedInterceptor<A, B> {
  first: A,
  second: B,
}

impl<A, B> tonic::service::Interceptor for ComposedInterceptor<A, B>
where
  A: tonic::service::Interceptor,
  B: tonic::service::Interceptor,
{
  fn call(&mut self, request: Request<()>) -> Result<Request<()>, Status> {
    let request = self.first.call(request)?;
    self.second.call(request)
  }
}
