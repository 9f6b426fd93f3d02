//! The API client and its per-resource operations.

mod user;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::executor::{HttpExecutor, RequestExecutor};
use crate::http::{ApiRequest, ApiResponse};
use tracing::debug;

/// Typed entry point for the TalkSphere server operations.
///
/// The client holds no state of its own. Every operation builds exactly one
/// request descriptor, hands it to the executor once, and returns the
/// executor's result untouched, so concurrent calls are fully independent.
pub struct ApiClient<E> {
    /// The injected request executor.
    executor: E,
}

impl<E: RequestExecutor> ApiClient<E> {
    /// Create a client around an executor.
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// Get a reference to the executor.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Hand one descriptor to the executor.
    pub(crate) async fn dispatch(
        &self,
        request: ApiRequest,
    ) -> Result<ApiResponse, ClientError> {
        debug!("Dispatching request: {} {}", request.method, request.path);
        self.executor.execute(request).await
    }
}

impl ApiClient<HttpExecutor> {
    /// Create a client backed by an [`HttpExecutor`] built from `config`.
    pub fn from_config(config: ClientConfig) -> Result<Self, ClientError> {
        Ok(Self::new(HttpExecutor::new(config)?))
    }
}
