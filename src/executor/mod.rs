//! The request executor seam.
//!
//! The client module does not perform network calls itself. It depends on a
//! [`RequestExecutor`], an injected capability that consumes one request
//! descriptor and yields the server's response or a failure. [`HttpExecutor`]
//! is the production implementation; tests substitute their own.

mod http;

pub use http::HttpExecutor;

use crate::error::ClientError;
use crate::http::{ApiRequest, ApiResponse};
use async_trait::async_trait;
use std::sync::Arc;

/// Capability for performing a single server request.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    /// Consume one request descriptor and return the server's response.
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ClientError>;
}

/// Forwarding impl so an executor can be shared between the client and
/// application code that keeps a handle for session control.
#[async_trait]
impl<E: RequestExecutor + ?Sized> RequestExecutor for Arc<E> {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        (**self).execute(request).await
    }
}
