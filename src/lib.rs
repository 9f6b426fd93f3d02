//! # talksphere-client
//!
//! Async API client for the TalkSphere user service.
//!
//! The crate is built around a small separation: [`ApiClient`] turns typed
//! calls into request descriptors, and a [`RequestExecutor`] owns the
//! transport that carries them.
//!
//! ```text
//! ┌─────────────┐   ApiRequest    ┌─────────────────┐   HTTP    ┌────────┐
//! │  ApiClient  │ ──────────────▶ │ RequestExecutor │ ────────▶ │ server │
//! │ login/...   │ ◀────────────── │ (HttpExecutor)  │ ◀──────── │        │
//! └─────────────┘   ApiResponse   └─────────────────┘           └────────┘
//! ```
//!
//! The client layer is deliberately thin: one descriptor per call, one
//! executor invocation per descriptor, and the executor's result returned
//! as-is. Session tokens, timeouts and headers live in the executor.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use talksphere_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ClientError> {
//!     let executor = Arc::new(HttpExecutor::new(
//!         ClientConfig::new().base_url("https://forum.example.com"),
//!     )?);
//!     let client = ApiClient::new(executor.clone());
//!
//!     let credentials = LoginRequest {
//!         username: "ada".to_string(),
//!         password: "secret".to_string(),
//!     };
//!     let response = client.login(&credentials).await?;
//!
//!     let session = Envelope::<LoginResponse>::from_response(&response)?
//!         .into_result()?;
//!     if let Some(session) = session {
//!         executor.set_token(session.token).await;
//!     }
//!
//!     let profile = client.get_user_profile().await?;
//!     println!("{:?}", profile.text_body());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod executor;
pub mod http;
pub mod protocol;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::api::ApiClient;
    pub use crate::config::ClientConfig;
    pub use crate::error::ClientError;
    pub use crate::executor::{HttpExecutor, RequestExecutor};
    pub use crate::http::{ApiRequest, ApiResponse, Method, StatusCode};
    pub use crate::protocol::{
        Envelope, LoginRequest, LoginResponse, RegisterRequest, ResponseCode, UpdateBioRequest,
        UserProfile,
    };
    pub use async_trait::async_trait;
}

// Re-export for convenience
pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use executor::{HttpExecutor, RequestExecutor};
pub use http::{ApiRequest, ApiResponse};
