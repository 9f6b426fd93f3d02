//! User account operations.
//!
//! Each operation is a thin adapter from caller input to a request
//! descriptor. Payloads are forwarded verbatim, any serializable shape is
//! accepted, and no validation or error translation happens here; the typed
//! models in [`crate::protocol`] are optional conveniences.

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::executor::RequestExecutor;
use crate::http::{ApiRequest, ApiResponse, Method};
use serde::Serialize;

impl<E: RequestExecutor> ApiClient<E> {
    /// Log in with the given credentials via `POST /login`.
    pub async fn login<T: Serialize + ?Sized>(
        &self,
        credentials: &T,
    ) -> Result<ApiResponse, ClientError> {
        let request = ApiRequest::new(Method::Post, "/login")
            .json(credentials)
            .map_err(ClientError::encode)?;
        self.dispatch(request).await
    }

    /// Create an account with the given details via `POST /register`.
    pub async fn register<T: Serialize + ?Sized>(
        &self,
        details: &T,
    ) -> Result<ApiResponse, ClientError> {
        let request = ApiRequest::new(Method::Post, "/register")
            .json(details)
            .map_err(ClientError::encode)?;
        self.dispatch(request).await
    }

    /// Fetch the current user's profile via `GET /profile`.
    pub async fn get_user_profile(&self) -> Result<ApiResponse, ClientError> {
        let request = ApiRequest::new(Method::Get, "/profile");
        self.dispatch(request).await
    }

    /// Update the current user's bio via `POST /bio`.
    pub async fn update_bio<T: Serialize + ?Sized>(
        &self,
        bio: &T,
    ) -> Result<ApiResponse, ClientError> {
        let request = ApiRequest::new(Method::Post, "/bio")
            .json(bio)
            .map_err(ClientError::encode)?;
        self.dispatch(request).await
    }
}
