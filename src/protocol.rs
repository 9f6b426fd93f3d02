//! Wire vocabulary of the TalkSphere server.
//!
//! Every route answers with the same `{code, msg, data}` envelope; the
//! business code, not the HTTP status, is what distinguishes success from
//! rejection. The typed request and response models below mirror the user
//! routes but nothing forces callers to use them.

use crate::error::ClientError;
use crate::http::ApiResponse;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Business status codes used by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    Success,
    InvalidParam,
    UserExists,
    UserNotFound,
    InvalidPassword,
    ServerBusy,
    EmailExists,
    LoginRequired,
    InvalidToken,
}

impl ResponseCode {
    /// The numeric wire value of this code.
    pub const fn code(self) -> i64 {
        match self {
            ResponseCode::Success => 1000,
            ResponseCode::InvalidParam => 1001,
            ResponseCode::UserExists => 1002,
            ResponseCode::UserNotFound => 1003,
            ResponseCode::InvalidPassword => 1004,
            ResponseCode::ServerBusy => 1005,
            ResponseCode::EmailExists => 1006,
            ResponseCode::LoginRequired => 1007,
            ResponseCode::InvalidToken => 1008,
        }
    }

    /// Map a wire value back to a known code.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1000 => Some(ResponseCode::Success),
            1001 => Some(ResponseCode::InvalidParam),
            1002 => Some(ResponseCode::UserExists),
            1003 => Some(ResponseCode::UserNotFound),
            1004 => Some(ResponseCode::InvalidPassword),
            1005 => Some(ResponseCode::ServerBusy),
            1006 => Some(ResponseCode::EmailExists),
            1007 => Some(ResponseCode::LoginRequired),
            1008 => Some(ResponseCode::InvalidToken),
            _ => None,
        }
    }

    /// Human-readable message for this code.
    pub const fn message(self) -> &'static str {
        match self {
            ResponseCode::Success => "success",
            ResponseCode::InvalidParam => "invalid request parameter",
            ResponseCode::UserExists => "username already exists",
            ResponseCode::UserNotFound => "username does not exist",
            ResponseCode::InvalidPassword => "invalid username or password",
            ResponseCode::ServerBusy => "server busy",
            ResponseCode::EmailExists => "email already exists",
            ResponseCode::LoginRequired => "login required",
            ResponseCode::InvalidToken => "invalid token",
        }
    }
}

impl std::fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message())
    }
}

/// The `{code, msg, data}` wrapper around every server reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Business status code.
    pub code: i64,
    /// Server-provided message.
    pub msg: String,
    /// Payload, absent on rejections and on data-less successes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Check whether the envelope carries a success code.
    pub fn is_success(&self) -> bool {
        self.code == ResponseCode::Success.code()
    }

    /// Turn the envelope into a payload or a [`ClientError::Api`].
    pub fn into_result(self) -> Result<Option<T>, ClientError> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(ClientError::api(self.code, self.msg))
        }
    }
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Decode an envelope from a response body.
    pub fn from_response(response: &ApiResponse) -> Result<Self, ClientError> {
        let body = response.body.as_deref().unwrap_or_default();
        serde_json::from_slice(body).map_err(ClientError::decode)
    }
}

/// Credentials for `POST /login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Account details for `POST /register`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Payload for `POST /bio`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateBioRequest {
    pub bio: String,
}

/// Session data returned by a successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: i64,
    pub username: String,
}

/// Profile data returned by `GET /profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
}
