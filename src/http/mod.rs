//! HTTP request and response types shared by the client and its executors.

mod request;
mod response;

pub use request::{ApiRequest, Method};
pub use response::{ApiResponse, StatusCode};
