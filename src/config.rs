//! Executor configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration for the HTTP executor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the server, without a trailing path.
    pub base_url: String,
    /// Request timeout in seconds.
    pub request_timeout: u64,
    /// User-Agent header sent with every request.
    pub user_agent: String,
    /// Headers attached to every request.
    pub default_headers: HashMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            request_timeout: 30,
            user_agent: concat!("talksphere-client/", env!("CARGO_PKG_VERSION")).to_string(),
            default_headers: HashMap::new(),
        }
    }
}

impl ClientConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout in seconds.
    pub fn request_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout = seconds;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Add a header sent with every request.
    pub fn default_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Join the base URL with a request path, normalizing the slash between them.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joining() {
        let config = ClientConfig::new().base_url("http://localhost:9000");
        assert_eq!(config.endpoint("/login"), "http://localhost:9000/login");
        assert_eq!(config.endpoint("login"), "http://localhost:9000/login");
    }

    #[test]
    fn test_endpoint_trailing_slash() {
        let config = ClientConfig::new().base_url("http://localhost:9000/");
        assert_eq!(config.endpoint("/profile"), "http://localhost:9000/profile");
    }

    #[test]
    fn test_builder_setters() {
        let config = ClientConfig::new()
            .base_url("https://forum.example.com")
            .request_timeout(5)
            .user_agent("smoke-test")
            .default_header("X-Client", "cli");

        assert_eq!(config.base_url, "https://forum.example.com");
        assert_eq!(config.request_timeout, 5);
        assert_eq!(config.user_agent, "smoke-test");
        assert_eq!(config.default_headers.get("X-Client"), Some(&"cli".to_string()));
    }
}
