//! Client configuration options.

use std::time::Duration;

use crate::ApiVersion;

/// Base URL of the public ngrok API.
pub const DEFAULT_BASE_URL: &str = "https://api.ngrok.com";

/// Configuration for the ngrok client.
///
/// # Example
///
/// ```
/// use ngrok_api_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL that request paths are resolved against
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Value of the `Ngrok-Version` header
    pub api_version: ApiVersion,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("ngrok-api-rs/{}", env!("CARGO_PKG_VERSION")),
            api_version: ApiVersion::default(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a different API host, e.g. a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Pin to a specific API version.
    pub fn with_api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = version;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.ngrok.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.api_version.as_str(), "2");
        assert!(config.user_agent.starts_with("ngrok-api-rs/"));
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new()
            .with_base_url("http://127.0.0.1:8080")
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("test-agent/1.0")
            .with_api_version(ApiVersion::new("3").unwrap());

        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "test-agent/1.0");
        assert_eq!(config.api_version.as_str(), "3");
    }
}
