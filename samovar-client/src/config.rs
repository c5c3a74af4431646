//! Client configuration

/// Client configuration for connecting to the backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "http://localhost:8000")
    pub base_url: String,

    /// Live channel TCP address (e.g., "localhost:9090")
    pub live_addr: Option<String>,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            live_addr: None,
            token: None,
            timeout: 30,
        }
    }

    /// Set the live channel address
    pub fn with_live_addr(mut self, addr: impl Into<String>) -> Self {
        self.live_addr = Some(addr.into());
        self
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an API client from this configuration
    pub fn build_api_client(&self) -> super::ApiClient {
        super::ApiClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new("http://localhost:8000")
            .with_live_addr("localhost:9090")
            .with_token("secret")
            .with_timeout(5);

        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.live_addr.as_deref(), Some("localhost:9090"));
        assert_eq!(config.token.as_deref(), Some("secret"));
        assert_eq!(config.timeout, 5);
    }

    #[test]
    fn test_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert!(config.token.is_none());
        assert_eq!(config.timeout, 30);
    }
}
