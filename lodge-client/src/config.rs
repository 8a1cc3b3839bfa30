//! Client configuration

/// Environment variable holding the API base URL
pub const BASE_URL_ENV: &str = "HOTEL_API_URL";

/// Base URL used when the environment does not provide one.
/// Only meaningful behind a reverse proxy serving the API on the
/// same origin.
pub const DEFAULT_BASE_URL: &str = "/api";

/// Client configuration for connecting to the hotel management API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "http://localhost:8080/api")
    pub base_url: String,

    /// Request timeout in seconds, enforced by the transport
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    /// Resolve the base URL from the environment, once, at startup.
    ///
    /// Reads `HOTEL_API_URL` and falls back to the literal `/api`
    /// when unset.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create a client from this configuration
    pub fn build_client(&self) -> crate::LodgeClient {
        crate::LodgeClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
