//! Client configuration

/// Configuration for the admin backend and PMS upload service endpoints.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Admin/auth backend base URL (e.g., "http://localhost:8000")
    pub api_url: String,

    /// PMS image service base URL (e.g., "http://localhost:8002")
    pub pms_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new configuration with the default timeout.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            pms_url: "http://localhost:8002".to_string(),
            timeout: 30,
        }
    }

    /// Set the PMS service base URL
    pub fn with_pms_url(mut self, url: impl Into<String>) -> Self {
        self.pms_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000")
    }
}
