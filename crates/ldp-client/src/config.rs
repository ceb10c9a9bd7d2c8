//! Client configuration.
//!
//! The only configurable value is the backend base URL, supplied through
//! the `LATSPACE_BACKEND_URL` environment variable with a local-loopback
//! default for development.

/// Environment variable holding the backend base URL.
pub const BACKEND_URL_VAR: &str = "LATSPACE_BACKEND_URL";

/// Default backend when the environment variable is unset.
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Configuration for [`ParseClient`](crate::ParseClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the parsing service, without a trailing slash.
    pub base_url: String,
}

impl ClientConfig {
    /// Build a config with an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Read the base URL from the environment, falling back to loopback.
    pub fn from_env() -> Self {
        match std::env::var(BACKEND_URL_VAR) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    /// Full URL of the parse endpoint.
    pub fn parse_url(&self) -> String {
        format!("{}/parse", self.base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
