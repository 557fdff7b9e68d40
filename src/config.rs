//! Configuration options for the portal client

use std::time::Duration;

/// Configuration options for the portal client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Path prefix every endpoint lives under
    pub api_prefix: String,

    /// The request timeout
    pub request_timeout: Option<Duration>,

    /// Value sent in the `X-Client-Info` header
    pub client_info: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            api_prefix: "/api".to_string(),
            request_timeout: Some(Duration::from_secs(30)),
            client_info: format!("volunteer-portal/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientOptions {
    /// Set the endpoint path prefix
    pub fn with_api_prefix(mut self, value: &str) -> Self {
        self.api_prefix = format!("/{}", value.trim_matches('/'));
        self
    }

    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }

    /// Set the client info header
    pub fn with_client_info(mut self, value: &str) -> Self {
        self.client_info = value.to_string();
        self
    }

    /// Join the prefix with an endpoint path
    pub(crate) fn endpoint(&self, base_url: &str, path: &str) -> String {
        let prefix = if self.api_prefix == "/" { "" } else { self.api_prefix.as_str() };
        format!(
            "{}{}/{}",
            base_url.trim_end_matches('/'),
            prefix,
            path.trim_start_matches('/')
        )
    }
}
