//! Client configuration options.

use std::time::Duration;

use url::Url;

use crate::models::Host;
use crate::Result;

/// OAuth client id used by Robinhood's web application.
pub const DEFAULT_CLIENT_ID: &str = "c82SH0WZOsabOXGP2sxqcj34FxkvfnWRZBKlBjFS";

/// Base URLs of the three API surfaces.
///
/// # Example
///
/// ```
/// use robinhood_crypto_rs::Endpoints;
///
/// let endpoints = Endpoints::default();
/// assert_eq!(endpoints.api(), "https://api.robinhood.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    api: String,
    nummus: String,
    bonfire: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            api: "https://api.robinhood.com".to_string(),
            nummus: "https://nummus.robinhood.com".to_string(),
            bonfire: "https://bonfire.robinhood.com".to_string(),
        }
    }
}

impl Endpoints {
    /// Create endpoints from custom base URLs.
    ///
    /// Each URL is validated; a trailing slash is dropped.
    pub fn new(
        api: impl AsRef<str>,
        nummus: impl AsRef<str>,
        bonfire: impl AsRef<str>,
    ) -> Result<Self> {
        Ok(Self {
            api: normalize(api.as_ref())?,
            nummus: normalize(nummus.as_ref())?,
            bonfire: normalize(bonfire.as_ref())?,
        })
    }

    /// Primary host base URL.
    pub fn api(&self) -> &str {
        &self.api
    }

    /// Crypto host base URL.
    pub fn nummus(&self) -> &str {
        &self.nummus
    }

    /// Account-detail host base URL.
    pub fn bonfire(&self) -> &str {
        &self.bonfire
    }

    /// Base URL for the given host.
    pub fn base_url(&self, host: Host) -> &str {
        match host {
            Host::Api => &self.api,
            Host::Nummus => &self.nummus,
            Host::Bonfire => &self.bonfire,
        }
    }
}

fn normalize(raw: &str) -> Result<String> {
    let url = Url::parse(raw)?;
    Ok(url.as_str().trim_end_matches('/').to_string())
}

/// Configuration for the Robinhood client.
///
/// # Example
///
/// ```
/// use robinhood_crypto_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// OAuth client id sent with login requests
    pub client_id: String,
    /// Base URLs of the API surfaces
    pub endpoints: Endpoints,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("robinhood-crypto-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            client_id: DEFAULT_CLIENT_ID.to_string(),
            endpoints: Endpoints::default(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
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

    /// Set the OAuth client id.
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    /// Point the client at different hosts.
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.client_id, DEFAULT_CLIENT_ID);
        assert!(config.user_agent.starts_with("robinhood-crypto-rs/"));
    }

    #[test]
    fn test_default_endpoints() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.base_url(Host::Api), "https://api.robinhood.com");
        assert_eq!(endpoints.base_url(Host::Nummus), "https://nummus.robinhood.com");
        assert_eq!(endpoints.base_url(Host::Bonfire), "https://bonfire.robinhood.com");
    }

    #[test]
    fn test_custom_endpoints_trim_slash() {
        let endpoints = Endpoints::new(
            "http://127.0.0.1:1234/",
            "http://127.0.0.1:1235",
            "http://127.0.0.1:1236/",
        )
        .unwrap();
        assert_eq!(endpoints.api(), "http://127.0.0.1:1234");
        assert_eq!(endpoints.nummus(), "http://127.0.0.1:1235");
        assert_eq!(endpoints.bonfire(), "http://127.0.0.1:1236");
    }

    #[test]
    fn test_custom_endpoints_reject_garbage() {
        assert!(Endpoints::new("not a url", "http://a", "http://b").is_err());
    }
}
