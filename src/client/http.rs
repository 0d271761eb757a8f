//! HTTP client implementation for the Robinhood crypto API.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, ORIGIN, REFERER};
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::api::{AccountsService, CurrenciesService, OrdersService, QuotesService};
use crate::auth::{login, ClientOptions, Credentials, Session};
use crate::models::{AccountRefs, Host};
use crate::{Endpoint, Error, Result};

use super::config::ClientConfig;

const WEB_ORIGIN: &str = "https://robinhood.com";
const WEB_REFERER: &str = "https://robinhood.com/";

/// The main client for interacting with the Robinhood crypto API.
///
/// The client owns the session and the account identifiers resolved at
/// start-up, and hands out lightweight service structs for each group of
/// operations.
///
/// # Example
///
/// ```no_run
/// use robinhood_crypto_rs::{ClientConfig, ClientOptions, RobinhoodClient};
/// use robinhood_crypto_rs::models::QuoteOptions;
///
/// # async fn example() -> robinhood_crypto_rs::Result<()> {
/// let client = RobinhoodClient::connect(
///     ClientOptions::from_env(),
///     ClientConfig::default(),
/// ).await?;
///
/// let quote = client.quotes().get(QuoteOptions::symbol("BTC")).await?;
/// println!("BTC ask: {}", quote.ask_price);
/// # Ok(())
/// # }
/// ```
pub struct RobinhoodClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) session: Session,
    pub(crate) credentials: Credentials,
    pub(crate) mfa_code: Option<SecretString>,
    pub(crate) accounts: RwLock<AccountRefs>,
    pub(crate) config: ClientConfig,
}

impl RobinhoodClient {
    /// Create a client without contacting the API.
    ///
    /// Call [`start_up`](Self::start_up) to log in and resolve accounts.
    pub fn new(options: ClientOptions, config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .default_headers(default_headers())
            .build()?;

        let session = match options.access_token {
            Some(token) => Session::from_access_token(token.expose_secret()),
            None => Session::new(),
        };
        let credentials =
            Credentials::new(config.client_id.clone(), options.username, options.password);

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                session,
                credentials,
                mfa_code: options.mfa_code,
                accounts: RwLock::new(AccountRefs::default()),
                config,
            }),
        })
    }

    /// Create a client and run start-up.
    ///
    /// Start-up failures (invalid credentials, MFA required, failed login)
    /// are logged and the client is returned anyway. If no token was
    /// obtained, every authenticated call on it reports
    /// [`Error::InvalidToken`].
    /// Only a failure to build the HTTP client is returned as an error.
    pub async fn connect(options: ClientOptions, config: ClientConfig) -> Result<Self> {
        let client = Self::new(options, config)?;
        if let Err(err) = client.start_up().await {
            tracing::warn!(error = %err, "start-up did not complete");
        }
        Ok(client)
    }

    /// Log in with username and password and resolve accounts.
    ///
    /// Unlike [`connect`](Self::connect), start-up failures are returned.
    pub async fn login(
        username: impl Into<String>,
        password: impl Into<String>,
        mfa_code: Option<&str>,
    ) -> Result<Self> {
        let mut options = ClientOptions::new().username(username).password(password);
        if let Some(code) = mfa_code {
            options = options.mfa_code(code);
        }
        let client = Self::new(options, ClientConfig::default())?;
        client.start_up().await?;
        Ok(client)
    }

    /// Authenticate if needed, then resolve the account identifiers.
    ///
    /// With a pre-supplied access token no login request is made. The
    /// returned refs may be incomplete if an account listing failed; those
    /// failures are logged rather than returned.
    pub async fn start_up(&self) -> Result<AccountRefs> {
        login::authenticate(&self.inner).await?;
        self.accounts().bootstrap().await
    }

    /// Get the accounts service.
    pub fn accounts(&self) -> AccountsService {
        AccountsService::new(self.inner.clone())
    }

    /// Get the trading-pair service.
    pub fn currencies(&self) -> CurrenciesService {
        CurrenciesService::new(self.inner.clone())
    }

    /// Get the quotes service.
    pub fn quotes(&self) -> QuotesService {
        QuotesService::new(self.inner.clone())
    }

    /// Get the orders service.
    pub fn orders(&self) -> OrdersService {
        OrdersService::new(self.inner.clone())
    }

    /// Get a reference to the session.
    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    /// Get the login credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }

    /// Snapshot of the account identifiers resolved so far.
    pub async fn account_refs(&self) -> AccountRefs {
        self.inner.accounts.read().await.clone()
    }
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(REFERER, HeaderValue::from_static(WEB_REFERER));
    headers.insert(ORIGIN, HeaderValue::from_static(WEB_ORIGIN));
    headers
}

impl ClientInner {
    /// Get the base URL for a host.
    pub(crate) fn base_url(&self, host: Host) -> &str {
        self.config.endpoints.base_url(host)
    }

    /// Fail with [`Error::InvalidToken`] unless an access token is held.
    pub(crate) async fn ensure_authenticated(&self) -> Result<()> {
        if self.session.is_authenticated().await {
            Ok(())
        } else {
            tracing::warn!("{}", Error::InvalidToken);
            Err(Error::InvalidToken)
        }
    }

    /// Build the bearer header; all-or-nothing on the token being present.
    pub(crate) async fn auth_headers(&self) -> Result<HeaderMap> {
        let token = self.session.access_token().await.ok_or(Error::InvalidToken)?;

        let mut headers = HeaderMap::new();
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
            .map_err(|_| Error::Config("Invalid token format".to_string()))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }

    /// Make an authenticated GET request.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        host: Host,
        path: &str,
        endpoint: Endpoint,
    ) -> Result<T> {
        let headers = self.auth_headers().await?;
        let url = format!("{}{}", self.base_url(host), path);

        tracing::debug!(%host, path, "GET");
        let request = self.http.get(&url).headers(headers);
        self.send(request, endpoint).await
    }

    /// Make an authenticated POST request.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        host: Host,
        path: &str,
        body: &B,
        endpoint: Endpoint,
    ) -> Result<T> {
        let headers = self.auth_headers().await?;
        let url = format!("{}{}", self.base_url(host), path);

        tracing::debug!(%host, path, "POST");
        let request = self.http.post(&url).headers(headers).json(body);
        self.send(request, endpoint).await
    }

    /// Make a POST request without a bearer token (login).
    pub(crate) async fn post_unauthenticated<T: DeserializeOwned, B: Serialize>(
        &self,
        host: Host,
        path: &str,
        body: &B,
        endpoint: Endpoint,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url(host), path);

        tracing::debug!(%host, path, "POST");
        let request = self.http.post(&url).json(body);
        self.send(request, endpoint).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        endpoint: Endpoint,
    ) -> Result<T> {
        let result = match request.send().await {
            Ok(response) => self.handle_response(response, endpoint).await,
            Err(err) => Err(Error::from_transport(endpoint, err)),
        };
        if let Err(ref err) = result {
            tracing::warn!(%endpoint, error = %err, "request did not succeed");
        }
        result
    }

    /// Classify a response as success, request failure or malformed data.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        endpoint: Endpoint,
    ) -> Result<T> {
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| Error::from_transport(endpoint, err))?;

        if !status.is_success() {
            return Err(Error::from_api_response(endpoint, status.as_u16(), &body));
        }

        serde_json::from_slice(&body).map_err(|err| {
            tracing::debug!(%endpoint, error = %err, "unexpected response shape");
            Error::malformed(endpoint)
        })
    }
}

impl Clone for RobinhoodClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for RobinhoodClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RobinhoodClient")
            .field("config", &self.inner.config)
            .field("credentials", &self.inner.credentials)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_auth_headers_require_token() {
        let client = RobinhoodClient::new(ClientOptions::new(), ClientConfig::default()).unwrap();
        assert!(matches!(
            client.inner.auth_headers().await,
            Err(Error::InvalidToken)
        ));
        assert!(matches!(
            client.inner.ensure_authenticated().await,
            Err(Error::InvalidToken)
        ));
    }

    #[tokio::test]
    async fn test_auth_headers_carry_bearer_token() {
        let client = RobinhoodClient::new(
            ClientOptions::new().access_token("someToken"),
            ClientConfig::default(),
        )
        .unwrap();
        let headers = client.inner.auth_headers().await.unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer someToken");
    }

    #[test]
    fn test_default_headers() {
        let headers = default_headers();
        assert_eq!(headers.get(ORIGIN).unwrap(), "https://robinhood.com");
        assert_eq!(headers.get(REFERER).unwrap(), "https://robinhood.com/");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn test_debug_does_not_leak_password() {
        let client = RobinhoodClient::new(
            ClientOptions::new().username("user").password("super-secret"),
            ClientConfig::default(),
        )
        .unwrap();
        assert!(!format!("{:?}", client).contains("super-secret"));
    }
}
