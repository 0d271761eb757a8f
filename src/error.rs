//! Error types for the Robinhood crypto client.
//!
//! Every operation reports failures through [`Error`]. Failures are
//! recoverable: the client stays usable after any of them and the caller
//! decides whether to issue the call again.

use std::fmt;

use thiserror::Error;

/// A specialized `Result` type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The REST call an error originated from.
///
/// Used to keep "request failed" and "malformed response" errors
/// distinguishable per endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Password-grant login
    Login,
    /// Primary-surface account listing
    Accounts,
    /// Crypto-surface account listing
    CryptoAccounts,
    /// Trading-pair listing
    CurrencyPairs,
    /// Crypto quote by trading-pair id
    CryptoQuote,
    /// Crypto order submission
    Order,
    /// Unified account details
    AccountDetails,
}

impl Endpoint {
    /// Human-readable name of the call.
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Login => "login",
            Endpoint::Accounts => "get account",
            Endpoint::CryptoAccounts => "get account ID",
            Endpoint::CurrencyPairs => "get currency id",
            Endpoint::CryptoQuote => "get crypto quote",
            Endpoint::Order => "order crypto",
            Endpoint::AccountDetails => "get account details",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The main error type for all client operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The HTTP client could not be constructed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Neither an access token nor a username+password pair was supplied
    #[error("Invalid credentials. Token or username+password required.")]
    InvalidCredentials,

    /// Login was attempted without a complete username+password pair
    #[error("Invalid credentials. Username+password required.")]
    InvalidUserPw,

    /// The server requires a multi-factor code that was not supplied
    #[error("MFA required to log in.")]
    MfaRequired,

    /// An authenticated operation was attempted without an access token
    #[error("Invalid credentials. Token required.")]
    InvalidToken,

    /// The server answered with an unexpected body shape
    #[error("{endpoint} response returned malformed data object")]
    MalformedResponse {
        /// The call that produced the response
        endpoint: Endpoint,
    },

    /// The request failed in transport or returned a non-2xx status
    #[error("{endpoint} request failed (status={status:?}): {message}")]
    RequestFailed {
        /// The call that failed
        endpoint: Endpoint,
        /// HTTP status, when one was received
        status: Option<u16>,
        /// Server or transport message
        message: String,
    },

    /// Required options were missing or inconsistent
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// An empty symbol was supplied
    #[error("Get currency id did not receive a symbol.")]
    InvalidSymbol,

    /// The trading pair could not be resolved
    #[error("Did not receive a valid currency id: {0}")]
    InvalidId(String),

    /// The primary account listing returned no account
    #[error("Response did not return an account.")]
    AccountsDoesNotExist,

    /// The crypto account listing returned no account id
    #[error("Response did not return an account ID.")]
    AccountIdDoesNotExist,
}

impl Error {
    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidCredentials
                | Error::InvalidUserPw
                | Error::MfaRequired
                | Error::InvalidToken
        )
    }

    /// Returns `true` if the server answered but with an unexpected shape.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::MalformedResponse { .. })
    }

    /// Returns `true` if the request itself failed (transport or non-2xx).
    pub fn is_request_failure(&self) -> bool {
        matches!(self, Error::RequestFailed { .. })
    }

    /// Returns `true` if this error indicates a client-side issue.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::RequestFailed {
                status: Some(status),
                ..
            } => (400..500).contains(status),
            Error::InvalidOptions(_)
            | Error::InvalidSymbol
            | Error::InvalidId(_)
            | Error::Config(_) => true,
            _ => false,
        }
    }

    /// The endpoint this error is attributed to, if any.
    pub fn endpoint(&self) -> Option<Endpoint> {
        match self {
            Error::MalformedResponse { endpoint } | Error::RequestFailed { endpoint, .. } => {
                Some(*endpoint)
            }
            _ => None,
        }
    }

    pub(crate) fn malformed(endpoint: Endpoint) -> Self {
        Error::MalformedResponse { endpoint }
    }

    /// Build a request failure from a non-2xx response body.
    pub(crate) fn from_api_response(endpoint: Endpoint, status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.get("detail")
                    .or_else(|| v.get("error"))
                    .and_then(|m| m.as_str())
                    .map(String::from)
            })
            .unwrap_or_else(|| "Unknown API error".to_string());

        Error::RequestFailed {
            endpoint,
            status: Some(status),
            message,
        }
    }

    /// Build a request failure from a transport error.
    pub(crate) fn from_transport(endpoint: Endpoint, err: reqwest::Error) -> Self {
        Error::RequestFailed {
            endpoint,
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_auth() {
        assert!(Error::MfaRequired.is_auth_error());
        assert!(Error::InvalidToken.is_auth_error());
        assert!(!Error::InvalidSymbol.is_auth_error());
    }

    #[test]
    fn test_malformed_and_request_failed_are_distinct() {
        let malformed = Error::malformed(Endpoint::Login);
        assert!(malformed.is_malformed());
        assert!(!malformed.is_request_failure());
        assert_eq!(malformed.endpoint(), Some(Endpoint::Login));

        let failed = Error::from_api_response(Endpoint::Order, 500, b"");
        assert!(failed.is_request_failure());
        assert!(!failed.is_malformed());
        assert_eq!(failed.endpoint(), Some(Endpoint::Order));
    }

    #[test]
    fn test_from_api_response() {
        let body = serde_json::json!({
            "detail": "Unable to log in with provided credentials."
        });

        let err = Error::from_api_response(Endpoint::Login, 400, body.to_string().as_bytes());
        match err {
            Error::RequestFailed {
                endpoint,
                status,
                message,
            } => {
                assert_eq!(endpoint, Endpoint::Login);
                assert_eq!(status, Some(400));
                assert_eq!(message, "Unable to log in with provided credentials.");
            }
            _ => panic!("Expected RequestFailed error"),
        }
        assert!(Error::from_api_response(Endpoint::Login, 400, b"{}").is_client_error());
    }

    #[test]
    fn test_display_names_endpoint() {
        let err = Error::malformed(Endpoint::CryptoQuote);
        assert_eq!(
            err.to_string(),
            "get crypto quote response returned malformed data object"
        );
    }
}
