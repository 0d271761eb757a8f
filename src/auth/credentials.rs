//! Login credentials and construction-time client options.

use secrecy::{ExposeSecret, SecretString};
use uuid::Uuid;

use crate::{Error, Result};

/// Environment variable holding the username.
pub const USERNAME_ENV: &str = "ROBINHOOD_USERNAME";
/// Environment variable holding the password.
pub const PASSWORD_ENV: &str = "ROBINHOOD_PASSWORD";
/// Environment variable holding a one-time MFA code.
pub const MFA_CODE_ENV: &str = "ROBINHOOD_MFA_CODE";
/// Environment variable holding a pre-issued access token.
pub const ACCESS_TOKEN_ENV: &str = "ROBINHOOD_ACCESS_TOKEN";

/// What the caller supplies when creating a client.
///
/// Any subset may be given. An access token skips login entirely; otherwise
/// a username and password are needed, plus an MFA code for accounts with
/// multi-factor authentication enabled.
///
/// # Example
///
/// ```
/// use robinhood_crypto_rs::ClientOptions;
///
/// let options = ClientOptions::new()
///     .username("me@example.com")
///     .password("hunter2")
///     .mfa_code("123456");
/// assert!(options.has_credentials());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    pub(crate) access_token: Option<SecretString>,
    pub(crate) mfa_code: Option<SecretString>,
    pub(crate) username: Option<String>,
    pub(crate) password: Option<SecretString>,
}

impl ClientOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read options from `ROBINHOOD_*` environment variables.
    ///
    /// Unset or empty variables are treated as not supplied.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        Self {
            access_token: var(ACCESS_TOKEN_ENV).map(SecretString::from),
            mfa_code: var(MFA_CODE_ENV).map(SecretString::from),
            username: var(USERNAME_ENV),
            password: var(PASSWORD_ENV).map(SecretString::from),
        }
    }

    /// Use an already issued access token.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(SecretString::from(token.into()));
        self
    }

    /// Set the MFA code.
    pub fn mfa_code(mut self, code: impl Into<String>) -> Self {
        self.mfa_code = Some(SecretString::from(code.into()));
        self
    }

    /// Set the username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(SecretString::from(password.into()));
        self
    }

    /// Returns `true` if a username or password was supplied.
    pub fn has_credentials(&self) -> bool {
        self.username.is_some() || self.password.is_some()
    }
}

/// Identity used for password-grant logins.
///
/// The device token is generated once per client instance and stays
/// stable for its lifetime.
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    device_token: Uuid,
    username: Option<String>,
    password: Option<SecretString>,
}

impl Credentials {
    /// Create credentials with a fresh device token.
    pub fn new(
        client_id: impl Into<String>,
        username: Option<String>,
        password: Option<SecretString>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            device_token: Uuid::new_v4(),
            username,
            password,
        }
    }

    /// OAuth client id.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Per-instance device token.
    pub fn device_token(&self) -> Uuid {
        self.device_token
    }

    /// Username, if supplied.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Returns `true` if a username or password was supplied.
    pub fn is_configured(&self) -> bool {
        self.username.is_some() || self.password.is_some()
    }

    /// Username and password, both required for a login request.
    pub(crate) fn user_password(&self) -> Result<(&str, &str)> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Ok((username.as_str(), password.expose_secret())),
            _ => Err(Error::InvalidUserPw),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("device_token", &self.device_token)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_token_is_unique_per_instance() {
        let a = Credentials::new("client", None, None);
        let b = Credentials::new("client", None, None);
        assert_ne!(a.device_token(), b.device_token());
        assert_eq!(a.device_token(), a.clone().device_token());
    }

    #[test]
    fn test_user_password_requires_both() {
        let none = Credentials::new("client", None, None);
        assert!(!none.is_configured());
        assert!(matches!(none.user_password(), Err(Error::InvalidUserPw)));

        let partial = Credentials::new("client", Some("user".into()), None);
        assert!(partial.is_configured());
        assert!(matches!(partial.user_password(), Err(Error::InvalidUserPw)));

        let full = Credentials::new(
            "client",
            Some("user".into()),
            Some(SecretString::from("pw".to_string())),
        );
        assert_eq!(full.user_password().unwrap(), ("user", "pw"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = Credentials::new(
            "client",
            Some("user".into()),
            Some(SecretString::from("super-secret".to_string())),
        );
        let debug_str = format!("{:?}", creds);
        assert!(!debug_str.contains("super-secret"));
        assert!(debug_str.contains("REDACTED"));
    }

    #[test]
    fn test_options_builder() {
        assert!(!ClientOptions::new().has_credentials());
        assert!(ClientOptions::new().password("pw").has_credentials());
        assert!(ClientOptions::new().access_token("t").access_token.is_some());
    }
}
