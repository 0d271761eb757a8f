//! Password-grant login and the multi-factor state machine.

use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::ClientInner;
use crate::models::{AuthState, Host};
use crate::{Endpoint, Error, Result};

pub(crate) const LOGIN_PATH: &str = "/oauth2/token/";

/// Requested token lifetime in seconds.
const TOKEN_LIFETIME_SECS: i64 = 86400;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    grant_type: &'static str,
    scope: &'static str,
    expires_in: i64,
    client_id: &'a str,
    device_token: Uuid,
    username: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    mfa_code: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    mfa_required: Option<serde_json::Value>,
}

impl LoginResponse {
    fn mfa_required(&self) -> bool {
        match &self.mfa_required {
            Some(serde_json::Value::Bool(flag)) => *flag,
            Some(serde_json::Value::String(flag)) => flag.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }

    fn into_outcome(self) -> Result<LoginOutcome> {
        if self.mfa_required() {
            return Ok(LoginOutcome::MfaRequired);
        }
        match self.access_token {
            Some(access_token) if !access_token.is_empty() => {
                Ok(LoginOutcome::Granted(TokenGrant {
                    access_token,
                    refresh_token: self.refresh_token,
                    expires_in: self.expires_in,
                }))
            }
            _ => Err(Error::malformed(Endpoint::Login)),
        }
    }
}

/// Tokens issued by a successful login.
pub(crate) struct TokenGrant {
    pub(crate) access_token: String,
    pub(crate) refresh_token: Option<String>,
    pub(crate) expires_in: Option<i64>,
}

impl std::fmt::Debug for TokenGrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenGrant")
            .field("access_token", &"[REDACTED]")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

#[derive(Debug)]
pub(crate) enum LoginOutcome {
    Granted(TokenGrant),
    MfaRequired,
}

/// Issue one password-grant request.
///
/// The session is not touched; the caller decides what to do with the
/// outcome.
pub(crate) async fn log_in(inner: &ClientInner, mfa_code: Option<&str>) -> Result<LoginOutcome> {
    let (username, password) = inner.credentials.user_password()?;

    let body = LoginRequest {
        grant_type: "password",
        scope: "internal",
        expires_in: TOKEN_LIFETIME_SECS,
        client_id: inner.credentials.client_id(),
        device_token: inner.credentials.device_token(),
        username,
        password,
        mfa_code,
    };

    tracing::debug!(with_mfa = mfa_code.is_some(), "issuing login request");
    let response: LoginResponse = inner
        .post_unauthenticated(Host::Api, LOGIN_PATH, &body, Endpoint::Login)
        .await?;
    response.into_outcome()
}

/// Bring the session to [`AuthState::Authenticated`].
///
/// A pre-supplied token short-circuits without any request. Otherwise a
/// login without the MFA code is issued first; when the caller supplied a
/// code it is always followed by a second login that includes it. A token
/// granted by the first login is kept if the second one fails, so the
/// session ends unauthenticated only when no login ever granted a token.
pub(crate) async fn authenticate(inner: &ClientInner) -> Result<()> {
    let session = &inner.session;

    if session.is_authenticated().await {
        tracing::debug!("access token supplied, skipping login");
        return Ok(());
    }

    if !inner.credentials.is_configured() {
        tracing::warn!("{}", Error::InvalidCredentials);
        return Err(Error::InvalidCredentials);
    }

    match run_login(inner).await {
        Ok(()) => {
            tracing::info!("logged in");
            Ok(())
        }
        Err(err) => {
            let fallback = if session.is_authenticated().await {
                AuthState::Authenticated
            } else {
                AuthState::Unauthenticated
            };
            session.transition(fallback).await;
            tracing::warn!(error = %err, "login failed");
            Err(err)
        }
    }
}

async fn run_login(inner: &ClientInner) -> Result<()> {
    let session = &inner.session;
    let mfa_code = inner.mfa_code.as_ref().map(|code| code.expose_secret());

    session.transition(AuthState::LoggingIn).await;
    let first = log_in(inner, None).await?;

    let code = match (first, mfa_code) {
        (LoginOutcome::Granted(grant), None) => {
            session.store_grant(grant).await;
            return Ok(());
        }
        (LoginOutcome::MfaRequired, None) => {
            session.transition(AuthState::AwaitingMfa).await;
            return Err(Error::MfaRequired);
        }
        (LoginOutcome::MfaRequired, Some(code)) => {
            session.transition(AuthState::AwaitingMfa).await;
            code
        }
        (LoginOutcome::Granted(grant), Some(code)) => {
            session.store_grant(grant).await;
            code
        }
    };

    session.transition(AuthState::LoggingInWithMfa).await;
    match log_in(inner, Some(code)).await? {
        LoginOutcome::Granted(grant) => {
            session.store_grant(grant).await;
            Ok(())
        }
        LoginOutcome::MfaRequired => Err(Error::MfaRequired),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<LoginOutcome> {
        serde_json::from_str::<LoginResponse>(json)
            .expect("valid json")
            .into_outcome()
    }

    #[test]
    fn test_mfa_flag_takes_precedence() {
        assert!(matches!(
            parse(r#"{"mfa_required": true, "access_token": "t"}"#),
            Ok(LoginOutcome::MfaRequired)
        ));
        assert!(matches!(
            parse(r#"{"mfa_required": "true"}"#),
            Ok(LoginOutcome::MfaRequired)
        ));
    }

    #[test]
    fn test_access_token_is_granted() {
        match parse(r#"{"access_token": "someToken", "refresh_token": "r", "expires_in": 86400}"#) {
            Ok(LoginOutcome::Granted(grant)) => {
                assert_eq!(grant.access_token, "someToken");
                assert_eq!(grant.refresh_token.as_deref(), Some("r"));
                assert_eq!(grant.expires_in, Some(86400));
            }
            other => panic!("Expected grant, got {:?}", other),
        }
    }

    #[test]
    fn test_body_without_token_or_flag_is_malformed() {
        for body in [r#"{}"#, r#"{"mfa_required": false}"#, r#"{"access_token": ""}"#] {
            let err = parse(body).unwrap_err();
            assert!(matches!(
                err,
                Error::MalformedResponse {
                    endpoint: Endpoint::Login
                }
            ));
        }
    }

    #[test]
    fn test_login_request_omits_absent_mfa_code() {
        let device_token = Uuid::new_v4();
        let mut body = LoginRequest {
            grant_type: "password",
            scope: "internal",
            expires_in: TOKEN_LIFETIME_SECS,
            client_id: "client",
            device_token,
            username: "user",
            password: "pw",
            mfa_code: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("mfa_code").is_none());
        assert_eq!(json["grant_type"], "password");
        assert_eq!(json["scope"], "internal");
        assert_eq!(json["expires_in"], 86400);
        assert_eq!(json["device_token"], device_token.to_string());

        body.mfa_code = Some("123456");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["mfa_code"], "123456");
    }
}
