//! Bearer session held by a client.

use chrono::{DateTime, Duration, Utc};
use secrecy::SecretString;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::login::TokenGrant;
use crate::models::AuthState;

/// Authentication session for the Robinhood API.
///
/// The session owns the access and refresh tokens. It is written only by
/// the login flow and read by every authenticated request.
///
/// # Thread Safety
///
/// `Session` is cheap to clone and can be shared across tasks; clones see
/// the same tokens.
#[derive(Clone)]
pub struct Session {
    inner: Arc<RwLock<SessionInner>>,
}

struct SessionInner {
    state: AuthState,
    access_token: Option<SecretString>,
    refresh_token: Option<SecretString>,
    expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Create an unauthenticated session.
    pub fn new() -> Self {
        Self::with_inner(SessionInner {
            state: AuthState::Unauthenticated,
            access_token: None,
            refresh_token: None,
            expires_at: None,
        })
    }

    /// Create a session around an access token issued elsewhere.
    ///
    /// The session starts out [`AuthState::Authenticated`]; its expiry is
    /// unknown.
    pub fn from_access_token(token: impl Into<String>) -> Self {
        Self::with_inner(SessionInner {
            state: AuthState::Authenticated,
            access_token: Some(SecretString::from(token.into())),
            refresh_token: None,
            expires_at: None,
        })
    }

    fn with_inner(inner: SessionInner) -> Self {
        Self {
            inner: Arc::new(RwLock::new(inner)),
        }
    }

    /// Current position in the login state machine.
    pub async fn state(&self) -> AuthState {
        self.inner.read().await.state
    }

    /// Returns `true` if an access token is held.
    pub async fn is_authenticated(&self) -> bool {
        self.inner.read().await.access_token.is_some()
    }

    /// Check if the token is known to have expired.
    ///
    /// Tokens without a known expiry are never reported as expired.
    pub async fn is_expired(&self) -> bool {
        self.inner
            .read()
            .await
            .expires_at
            .is_some_and(|at| Utc::now() >= at)
    }

    /// Get the token expiration time, if known.
    pub async fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.inner.read().await.expires_at
    }

    /// Returns `true` if the login response carried a refresh token.
    pub async fn has_refresh_token(&self) -> bool {
        self.inner.read().await.refresh_token.is_some()
    }

    /// Get the current access token.
    pub(crate) async fn access_token(&self) -> Option<SecretString> {
        self.inner.read().await.access_token.clone()
    }

    pub(crate) async fn transition(&self, state: AuthState) {
        let mut inner = self.inner.write().await;
        tracing::debug!(from = ?inner.state, to = ?state, "session state change");
        inner.state = state;
    }

    /// Store a successful grant and mark the session authenticated.
    pub(crate) async fn store_grant(&self, grant: TokenGrant) {
        let mut inner = self.inner.write().await;
        inner.access_token = Some(SecretString::from(grant.access_token));
        inner.refresh_token = grant.refresh_token.map(SecretString::from);
        inner.expires_at = grant
            .expires_in
            .map(|secs| Utc::now() + Duration::seconds(secs));
        inner.state = AuthState::Authenticated;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("Session");
        match self.inner.try_read() {
            Ok(inner) => debug
                .field("state", &inner.state)
                .field("access_token", &"[REDACTED]")
                .field("expires_at", &inner.expires_at),
            Err(_) => debug.field("state", &"<locked>"),
        };
        debug.finish()
    }
}
