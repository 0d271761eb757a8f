//! Accounts service: session bootstrap and the unified account view.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::models::{AccountDetails, AccountRefs, AccountUrl, CryptoAccountId, Host};
use crate::{Endpoint, Error, Result};

const ACCOUNTS_PATH: &str = "/accounts/";
const ACCOUNT_DETAILS_PATH: &str = "/phoenix/accounts/unified/";

/// Service for account-related operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: robinhood_crypto_rs::RobinhoodClient) -> robinhood_crypto_rs::Result<()> {
/// let refs = client.accounts().bootstrap().await?;
/// println!("Crypto account: {:?}", refs.crypto_account_id);
///
/// let details = client.accounts().details().await?;
/// println!("Crypto buying power: {:?}", details.crypto_buying_power);
/// # Ok(())
/// # }
/// ```
pub struct AccountsService {
    inner: Arc<ClientInner>,
}

impl AccountsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Resolve both account identifiers and store them on the client.
    ///
    /// Both listings are always fetched, even if one fails. A failed
    /// listing is logged and leaves its identifier unresolved; only a
    /// missing access token is returned as an error.
    pub async fn bootstrap(&self) -> Result<AccountRefs> {
        self.inner.ensure_authenticated().await?;

        let (primary, crypto) = tokio::join!(self.primary_account_url(), self.crypto_account_id());

        let mut refs = self.inner.accounts.write().await;
        match primary {
            Ok(url) => refs.primary_account_url = Some(url),
            Err(err) => tracing::warn!(error = %err, "primary account not resolved"),
        }
        match crypto {
            Ok(id) => refs.crypto_account_id = Some(id),
            Err(err) => tracing::warn!(error = %err, "crypto account not resolved"),
        }

        if refs.is_complete() {
            tracing::info!("session bootstrap complete");
        }
        Ok(refs.clone())
    }

    /// Fetch the URL of the first primary-surface account.
    pub async fn primary_account_url(&self) -> Result<AccountUrl> {
        let listing: Value = self
            .inner
            .get(Host::Api, ACCOUNTS_PATH, Endpoint::Accounts)
            .await?;

        first_result(&listing)
            .and_then(|account| account.get("url"))
            .and_then(Value::as_str)
            .map(AccountUrl::from)
            .ok_or(Error::AccountsDoesNotExist)
    }

    /// Fetch the id of the first crypto-surface account.
    pub async fn crypto_account_id(&self) -> Result<CryptoAccountId> {
        let listing: Value = self
            .inner
            .get(Host::Nummus, ACCOUNTS_PATH, Endpoint::CryptoAccounts)
            .await?;

        first_result(&listing)
            .and_then(|account| account.get("id"))
            .and_then(Value::as_str)
            .map(CryptoAccountId::from)
            .ok_or(Error::AccountIdDoesNotExist)
    }

    /// Get the unified account view.
    pub async fn details(&self) -> Result<AccountDetails> {
        self.inner.ensure_authenticated().await?;
        self.inner
            .get(Host::Bonfire, ACCOUNT_DETAILS_PATH, Endpoint::AccountDetails)
            .await
    }
}

/// First element of a non-empty `results` array.
fn first_result(listing: &Value) -> Option<&Value> {
    listing.get("results")?.as_array()?.first()
}
