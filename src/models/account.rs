//! Account models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::primitives::{AccountUrl, CryptoAccountId};

/// Identifiers resolved from each API surface after authentication.
///
/// Both are required before any authenticated crypto action. A field is
/// `None` until its listing has been fetched successfully.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountRefs {
    /// URL of the first primary-surface account
    pub primary_account_url: Option<AccountUrl>,
    /// Id of the first crypto-surface account
    pub crypto_account_id: Option<CryptoAccountId>,
}

impl AccountRefs {
    /// Returns `true` once both identifiers have been resolved.
    pub fn is_complete(&self) -> bool {
        self.primary_account_url.is_some() && self.crypto_account_id.is_some()
    }
}

/// A monetary amount as reported by the account-detail surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    /// Amount
    pub amount: Decimal,
    /// ISO currency code, when reported
    #[serde(default)]
    pub currency_code: Option<String>,
}

/// Crypto holdings section of the unified account view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryptoHoldings {
    /// Total crypto equity
    #[serde(default)]
    pub equity: Option<Money>,
    /// Market value of crypto positions
    #[serde(default)]
    pub market_value: Option<Money>,
}

/// The unified account view.
///
/// Only the crypto-related fields are typed; everything else the server
/// returns is kept in [`AccountDetails::extra`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountDetails {
    /// Crypto holdings
    #[serde(default)]
    pub crypto: Option<CryptoHoldings>,
    /// Buying power available for crypto orders
    #[serde(default)]
    pub crypto_buying_power: Option<Money>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl AccountDetails {
    /// Total crypto equity, if reported.
    pub fn crypto_equity(&self) -> Option<Decimal> {
        self.crypto
            .as_ref()
            .and_then(|c| c.equity.as_ref())
            .map(|m| m.amount)
    }
}
