//! Primitive types and newtypes for type-safe API interactions.
//!
//! This module provides strongly-typed wrappers around string identifiers
//! so a trading-pair id can never be passed where an account id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a tradable crypto currency pair.
///
/// # Example
///
/// ```
/// use robinhood_crypto_rs::CurrencyPairId;
///
/// let id = CurrencyPairId::new("3d961844-d360-45fc-989b-f6fca761d511");
/// println!("Pair: {}", id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyPairId(String);

impl CurrencyPairId {
    /// Create a new trading-pair id from a string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyPairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CurrencyPairId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for CurrencyPairId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CurrencyPairId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Identifier of the crypto-surface account that orders are placed against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CryptoAccountId(String);

impl CryptoAccountId {
    /// Create a new crypto account id.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CryptoAccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CryptoAccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CryptoAccountId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// URL of the primary brokerage account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountUrl(String);

impl AccountUrl {
    /// Create a new account URL.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the URL as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AccountUrl {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// The API surface a request is sent to.
///
/// Robinhood splits its private API over several hosts: brokerage and
/// market data live on the primary host, crypto accounts, trading pairs
/// and orders on "nummus", and the unified account view on "bonfire".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Host {
    /// Primary brokerage host
    Api,
    /// Crypto host
    Nummus,
    /// Account-detail host
    Bonfire,
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Host::Api => write!(f, "api"),
            Host::Nummus => write!(f, "nummus"),
            Host::Bonfire => write!(f, "bonfire"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_pair_id() {
        let id: CurrencyPairId = "3d961844-d360-45fc-989b-f6fca761d511".into();
        assert_eq!(id.as_str(), "3d961844-d360-45fc-989b-f6fca761d511");
        assert_eq!(id.to_string(), "3d961844-d360-45fc-989b-f6fca761d511");
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let id = CryptoAccountId::new("someId");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"someId\"");
    }
}
