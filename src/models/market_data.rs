//! Trading-pair and quote models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::primitives::CurrencyPairId;

/// The asset side of a trading pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetCurrency {
    /// Ticker, e.g. "BTC"
    pub code: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Server-side currency id
    #[serde(default)]
    pub id: Option<String>,
}

/// A tradable crypto currency pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyPair {
    /// Opaque trading-pair identifier
    pub id: CurrencyPairId,
    /// The crypto asset being traded
    pub asset_currency: AssetCurrency,
    /// Pair symbol, e.g. "BTC-USD"
    #[serde(default)]
    pub symbol: Option<String>,
    /// Whether the pair is currently tradable
    #[serde(default)]
    pub tradability: Option<String>,
}

impl CurrencyPair {
    /// The human-readable ticker of the asset.
    pub fn symbol_code(&self) -> &str {
        &self.asset_currency.code
    }

    /// Case-insensitive exact match against the asset ticker.
    pub fn matches_symbol(&self, symbol: &str) -> bool {
        self.asset_currency.code.eq_ignore_ascii_case(symbol)
    }
}

/// A crypto quote snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Best ask price; used as the reference price for orders
    pub ask_price: Decimal,
    /// Best bid price
    #[serde(default)]
    pub bid_price: Option<Decimal>,
    /// Mark price
    #[serde(default)]
    pub mark_price: Option<Decimal>,
    /// Session high
    #[serde(default)]
    pub high_price: Option<Decimal>,
    /// Session low
    #[serde(default)]
    pub low_price: Option<Decimal>,
    /// Session open
    #[serde(default)]
    pub open_price: Option<Decimal>,
    /// Quote symbol, e.g. "BTCUSD"
    #[serde(default)]
    pub symbol: Option<String>,
    /// Trading-pair id the quote belongs to
    #[serde(default)]
    pub id: Option<CurrencyPairId>,
}

/// Selects the trading pair for a quote.
///
/// At least one of `symbol` or `currency_id` must be set; a pre-resolved id
/// takes precedence over the symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteOptions {
    /// Ticker to resolve
    pub symbol: Option<String>,
    /// Pre-resolved trading-pair id
    pub currency_id: Option<CurrencyPairId>,
}

impl QuoteOptions {
    /// Quote by ticker.
    pub fn symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: Some(symbol.into()),
            currency_id: None,
        }
    }

    /// Quote by pre-resolved trading-pair id.
    pub fn currency_id(id: impl Into<CurrencyPairId>) -> Self {
        Self {
            symbol: None,
            currency_id: Some(id.into()),
        }
    }

    /// Returns `true` if neither a symbol nor an id was given.
    pub fn is_empty(&self) -> bool {
        self.symbol.is_none() && self.currency_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_currency_pair_matches_case_insensitively() {
        let pair: CurrencyPair = serde_json::from_value(serde_json::json!({
            "id": "3d961844-d360-45fc-989b-f6fca761d511",
            "asset_currency": { "code": "BTC" }
        }))
        .unwrap();
        assert!(pair.matches_symbol("btc"));
        assert!(pair.matches_symbol("BTC"));
        assert!(!pair.matches_symbol("BT"));
        assert_eq!(pair.symbol_code(), "BTC");
    }

    #[test]
    fn test_quote_keeps_price_scale() {
        let quote: Quote = serde_json::from_str(r#"{"ask_price": "1.00"}"#).unwrap();
        assert_eq!(quote.ask_price, dec!(1.00));
        assert_eq!(quote.ask_price.to_string(), "1.00");
        assert!(quote.bid_price.is_none());
    }

    #[test]
    fn test_quote_options() {
        assert!(QuoteOptions::default().is_empty());
        assert!(!QuoteOptions::symbol("BTC").is_empty());
        assert!(!QuoteOptions::currency_id("someId").is_empty());
    }
}
