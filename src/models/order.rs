//! Crypto order models and quantity derivation.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{OrderSide, OrderType, TimeInForce};
use super::primitives::{CryptoAccountId, CurrencyPairId};
use crate::{Error, Result};

/// Decimal places of the smallest crypto quantity the exchange accepts.
pub const QUANTITY_SCALE: u32 = 8;

/// Truncate a quantity toward zero at [`QUANTITY_SCALE`] decimal places.
///
/// The result always carries exactly eight decimal places, so
/// `0.1` becomes `0.10000000` and `1/3` becomes `0.33333333`.
///
/// ```
/// use robinhood_crypto_rs::models::truncate_quantity;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(truncate_quantity(dec!(0.999999999)).to_string(), "0.99999999");
/// ```
pub fn truncate_quantity(quantity: Decimal) -> Decimal {
    let mut truncated = quantity.round_dp_with_strategy(QUANTITY_SCALE, RoundingStrategy::ToZero);
    truncated.rescale(QUANTITY_SCALE);
    truncated
}

/// Derive the quantity bought or sold for `order_value` at `price`.
///
/// # Errors
///
/// Returns [`Error::InvalidOptions`] if the price is not positive, the
/// value is negative or the division overflows.
pub fn quantity_for_value(order_value: Decimal, price: Decimal) -> Result<Decimal> {
    if price <= Decimal::ZERO {
        return Err(Error::InvalidOptions(format!(
            "cannot derive a quantity from price {}",
            price
        )));
    }
    if order_value.is_sign_negative() {
        return Err(Error::InvalidOptions(format!(
            "order value must not be negative: {}",
            order_value
        )));
    }
    let ratio = order_value.checked_div(price).ok_or_else(|| {
        Error::InvalidOptions(format!("{} / {} overflows", order_value, price))
    })?;
    Ok(truncate_quantity(ratio))
}

/// Caller-facing options for a crypto order.
///
/// A valid order needs a symbol or a trading-pair id, an order value or a
/// quantity, and a side, time in force and order type. Validation happens
/// when the order is submitted.
///
/// # Example
///
/// ```
/// use robinhood_crypto_rs::models::{CryptoOrderOptions, OrderSide, OrderType, TimeInForce};
/// use rust_decimal_macros::dec;
///
/// let options = CryptoOrderOptions::new()
///     .symbol("BTC")
///     .order_value(dec!(25))
///     .side(OrderSide::Buy)
///     .time_in_force(TimeInForce::Gtc)
///     .order_type(OrderType::Market);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CryptoOrderOptions {
    /// Ticker to resolve into a trading pair
    pub symbol: Option<String>,
    /// Pre-resolved trading-pair id
    pub currency_id: Option<CurrencyPairId>,
    /// Notional value; the quantity is derived from it
    pub order_value: Option<Decimal>,
    /// Explicit quantity, already at eight decimal places
    pub quantity: Option<Decimal>,
    /// Price to submit; fetched from the ask price when absent
    pub currency_price: Option<Decimal>,
    /// Buy or sell
    pub side: Option<OrderSide>,
    /// Time in force
    pub time_in_force: Option<TimeInForce>,
    /// Market or limit
    pub order_type: Option<OrderType>,
}

impl CryptoOrderOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ticker.
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Set the trading-pair id.
    pub fn currency_id(mut self, id: impl Into<CurrencyPairId>) -> Self {
        self.currency_id = Some(id.into());
        self
    }

    /// Set the notional order value.
    pub fn order_value(mut self, value: Decimal) -> Self {
        self.order_value = Some(value);
        self
    }

    /// Set the quantity.
    pub fn quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Set the price.
    pub fn currency_price(mut self, price: Decimal) -> Self {
        self.currency_price = Some(price);
        self
    }

    /// Set the side.
    pub fn side(mut self, side: OrderSide) -> Self {
        self.side = Some(side);
        self
    }

    /// Set the time in force.
    pub fn time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = Some(tif);
        self
    }

    /// Set the order type.
    pub fn order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = Some(order_type);
        self
    }

    /// Check that every required option is present.
    pub fn validate(&self) -> Result<()> {
        self.clone().into_validated().map(|_| ())
    }

    /// Consume the options, keeping only what the order needs.
    ///
    /// A trading-pair id wins over a symbol and an explicit quantity wins
    /// over an order value.
    pub(crate) fn into_validated(self) -> Result<ValidatedOrder> {
        let missing = |what: &str| Error::InvalidOptions(format!("{} is required", what));

        let target = match (self.currency_id, self.symbol) {
            (Some(id), _) => OrderTarget::Id(id),
            (None, Some(symbol)) => OrderTarget::Symbol(symbol),
            (None, None) => return Err(missing("symbol or currency_id")),
        };
        let size = match (self.quantity, self.order_value) {
            (Some(quantity), _) => OrderSize::Quantity(quantity),
            (None, Some(value)) => OrderSize::Value(value),
            (None, None) => return Err(missing("order_value or quantity")),
        };

        Ok(ValidatedOrder {
            target,
            size,
            currency_price: self.currency_price,
            side: self.side.ok_or_else(|| missing("side"))?,
            time_in_force: self.time_in_force.ok_or_else(|| missing("time_in_force"))?,
            order_type: self.order_type.ok_or_else(|| missing("order_type"))?,
        })
    }
}

/// How the trading pair of an order is identified.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum OrderTarget {
    Id(CurrencyPairId),
    Symbol(String),
}

/// How the size of an order is given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum OrderSize {
    Quantity(Decimal),
    Value(Decimal),
}

impl OrderSize {
    /// Quantity to submit at `price`.
    pub(crate) fn quantity_at(self, price: Decimal) -> Result<Decimal> {
        match self {
            OrderSize::Quantity(quantity) => Ok(quantity),
            OrderSize::Value(value) => quantity_for_value(value, price),
        }
    }
}

/// Options that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ValidatedOrder {
    pub(crate) target: OrderTarget,
    pub(crate) size: OrderSize,
    pub(crate) currency_price: Option<Decimal>,
    pub(crate) side: OrderSide,
    pub(crate) time_in_force: TimeInForce,
    pub(crate) order_type: OrderType,
}

/// The body posted to the crypto order endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryptoOrderRequest {
    /// Crypto account the order is placed against
    pub account: CryptoAccountId,
    /// Trading pair
    pub currency_pair_id: CurrencyPairId,
    /// Reference price
    pub price: Decimal,
    /// Quantity at eight decimal places
    pub quantity: Decimal,
    /// Idempotency key, fresh per submission
    pub ref_id: Uuid,
    /// Buy or sell
    pub side: OrderSide,
    /// Time in force
    pub time_in_force: TimeInForce,
    /// Market or limit
    #[serde(rename = "type")]
    pub order_type: OrderType,
}

/// Order acknowledgement returned by the crypto order endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryptoOrder {
    /// Server-assigned order id
    #[serde(default)]
    pub id: Option<String>,
    /// Echo of the idempotency key
    #[serde(default)]
    pub ref_id: Option<Uuid>,
    /// Order state, e.g. "unconfirmed"
    #[serde(default)]
    pub state: Option<String>,
    /// Side
    #[serde(default)]
    pub side: Option<OrderSide>,
    /// Order type
    #[serde(default, rename = "type")]
    pub order_type: Option<OrderType>,
    /// Price
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Quantity
    #[serde(default)]
    pub quantity: Option<Decimal>,
    /// Quantity filled so far
    #[serde(default)]
    pub cumulative_quantity: Option<Decimal>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
