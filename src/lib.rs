//! # robinhood-crypto-rs
//!
//! An async Rust client for Robinhood's private crypto trading REST API.
//!
//! The client logs in (including the two-step multi-factor flow), resolves
//! the account identifiers of each API surface, resolves tickers to
//! trading-pair ids, fetches quotes and submits crypto orders.
//!
//! ## Features
//!
//! - **Authentication**: password grant with MFA, or a pre-issued access token
//! - **Session bootstrap**: primary account URL and crypto account id
//! - **Market data**: trading-pair lookup and ask-price quotes
//! - **Orders**: market and limit orders sized by quantity or notional value,
//!   with exact decimal truncation to the exchange's eight-place precision
//! - **Type Safety**: newtype ids and `rust_decimal` prices throughout
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use robinhood_crypto_rs::RobinhoodClient;
//! use robinhood_crypto_rs::models::{CryptoOrderOptions, QuoteOptions};
//! use rust_decimal_macros::dec;
//!
//! #[tokio::main]
//! async fn main() -> robinhood_crypto_rs::Result<()> {
//!     // Log in; the MFA code is only needed for accounts that use it
//!     let client = RobinhoodClient::login("username", "password", Some("123456")).await?;
//!
//!     // Current BTC ask price
//!     let quote = client.quotes().get(QuoteOptions::symbol("BTC")).await?;
//!     println!("BTC ask: {}", quote.ask_price);
//!
//!     // Limit buy $10 of BTC one dollar under the ask
//!     let order = client
//!         .orders()
//!         .limit_buy(
//!             CryptoOrderOptions::new()
//!                 .symbol("BTC")
//!                 .order_value(dec!(10))
//!                 .currency_price(quote.ask_price - dec!(1)),
//!         )
//!         .await?;
//!     println!("Order placed: {:?}", order.id);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error handling
//!
//! Every operation returns [`Result`]. Failures are logged through
//! `tracing` and leave the client usable; "request failed" and
//! "malformed response" are reported as distinct [`Error`] variants
//! tagged with the [`Endpoint`] they came from.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use error::{Endpoint, Error, Result};
pub use models::{AccountUrl, CryptoAccountId, CurrencyPairId, Host};
pub use client::{ClientConfig, Endpoints, RobinhoodClient};
pub use auth::{ClientOptions, Credentials, Session};

/// Prelude module for convenient imports.
///
/// ```rust
/// use robinhood_crypto_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Endpoint, Error, Result};
    pub use crate::models::{
        // Primitives
        AccountUrl, CryptoAccountId, CurrencyPairId, Host,
        // Enums
        AuthState, OrderSide, OrderType, TimeInForce,
        // Account models
        AccountDetails, AccountRefs, Money,
        // Market data
        CurrencyPair, Quote, QuoteOptions,
        // Orders
        CryptoOrder, CryptoOrderOptions, CryptoOrderRequest,
    };
    pub use crate::client::{ClientConfig, Endpoints, RobinhoodClient};
    pub use crate::auth::{ClientOptions, Session};
}
