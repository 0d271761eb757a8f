//! Orders service for crypto order submission.

use std::sync::Arc;

use uuid::Uuid;

use crate::client::ClientInner;
use crate::models::order::{OrderTarget, ValidatedOrder};
use crate::models::{
    CryptoOrder, CryptoOrderOptions, CryptoOrderRequest, CurrencyPairId, Host, OrderSide,
    OrderType, TimeInForce,
};
use crate::{Endpoint, Error, Result};

use super::{CurrenciesService, QuotesService};

const ORDERS_PATH: &str = "/orders/";

/// Service for crypto order operations.
///
/// Every submission carries a fresh `ref_id`, so submitting the same
/// options twice places two orders.
///
/// # Example
///
/// ```no_run
/// use robinhood_crypto_rs::models::CryptoOrderOptions;
/// use rust_decimal_macros::dec;
///
/// # async fn example(client: robinhood_crypto_rs::RobinhoodClient) -> robinhood_crypto_rs::Result<()> {
/// // Spend $25 on BTC at the current ask price
/// let order = client
///     .orders()
///     .market_buy(CryptoOrderOptions::new().symbol("BTC").order_value(dec!(25)))
///     .await?;
/// println!("Order {:?} is {:?}", order.id, order.state);
///
/// // Offer 0.001 ETH at $4000
/// client
///     .orders()
///     .limit_sell(
///         CryptoOrderOptions::new()
///             .symbol("ETH")
///             .quantity(dec!(0.00100000))
///             .currency_price(dec!(4000.00)),
///     )
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct OrdersService {
    inner: Arc<ClientInner>,
}

impl OrdersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Build and submit a crypto order.
    ///
    /// The trading pair is resolved from the symbol when no id is given.
    /// The price is the supplied `currency_price`, or the current ask
    /// price. A quantity derived from `order_value` is truncated to eight
    /// decimal places.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidToken`] without an access token
    /// - [`Error::InvalidOptions`] if a required option is missing
    /// - [`Error::AccountIdDoesNotExist`] if the crypto account was not resolved
    /// - [`Error::InvalidId`] if the symbol matches no trading pair
    /// - [`Error::RequestFailed`] / [`Error::MalformedResponse`] from the order endpoint
    pub async fn submit(&self, options: CryptoOrderOptions) -> Result<CryptoOrder> {
        self.inner.ensure_authenticated().await?;
        let order = options.into_validated().inspect_err(|err| {
            tracing::warn!(error = %err, "order crypto did not receive valid options");
        })?;

        let request = self.build_request(order).await?;
        tracing::info!(
            ref_id = %request.ref_id,
            side = %request.side,
            pair = %request.currency_pair_id,
            quantity = %request.quantity,
            price = %request.price,
            "submitting crypto order"
        );

        self.inner
            .post(Host::Nummus, ORDERS_PATH, &request, Endpoint::Order)
            .await
    }

    async fn build_request(&self, order: ValidatedOrder) -> Result<CryptoOrderRequest> {
        let account = self
            .inner
            .accounts
            .read()
            .await
            .crypto_account_id
            .clone()
            .ok_or_else(|| {
                tracing::warn!("{}", Error::AccountIdDoesNotExist);
                Error::AccountIdDoesNotExist
            })?;

        let currency_pair_id = self.resolve_target(order.target).await?;

        let price = match order.currency_price {
            Some(price) => price,
            None => {
                QuotesService::new(self.inner.clone())
                    .by_id(&currency_pair_id)
                    .await?
                    .ask_price
            }
        };
        let quantity = order.size.quantity_at(price)?;

        Ok(CryptoOrderRequest {
            account,
            currency_pair_id,
            price,
            quantity,
            ref_id: Uuid::new_v4(),
            side: order.side,
            time_in_force: order.time_in_force,
            order_type: order.order_type,
        })
    }

    async fn resolve_target(&self, target: OrderTarget) -> Result<CurrencyPairId> {
        match target {
            OrderTarget::Id(id) => Ok(id),
            OrderTarget::Symbol(symbol) => {
                match CurrenciesService::new(self.inner.clone()).resolve(&symbol).await? {
                    Some(id) => Ok(id),
                    None => {
                        tracing::warn!(%symbol, "order crypto did not receive a valid currency id");
                        Err(Error::InvalidId(symbol))
                    }
                }
            }
        }
    }

    /// Market buy, good till cancelled.
    pub async fn market_buy(&self, options: CryptoOrderOptions) -> Result<CryptoOrder> {
        self.submit(shape(options, OrderSide::Buy, OrderType::Market))
            .await
    }

    /// Market sell, good till cancelled.
    pub async fn market_sell(&self, options: CryptoOrderOptions) -> Result<CryptoOrder> {
        self.submit(shape(options, OrderSide::Sell, OrderType::Market))
            .await
    }

    /// Limit buy at `currency_price`, good till cancelled.
    ///
    /// Fails with [`Error::InvalidOptions`] before any request if no
    /// price was supplied.
    pub async fn limit_buy(&self, options: CryptoOrderOptions) -> Result<CryptoOrder> {
        require_price(&options)?;
        self.submit(shape(options, OrderSide::Buy, OrderType::Limit))
            .await
    }

    /// Limit sell at `currency_price`, good till cancelled.
    ///
    /// Fails with [`Error::InvalidOptions`] before any request if no
    /// price was supplied.
    pub async fn limit_sell(&self, options: CryptoOrderOptions) -> Result<CryptoOrder> {
        require_price(&options)?;
        self.submit(shape(options, OrderSide::Sell, OrderType::Limit))
            .await
    }
}

fn shape(options: CryptoOrderOptions, side: OrderSide, order_type: OrderType) -> CryptoOrderOptions {
    options
        .side(side)
        .order_type(order_type)
        .time_in_force(TimeInForce::Gtc)
}

fn require_price(options: &CryptoOrderOptions) -> Result<()> {
    if options.currency_price.is_some() {
        return Ok(());
    }
    let err = Error::InvalidOptions("limit orders require currency_price".to_string());
    tracing::warn!(error = %err, "limit order rejected");
    Err(err)
}
