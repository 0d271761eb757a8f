//! Crypto quotes.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{CurrencyPairId, Host, Quote, QuoteOptions};
use crate::{Endpoint, Error, Result};

use super::CurrenciesService;

/// Service for crypto quotes.
///
/// # Example
///
/// ```no_run
/// use robinhood_crypto_rs::models::QuoteOptions;
///
/// # async fn example(client: robinhood_crypto_rs::RobinhoodClient) -> robinhood_crypto_rs::Result<()> {
/// let quote = client.quotes().get(QuoteOptions::symbol("ETH")).await?;
/// println!("ETH ask: {}", quote.ask_price);
/// # Ok(())
/// # }
/// ```
pub struct QuotesService {
    inner: Arc<ClientInner>,
}

impl QuotesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get a quote by ticker or trading-pair id.
    ///
    /// A pre-resolved id is used directly; otherwise the ticker is
    /// resolved first and an unknown ticker fails with
    /// [`Error::InvalidId`].
    pub async fn get(&self, options: QuoteOptions) -> Result<Quote> {
        self.inner.ensure_authenticated().await?;

        let id = match (options.currency_id, options.symbol) {
            (Some(id), _) => id,
            (None, Some(symbol)) => {
                match CurrenciesService::new(self.inner.clone()).resolve(&symbol).await? {
                    Some(id) => id,
                    None => {
                        tracing::warn!(%symbol, "get crypto quote did not receive a valid currency id");
                        return Err(Error::InvalidId(symbol));
                    }
                }
            }
            (None, None) => {
                let err = Error::InvalidOptions("symbol or currency_id is required".to_string());
                tracing::warn!(error = %err, "get crypto quote");
                return Err(err);
            }
        };

        self.by_id(&id).await
    }

    /// Get a quote for a trading-pair id.
    pub async fn by_id(&self, id: &CurrencyPairId) -> Result<Quote> {
        self.inner
            .get(
                Host::Api,
                &format!("/marketdata/forex/quotes/{}/", id),
                Endpoint::CryptoQuote,
            )
            .await
    }
}
