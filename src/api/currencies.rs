//! Trading-pair lookup.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{CurrencyPair, CurrencyPairId, Host};
use crate::{Endpoint, Error, Result};

const CURRENCY_PAIRS_PATH: &str = "/currency_pairs/";

/// Service resolving tickers to trading-pair identifiers.
///
/// The listing is fetched fresh on every call.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: robinhood_crypto_rs::RobinhoodClient) -> robinhood_crypto_rs::Result<()> {
/// match client.currencies().resolve("btc").await? {
///     Some(id) => println!("BTC pair: {}", id),
///     None => println!("BTC is not tradable"),
/// }
/// # Ok(())
/// # }
/// ```
pub struct CurrenciesService {
    inner: Arc<ClientInner>,
}

impl CurrenciesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List every trading pair, in server order.
    pub async fn list(&self) -> Result<Vec<CurrencyPair>> {
        #[derive(serde::Deserialize)]
        struct Response {
            results: Vec<CurrencyPair>,
        }

        self.inner.ensure_authenticated().await?;
        let response: Response = self
            .inner
            .get(Host::Nummus, CURRENCY_PAIRS_PATH, Endpoint::CurrencyPairs)
            .await?;
        Ok(response.results)
    }

    /// Resolve a ticker to its trading-pair id.
    ///
    /// Matching is exact but case-insensitive, and the first match in
    /// server order wins. An unknown ticker yields `Ok(None)`.
    pub async fn resolve(&self, symbol: &str) -> Result<Option<CurrencyPairId>> {
        self.inner.ensure_authenticated().await?;
        if symbol.is_empty() {
            tracing::warn!("{}", Error::InvalidSymbol);
            return Err(Error::InvalidSymbol);
        }

        let pairs = self.list().await?;
        let id = find_pair(&pairs, symbol).map(|pair| pair.id.clone());
        if id.is_none() {
            tracing::debug!(symbol, "no trading pair for symbol");
        }
        Ok(id)
    }
}

fn find_pair<'a>(pairs: &'a [CurrencyPair], symbol: &str) -> Option<&'a CurrencyPair> {
    pairs.iter().find(|pair| pair.matches_symbol(symbol))
}
