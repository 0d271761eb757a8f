//! API service modules for Robinhood endpoints.
//!
//! Each service provides methods for interacting with a specific
//! subset of the API.

mod accounts;
mod currencies;
mod orders;
mod quotes;

pub use accounts::AccountsService;
pub use currencies::CurrenciesService;
pub use orders::OrdersService;
pub use quotes::QuotesService;
