//! HTTP client for the Robinhood crypto API.
//!
//! This module provides the main [`RobinhoodClient`] type which is the
//! entry point for all API operations.

mod config;
mod http;

pub use config::{ClientConfig, Endpoints, DEFAULT_CLIENT_ID};
pub use http::RobinhoodClient;

pub(crate) use http::ClientInner;
