//! Authentication and session management for the Robinhood API.
//!
//! A client starts from [`ClientOptions`]: either a pre-issued access
//! token, or a username and password with an optional MFA code.
//!
//! # Password login
//!
//! ```no_run
//! use robinhood_crypto_rs::{ClientConfig, ClientOptions, RobinhoodClient};
//!
//! # async fn example() -> robinhood_crypto_rs::Result<()> {
//! let options = ClientOptions::new()
//!     .username("me@example.com")
//!     .password("hunter2")
//!     .mfa_code("123456");
//! let client = RobinhoodClient::new(options, ClientConfig::default())?;
//! client.start_up().await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Access token
//!
//! ```no_run
//! use robinhood_crypto_rs::{ClientConfig, ClientOptions, RobinhoodClient};
//!
//! # async fn example() -> robinhood_crypto_rs::Result<()> {
//! let client = RobinhoodClient::connect(
//!     ClientOptions::new().access_token("eyJ..."),
//!     ClientConfig::default(),
//! ).await?;
//! # Ok(())
//! # }
//! ```

mod credentials;
pub(crate) mod login;
mod session;

pub use credentials::{
    ClientOptions, Credentials, ACCESS_TOKEN_ENV, MFA_CODE_ENV, PASSWORD_ENV, USERNAME_ENV,
};
pub use session::Session;
