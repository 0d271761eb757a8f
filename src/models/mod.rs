//! Data models for the Robinhood crypto API.
//!
//! Models are organized by domain:
//!
//! - [`primitives`] - Identifier newtypes and the [`Host`] enum
//! - [`enums`] - Order sides, types, time in force and the login state
//! - [`account`] - Account identifiers and the unified account view
//! - [`market_data`] - Trading pairs and quotes
//! - [`order`] - Order options, the submitted body and its acknowledgement

pub mod primitives;
pub mod enums;
pub mod account;
pub mod market_data;
pub mod order;

// Re-export commonly used types
pub use primitives::*;
pub use enums::*;
pub use account::*;
pub use market_data::*;
pub use order::*;
