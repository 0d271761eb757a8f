//! Enumeration types for crypto orders and session state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Side of a crypto order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Buy the asset currency
    Buy,
    /// Sell the asset currency
    Sell,
}

impl OrderSide {
    /// Returns `true` if this is a buy.
    pub fn is_buy(&self) -> bool {
        matches!(self, OrderSide::Buy)
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "buy"),
            OrderSide::Sell => write!(f, "sell"),
        }
    }
}

/// How the order should be executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Execute immediately at the current market price
    Market,
    /// Execute at the given price or better
    Limit,
}

/// Time in force for crypto orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeInForce {
    /// Good till cancelled
    Gtc,
    /// Good for day
    Gfd,
    /// Immediate or cancel
    Ioc,
    /// At the opening
    Opg,
}

/// Position of a session in the login state machine.
///
/// Failures from any intermediate state return the session to
/// [`AuthState::Unauthenticated`], or to [`AuthState::Authenticated`] when an
/// earlier login in the same attempt already granted a token. Nothing is
/// retried automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AuthState {
    /// No usable access token
    #[default]
    Unauthenticated,
    /// Password-grant request in flight
    LoggingIn,
    /// Server asked for a multi-factor code
    AwaitingMfa,
    /// Password-grant request with the MFA code in flight
    LoggingInWithMfa,
    /// An access token is held
    Authenticated,
}

impl AuthState {
    /// Returns `true` while a login request is in flight.
    pub fn is_logging_in(&self) -> bool {
        matches!(self, AuthState::LoggingIn | AuthState::LoggingInWithMfa)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_enums_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&OrderSide::Sell).unwrap(), "\"sell\"");
        assert_eq!(serde_json::to_string(&OrderType::Limit).unwrap(), "\"limit\"");
        assert_eq!(serde_json::to_string(&TimeInForce::Gfd).unwrap(), "\"gfd\"");
    }

    #[test]
    fn test_auth_state_default() {
        assert_eq!(AuthState::default(), AuthState::Unauthenticated);
        assert!(AuthState::LoggingInWithMfa.is_logging_in());
        assert!(!AuthState::AwaitingMfa.is_logging_in());
    }
}
