// src/types/trade.rs

use crate::stocks::Symbol;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Buy,
    Sell,
}

/// Receipt for an accepted buy or sell.
#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    pub side: Side,
    pub symbol: Symbol,
    pub quantity: u64,
    /// Market price per share at the moment of the trade.
    pub price: f64,
}

impl Fill {
    /// Cash that changed hands.
    pub fn notional(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.side {
            Side::Buy => "Bought",
            Side::Sell => "Sold",
        };
        write!(f, "{} {} shares of {}", verb, self.quantity, self.symbol)
    }
}

/// Why a trade was turned down. Rejections never touch portfolio state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TradeError {
    #[error("Stock not found: {0}")]
    StockNotFound(Symbol),

    #[error("Insufficient balance: order costs ${required:.2}, available ${available:.2}")]
    InsufficientBalance { required: f64, available: f64 },

    #[error("Not enough shares to sell: holding {held} {symbol}, requested {requested}")]
    InsufficientShares {
        symbol: Symbol,
        held: u64,
        requested: u64,
    },

    #[error("Quantity must be at least 1")]
    InvalidQuantity,

    #[error("Position in {symbol} would exceed the maximum share count")]
    PositionOverflow { symbol: Symbol },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_reads_like_a_confirmation() {
        let fill = Fill {
            side: Side::Buy,
            symbol: "AAPL".into(),
            quantity: 10,
            price: 150.0,
        };
        assert_eq!(fill.to_string(), "Bought 10 shares of AAPL");
        assert_eq!(fill.notional(), 1500.0);
    }

    #[test]
    fn rejection_messages_carry_amounts() {
        let err = TradeError::InsufficientBalance {
            required: 5600.0,
            available: 3500.0,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient balance: order costs $5600.00, available $3500.00"
        );
    }
}
