// src/stocks/definitions.rs
//! Core stock metadata used by the simulator.
//
//! The boot universe is hard-coded in `default_stock_universe()`; a JSON
//! config can replace it.

pub type Symbol = String;

use serde::{Deserialize, Serialize};

/// A listed company and its live price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    /// Ticker (e.g. "AAPL"). Unique within a market.
    pub symbol: Symbol,
    /// Human-readable company name.
    pub name: String,
    /// Current price in dollars. Only the market mutates this.
    pub price: f64,
}

/// Convenience factory so call-sites stay concise.
impl Stock {
    #[inline]
    pub fn new<T1: Into<String>, T2: Into<String>>(symbol: T1, name: T2, price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            price,
        }
    }
}

/// The universe of stocks available when the market boots.
#[inline]
pub fn default_stock_universe() -> Vec<Stock> {
    vec![
        Stock::new("AAPL", "Apple Inc.", 150.0),
        Stock::new("GOOGL", "Alphabet Inc.", 2800.0),
        Stock::new("TSLA", "Tesla Inc.", 700.0),
    ]
}

// -----------------------------------------------------------------------------
//  Unit tests
// -----------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_universe_matches_boot_data() {
        let universe = default_stock_universe();
        let tickers: Vec<&str> = universe.iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(tickers, ["AAPL", "GOOGL", "TSLA"]);
        assert_eq!(universe[1].name, "Alphabet Inc.");
        assert_eq!(universe[2].price, 700.0);
    }

    #[test]
    fn stock_deserializes_from_json() {
        let stock: Stock =
            serde_json::from_str(r#"{"symbol":"MSFT","name":"Microsoft","price":420.5}"#).unwrap();
        assert_eq!(stock, Stock::new("MSFT", "Microsoft", 420.5));
    }
}
