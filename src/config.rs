// src/config.rs

//! A centralized place for the simulation's tunable parameters.

use crate::error::{Result, SimError};
use crate::stocks::{Stock, default_stock_universe};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

// --- Portfolio ---
pub const DEFAULT_STARTING_BALANCE: f64 = 5_000.0;

// --- Market ---
// Each tick moves a price by a uniform shock in [-MAX, MAX).
pub const DEFAULT_MAX_PRICE_CHANGE: f64 = 5.0;
pub const DEFAULT_PRICE_FLOOR: f64 = 1.0;

/// Everything needed to boot a trading session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Cash the portfolio opens with.
    pub starting_balance: f64,
    /// Half-width of the per-tick price shock.
    pub max_price_change: f64,
    /// Prices never drop below this.
    pub price_floor: f64,
    /// Fixed RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Instruments listed at startup, in display order.
    pub stocks: Vec<Stock>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            starting_balance: DEFAULT_STARTING_BALANCE,
            max_price_change: DEFAULT_MAX_PRICE_CHANGE,
            price_floor: DEFAULT_PRICE_FLOOR,
            seed: None,
            stocks: default_stock_universe(),
        }
    }
}

impl SimConfig {
    /// Loads a JSON config. Missing fields fall back to the defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| SimError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.starting_balance.is_finite() || self.starting_balance < 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "starting_balance must be a non-negative number, got {}",
                self.starting_balance
            )));
        }
        if !self.max_price_change.is_finite() || self.max_price_change <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "max_price_change must be positive, got {}",
                self.max_price_change
            )));
        }
        if !self.price_floor.is_finite() || self.price_floor <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "price_floor must be positive, got {}",
                self.price_floor
            )));
        }
        if self.stocks.is_empty() {
            return Err(SimError::InvalidConfig("no stocks listed".to_string()));
        }
        let mut seen = HashSet::new();
        for stock in &self.stocks {
            if !stock.price.is_finite() || stock.price <= 0.0 {
                return Err(SimError::InvalidConfig(format!(
                    "{} price must be positive, got {}",
                    stock.symbol, stock.price
                )));
            }
            if !seen.insert(stock.symbol.as_str()) {
                return Err(SimError::InvalidConfig(format!(
                    "duplicate symbol {}",
                    stock.symbol
                )));
            }
        }
        Ok(())
    }
}
