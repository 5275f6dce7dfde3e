// src/portfolio.rs

use crate::simulators::market_trait::PriceLookup;
use crate::stocks::Symbol;
use crate::types::{Fill, Side, TradeError};
use log::{info, warn};
use std::collections::BTreeMap;

/// One user's cash and share holdings.
///
/// Prices are never stored here. Every trade asks a [`PriceLookup`] for the
/// live price, so sells are valued at market, not at cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Portfolio {
    balance: f64,
    // Counts are always > 0; a position is dropped when it reaches zero.
    holdings: BTreeMap<Symbol, u64>,
}

impl Portfolio {
    pub fn new(starting_balance: f64) -> Self {
        Self {
            balance: starting_balance,
            holdings: BTreeMap::new(),
        }
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Held positions, ordered by symbol.
    pub fn holdings(&self) -> impl Iterator<Item = (&str, u64)> {
        self.holdings.iter().map(|(sym, &qty)| (sym.as_str(), qty))
    }

    pub fn shares_of(&self, symbol: &str) -> u64 {
        self.holdings.get(symbol).copied().unwrap_or(0)
    }

    pub fn buy<P: PriceLookup + ?Sized>(
        &mut self,
        prices: &P,
        symbol: &str,
        quantity: u64,
    ) -> Result<Fill, TradeError> {
        let result = self.try_buy(prices, symbol, quantity);
        log_outcome(&result);
        result
    }

    pub fn sell<P: PriceLookup + ?Sized>(
        &mut self,
        prices: &P,
        symbol: &str,
        quantity: u64,
    ) -> Result<Fill, TradeError> {
        let result = self.try_sell(prices, symbol, quantity);
        log_outcome(&result);
        result
    }

    fn try_buy<P: PriceLookup + ?Sized>(
        &mut self,
        prices: &P,
        symbol: &str,
        quantity: u64,
    ) -> Result<Fill, TradeError> {
        if quantity == 0 {
            return Err(TradeError::InvalidQuantity);
        }
        let price = prices
            .price_of(symbol)
            .ok_or_else(|| TradeError::StockNotFound(symbol.to_string()))?;

        let cost = price * quantity as f64;
        if cost > self.balance {
            return Err(TradeError::InsufficientBalance {
                required: cost,
                available: self.balance,
            });
        }
        let position = self
            .shares_of(symbol)
            .checked_add(quantity)
            .ok_or_else(|| TradeError::PositionOverflow {
                symbol: symbol.to_string(),
            })?;

        self.balance -= cost;
        self.holdings.insert(symbol.to_string(), position);
        Ok(Fill {
            side: Side::Buy,
            symbol: symbol.to_string(),
            quantity,
            price,
        })
    }

    fn try_sell<P: PriceLookup + ?Sized>(
        &mut self,
        prices: &P,
        symbol: &str,
        quantity: u64,
    ) -> Result<Fill, TradeError> {
        if quantity == 0 {
            return Err(TradeError::InvalidQuantity);
        }
        let held = self.shares_of(symbol);
        if held < quantity {
            return Err(TradeError::InsufficientShares {
                symbol: symbol.to_string(),
                held,
                requested: quantity,
            });
        }
        let price = prices
            .price_of(symbol)
            .ok_or_else(|| TradeError::StockNotFound(symbol.to_string()))?;

        self.balance += price * quantity as f64;
        if held == quantity {
            self.holdings.remove(symbol);
        } else {
            self.holdings.insert(symbol.to_string(), held - quantity);
        }
        Ok(Fill {
            side: Side::Sell,
            symbol: symbol.to_string(),
            quantity,
            price,
        })
    }

    /// Market value of all held shares. Unpriced symbols count as zero.
    pub fn holdings_value<P: PriceLookup + ?Sized>(&self, prices: &P) -> f64 {
        self.holdings
            .iter()
            .map(|(sym, &qty)| prices.price_of(sym).unwrap_or(0.0) * qty as f64)
            .sum()
    }

    /// Cash plus holdings at market.
    pub fn total_value<P: PriceLookup + ?Sized>(&self, prices: &P) -> f64 {
        self.balance + self.holdings_value(prices)
    }
}

fn log_outcome(result: &Result<Fill, TradeError>) {
    match result {
        Ok(fill) => info!("{} at ${:.2} (${:.2})", fill, fill.price, fill.notional()),
        Err(err) => warn!("Trade rejected: {}", err),
    }
}
