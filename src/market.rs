// src/market.rs

use crate::config::SimConfig;
use crate::simulators::market_trait::PriceLookup;
use crate::simulators::random_walk::RandomWalk;
use crate::stocks::{Stock, Symbol};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

/// The catalog of tradable stocks and their live prices.
///
/// Stocks are kept in listing order, with a symbol index for lookups.
/// The random source is injected so that price paths are reproducible.
pub struct Market<R: Rng = StdRng> {
    stocks: Vec<Stock>,
    index: HashMap<Symbol, usize>,
    walk: RandomWalk,
    rng: R,
}

impl Market<StdRng> {
    /// Empty market with the default walk and a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Market::with_rng(
            RandomWalk::new(
                crate::config::DEFAULT_MAX_PRICE_CHANGE,
                crate::config::DEFAULT_PRICE_FLOOR,
            ),
            StdRng::seed_from_u64(seed),
        )
    }

    /// Builds and lists the configured universe. Call `SimConfig::validate` first.
    pub fn from_config(cfg: &SimConfig) -> Self {
        let rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut market = Market::with_rng(RandomWalk::new(cfg.max_price_change, cfg.price_floor), rng);
        for stock in &cfg.stocks {
            market.add(stock.symbol.clone(), stock.name.clone(), stock.price);
        }
        market
    }
}

impl<R: Rng> Market<R> {
    pub fn with_rng(walk: RandomWalk, rng: R) -> Self {
        Self {
            stocks: Vec::new(),
            index: HashMap::new(),
            walk,
            rng,
        }
    }

    /// Lists a stock, or replaces the one already listed under `symbol`.
    /// A replaced stock keeps its place in the listing. Inputs aren't validated.
    pub fn add<T1: Into<String>, T2: Into<String>>(&mut self, symbol: T1, name: T2, price: f64) {
        let stock = Stock::new(symbol, name, price);
        match self.index.get(&stock.symbol) {
            Some(&pos) => self.stocks[pos] = stock,
            None => {
                self.index.insert(stock.symbol.clone(), self.stocks.len());
                self.stocks.push(stock);
            }
        }
    }

    pub fn get(&self, symbol: &str) -> Option<&Stock> {
        self.index.get(symbol).map(|&pos| &self.stocks[pos])
    }

    /// One tick: every price takes a random-walk step.
    pub fn update_prices(&mut self) {
        for stock in self.stocks.iter_mut() {
            let old = stock.price;
            stock.price = self.walk.next_price(old, &mut self.rng);
            debug!("{} moved {:.2} -> {:.2}", stock.symbol, old, stock.price);
        }
        info!("Market prices updated for {} stocks", self.stocks.len());
    }

    /// All listed stocks in listing order.
    pub fn list(&self) -> impl Iterator<Item = &Stock> {
        self.stocks.iter()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.stocks.iter().map(|s| s.symbol.as_str())
    }

    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }

    pub fn walk(&self) -> &RandomWalk {
        &self.walk
    }
}

impl<R: Rng> PriceLookup for Market<R> {
    fn price_of(&self, symbol: &str) -> Option<f64> {
        self.get(symbol).map(|s| s.price)
    }
}
