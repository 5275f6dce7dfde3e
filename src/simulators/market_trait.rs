// src/simulators/market_trait.rs

/// Read-only access to live prices.
///
/// This is the only view of the market a portfolio gets, so trading logic
/// never depends on how prices are stored or moved.
pub trait PriceLookup {
    /// Returns the current price of `symbol`, or `None` if it isn't listed.
    fn price_of(&self, symbol: &str) -> Option<f64>;
}

/// Plain maps work as a price source, which keeps tests and benches light.
impl<S: std::hash::BuildHasher> PriceLookup for std::collections::HashMap<String, f64, S> {
    fn price_of(&self, symbol: &str) -> Option<f64> {
        self.get(symbol).copied()
    }
}
