// src/lib.rs

// === 1. Declare all the top-level modules ===
pub mod config;
pub mod error;
pub mod market;
pub mod portfolio;
pub mod simulators;
pub mod stocks;
pub mod terminal;
pub mod types;

// === 2. Re-export the public-facing components to create a clean API ===

// --- Configuration & errors ---
pub use config::SimConfig;
pub use error::SimError;

// --- From our `market` engine ---
pub use market::Market;
pub use portfolio::Portfolio;

// --- From `simulators` ---
pub use simulators::market_trait::PriceLookup;
pub use simulators::random_walk::RandomWalk;

// --- From `stocks` ---
pub use stocks::{Stock, Symbol};

// --- From `terminal` ---
pub use terminal::{MenuChoice, Session};

// --- From `types` ---
pub use types::{Fill, Side, TradeError};
