// src/types/mod.rs

pub mod trade;

pub use trade::{Fill, Side, TradeError};
