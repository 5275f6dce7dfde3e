// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Failures outside the trading rules: bad config files and broken I/O.
#[derive(Error, Debug)]
pub enum SimError {
    /// Underlying IO failure on the terminal streams or a config file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file could not be read.
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The config file is not valid JSON for `SimConfig`.
    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The config parsed but describes an unusable simulation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SimError>;
