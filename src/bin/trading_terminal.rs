// src/bin/trading_terminal.rs

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use stock_trader::{Market, Portfolio, Session, SimConfig};

/// Trade a handful of simulated stocks from a text menu.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON file overriding the default stocks, balance and volatility.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the price generator, for a repeatable session.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Starting cash balance.
    #[arg(short, long)]
    balance: Option<f64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut cfg = match &args.config {
        Some(path) => SimConfig::from_json_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        cfg.seed = Some(seed);
    }
    if let Some(balance) = args.balance {
        cfg.starting_balance = balance;
    }
    cfg.validate().context("refusing to start")?;

    let market = Market::from_config(&cfg);
    let portfolio = Portfolio::new(cfg.starting_balance);

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(market, portfolio, stdin.lock(), stdout.lock())
        .run()
        .context("terminal session failed")?;

    Ok(())
}
