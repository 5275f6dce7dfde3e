// src/terminal/session.rs

use super::input::TokenReader;
use super::menu::{InvalidChoice, MENU, MenuChoice};
use crate::error::Result;
use crate::market::Market;
use crate::portfolio::Portfolio;
use crate::types::{Fill, Side, TradeError};
use log::{debug, info};
use rand::Rng;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// The text-menu front end. Owns the market and the portfolio and does all
/// of the reading and printing; the trading rules stay in `Portfolio`.
pub struct Session<R, W, G: Rng = StdRng> {
    market: Market<G>,
    portfolio: Portfolio,
    input: TokenReader<R>,
    out: W,
}

impl<R: BufRead, W: Write, G: Rng> Session<R, W, G> {
    pub fn new(market: Market<G>, portfolio: Portfolio, input: R, out: W) -> Self {
        Self {
            market,
            portfolio,
            input: TokenReader::new(input),
            out,
        }
    }

    /// Runs until the user picks Exit or input runs dry.
    pub fn run(&mut self) -> Result<()> {
        info!(
            "Session started: {} stocks listed, balance ${:.2}",
            self.market.len(),
            self.portfolio.balance()
        );
        while self.step()? == Flow::Continue {}
        info!("Session ended, balance ${:.2}", self.portfolio.balance());
        Ok(())
    }

    fn step(&mut self) -> Result<Flow> {
        writeln!(self.out, "{}", MENU)?;
        self.out.flush()?;

        let Some(token) = self.input.next_token()? else {
            debug!("End of input at menu prompt");
            return Ok(Flow::Exit);
        };

        match token.parse::<MenuChoice>() {
            Ok(MenuChoice::ViewMarket) => self.show_market()?,
            Ok(MenuChoice::Buy) => return self.trade(Side::Buy),
            Ok(MenuChoice::Sell) => return self.trade(Side::Sell),
            Ok(MenuChoice::ViewPortfolio) => self.show_portfolio()?,
            Ok(MenuChoice::UpdateMarket) => {
                self.market.update_prices();
                writeln!(self.out, "Market prices updated.")?;
            }
            Ok(MenuChoice::Exit) => {
                writeln!(self.out, "Exiting...")?;
                return Ok(Flow::Exit);
            }
            Err(InvalidChoice) => {
                debug!("Rejected menu input {:?}", token);
                writeln!(self.out, "Invalid choice.")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn show_market(&mut self) -> Result<()> {
        writeln!(self.out, "Stock Market:")?;
        for stock in self.market.list() {
            writeln!(self.out, "{} - {} : ${:.2}", stock.symbol, stock.name, stock.price)?;
        }
        Ok(())
    }

    fn show_portfolio(&mut self) -> Result<()> {
        writeln!(self.out, "Portfolio:")?;
        for (symbol, shares) in self.portfolio.holdings() {
            writeln!(self.out, "{} - Shares: {}", symbol, shares)?;
        }
        writeln!(self.out, "Balance: ${:.2}", self.portfolio.balance())?;
        writeln!(
            self.out,
            "Total value: ${:.2}",
            self.portfolio.total_value(&self.market)
        )?;
        Ok(())
    }

    /// Prompts for a symbol and quantity, then buys or sells.
    fn trade(&mut self, side: Side) -> Result<Flow> {
        let Some(symbol) = self.prompt("Enter stock symbol: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(raw_qty) = self.prompt("Enter quantity: ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(quantity) = raw_qty.parse::<u64>() else {
            writeln!(self.out, "Invalid quantity.")?;
            return Ok(Flow::Continue);
        };

        let outcome: std::result::Result<Fill, TradeError> = match side {
            Side::Buy => self.portfolio.buy(&self.market, &symbol, quantity),
            Side::Sell => self.portfolio.sell(&self.market, &symbol, quantity),
        };
        match outcome {
            Ok(fill) => writeln!(self.out, "{}", fill)?,
            Err(err) => writeln!(self.out, "{}", err)?,
        }
        Ok(Flow::Continue)
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;
        Ok(self.input.next_token()?)
    }
}
