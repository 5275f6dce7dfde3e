// src/terminal/menu.rs

use std::str::FromStr;

pub const MENU: &str = "\n1. View Market\n2. Buy Stock\n3. Sell Stock\n4. View Portfolio\n5. Update Market\n6. Exit";

/// One numbered entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewMarket,
    Buy,
    Sell,
    ViewPortfolio,
    UpdateMarket,
    Exit,
}

/// Anything that isn't one of the six numbers, including non-numeric text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidChoice;

impl FromStr for MenuChoice {
    type Err = InvalidChoice;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim().parse::<i64>() {
            Ok(1) => Ok(MenuChoice::ViewMarket),
            Ok(2) => Ok(MenuChoice::Buy),
            Ok(3) => Ok(MenuChoice::Sell),
            Ok(4) => Ok(MenuChoice::ViewPortfolio),
            Ok(5) => Ok(MenuChoice::UpdateMarket),
            Ok(6) => Ok(MenuChoice::Exit),
            _ => Err(InvalidChoice),
        }
    }
}
