// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards notation parsing.
use anyhow::{Result, anyhow, bail};
use std::str::FromStr;

use crate::{Card, Rank, Suit};

impl FromStr for Card {
    type Err = anyhow::Error;

    /// Parses a card from a two characters token like `Ah` or `td`.
    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        let (Some(r), Some(c), None) = (chars.next(), chars.next(), chars.next()) else {
            bail!("Invalid card '{s}' expected a rank and a suit");
        };

        let rank = Rank::from_char(r).ok_or_else(|| anyhow!("Invalid rank '{r}' in card '{s}'"))?;
        let suit = Suit::from_char(c).ok_or_else(|| anyhow!("Invalid suit '{c}' in card '{s}'"))?;
        Ok(Card::new(rank, suit))
    }
}

/// Parses a list of cards like `"Ah Kh"`, `"AhKh"` or `"Ah,Kh"`.
///
/// Spaces and commas are ignored, an empty string gives no cards. This doesn't
/// check for duplicates, that is left to the code that uses the cards.
pub fn parse_cards(s: &str) -> Result<Vec<Card>> {
    let chars = s
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect::<Vec<_>>();

    chars
        .chunks(2)
        .map(|token| token.iter().collect::<String>().parse::<Card>())
        .collect()
}
