// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! A five cards hand is scored with [score5] that classifies the hand and
//! builds its tie-break ranks. Larger hands are scored with [best_of] that
//! scores every five cards subset and keeps the highest score, with 7 cards
//! that is 21 subsets which is fast enough for sampling equities.
//!
//! The [best_hand] variant also returns the five cards that make the best
//! hand, useful to show a winning hand.
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Card;

mod five;
pub use five::score5;

/// The hand category, the higher category always wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        };

        write!(f, "{name}")
    }
}

/// A hand score made of the hand category and its tie-break ranks.
///
/// Scores compare by category first and then by tie-break ranks from the most
/// significant, hands in the same category always have the same number of
/// tie-break ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandScore {
    category: HandCategory,
    tiebreak: [u8; 5],
    len: u8,
}

impl HandScore {
    fn new(category: HandCategory, ranks: &[u8]) -> Self {
        debug_assert!(ranks.len() <= 5);

        let mut tiebreak = [0; 5];
        tiebreak[..ranks.len()].copy_from_slice(ranks);
        Self {
            category,
            tiebreak,
            len: ranks.len() as u8,
        }
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The tie-break rank values, most significant first.
    ///
    /// Values are ranks from 2 to 14, a wheel straight has the ace as 1.
    pub fn tiebreak(&self) -> &[u8] {
        &self.tiebreak[..self.len as usize]
    }
}

impl fmt::Display for HandScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.category, self.tiebreak())
    }
}

/// Scores the best five cards hand from at least 5 cards.
pub fn best_of(cards: &[Card]) -> Result<HandScore> {
    best_hand(cards).map(|(score, _)| score)
}

/// Scores the best five cards hand and returns it with its score.
pub fn best_hand(cards: &[Card]) -> Result<(HandScore, [Card; 5])> {
    if cards.len() < 5 {
        bail!("Need at least 5 cards to score a hand, got {}", cards.len());
    }

    let n = cards.len();
    let mut hand: [Card; 5] = cards[..5].try_into()?;
    let mut best = (score5(&hand), hand);

    for c1 in 0..n {
        hand[0] = cards[c1];
        for c2 in (c1 + 1)..n {
            hand[1] = cards[c2];
            for c3 in (c2 + 1)..n {
                hand[2] = cards[c3];
                for c4 in (c3 + 1)..n {
                    hand[3] = cards[c4];
                    for c5 in (c4 + 1)..n {
                        hand[4] = cards[c5];

                        let score = score5(&hand);
                        if score > best.0 {
                            best = (score, hand);
                        }
                    }
                }
            }
        }
    }

    Ok(best)
}
