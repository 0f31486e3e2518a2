// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Heads up matchup and trials dealing.
use ahash::AHashSet;
use anyhow::{Result, bail};
use rand::prelude::*;
use std::cmp::Ordering;

use equilab_eval::{Card, Deck, best_of};

use crate::simulate::Outcome;

/// The number of community cards at showdown.
pub const BOARD_SIZE: usize = 5;

/// A validated heads up spot: hero hole cards, an optional known villain hand,
/// and the known board cards.
#[derive(Debug, Clone)]
pub struct Matchup {
    hero: [Card; 2],
    villain: Option<[Card; 2]>,
    board: Vec<Card>,
    /// The cards nobody can see, sampled on each trial.
    pool: Vec<Card>,
}

impl Matchup {
    /// Creates a matchup checking the cards.
    ///
    /// The hero must have 2 cards, the villain if given 0 or 2 cards, the board
    /// 0, 3, 4, or 5 cards, and all cards must be distinct.
    pub fn new(hero: &[Card], villain: Option<&[Card]>, board: &[Card]) -> Result<Self> {
        let Ok(hero) = <[Card; 2]>::try_from(hero) else {
            bail!("Hero needs exactly 2 cards, got {}", hero.len());
        };

        // An empty villain hand is a random one.
        let villain = match villain {
            Some([]) | None => None,
            Some(cards) => match <[Card; 2]>::try_from(cards) {
                Ok(cards) => Some(cards),
                Err(_) => bail!("Villain needs exactly 2 cards, got {}", cards.len()),
            },
        };

        if !matches!(board.len(), 0 | 3 | 4 | 5) {
            bail!("Board needs 0, 3, 4 or 5 cards, got {}", board.len());
        }

        let visible = hero
            .iter()
            .chain(villain.iter().flatten())
            .chain(board)
            .copied()
            .collect::<Vec<_>>();

        let mut seen = AHashSet::with_capacity(visible.len());
        for card in &visible {
            if !seen.insert(*card) {
                bail!("Duplicate card {card}");
            }
        }

        // A known villain hand is removed from the pool too, dealing the board
        // from what is left is the same as dealing around the villain cards.
        let pool = Deck::without(&visible).into_iter().collect();

        Ok(Self {
            hero,
            villain,
            board: board.to_vec(),
            pool,
        })
    }

    /// The hero hole cards.
    pub fn hero(&self) -> [Card; 2] {
        self.hero
    }

    /// The villain hole cards, `None` for a random hand.
    pub fn villain(&self) -> Option<[Card; 2]> {
        self.villain
    }

    /// The known board cards.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// The unseen cards.
    pub fn pool(&self) -> &[Card] {
        &self.pool
    }

    /// Number of board cards to deal on each trial.
    pub fn need(&self) -> usize {
        BOARD_SIZE - self.board.len()
    }

    /// Number of cards sampled from the pool on each trial.
    fn deal_size(&self) -> usize {
        match self.villain {
            Some(_) => self.need(),
            None => self.need() + 2,
        }
    }
}

/// Plays trials for a matchup reusing the same buffers.
pub(crate) struct Dealer<'a> {
    matchup: &'a Matchup,
    deck: Vec<Card>,
}

impl<'a> Dealer<'a> {
    pub fn new(matchup: &'a Matchup) -> Self {
        Self {
            matchup,
            deck: matchup.pool.clone(),
        }
    }

    /// Deals the unseen cards and plays one showdown.
    pub fn play<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Outcome> {
        let (hero, villain) = self.deal(rng);

        let outcome = match best_of(&hero)?.cmp(&best_of(&villain)?) {
            Ordering::Greater => Outcome::Win,
            Ordering::Equal => Outcome::Split,
            Ordering::Less => Outcome::Loss,
        };

        Ok(outcome)
    }

    /// Deals the hero and villain 7 cards hands, hole cards first.
    fn deal<R: Rng + ?Sized>(&mut self, rng: &mut R) -> ([Card; 7], [Card; 7]) {
        let m = self.matchup;

        // Each trial starts from the pool order, a partial shuffle gives a
        // uniform sample of the dealt cards without permuting the whole pool.
        self.deck.copy_from_slice(&m.pool);
        let (dealt, _) = self.deck.partial_shuffle(rng, m.deal_size());

        let (opponent, drawn) = match m.villain {
            Some(villain) => (villain, &dealt[..]),
            None => ([dealt[0], dealt[1]], &dealt[2..]),
        };

        let known = m.board.len();
        let mut hero = [m.hero[0]; 2 + BOARD_SIZE];
        hero[..2].copy_from_slice(&m.hero);
        hero[2..2 + known].copy_from_slice(&m.board);
        hero[2 + known..].copy_from_slice(drawn);

        let mut villain = hero;
        villain[..2].copy_from_slice(&opponent);

        (hero, villain)
    }
}
