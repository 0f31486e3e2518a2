// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Sequential Monte Carlo simulation.
use anyhow::{Result, bail};
use log::{debug, info};
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use equilab_eval::Card;

use crate::matchup::{Dealer, Matchup};

/// Half-width factor for a 95% confidence bound, from the Hoeffding
/// inequality sqrt(ln(2 / 0.05) / 2).
const HOEFFDING_95: f64 = 1.36;

/// The 95% confidence half-width of an equity estimated with `trials` trials.
///
/// Depends only on the number of trials, for zero trials the margin is
/// infinite.
pub fn margin(trials: usize) -> f64 {
    HOEFFDING_95 / (trials as f64).sqrt()
}

/// The result of a trial for the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The hero has the best hand.
    Win,
    /// Same hand, the pot is split.
    Split,
    /// The villain has the best hand.
    Loss,
}

impl Outcome {
    /// Equity credit in half wins, keeps the accumulation exact.
    fn half_wins(self) -> u64 {
        match self {
            Outcome::Win => 2,
            Outcome::Split => 1,
            Outcome::Loss => 0,
        }
    }
}

/// Count of trials outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Hero wins.
    pub wins: u64,
    /// Split pots.
    pub splits: u64,
    /// Hero losses.
    pub losses: u64,
}

/// A simulation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    equity: f64,
    history: Vec<f64>,
    tally: Tally,
}

impl Simulation {
    /// The hero equity, wins plus half the splits over the number of trials.
    pub fn equity(&self) -> f64 {
        self.equity
    }

    /// The running equity, the element at index i is the equity over the first
    /// i + 1 trials.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// The number of trials.
    pub fn trials(&self) -> usize {
        self.history.len()
    }

    /// The trials outcomes counts.
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// The 95% confidence half-width for this number of trials.
    pub fn margin(&self) -> f64 {
        margin(self.trials())
    }

    /// The equity 95% confidence band clamped to [0, 1].
    pub fn confidence_band(&self) -> (f64, f64) {
        let m = self.margin();
        ((self.equity - m).max(0.0), (self.equity + m).min(1.0))
    }
}

/// Accumulates ordered outcomes into a [Simulation].
pub(crate) struct Accumulator {
    half_wins: u64,
    tally: Tally,
    history: Vec<f64>,
}

impl Accumulator {
    pub fn with_capacity(trials: usize) -> Self {
        Self {
            half_wins: 0,
            tally: Tally::default(),
            history: Vec::with_capacity(trials),
        }
    }

    pub fn push(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.tally.wins += 1,
            Outcome::Split => self.tally.splits += 1,
            Outcome::Loss => self.tally.losses += 1,
        }

        self.half_wins += outcome.half_wins();
        let trials = self.history.len() + 1;
        self.history.push(equity(self.half_wins, trials));
    }

    pub fn finish(self) -> Simulation {
        Simulation {
            equity: equity(self.half_wins, self.history.len()),
            history: self.history,
            tally: self.tally,
        }
    }
}

fn equity(half_wins: u64, trials: usize) -> f64 {
    half_wins as f64 / (2 * trials) as f64
}

impl Matchup {
    /// Runs `trials` trials drawing the unseen cards from `rng`.
    pub fn simulate<R: Rng + ?Sized>(&self, trials: usize, rng: &mut R) -> Result<Simulation> {
        if trials == 0 {
            bail!("Simulation needs at least one trial");
        }

        debug!(
            "Simulating {trials} trials with {} board cards and {} villain",
            self.board().len(),
            if self.villain().is_some() { "known" } else { "random" }
        );

        let mut dealer = Dealer::new(self);
        let mut acc = Accumulator::with_capacity(trials);
        for _ in 0..trials {
            acc.push(dealer.play(rng)?);
        }

        let sim = acc.finish();
        info!(
            "Equity {:.4} +/- {:.4} after {trials} trials",
            sim.equity(),
            sim.margin()
        );

        Ok(sim)
    }
}

/// Estimates the hero equity against a known or random villain hand.
///
/// Checks the cards before running any trial, see [Matchup::new].
pub fn simulate<R: Rng + ?Sized>(
    hero: &[Card],
    villain: Option<&[Card]>,
    board: &[Card],
    trials: usize,
    rng: &mut R,
) -> Result<Simulation> {
    Matchup::new(hero, villain, board)?.simulate(trials, rng)
}
