// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equilab Monte Carlo equity simulator.
//!
//! Estimates the equity of a hero hand against a known or a random villain
//! hand by dealing the unseen cards many times and comparing the best hands.
//! The random source is passed by the caller so that seeded runs are
//! reproducible:
//!
//! ```
//! # use equilab_sim::*;
//! # use rand::{SeedableRng, rngs::StdRng};
//! let hero = parse_cards("Ah Kh").unwrap();
//! let villain = parse_cards("Qs Qd").unwrap();
//! let mut rng = StdRng::seed_from_u64(1);
//!
//! let sim = simulate(&hero, Some(&villain[..]), &[], 1_000, &mut rng).unwrap();
//! assert_eq!(sim.history().len(), 1_000);
//! assert_eq!(sim.history().last().copied(), Some(sim.equity()));
//! assert_eq!(sim.margin(), margin(1_000));
//! ```
//!
//! The [Matchup::par_simulate] method splits the trials across parallel tasks,
//! each task with its own generator, and can be stopped with a [CancelToken]:
//!
//! ```
//! # use equilab_sim::*;
//! let hero = parse_cards("Ah Kh").unwrap();
//! let matchup = Matchup::new(&hero, None, &[]).unwrap();
//! let config = Config {
//!     trials: 1_000,
//!     tasks: 4,
//!     seed: Some(1),
//! };
//!
//! let sim = matchup.par_simulate(&config, &CancelToken::new()).unwrap();
//! assert_eq!(sim.trials(), 1_000);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod matchup;
pub use matchup::{BOARD_SIZE, Matchup};

mod parallel;
pub use parallel::{CancelToken, Config};

mod simulate;
pub use simulate::{Outcome, Simulation, Tally, margin, simulate};

// Reexport evaluator types.
pub use equilab_eval::{Card, HandCategory, HandScore, Rank, Suit, best_hand, best_of, parse_cards};
