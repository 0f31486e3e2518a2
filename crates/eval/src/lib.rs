// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equilab poker hand evaluator.
//!
//! Scores 5 or more cards hands by finding the best five cards combination,
//! a score is made of a [HandCategory] and the tie-break ranks used to compare
//! hands in the same category.
//!
//! To use the evaluator score a hand with [best_of] and compare the scores:
//!
//! ```
//! # use equilab_eval::*;
//! let hero = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
//! let villain = parse_cards("As Ad Ac Qd Th 2c 3d").unwrap();
//! let v1 = best_of(&hero).unwrap();
//! let v2 = best_of(&villain).unwrap();
//! assert_eq!(v1.category(), HandCategory::StraightFlush);
//! assert!(v1 > v2);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandCategory, HandScore, best_hand, best_of, score5};

// Reexport cards types.
pub use equilab_cards::{Card, Deck, Rank, Suit, parse_cards};
