// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equilab playing cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use equilab_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "Kd".parse().unwrap();
//! assert_eq!(ah.to_string(), "Ah");
//! assert_eq!(kd.rank().value(), 13);
//! ```
//!
//! a [parse_cards] function to read a list of cards in the usual notation:
//!
//! ```
//! # use equilab_cards::parse_cards;
//! let hand = parse_cards("Ah Kh, Qh").unwrap();
//! assert_eq!(hand.len(), 3);
//! ```
//!
//! and a [Deck] type for shuffling and iterating cards in the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use equilab_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit};

mod parse;
pub use parse::parse_cards;
