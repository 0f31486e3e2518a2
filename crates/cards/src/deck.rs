// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards and deck definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A playing card.
///
/// Cards are plain values, two cards are the same card when they have the same
/// rank and suit.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card rank.
    #[inline]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    #[inline]
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

/// Card rank.
///
/// The discriminant is the rank value used for ranking hands, from 2 for a
/// deuce to 14 for an ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank value, 2 for a deuce up to 14 for an ace.
    #[inline]
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the rank for a notation character.
    pub fn from_char(c: char) -> Option<Rank> {
        let rank = match c.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// Returns the suit for a notation character.
    pub fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            'c' => Some(Suit::Clubs),
            'd' => Some(Suit::Diamonds),
            'h' => Some(Suit::Hearts),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        };

        write!(f, "{suit}")
    }
}

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Creates a full deck without the given cards.
    pub fn without(cards: &[Card]) -> Self {
        let mut deck = Self::default();
        deck.cards.retain(|c| !cards.contains(c));
        deck
    }

    /// Shuffles the cards left in the deck.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals a card from the deck, returns `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Checks if a card is still in the deck.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        // Positions of the current k-subset, advanced in lexicographic order.
        let n = self.cards.len();
        let mut pos = (0..k).collect::<Vec<_>>();
        let mut hand = pos.iter().map(|&p| self.cards[p]).collect::<Vec<_>>();

        loop {
            f(&hand);

            // Find the rightmost position that can still move right.
            let Some(i) = (0..k).rev().find(|&i| pos[i] < n - k + i) else {
                break;
            };

            pos[i] += 1;
            hand[i] = self.cards[pos[i]];
            for j in (i + 1)..k {
                pos[j] = pos[j - 1] + 1;
                hand[j] = self.cards[pos[j]];
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn deck_is_complete() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        assert_eq!(deck.count(), Deck::SIZE);

        while let Some(card) = deck.deal() {
            assert!((2..=14).contains(&card.rank().value()));
            cards.insert(card);
        }

        // Check uniquness.
        assert!(deck.is_empty());
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn rank_values() {
        let values = Rank::ranks().map(|r| r.value()).collect::<Vec<_>>();
        assert_eq!(values, (2..=14).collect::<Vec<_>>());
        assert!(Rank::Ace > Rank::King);
        assert!(Rank::Trey > Rank::Deuce);
    }

    #[test]
    fn card_serde() {
        let hand = [
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Deuce, Suit::Clubs),
        ];

        let bytes = bincode::serialize(&hand).unwrap();
        assert_eq!(bincode::deserialize::<[Card; 2]>(&bytes).unwrap(), hand);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "Kd");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5s");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "Jc");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "Th");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "Ah");
    }

    #[test]
    fn deck_without() {
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        let kh = Card::new(Rank::King, Suit::Hearts);

        let deck = Deck::without(&[ah, kh]);
        assert_eq!(deck.count(), Deck::SIZE - 2);
        assert!(!deck.contains(ah));
        assert!(!deck.contains(kh));
        assert!(deck.contains(Card::new(Rank::Ace, Suit::Spades)));
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();

        let mut hands = HashSet::default();
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 2_598_960);

        hands.clear();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);
    }

    #[test]
    fn deck_for_each_small_deck() {
        let mut deck = Deck::from(Deck::default().into_iter().take(6).collect::<Vec<_>>());

        let mut count = 0;
        deck.for_each(5, |_| count += 1);
        assert_eq!(count, 6);

        deck.remove(Card::new(Rank::Deuce, Suit::Clubs));
        deck.remove(Card::new(Rank::Trey, Suit::Clubs));

        // Fewer cards than the hand size.
        count = 0;
        deck.for_each(5, |_| count += 1);
        assert_eq!(count, 0);
    }

    // Goes through 133M hands, slow in debug mode.
    #[test]
    #[ignore]
    fn deck_for_each_7cards() {
        let mut deck = Deck::default();

        let mut count = 0;
        deck.for_each(7, |cards| {
            assert_eq!(cards.len(), 7);
            count += 1;
        });
        assert_eq!(count, 133_784_560);

        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));

        count = 0;
        deck.for_each(7, |_| count += 1);
        assert_eq!(count, 99_884_400);
    }
}
