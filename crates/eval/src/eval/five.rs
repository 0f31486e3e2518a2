// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand scoring.
use crate::Card;

use super::{HandCategory, HandScore};

/// The ace low straight ranks after sorting.
const WHEEL: [u8; 5] = [14, 5, 4, 3, 2];

/// Ranks used for the wheel where the ace plays low.
const WHEEL_LOW: [u8; 5] = [5, 4, 3, 2, 1];

/// Scores a five cards hand.
///
/// The score doesn't depend on the cards order, the cards must be distinct.
pub fn score5(cards: &[Card; 5]) -> HandScore {
    let mut values = cards.map(|c| c.rank().value());
    values.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());
    let is_distinct = values.windows(2).all(|w| w[0] != w[1]);
    let mut is_straight = is_distinct && values[0] - values[4] == 4;
    if values == WHEEL {
        is_straight = true;
        values = WHEEL_LOW;
    }

    // Rank groups as (count, rank) pairs, the explicit sort gives the larger
    // groups first and the higher rank first among groups of the same size.
    let mut groups = [(0u8, 0u8); 5];
    let mut num_groups = 0;
    for &v in &values {
        if num_groups > 0 && groups[num_groups - 1].1 == v {
            groups[num_groups - 1].0 += 1;
        } else {
            groups[num_groups] = (1, v);
            num_groups += 1;
        }
    }

    let groups = &mut groups[..num_groups];
    groups.sort_unstable_by(|a, b| b.cmp(a));

    let counts = (groups[0].0, groups.get(1).map_or(0, |g| g.0));
    let mut ranks = [0u8; 5];
    for (rank, group) in ranks.iter_mut().zip(groups.iter()) {
        *rank = group.1;
    }

    if is_straight && is_flush {
        HandScore::new(HandCategory::StraightFlush, &values)
    } else if counts.0 == 4 {
        HandScore::new(HandCategory::FourOfAKind, &ranks[..2])
    } else if counts == (3, 2) {
        HandScore::new(HandCategory::FullHouse, &ranks[..2])
    } else if is_flush {
        HandScore::new(HandCategory::Flush, &values)
    } else if is_straight {
        HandScore::new(HandCategory::Straight, &values)
    } else if counts.0 == 3 {
        HandScore::new(HandCategory::ThreeOfAKind, &ranks[..3])
    } else if counts == (2, 2) {
        HandScore::new(HandCategory::TwoPair, &ranks[..3])
    } else if counts.0 == 2 {
        HandScore::new(HandCategory::OnePair, &ranks[..4])
    } else {
        HandScore::new(HandCategory::HighCard, &values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Deck, parse_cards};
    use rand::{SeedableRng, prelude::*, rngs::StdRng};

    fn hand(s: &str) -> [Card; 5] {
        parse_cards(s).unwrap().try_into().unwrap()
    }

    fn score(s: &str) -> HandScore {
        score5(&hand(s))
    }

    #[test]
    fn categories_and_tiebreaks() {
        let cases: [(&str, HandCategory, &[u8]); 9] = [
            ("Ah Kh Qh Jh Th", HandCategory::StraightFlush, &[14, 13, 12, 11, 10]),
            ("9c 9d 9h 9s 4d", HandCategory::FourOfAKind, &[9, 4]),
            ("3c 3d Kh Ks 3s", HandCategory::FullHouse, &[3, 13]),
            ("2d 9d Jd 4d Kd", HandCategory::Flush, &[13, 11, 9, 4, 2]),
            ("8c 7d 6h 5s 4d", HandCategory::Straight, &[8, 7, 6, 5, 4]),
            ("Qc Qd 5h Qs 9d", HandCategory::ThreeOfAKind, &[12, 9, 5]),
            ("4c Jd 4h Js Ad", HandCategory::TwoPair, &[11, 4, 14]),
            ("7c 2d 7h Ks 9d", HandCategory::OnePair, &[7, 13, 9, 2]),
            ("Ac 2d 7h Ks 9d", HandCategory::HighCard, &[14, 13, 9, 7, 2]),
        ];

        for (cards, category, tiebreak) in cases {
            let s = score(cards);
            assert_eq!(s.category(), category, "{cards}");
            assert_eq!(s.tiebreak(), tiebreak, "{cards}");
        }
    }

    #[test]
    fn wheel_is_lowest_straight() {
        let wheel = score("Ah 2c 3d 4s 5h");
        assert_eq!(wheel.category(), HandCategory::Straight);
        assert_eq!(wheel.tiebreak(), &[5, 4, 3, 2, 1]);

        let six_high = score("2c 3d 4s 5h 6h");
        assert_eq!(six_high.category(), HandCategory::Straight);
        assert_eq!(six_high.tiebreak(), &[6, 5, 4, 3, 2]);
        assert!(wheel < six_high);

        let steel_wheel = score("As 2s 3s 4s 5s");
        assert_eq!(steel_wheel.category(), HandCategory::StraightFlush);
        assert_eq!(steel_wheel.tiebreak(), &[5, 4, 3, 2, 1]);

        // Not a straight, the ace doesn't wrap around.
        let s = score("Qh Kc Ad 2s 3h");
        assert_eq!(s.category(), HandCategory::HighCard);
    }

    #[test]
    fn adjacent_categories_order() {
        // Best hand of each category followed by the worst hand of the next one.
        let chain = [
            ("Ac Kd Qh Js 9d", "2c 2d 3h 4s 5d"),
            ("Ac Ad Kh Qs Jd", "3c 3d 2h 2s 4d"),
            ("Ac Ad Kh Ks Qd", "2c 2d 2h 3s 4d"),
            ("Ac Ad Ah Ks Qd", "Ac 2d 3h 4s 5d"),
            ("Ac Kd Qh Js Td", "2c 3c 4c 5c 7c"),
            ("Ac Kc Qc Jc 9c", "2c 2d 2h 3s 3d"),
            ("Ac Ad Ah Ks Kd", "2c 2d 2h 2s 3d"),
            ("Ac Ad Ah As Kd", "Ac 2c 3c 4c 5c"),
        ];

        for (lower, higher) in chain {
            let (lower, higher) = (score(lower), score(higher));
            assert_eq!(lower.category() as u8 + 1, higher.category() as u8);
            assert!(lower < higher, "{lower} < {higher}");
        }
    }

    #[test]
    fn two_pair_ordering() {
        let kings_nines = score("Kc Kd 9h 9s 2d");
        let kings_fives = score("Kh Ks 5h 5s Ad");
        let kings_nines_ace = score("Kh Ks 9c 9d Ac");

        assert!(kings_fives < kings_nines);
        assert!(kings_nines < kings_nines_ace);
        assert_eq!(score("Kc Kd 9h 9s 2d"), score("Kh Ks 9c 9d 2c"));
    }

    #[test]
    fn kickers_break_ties() {
        assert!(score("7c 7d Kh 9s 2d") < score("7h 7s Kc 9d 3c"));
        assert!(score("Qc Qd Qh 5s 4d") < score("Qs Qd Qh 6s 2d"));
        assert!(score("9c 9d 9h 9s 4d") < score("9c 9d 9h 9s 5d"));
        assert!(score("Ac Jc 9c 7c 5c") < score("Ad Jd 9d 7d 6d"));
    }

    #[test]
    fn order_invariance() {
        let mut rng = StdRng::seed_from_u64(101);

        for _ in 0..1_000 {
            let mut cards = Deck::new_and_shuffled(&mut rng)
                .into_iter()
                .take(5)
                .collect::<Vec<_>>();

            let expected = score5(&cards.clone().try_into().unwrap());
            for _ in 0..5 {
                cards.shuffle(&mut rng);
                assert_eq!(score5(&cards.clone().try_into().unwrap()), expected);
            }
        }
    }

    #[test]
    fn all_five_cards_hands() {
        let mut counts = [0usize; 9];
        Deck::default().for_each(5, |cards| {
            let s = score5(cards.try_into().unwrap());
            counts[s.category() as usize] += 1;
        });

        assert_eq!(counts[HandCategory::HighCard as usize], 1_302_540);
        assert_eq!(counts[HandCategory::OnePair as usize], 1_098_240);
        assert_eq!(counts[HandCategory::TwoPair as usize], 123_552);
        assert_eq!(counts[HandCategory::ThreeOfAKind as usize], 54_912);
        assert_eq!(counts[HandCategory::Straight as usize], 10_200);
        assert_eq!(counts[HandCategory::Flush as usize], 5_108);
        assert_eq!(counts[HandCategory::FullHouse as usize], 3_744);
        assert_eq!(counts[HandCategory::FourOfAKind as usize], 624);
        assert_eq!(counts[HandCategory::StraightFlush as usize], 40);
    }
}
