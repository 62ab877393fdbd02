// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand classifier.
//!
//! A hand is classified from its rank and suit histograms into a [HandRank]
//! category plus the ranks that break ties between hands of the same category,
//! the two together form a [HandValue] that is totally ordered.
//!
//! [classify_five] classifies exactly five cards, [classify_best] accepts from
//! two to seven cards: hands with less than five cards are classified using
//! all the cards (a partial hand can only be a pair, two pair, trips, or quads)
//! while six and seven cards hands are classified by picking the best of all
//! their five cards subsets.
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

use nextcard_cards::{Card, CardMask, ParseCardError, Rank, for_each_subset};

/// The minimum number of cards for a hand.
pub const MIN_CARDS: usize = 2;

/// The maximum number of cards for a hand.
pub const MAX_CARDS: usize = 7;

/// The number of cards in a complete hand.
pub const HAND_SIZE: usize = 5;

/// Error returned for card sets that cannot be evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Less than two cards.
    #[error("not enough cards: got {0}, need at least {MIN_CARDS}")]
    NotEnoughCards(usize),
    /// More than seven cards.
    #[error("too many cards: got {0}, at most {MAX_CARDS} are allowed")]
    TooManyCards(usize),
    /// The same card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// Malformed card text.
    #[error(transparent)]
    Parse(#[from] ParseCardError),
}

/// The hand category, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// No pairs.
    HighCard = 0,
    /// Two cards of the same rank.
    Pair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five cards with consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight with all cards of the same suit.
    StraightFlush,
}

impl HandRank {
    /// The number of hand categories.
    pub const COUNT: usize = 9;

    /// Returns all categories from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            Pair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }
}

/// A hand strength.
///
/// Values compare by category first and then by tiebreak ranks, the tiebreak
/// for each category is:
///
/// ```text
///   StraightFlush  [high]
///   FourOfAKind    [quads, kicker]
///   FullHouse      [trips, pair]
///   Flush          [5 ranks descending]
///   Straight       [high]
///   ThreeOfAKind   [trips, kicker, kicker]
///   TwoPair        [high pair, low pair, kicker]
///   Pair           [pair, kicker, kicker, kicker]
///   HighCard       [5 ranks descending]
/// ```
///
/// where the high card of the A-2-3-4-5 straight is the five.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandValue {
    /// The hand category.
    pub rank: HandRank,
    /// The ranks that break ties in the same category.
    pub tiebreak: Vec<Rank>,
}

/// A classified hand with the cards that make it.
///
/// Hands compare by their [HandValue] only, two hands made of different cards
/// with the same value are equal.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluatedHand {
    value: HandValue,
    cards: Vec<Card>,
}

impl EvaluatedHand {
    /// The hand value.
    pub fn value(&self) -> &HandValue {
        &self.value
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.value.rank
    }

    /// The tiebreak ranks.
    pub fn tiebreak(&self) -> &[Rank] {
        &self.value.tiebreak
    }

    /// The cards making the hand, defining cards first and then kickers.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl PartialEq for EvaluatedHand {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for EvaluatedHand {}

impl PartialOrd for EvaluatedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EvaluatedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

/// Checks that the cards are a valid hand of 2 to 7 distinct cards.
pub fn validate(cards: &[Card]) -> Result<(), EvalError> {
    if cards.len() < MIN_CARDS {
        return Err(EvalError::NotEnoughCards(cards.len()));
    }

    if cards.len() > MAX_CARDS {
        return Err(EvalError::TooManyCards(cards.len()));
    }

    let mut mask = CardMask::default();
    for &card in cards {
        if !mask.insert(card) {
            return Err(EvalError::DuplicateCard(card));
        }
    }

    Ok(())
}

/// Classifies a five cards hand.
///
/// The cards must be distinct.
///
/// ```
/// # use nextcard_eval::*;
/// let cards = parse_cards("As Ks Qs Js Ts").unwrap();
/// let hand = classify_five(&[cards[0], cards[1], cards[2], cards[3], cards[4]]);
/// assert_eq!(hand.rank(), HandRank::StraightFlush);
/// assert_eq!(hand.tiebreak(), [Rank::Ace]);
/// ```
pub fn classify_five(cards: &[Card; HAND_SIZE]) -> EvaluatedHand {
    debug_assert!(validate(cards).is_ok(), "duplicate cards {cards:?}");
    classify(cards)
}

/// Classifies the best hand that can be made with 2 to 7 cards.
///
/// When more than one subset makes the best hand the first one found wins.
pub fn classify_best(cards: &[Card]) -> Result<EvaluatedHand, EvalError> {
    validate(cards)?;
    Ok(best_hand(cards))
}

/// Classifies the best hand of a validated set of cards.
pub(crate) fn best_hand(cards: &[Card]) -> EvaluatedHand {
    if cards.len() <= HAND_SIZE {
        return classify(cards);
    }

    // The first subset is cards[0..5], a later subset must be strictly better.
    let mut best = classify(&cards[..HAND_SIZE]);
    for_each_subset(cards, HAND_SIZE, |hand| {
        let value = classify(hand);
        if value > best {
            best = value;
        }
    });

    best
}

/// Classifies up to five distinct cards.
fn classify(cards: &[Card]) -> EvaluatedHand {
    let mut counts = [0u8; 13];
    for c in cards {
        counts[c.rank() as usize] += 1;
    }

    // Rank groups by size and then by rank, both descending.
    let mut groups = Rank::ranks()
        .rev()
        .filter(|r| counts[*r as usize] > 0)
        .map(|r| (counts[r as usize], r))
        .collect::<Vec<_>>();
    groups.sort_by(|a, b| b.0.cmp(&a.0));

    let is_complete = cards.len() == HAND_SIZE;
    let is_flush = is_complete && cards.iter().all(|c| c.suit() == cards[0].suit());
    let straight_high = if is_complete && groups.len() == HAND_SIZE {
        straight_high(&groups)
    } else {
        None
    };

    let first = groups.first().map_or(0, |g| g.0);
    let second = groups.get(1).map_or(0, |g| g.0);

    let rank = match (straight_high, is_flush) {
        (Some(_), true) => HandRank::StraightFlush,
        _ if first == 4 => HandRank::FourOfAKind,
        _ if first == 3 && second >= 2 => HandRank::FullHouse,
        (_, true) => HandRank::Flush,
        (Some(_), false) => HandRank::Straight,
        _ if first == 3 => HandRank::ThreeOfAKind,
        _ if first == 2 && second == 2 => HandRank::TwoPair,
        _ if first == 2 => HandRank::Pair,
        _ => HandRank::HighCard,
    };

    let tiebreak = match straight_high {
        Some(high) => vec![high],
        None => groups.iter().map(|g| g.1).collect(),
    };

    let mut hand = cards.to_vec();
    hand.sort_by(|a, b| {
        let (ra, rb) = (a.rank(), b.rank());
        counts[rb as usize]
            .cmp(&counts[ra as usize])
            .then(rb.cmp(&ra))
    });

    // The wheel ace plays low.
    if straight_high == Some(Rank::Five) {
        hand.rotate_left(1);
    }

    EvaluatedHand {
        value: HandValue { rank, tiebreak },
        cards: hand,
    }
}

/// Returns the straight high card for five distinct ranks in descending order.
fn straight_high(groups: &[(u8, Rank)]) -> Option<Rank> {
    let high = groups[0].1;
    let low = groups[HAND_SIZE - 1].1;

    if high as u8 - low as u8 == 4 {
        Some(high)
    } else if high == Rank::Ace && groups[1].1 == Rank::Five {
        Some(Rank::Five)
    } else {
        None
    }
}
