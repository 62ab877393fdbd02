// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;

use crate::subset::for_each_subset;

/// A Poker card.
///
/// A card is stored as its position in the canonical deck:
///
/// ```text
///   id = suit * 13 + rank
///   rank = deuce=0,trey=1,four=2,...,ace=12
///   suit = diamonds=0,clubs=1,hearts=2,spades=3
/// ```
///
/// so that a set of cards fits a 64 bits mask (see [CardMask]).
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Card(u8);

impl Card {
    /// Create a card given a rank and suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self(suit as u8 * 13 + rank as u8)
    }

    /// This card unique id, its position in the default deck.
    pub fn id(&self) -> u8 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.0 / 13 {
            0 => Suit::Diamonds,
            1 => Suit::Clubs,
            2 => Suit::Hearts,
            _ => Suit::Spades,
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        match self.0 % 13 {
            0 => Rank::Deuce,
            1 => Rank::Trey,
            2 => Rank::Four,
            3 => Rank::Five,
            4 => Rank::Six,
            5 => Rank::Seven,
            6 => Rank::Eight,
            7 => Rank::Nine,
            8 => Rank::Ten,
            9 => Rank::Jack,
            10 => Rank::Queen,
            11 => Rank::King,
            _ => Rank::Ace,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
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
    /// Returns all ranks from deuce to ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank notation character.
    pub fn to_char(self) -> char {
        match self {
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
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Diamonds suit.
    Diamonds = 0,
    /// Clubs suit.
    Clubs,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits in deck order.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Diamonds, Suit::Clubs, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// The suit notation character.
    pub fn to_char(self) -> char {
        match self {
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A set of cards as a bit mask indexed by card id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardMask(u64);

impl CardMask {
    /// Checks if the mask contains a card.
    pub fn contains(&self, card: Card) -> bool {
        self.0 & (1 << card.id()) != 0
    }

    /// Adds a card to the mask, returns false if the card was already there.
    pub fn insert(&mut self, card: Card) -> bool {
        let present = self.contains(card);
        self.0 |= 1 << card.id();
        !present
    }

    /// The number of cards in the mask.
    pub fn count(&self) -> usize {
        self.0.count_ones() as usize
    }
}

impl FromIterator<Card> for CardMask {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut mask = CardMask::default();
        for card in iter {
            mask.insert(card);
        }
        mask
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

    /// Returns the cards left after removing the given cards from a full deck.
    ///
    /// The remaining cards keep the default deck order.
    pub fn without(cards: &[Card]) -> Self {
        let mask = cards.iter().copied().collect::<CardMask>();
        let mut deck = Self::default();
        deck.cards.retain(|c| !mask.contains(*c));
        deck
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the deck contains a card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Iterates the deck cards in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// The deck cards.
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");
        for_each_subset(&self.cards, k, f);
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

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_encoding() {
        let mut cards = HashSet::default();
        for (pos, card) in Deck::default().into_iter().enumerate() {
            assert_eq!(card.id() as usize, pos);
            assert_eq!(Card::new(card.rank(), card.suit()), card);
            cards.insert(card);
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);

        let kd = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(kd.id(), 11);

        let ts = Card::new(Rank::Ten, Suit::Spades);
        assert_eq!(ts.id(), 47);
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
        assert_eq!(format!("{c:?}"), "Card(Ah)");
    }

    #[test]
    fn deck_order() {
        let deck = Deck::default();
        let names = deck.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        assert_eq!(names[0], "2d");
        assert_eq!(names[12], "Ad");
        assert_eq!(names[13], "2c");
        assert_eq!(names[26], "2h");
        assert_eq!(names[51], "As");
    }

    #[test]
    fn deck_without() {
        let ad = Card::new(Rank::Ace, Suit::Diamonds);
        let kd = Card::new(Rank::King, Suit::Diamonds);
        let deck = Deck::without(&[ad, kd]);
        assert_eq!(deck.count(), 50);
        assert!(!deck.contains(ad));
        assert!(!deck.contains(kd));

        // Order is preserved.
        let full = Deck::default();
        let expected = full.iter().filter(|c| **c != ad && **c != kd);
        assert!(deck.iter().eq(expected));

        let all = Deck::default().into_iter().collect::<Vec<_>>();
        assert!(Deck::without(&all).is_empty());
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut hands = HashSet::default();
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
    fn deck_for_each_without() {
        let deck = Deck::without(&[
            Card::new(Rank::Ace, Suit::Diamonds),
            Card::new(Rank::King, Suit::Diamonds),
        ]);

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_118_760);
    }

    #[test]
    fn card_mask() {
        let mut mask = CardMask::default();
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        let as_ = Card::new(Rank::Ace, Suit::Spades);

        assert!(mask.insert(ah));
        assert!(mask.insert(as_));
        assert!(!mask.insert(ah));
        assert_eq!(mask.count(), 2);
        assert!(mask.contains(as_));
        assert!(!mask.contains(Card::new(Rank::King, Suit::Spades)));
    }

    #[test]
    fn card_serde() {
        let c = Card::new(Rank::Ten, Suit::Clubs);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"Tc\"");
        assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), c);
        assert!(serde_json::from_str::<Card>("\"1c\"").is_err());
    }
}
