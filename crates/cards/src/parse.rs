// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards text notation.
//!
//! A card is written as two characters, the rank followed by the suit, where
//! the rank is one of `23456789TJQKA` and the suit one of `shcd`. Ranks must
//! be uppercase and suits lowercase, any other form is rejected.
use std::str::FromStr;
use thiserror::Error;

use crate::{Card, Rank, Suit};

/// Error returned when parsing a card from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The text is not two characters long.
    #[error("invalid card '{0}': expected a rank and a suit")]
    Length(String),
    /// The rank character is not a valid rank.
    #[error("invalid card rank '{0}'")]
    Rank(char),
    /// The suit character is not a valid suit.
    #[error("invalid card suit '{0}'")]
    Suit(char),
}

impl TryFrom<char> for Rank {
    type Error = ParseCardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let rank = match c {
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
            _ => return Err(ParseCardError::Rank(c)),
        };

        Ok(rank)
    }
}

impl TryFrom<char> for Suit {
    type Error = ParseCardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'd' => Ok(Suit::Diamonds),
            'c' => Ok(Suit::Clubs),
            'h' => Ok(Suit::Hearts),
            's' => Ok(Suit::Spades),
            _ => Err(ParseCardError::Suit(c)),
        }
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some(suit), None) => {
                Ok(Card::new(Rank::try_from(rank)?, Suit::try_from(suit)?))
            }
            _ => Err(ParseCardError::Length(s.to_string())),
        }
    }
}

/// Parses a list of cards separated by whitespace or commas.
///
/// ```
/// # use nextcard_cards::{parse_cards, Card, Rank, Suit};
/// let cards = parse_cards("As, Kd Th").unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
/// assert_eq!(cards.len(), 3);
/// ```
pub fn parse_cards(text: &str) -> Result<Vec<Card>, ParseCardError> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}
