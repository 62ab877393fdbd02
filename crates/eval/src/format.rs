// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hands and odds text.
use serde::Serialize;
use std::fmt;

use nextcard_cards::{Card, Rank};

use crate::{
    eval::{EvaluatedHand, HandRank},
    lookahead::Odds,
};

impl HandRank {
    /// The category name.
    pub fn name(&self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::Pair => "Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl EvaluatedHand {
    /// Checks if this hand is an ace high straight flush.
    pub fn is_royal_flush(&self) -> bool {
        self.rank() == HandRank::StraightFlush && self.tiebreak().first() == Some(&Rank::Ace)
    }

    /// The hand name, the category name or Royal Flush.
    pub fn name(&self) -> &'static str {
        if self.is_royal_flush() {
            "Royal Flush"
        } else {
            self.rank().name()
        }
    }

    /// Describes the ranks making the hand, for example "Two Pair, A's & K's".
    pub fn description(&self) -> String {
        let tb = |idx: usize| {
            self.tiebreak()
                .get(idx)
                .map(|r| r.to_string())
                .unwrap_or_default()
        };

        let name = self.name();
        match self.rank() {
            HandRank::HighCard => format!("{} High", tb(0)),
            HandRank::Pair | HandRank::ThreeOfAKind | HandRank::FourOfAKind => {
                format!("{name}, {}'s", tb(0))
            }
            HandRank::TwoPair => format!("{name}, {}'s & {}'s", tb(0), tb(1)),
            HandRank::FullHouse => format!("{name}, {}'s over {}'s", tb(0), tb(1)),
            HandRank::Straight | HandRank::Flush => format!("{name}, {} High", tb(0)),
            HandRank::StraightFlush if self.is_royal_flush() => name.to_string(),
            HandRank::StraightFlush => format!("{name}, {} High", tb(0)),
        }
    }

    /// The hand summary shown to users.
    pub fn summary(&self) -> HandSummary {
        HandSummary {
            rank: self.rank(),
            name: self.name().to_string(),
            description: self.description(),
            cards: self.cards().to_vec(),
        }
    }
}

impl fmt::Display for EvaluatedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// A best hand descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandSummary {
    /// The hand category.
    pub rank: HandRank,
    /// The hand name.
    pub name: String,
    /// The hand description.
    pub description: String,
    /// The cards making the hand.
    pub cards: Vec<Card>,
}

impl fmt::Display for Odds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.1}%)", self.rank, self.percent)
    }
}
