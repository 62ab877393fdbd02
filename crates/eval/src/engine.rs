// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Engine entry points used by front ends.
//!
//! Front ends pass the cards selected so far, which may be incomplete or
//! invalid while a user is building a hand, so these functions never fail:
//! invalid input gives no hand and no odds.
use log::debug;

use nextcard_cards::{Card, parse_cards};

use crate::{
    eval::{EvalError, EvaluatedHand, classify_best, validate},
    lookahead::lookahead,
};

/// Engine config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The number of next card categories to report.
    pub top_k: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { top_k: 3 }
    }
}

/// Returns the best hand for the given cards.
///
/// Returns `None` for less than two cards or an invalid set of cards.
///
/// ```
/// # use nextcard_eval::*;
/// let cards = parse_cards("Ah Ad Kc Kd 2s").unwrap();
/// let hand = evaluate(&cards).unwrap();
/// assert_eq!(hand.rank(), HandRank::TwoPair);
/// assert_eq!(hand.tiebreak(), [Rank::Ace, Rank::King, Rank::Deuce]);
///
/// assert!(evaluate(&cards[..1]).is_none());
/// ```
pub fn evaluate(cards: &[Card]) -> Option<EvaluatedHand> {
    classify_best(cards)
        .inspect_err(|e| debug!("Cannot evaluate {cards:?}: {e}"))
        .ok()
}

/// Returns the most likely hands after the next card with the default config.
///
/// ```
/// # use nextcard_eval::*;
/// let cards = parse_cards("Ah Kd").unwrap();
/// assert_eq!(predict_next(&cards), ["High Card (88.0%)", "Pair (12.0%)"]);
/// ```
pub fn predict_next(cards: &[Card]) -> Vec<String> {
    predict_next_with(cards, &Config::default())
}

/// Returns the most likely hands after the next card.
///
/// The result is empty for less than two or seven or more cards.
pub fn predict_next_with(cards: &[Card], config: &Config) -> Vec<String> {
    match lookahead(cards, config.top_k) {
        Ok(odds) => odds.iter().map(ToString::to_string).collect(),
        Err(e) => {
            debug!("No prediction for {cards:?}: {e}");
            Vec::new()
        }
    }
}

/// Parses a set of cards and checks it can be evaluated.
pub fn parse_card_set(text: &str) -> Result<Vec<Card>, EvalError> {
    let cards = parse_cards(text)?;
    validate(&cards)?;
    Ok(cards)
}
