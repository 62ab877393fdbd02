// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Nextcard Poker hand evaluator.
//!
//! Evaluates hands from 2 to 7 cards and computes the odds of each hand
//! category after one more card is dealt, by classifying the hand made with
//! each of the cards not seen yet.
//!
//! Front ends use [evaluate] to get the best hand and [predict_next] to get
//! the most likely hands after the next card:
//!
//! ```
//! # use nextcard_eval::*;
//! let cards = parse_cards("Ah Ad Kc Kd 2s").unwrap();
//!
//! let hand = evaluate(&cards).unwrap();
//! assert_eq!(hand.rank(), HandRank::TwoPair);
//! assert_eq!(hand.description(), "Two Pair, A's & K's");
//!
//! let odds = predict_next(&cards);
//! assert_eq!(odds, ["Two Pair (91.5%)", "Full House (8.5%)"]);
//! ```
//!
//! Hands compare by strength so that they can be used to find a winner:
//!
//! ```
//! # use nextcard_eval::*;
//! let h1 = classify_best(&parse_cards("Ah Kh Qh Jh 9c").unwrap()).unwrap();
//! let h2 = classify_best(&parse_cards("2c 3d 4h 5s 6c").unwrap()).unwrap();
//! assert!(h2 > h1);
//! ```
//!
//! The **`parallel`** feature splits the lookahead work among threads.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod engine;
pub use engine::{Config, evaluate, parse_card_set, predict_next, predict_next_with};

pub mod eval;
pub use eval::{
    EvalError, EvaluatedHand, HandRank, HandValue, classify_best, classify_five, validate,
};

pub mod format;
pub use format::HandSummary;

pub mod lookahead;
pub use lookahead::{Distribution, Odds, distribution, lookahead};

// Reexport cards types.
pub use nextcard_cards::{Card, Deck, ParseCardError, Rank, Suit, parse_cards};
