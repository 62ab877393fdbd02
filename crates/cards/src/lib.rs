// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Nextcard Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use nextcard_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "Kd".parse().unwrap();
//! assert_eq!(kd.rank(), Rank::King);
//! assert_eq!(ah.to_string(), "Ah");
//! ```
//!
//! and a [Deck] type for removing known cards and iterating the cards left.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use nextcard_cards::Deck;
//! // Iterate through all 5 cards hands (2.6M hands).
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
//!
//! or the cards that have not been seen yet:
//!
//! ```
//! # use nextcard_cards::{parse_cards, Deck};
//! let known = parse_cards("As Ks").unwrap();
//! let unseen = Deck::without(&known);
//! assert_eq!(unseen.count(), 50);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, CardMask, Deck, Rank, Suit};

mod parse;
pub use parse::{ParseCardError, parse_cards};

mod subset;
pub use subset::for_each_subset;
