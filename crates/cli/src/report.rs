// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand report printed by the CLI.
use serde::Serialize;
use std::fmt;

use nextcard_eval::{Card, Config, HandSummary, evaluate, predict_next_with};

/// The best hand and next card odds for a set of cards.
#[derive(Debug, Serialize)]
pub struct Report {
    /// The selected cards, hole cards first.
    pub cards: Vec<Card>,
    /// The best hand, none if there are not enough cards.
    pub best_hand: Option<HandSummary>,
    /// The most likely hands after the next card.
    pub next_card: Vec<String>,
}

impl Report {
    /// Evaluates the given cards.
    pub fn new(cards: Vec<Card>, config: &Config) -> Self {
        let best_hand = evaluate(&cards).map(|h| h.summary());
        let next_card = predict_next_with(&cards, config);
        Self {
            cards,
            best_hand,
            next_card,
        }
    }
}

fn join(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cards:      {}", join(&self.cards))?;

        let Some(hand) = &self.best_hand else {
            return writeln!(f, "Select at least two cards to analyze");
        };

        writeln!(f, "Best hand:  {}", hand.name)?;
        writeln!(f, "            {} [{}]", hand.description, join(&hand.cards))?;

        if !self.next_card.is_empty() {
            writeln!(f, "Next card:")?;
            for odds in &self.next_card {
                writeln!(f, "            {odds}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nextcard_eval::parse_cards;

    fn report(text: &str) -> Report {
        Report::new(parse_cards(text).unwrap(), &Config::default())
    }

    #[test]
    fn text_report() {
        let r = report("Ah Ad Kc Kd 2s");
        let text = r.to_string();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(
            lines,
            [
                "Cards:      Ah Ad Kc Kd 2s",
                "Best hand:  Two Pair",
                "            Two Pair, A's & K's [Ah Ad Kc Kd 2s]",
                "Next card:",
                "            Two Pair (91.5%)",
                "            Full House (8.5%)",
            ]
        );
    }

    #[test]
    fn not_enough_cards() {
        let r = report("Ah");
        assert!(r.best_hand.is_none());
        assert!(r.next_card.is_empty());
        assert!(r.to_string().contains("Select at least two cards"));
    }

    #[test]
    fn river_has_no_next_card() {
        let r = report("Ah Kd Qc Js 9h 3d 2c");
        assert!(r.best_hand.is_some());
        assert!(r.next_card.is_empty());
        assert!(!r.to_string().contains("Next card"));
    }

    #[test]
    fn json_report() {
        let r = report("Ah Kd");
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["cards"], serde_json::json!(["Ah", "Kd"]));
        assert_eq!(json["best_hand"]["rank"], "HighCard");
        assert_eq!(json["best_hand"]["description"], "A High");
        assert_eq!(
            json["next_card"],
            serde_json::json!(["High Card (88.0%)", "Pair (12.0%)"])
        );
    }
}
