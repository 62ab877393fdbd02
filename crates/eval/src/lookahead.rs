// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Next card lookahead.
//!
//! Given the known cards, each unseen card is added to the hand in turn and the
//! best hand is classified again. The resulting categories counts give the
//! exact odds of each category after the next card is dealt.
use log::debug;
use serde::Serialize;

use nextcard_cards::{Card, Deck};

use crate::eval::{EvalError, HandRank, MAX_CARDS, best_hand, validate};

/// Hand categories counts over all the unseen cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Distribution {
    counts: [usize; HandRank::COUNT],
    total: usize,
}

impl Distribution {
    /// Counts a hand with the given category.
    pub fn add(&mut self, rank: HandRank) {
        self.counts[rank as usize] += 1;
        self.total += 1;
    }

    /// Adds the counts of another distribution.
    pub fn merge(&mut self, other: &Distribution) {
        for (c, o) in self.counts.iter_mut().zip(other.counts) {
            *c += o;
        }

        self.total += other.total;
    }

    /// The number of hands with the given category.
    pub fn count(&self, rank: HandRank) -> usize {
        self.counts[rank as usize]
    }

    /// The number of hands counted.
    pub fn total(&self) -> usize {
        self.total
    }

    /// The percentage of hands with the given category.
    pub fn percent(&self, rank: HandRank) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            100.0 * self.count(rank) as f64 / self.total as f64
        }
    }

    /// The observed categories, most likely first.
    ///
    /// Categories with the same count are ordered by strength, strongest first.
    pub fn ranked(&self) -> Vec<Odds> {
        let mut ranks = HandRank::ranks()
            .rev()
            .filter(|r| self.count(*r) > 0)
            .collect::<Vec<_>>();

        // Stable sort keeps the strongest first on equal counts.
        ranks.sort_by(|a, b| self.count(*b).cmp(&self.count(*a)));

        ranks
            .into_iter()
            .map(|rank| Odds {
                rank,
                percent: self.percent(rank),
            })
            .collect()
    }

    /// The `k` most likely categories.
    pub fn top(&self, k: usize) -> Vec<Odds> {
        let mut odds = self.ranked();
        odds.truncate(k);
        odds
    }
}

/// The probability of getting a hand category with the next card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Odds {
    /// The hand category.
    pub rank: HandRank,
    /// The percentage of unseen cards that make this category.
    pub percent: f64,
}

/// Classifies the hand made with each unseen card.
///
/// The known cards must be a valid hand, with seven known cards there is no
/// card to deal and the distribution is empty.
pub fn distribution(known: &[Card]) -> Result<Distribution, EvalError> {
    validate(known)?;

    if known.len() == MAX_CARDS {
        return Ok(Distribution::default());
    }

    let unseen = Deck::without(known);
    let dist = tally(known, unseen.as_slice());

    debug!(
        "Lookahead for {} known cards over {} unseen cards: {:?}",
        known.len(),
        dist.total(),
        dist.ranked()
            .iter()
            .map(|o| (o.rank, dist.count(o.rank)))
            .collect::<Vec<_>>()
    );

    Ok(dist)
}

/// Returns the `top_k` most likely categories after the next card.
///
/// ```
/// # use nextcard_eval::*;
/// let known = parse_cards("Ah Ad Kc Kd 2s 7h").unwrap();
/// let odds = lookahead(&known, 3).unwrap();
/// assert_eq!(odds[0].rank, HandRank::TwoPair);
/// assert_eq!(odds[1].rank, HandRank::FullHouse);
/// assert_eq!(odds.len(), 2);
/// ```
pub fn lookahead(known: &[Card], top_k: usize) -> Result<Vec<Odds>, EvalError> {
    Ok(distribution(known)?.top(top_k))
}

/// Counts the categories for each unseen card.
#[cfg(not(feature = "parallel"))]
fn tally(known: &[Card], unseen: &[Card]) -> Distribution {
    tally_cards(known, unseen)
}

/// Counts the categories for each unseen card splitting the cards among tasks.
#[cfg(feature = "parallel")]
fn tally(known: &[Card], unseen: &[Card]) -> Distribution {
    use log::trace;
    use std::thread;

    const NUM_TASKS: usize = 4;

    let cards_per_task = unseen.len().div_ceil(NUM_TASKS).max(1);

    thread::scope(|s| {
        let tasks = unseen
            .chunks(cards_per_task)
            .enumerate()
            .map(|(task_id, chunk)| {
                s.spawn(move || {
                    trace!("Task {task_id} classifying {} cards", chunk.len());
                    tally_cards(known, chunk)
                })
            })
            .collect::<Vec<_>>();

        // Per task distributions avoid sharing counters, merge them at the end.
        let mut dist = Distribution::default();
        for task in tasks {
            match task.join() {
                Ok(task_dist) => dist.merge(&task_dist),
                Err(e) => std::panic::resume_unwind(e),
            }
        }

        dist
    })
}

fn tally_cards(known: &[Card], unseen: &[Card]) -> Distribution {
    let mut hand = Vec::with_capacity(known.len() + 1);
    let mut dist = Distribution::default();

    for &card in unseen {
        hand.clear();
        hand.extend_from_slice(known);
        hand.push(card);
        dist.add(best_hand(&hand).rank());
    }

    dist
}

#[cfg(test)]
mod tests {
    use super::*;
    use nextcard_cards::parse_cards;
    use rand::seq::IndexedRandom;

    fn cards(text: &str) -> Vec<Card> {
        parse_cards(text).unwrap()
    }

    #[test]
    fn two_pair_on_the_river() {
        // 46 unseen cards: 4 aces and kings make a full house, the rest two pair.
        let dist = distribution(&cards("Ah Ad Kc Kd 2s 7h")).unwrap();
        assert_eq!(dist.total(), 46);
        assert_eq!(dist.count(HandRank::FullHouse), 4);
        assert_eq!(dist.count(HandRank::TwoPair), 42);

        let odds = dist.ranked();
        assert_eq!(odds.len(), 2);
        assert_eq!(odds[0].rank, HandRank::TwoPair);
        assert!((odds[0].percent - 100.0 * 42.0 / 46.0).abs() < 1e-9);
        assert_eq!(odds[1].rank, HandRank::FullHouse);
    }

    #[test]
    fn pocket_pair_next_card() {
        // 50 unseen cards: 2 sevens make trips, the rest keep the pair.
        let dist = distribution(&cards("7h 7d")).unwrap();
        assert_eq!(dist.total(), 50);
        assert_eq!(dist.count(HandRank::ThreeOfAKind), 2);
        assert_eq!(dist.count(HandRank::Pair), 48);
    }

    #[test]
    fn unsuited_high_cards() {
        // 50 unseen cards: 6 pair an ace or a king, 44 leave a high card.
        let odds = lookahead(&cards("Ah Kd"), 3).unwrap();
        assert_eq!(odds.len(), 2);
        assert_eq!(odds[0].rank, HandRank::HighCard);
        assert!((odds[0].percent - 88.0).abs() < 1e-9);
        assert_eq!(odds[1].rank, HandRank::Pair);
        assert!((odds[1].percent - 12.0).abs() < 1e-9);
    }

    #[test]
    fn flush_draw_on_the_turn() {
        // Four hearts and an open ended straight flush draw on five cards.
        let dist = distribution(&cards("9h Th Jh Qh 2c")).unwrap();
        assert_eq!(dist.total(), 47);

        // Kh and 8h make a straight flush, 7 more hearts a flush.
        assert_eq!(dist.count(HandRank::StraightFlush), 2);
        assert_eq!(dist.count(HandRank::Flush), 7);

        // 6 non heart kings and eights.
        assert_eq!(dist.count(HandRank::Straight), 6);
    }

    #[test]
    fn ties_ordered_by_strength() {
        let mut dist = Distribution::default();
        dist.add(HandRank::Pair);
        dist.add(HandRank::Flush);
        dist.add(HandRank::HighCard);
        dist.add(HandRank::HighCard);

        let ranks = dist.ranked().iter().map(|o| o.rank).collect::<Vec<_>>();
        assert_eq!(
            ranks,
            [HandRank::HighCard, HandRank::Flush, HandRank::Pair]
        );

        assert_eq!(dist.top(1).len(), 1);
        assert_eq!(dist.top(10).len(), 3);
        assert!(dist.top(0).is_empty());
    }

    #[test]
    fn percentages_sum_to_hundred() {
        let deck = Deck::default().into_iter().collect::<Vec<_>>();
        let mut rng = rand::rng();

        for n in 2..=6 {
            let known = deck.choose_multiple(&mut rng, n).copied().collect::<Vec<_>>();
            let dist = distribution(&known).unwrap();
            assert_eq!(dist.total(), Deck::SIZE - n);

            let sum = dist.ranked().iter().map(|o| o.percent).sum::<f64>();
            assert!((sum - 100.0).abs() < 1e-9, "sum={sum} for {known:?}");

            // The next hand is never weaker than the current one.
            let current = best_hand(&known).rank();
            assert!(dist.ranked().iter().all(|o| o.rank >= current));
        }
    }

    #[test]
    fn seven_known_cards() {
        let known = cards("Ah Kd Qc Js 9h 3d 2c");
        let dist = distribution(&known).unwrap();
        assert_eq!(dist.total(), 0);
        assert!(lookahead(&known, 3).unwrap().is_empty());
    }

    #[test]
    fn invalid_known_cards() {
        assert_eq!(
            lookahead(&cards("Ah"), 3),
            Err(EvalError::NotEnoughCards(1))
        );
        assert_eq!(
            lookahead(&cards("Ah Kd Qc Js 9h 3d 2c 4c"), 3),
            Err(EvalError::TooManyCards(8))
        );
        assert!(matches!(
            lookahead(&cards("Ah Ah"), 3),
            Err(EvalError::DuplicateCard(_))
        ));
    }

    #[test]
    fn merge_distributions() {
        let mut d1 = Distribution::default();
        d1.add(HandRank::Pair);
        let mut d2 = Distribution::default();
        d2.add(HandRank::Pair);
        d2.add(HandRank::Straight);

        d1.merge(&d2);
        assert_eq!(d1.total(), 3);
        assert_eq!(d1.count(HandRank::Pair), 2);
        assert_eq!(d1.count(HandRank::Straight), 1);
        assert!((d1.percent(HandRank::Straight) - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(Distribution::default().percent(HandRank::Pair), 0.0);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_tally_matches_sequential() {
        let cards = cards("Ah Ad Kc 9h Th Jh 2s 5c 7d");

        for k in 2..=6 {
            nextcard_cards::for_each_subset(&cards, k, |known| {
                let unseen = Deck::without(known);
                assert_eq!(
                    tally(known, unseen.as_slice()),
                    tally_cards(known, unseen.as_slice()),
                    "{known:?}"
                );
            });
        }
    }
}
