// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Nextcard CLI, prints the best hand and the next card odds.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result, bail};
use clap::Parser;

use nextcard_eval::{Card, Config, parse_cards, validate};

pub mod report;

/// The maximum number of hole cards.
const MAX_HOLE_CARDS: usize = 2;

/// The maximum number of board cards.
const MAX_BOARD_CARDS: usize = 5;

#[derive(Debug, Parser)]
struct Cli {
    /// The player hole cards, for example "Ah Kd".
    #[clap(long)]
    hole: Option<String>,
    /// The board cards, for example "Qs Js 2h".
    #[clap(long, short)]
    board: Option<String>,
    /// The number of next card hands to show.
    #[clap(long, short, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=9))]
    top: u8,
    /// Print the report as JSON.
    #[clap(long)]
    json: bool,
    /// Increase logging verbosity.
    #[clap(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Returns the hole cards followed by the board cards.
    fn cards(&self) -> Result<Vec<Card>> {
        let hole = parse_cards(self.hole.as_deref().unwrap_or_default())
            .context("Invalid hole cards")?;
        if hole.len() > MAX_HOLE_CARDS {
            bail!("Too many hole cards: {}, max {MAX_HOLE_CARDS}", hole.len());
        }

        let board = parse_cards(self.board.as_deref().unwrap_or_default())
            .context("Invalid board cards")?;
        if board.len() > MAX_BOARD_CARDS {
            bail!("Too many board cards: {}, max {MAX_BOARD_CARDS}", board.len());
        }

        let mut cards = hole;
        cards.extend(board);

        // Less than two cards is a hand still being selected.
        if cards.len() >= 2 {
            validate(&cards).context("Invalid cards")?;
        }

        Ok(cards)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let config = Config {
        top_k: cli.top as usize,
    };

    let report = report::Report::new(cli.cards()?, &config);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("nextcard").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn hole_then_board() {
        let cards = cli(&["--board", "Qs Js Ts", "--hole", "As Ks"])
            .cards()
            .unwrap();
        let names = cards.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        assert_eq!(names, ["As", "Ks", "Qs", "Js", "Ts"]);
    }

    #[test]
    fn slot_limits() {
        assert!(cli(&["--hole", "As Ks Qs"]).cards().is_err());
        assert!(cli(&["--hole", "As", "--board", "2c 3c 4c 5c 6c 7c"]).cards().is_err());
        assert!(cli(&["--hole", "As Ks", "--board", "As"]).cards().is_err());
        assert!(cli(&["--hole", "Ax"]).cards().is_err());
    }

    #[test]
    fn partial_selection() {
        assert!(cli(&[]).cards().unwrap().is_empty());
        assert_eq!(cli(&["--board", "7h"]).cards().unwrap().len(), 1);
    }

    #[test]
    fn top_range() {
        assert_eq!(cli(&["--top", "5"]).top, 5);
        assert!(Cli::try_parse_from(["nextcard", "--top", "0"]).is_err());
        assert!(Cli::try_parse_from(["nextcard", "--top", "10"]).is_err());
    }
}
