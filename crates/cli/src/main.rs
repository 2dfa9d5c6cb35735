// Copyright (C) 2025 Filter Poker developers.
// SPDX-License-Identifier: Apache-2.0

//! Filter Poker console game.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::time::Duration;

mod game;
mod grid;
mod terminal;

use game::Game;

#[derive(Debug, Parser)]
struct Cli {
    /// Seed for a reproducible shuffle.
    #[clap(long)]
    seed: Option<u64>,
    /// Delay between draws in milliseconds.
    #[clap(long, default_value_t = 800)]
    delay_ms: u64,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let game = Game::new(&mut rng);
    game::run(game, Duration::from_millis(cli.delay_ms))
}
