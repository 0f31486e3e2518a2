// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equilab equity calculator.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use std::path::PathBuf;

use equilab_sim::{CancelToken, Config, Matchup, Simulation, parse_cards};

pub mod report;

#[derive(Debug, Parser)]
struct Cli {
    /// The hero hole cards, for example "AhKh".
    #[clap(long)]
    hero: String,
    /// The villain hole cards, a random hand if not given.
    #[clap(long, short)]
    villain: Option<String>,
    /// The known board cards, 0, 3, 4 or 5 cards.
    #[clap(long, short, default_value = "")]
    board: String,
    /// Number of trials.
    #[clap(long, short, default_value_t = 100_000, value_parser = clap::value_parser!(u64).range(1..))]
    trials: u64,
    /// Number of parallel tasks, 1 runs the trials on the main thread [default: number of CPUs].
    #[clap(long, value_parser = clap::value_parser!(u16).range(1..=1024))]
    tasks: Option<u16>,
    /// Random seed for reproducible runs.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Writes the running equity to a CSV file.
    #[clap(long)]
    history: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let hero = parse_cards(&cli.hero)?;
    let villain = cli.villain.as_deref().map(parse_cards).transpose()?;
    let board = parse_cards(&cli.board)?;
    let matchup = Matchup::new(&hero, villain.as_deref(), &board)?;

    let config = Config {
        trials: cli.trials as usize,
        tasks: cli
            .tasks
            .map_or_else(|| Config::default().tasks, |t| t as usize),
        seed: cli.seed,
    };

    let sim = run(&matchup, &config)?;
    print!("{}", report::render(&matchup, &sim)?);

    if let Some(path) = cli.history {
        report::write_history(&path, &sim)?;
        info!("History written to {}", path.display());
    }

    Ok(())
}

fn run(matchup: &Matchup, config: &Config) -> Result<Simulation> {
    if config.tasks == 1 {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        matchup.simulate(config.trials, &mut rng)
    } else {
        matchup.par_simulate(config, &CancelToken::new())
    }
}
