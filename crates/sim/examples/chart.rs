// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// ```bash
// $ cargo r --release --example chart -- --trials 20000
// ```
use anyhow::Result;
use clap::Parser;
use std::time::Instant;

use equilab_sim::*;

fn separator() {
    print!("|");
    for _ in 0..13 {
        print!("-----|");
    }
    println!();
}

/// Preflop equity against a random hand for each starting hand.
#[derive(Debug, Parser)]
struct Cli {
    /// Number of trials for each starting hand.
    #[clap(long, short, default_value_t = 10_000)]
    trials: usize,
    /// Number of parallel tasks.
    #[clap(long, default_value_t = 4)]
    tasks: usize,
    /// Random seed.
    #[clap(long, short)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config {
        trials: cli.trials,
        tasks: cli.tasks,
        seed: cli.seed,
    };

    let cancel = CancelToken::new();
    let now = Instant::now();

    separator();

    for r1 in Rank::ranks().rev() {
        let mut labels = Vec::with_capacity(13);
        let mut equities = Vec::with_capacity(13);

        for r2 in Rank::ranks().rev() {
            let (c1, c2) = if r1 <= r2 {
                // Offsuit or pair
                (Card::new(r2, Suit::Hearts), Card::new(r1, Suit::Spades))
            } else {
                // Suited cards
                (Card::new(r1, Suit::Hearts), Card::new(r2, Suit::Hearts))
            };

            if c1.rank() == c2.rank() {
                labels.push(format!("{}{} ", c1.rank(), c2.rank()));
            } else if c1.suit() == c2.suit() {
                labels.push(format!("{}{}s", c1.rank(), c2.rank()));
            } else {
                labels.push(format!("{}{}o", c1.rank(), c2.rank()));
            }

            let sim = Matchup::new(&[c1, c2], None, &[])?.par_simulate(&config, &cancel)?;
            equities.push(sim.equity() * 100.0);
        }

        print!("|");
        for label in labels {
            print!(" {label} |");
        }
        println!();

        print!("|");
        for equity in &equities {
            print!(" {:2.0}% |", equity.round().min(99.0));
        }
        println!();

        separator();
    }

    println!("Margin: +/- {:.2}%", margin(config.trials) * 100.0);
    println!("Elapsed: {:.3}s", now.elapsed().as_secs_f64());

    Ok(())
}
