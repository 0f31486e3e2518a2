// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Simulation report.
use anyhow::Result;
use std::{
    fmt::Write as _,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use equilab_sim::{BOARD_SIZE, Card, Matchup, Simulation, best_hand};

/// A coarse reading of the equity.
pub fn verdict(equity: f64, random_villain: bool) -> &'static str {
    if random_villain {
        if equity > 0.65 {
            "Monster, raise and get it in"
        } else if equity > 0.55 {
            "Strong hand, play it aggressively"
        } else if equity > 0.45 {
            "Marginal, depends on position"
        } else {
            "Weak hand, folding is fine"
        }
    } else if equity > 0.60 {
        "Clear favourite"
    } else if equity > 0.45 {
        "Close to a coin flip"
    } else {
        "Underdog"
    }
}

/// Renders the simulation results.
pub fn render(matchup: &Matchup, sim: &Simulation) -> Result<String> {
    let mut out = String::new();

    let villain = matchup
        .villain()
        .map(|v| cards_to_string(&v))
        .unwrap_or_else(|| "random".to_string());

    writeln!(out, "Hero:     {}", cards_to_string(&matchup.hero()))?;
    writeln!(out, "Villain:  {villain}")?;
    if !matchup.board().is_empty() {
        writeln!(out, "Board:    {}", cards_to_string(matchup.board()))?;
    }

    // With a complete board show the made hands.
    if matchup.board().len() == BOARD_SIZE {
        let mut hands = vec![("Hero", matchup.hero())];
        if let Some(villain) = matchup.villain() {
            hands.push(("Villain", villain));
        }

        for (name, hole) in hands {
            let cards = [&hole[..], matchup.board()].concat();
            let (score, best) = best_hand(&cards)?;
            writeln!(
                out,
                "{:<9} {} ({})",
                format!("{name}:"),
                score.category(),
                cards_to_string(&best)
            )?;
        }
    }

    let tally = sim.tally();
    let (lo, hi) = sim.confidence_band();
    writeln!(out, "Trials:   {}", sim.trials())?;
    writeln!(
        out,
        "Outcomes: {} wins, {} splits, {} losses",
        tally.wins, tally.splits, tally.losses
    )?;
    writeln!(out, "Equity:   {:.2}%", sim.equity() * 100.0)?;
    writeln!(out, "Margin:   +/- {:.2}% (95%)", sim.margin() * 100.0)?;
    writeln!(out, "Band:     {:.2}% - {:.2}%", lo * 100.0, hi * 100.0)?;
    writeln!(
        out,
        "Verdict:  {}",
        verdict(sim.equity(), matchup.villain().is_none())
    )?;

    Ok(out)
}

/// Writes the running equity as `trial,equity` rows.
pub fn write_history(path: &Path, sim: &Simulation) -> Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "trial,equity")?;
    for (idx, equity) in sim.history().iter().enumerate() {
        writeln!(w, "{},{equity}", idx + 1)?;
    }

    w.flush()?;
    Ok(())
}

fn cards_to_string(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use equilab_sim::parse_cards;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn verdicts() {
        assert_eq!(verdict(0.85, true), "Monster, raise and get it in");
        assert_eq!(verdict(0.60, true), "Strong hand, play it aggressively");
        assert_eq!(verdict(0.50, true), "Marginal, depends on position");
        assert_eq!(verdict(0.30, true), "Weak hand, folding is fine");

        assert_eq!(verdict(0.81, false), "Clear favourite");
        assert_eq!(verdict(0.60, false), "Close to a coin flip");
        assert_eq!(verdict(0.45, false), "Underdog");
    }

    #[test]
    fn render_complete_board() {
        let hero = parse_cards("Ah Ad").unwrap();
        let villain = parse_cards("Kc Kd").unwrap();
        let board = parse_cards("2s 7h 9c Jd 3c").unwrap();
        let m = Matchup::new(&hero, Some(&villain[..]), &board).unwrap();

        let mut rng = StdRng::seed_from_u64(1);
        let sim = m.simulate(100, &mut rng).unwrap();
        let report = render(&m, &sim).unwrap();

        assert!(report.contains("Hero:     Ah Ad"));
        assert!(report.contains("Villain:  Kc Kd"));
        assert!(report.contains("Board:    2s 7h 9c Jd 3c"));
        assert!(report.contains("Hero:     One Pair"));
        assert!(report.contains("Equity:   100.00%"));
        assert!(report.contains("Margin:   +/- 13.60% (95%)"));
        assert!(report.contains("100 wins, 0 splits, 0 losses"));
        assert!(report.contains("Verdict:  Clear favourite"));
    }

    #[test]
    fn history_file() {
        let hero = parse_cards("Ah Kh").unwrap();
        let m = Matchup::new(&hero, None, &[]).unwrap();

        let mut rng = StdRng::seed_from_u64(1);
        let sim = m.simulate(10, &mut rng).unwrap();

        let path = std::env::temp_dir().join(format!("equilab-history-{}.csv", std::process::id()));
        write_history(&path, &sim).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "trial,equity");
        assert_eq!(lines[10], format!("10,{}", sim.equity()));
    }
}
