// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel Monte Carlo simulation.
use anyhow::{Result, anyhow, bail};
use log::{debug, info};
use rand::{prelude::*, rngs::SmallRng};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
};

use crate::{
    matchup::{Dealer, Matchup},
    simulate::{Accumulator, Outcome, Simulation},
};

/// Parallel simulation configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of trials.
    pub trials: usize,
    /// Number of parallel tasks.
    pub tasks: usize,
    /// The random seed, `None` seeds each task from the OS.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trials: 100_000,
            tasks: thread::available_parallelism().map_or(1, |n| n.get()),
            seed: None,
        }
    }
}

/// A token to stop a running simulation.
///
/// Clones share the same flag, tasks check it between trials.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Creates a new token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Asks the simulation to stop.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Checks if the simulation has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl Matchup {
    /// Runs the trials on `config.tasks` parallel tasks.
    ///
    /// Each task runs a contiguous range of trials with its own generator and
    /// keeps its outcomes in order, the history is built from the outcomes in
    /// trial order so that a seeded run gives the same result for the same
    /// number of tasks. A cancelled simulation returns an error.
    pub fn par_simulate(&self, config: &Config, cancel: &CancelToken) -> Result<Simulation> {
        if config.trials == 0 {
            bail!("Simulation needs at least one trial");
        }

        if config.tasks == 0 {
            bail!("Simulation needs at least one task");
        }

        let trials = config.trials;
        let num_tasks = config.tasks.min(trials);
        let trials_per_task = trials.div_ceil(num_tasks);

        // Task generators are derived in task order from the seed.
        let rngs = match config.seed {
            Some(seed) => {
                let mut seeder = StdRng::seed_from_u64(seed);
                (0..num_tasks)
                    .map(|_| SmallRng::from_rng(&mut seeder))
                    .collect::<Vec<_>>()
            }
            None => (0..num_tasks)
                .map(|_| SmallRng::from_os_rng())
                .collect::<Vec<_>>(),
        };

        debug!("Simulating {trials} trials on {num_tasks} tasks");

        let outcomes = thread::scope(|s| {
            let handles = rngs
                .into_iter()
                .enumerate()
                .map(|(task_id, mut rng)| {
                    let start = (task_id * trials_per_task).min(trials);
                    let end = (start + trials_per_task).min(trials);
                    s.spawn(move || -> Result<Vec<Outcome>> {
                        let mut dealer = Dealer::new(self);
                        let mut outcomes = Vec::with_capacity(end - start);
                        for _ in start..end {
                            if cancel.is_cancelled() {
                                bail!("Simulation cancelled");
                            }

                            outcomes.push(dealer.play(&mut rng)?);
                        }

                        debug!("Task {task_id} completed {} trials", outcomes.len());
                        Ok(outcomes)
                    })
                })
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .map(|h| h.join().map_err(|_| anyhow!("Simulation task panicked"))?)
                .collect::<Result<Vec<_>>>()
        })?;

        let mut acc = Accumulator::with_capacity(trials);
        for outcome in outcomes.into_iter().flatten() {
            acc.push(outcome);
        }

        let sim = acc.finish();
        info!(
            "Equity {:.4} +/- {:.4} after {trials} trials on {num_tasks} tasks",
            sim.equity(),
            sim.margin()
        );

        Ok(sim)
    }
}
