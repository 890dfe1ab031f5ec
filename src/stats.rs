//! Benchmarking the solver over a list of secrets.
//!
//! Games are played one after another; each gets its own state and only the
//! solver's word lists are shared. [`run_sampled`] repeats the benchmark on
//! random samples of the answers and [`summarize`] reports the spread.

use crate::error::WordleError;
use crate::game::{FailureReason, GameStatus, SecretOracle};
use crate::solver::WordleSolver;
use crate::word::Word;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Outcome counts over a batch of simulated games.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkReport {
    /// Rounds used -> number of games solved in that many rounds.
    pub distribution: BTreeMap<usize, usize>,
    pub inconsistent: usize,
    pub over_budget: usize,
    pub elapsed: Duration,
}

impl BenchmarkReport {
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Solved { rounds_used, .. } => {
                *self.distribution.entry(rounds_used).or_insert(0) += 1;
            }
            GameStatus::Failed(FailureReason::InconsistentFeedback) => self.inconsistent += 1,
            GameStatus::Failed(FailureReason::RoundBudgetExceeded) => self.over_budget += 1,
            GameStatus::Active { .. } => {}
        }
    }

    pub fn solved(&self) -> usize {
        self.distribution.values().sum()
    }

    pub fn games(&self) -> usize {
        self.solved() + self.inconsistent + self.over_budget
    }

    /// Fraction of games solved, 0.0 for an empty report.
    pub fn win_rate(&self) -> f64 {
        match self.games() {
            0 => 0.0,
            games => self.solved() as f64 / games as f64,
        }
    }

    /// Mean rounds over solved games.
    pub fn average_rounds(&self) -> f64 {
        let solved = self.solved();
        if solved == 0 {
            return 0.0;
        }
        let rounds: usize = self.distribution.iter().map(|(r, c)| r * c).sum();
        rounds as f64 / solved as f64
    }
}

/// Play one game per secret and tally the outcomes.
pub fn run_benchmark(
    solver: &WordleSolver,
    secrets: &[Word],
) -> Result<BenchmarkReport, WordleError> {
    let start = Instant::now();
    let mut report = BenchmarkReport::default();

    for secret in secrets {
        let state = solver.play(&mut SecretOracle::new(*secret))?;
        report.record(state.status());
    }

    report.elapsed = start.elapsed();
    log::info!(
        "benchmark: {} games, {:.1}% solved, {:.3} average rounds in {:.2?}",
        report.games(),
        report.win_rate() * 100.0,
        report.average_rounds(),
        report.elapsed
    );
    Ok(report)
}

/// Pick `size` distinct secrets at random, or all of them when `size` is
/// larger than the list.
pub fn sample_secrets<R: Rng + ?Sized>(
    secrets: &[Word],
    size: usize,
    rng: &mut R,
) -> Vec<Word> {
    secrets.choose_multiple(rng, size).copied().collect()
}

/// Run `runs` benchmarks, each over a fresh random sample of `sample` secrets.
pub fn run_sampled<R: Rng + ?Sized>(
    solver: &WordleSolver,
    secrets: &[Word],
    sample: usize,
    runs: usize,
    rng: &mut R,
) -> Result<Vec<BenchmarkReport>, WordleError> {
    let mut reports = Vec::with_capacity(runs);
    for run in 1..=runs {
        let picked = sample_secrets(secrets, sample, rng);
        log::info!("run {}/{}: {} secrets", run, runs, picked.len());
        reports.push(run_benchmark(solver, &picked)?);
    }
    Ok(reports)
}

/// Mean and population standard deviation of a series.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Spread {
    pub mean: f64,
    pub std_dev: f64,
}

impl Spread {
    pub fn of(values: impl IntoIterator<Item = f64>) -> Self {
        let values: Vec<f64> = values.into_iter().collect();
        if values.is_empty() {
            return Self::default();
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        Self {
            mean,
            std_dev: variance.sqrt(),
        }
    }
}

/// Spread of the headline numbers across repeated runs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunSummary {
    pub runs: usize,
    pub win_rate: Spread,
    pub average_rounds: Spread,
    pub seconds: Spread,
}

pub fn summarize(reports: &[BenchmarkReport]) -> RunSummary {
    RunSummary {
        runs: reports.len(),
        win_rate: Spread::of(reports.iter().map(BenchmarkReport::win_rate)),
        average_rounds: Spread::of(reports.iter().map(BenchmarkReport::average_rounds)),
        seconds: Spread::of(reports.iter().map(|r| r.elapsed.as_secs_f64())),
    }
}
