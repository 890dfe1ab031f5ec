//! Solver and word-list configuration.
//!
//! Nothing in the engine reads the environment or hard-codes a file name; the
//! binary fills these structs from its command line (and `WORDLE_*`
//! environment variables) and hands them down.

use crate::MAX_ROUNDS;
use std::path::PathBuf;

/// Knobs for the guess engine and round controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Rounds allowed before a game counts as lost.
    pub max_rounds: usize,
    /// Score the vocabulary on the rayon pool. The chosen guess is the same
    /// either way.
    pub parallel_scan: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_rounds: MAX_ROUNDS,
            parallel_scan: true,
        }
    }
}

impl SolverConfig {
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn sequential(mut self) -> Self {
        self.parallel_scan = false;
        self
    }
}

/// Where the word lists live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordListConfig {
    /// One allowed guess per line.
    pub vocabulary: PathBuf,
    /// Possible secrets, one per line. Defaults to the vocabulary.
    pub answers: Option<PathBuf>,
}

impl WordListConfig {
    pub fn new(vocabulary: impl Into<PathBuf>) -> Self {
        Self {
            vocabulary: vocabulary.into(),
            answers: None,
        }
    }

    pub fn with_answers(mut self, answers: impl Into<PathBuf>) -> Self {
        self.answers = Some(answers.into());
        self
    }
}
