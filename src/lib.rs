//! # Wordle Entropy
//!
//! An entropy-maximizing guess engine for five-letter word games.
//!
//! Each round the engine scores every allowed guess by the Shannon entropy of
//! the feedback patterns it would produce over the words still possible, picks
//! the best one, and narrows the candidate pool with the feedback it receives.
//!
//! The core (`word`, `feedback`, `pool`, `distribution`, `entropy`, `solver`,
//! `game`) never performs I/O. Word lists come in through `loader`, and
//! `stats` plays sequential benchmark games on top of the core.

pub mod config;
pub mod distribution;
pub mod entropy;
pub mod error;
pub mod feedback;
pub mod game;
pub mod loader;
pub mod pool;
pub mod solver;
pub mod stats;
pub mod word;

pub use config::{SolverConfig, WordListConfig};
pub use distribution::{estimate_distribution, Distribution};
pub use entropy::entropy;
pub use error::WordleError;
pub use feedback::{compute_feedback, Feedback, FeedbackPattern};
pub use game::{FailureReason, FeedbackSource, GameState, GameStatus, SecretOracle};
pub use pool::{CandidatePool, Vocabulary};
pub use solver::{rank_guesses, select_guess, GuessAnalysis, WordleSolver};
pub use word::Word;

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

/// Number of rounds a standard game allows
pub const MAX_ROUNDS: usize = 6;
