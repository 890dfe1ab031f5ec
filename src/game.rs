//! The round-by-round game state machine.
//!
//! A game starts `Active` in round 1 with the full candidate pool. Each
//! observed (guess, feedback) pair filters the pool and either ends the game
//! (`Solved` or `Failed`) or moves it to the next round. Terminal states
//! accept no further transitions.

use crate::error::WordleError;
use crate::feedback::{compute_feedback, FeedbackPattern};
use crate::pool::{CandidatePool, Vocabulary};
use crate::word::Word;
use std::fmt;

/// Why a game ended without finding the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureReason {
    /// The feedback ruled out every candidate, so some of it was wrong.
    InconsistentFeedback,
    /// The round budget ran out first.
    RoundBudgetExceeded,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::InconsistentFeedback => f.write_str("inconsistent feedback"),
            FailureReason::RoundBudgetExceeded => f.write_str("round budget exceeded"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Active { round: usize },
    Solved { secret: Word, rounds_used: usize },
    Failed(FailureReason),
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Active { round } => write!(f, "active (round {})", round),
            GameStatus::Solved {
                secret,
                rounds_used,
            } => write!(f, "solved {} in {} rounds", secret, rounds_used),
            GameStatus::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

/// Provides the feedback for each guess: a known secret in simulation, or a
/// person reading the real game's colors.
pub trait FeedbackSource {
    fn feedback_for(&mut self, guess: &Word) -> Result<FeedbackPattern, WordleError>;
}

impl<F> FeedbackSource for F
where
    F: FnMut(&Word) -> Result<FeedbackPattern, WordleError>,
{
    fn feedback_for(&mut self, guess: &Word) -> Result<FeedbackPattern, WordleError> {
        self(guess)
    }
}

/// Scores guesses against a secret it knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretOracle {
    secret: Word,
}

impl SecretOracle {
    pub fn new(secret: Word) -> Self {
        Self { secret }
    }

    pub fn secret(&self) -> Word {
        self.secret
    }
}

impl FeedbackSource for SecretOracle {
    fn feedback_for(&mut self, guess: &Word) -> Result<FeedbackPattern, WordleError> {
        Ok(compute_feedback(guess, &self.secret))
    }
}

/// One game in progress (or finished).
#[derive(Debug, Clone)]
pub struct GameState {
    vocabulary: Vocabulary,
    pool: CandidatePool,
    history: Vec<(Word, FeedbackPattern)>,
    round: usize,
    max_rounds: usize,
    status: GameStatus,
}

impl GameState {
    pub fn new(vocabulary: Vocabulary, pool: CandidatePool, max_rounds: usize) -> Self {
        Self {
            vocabulary,
            pool,
            history: Vec::new(),
            round: 1,
            max_rounds,
            status: GameStatus::Active { round: 1 },
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn pool(&self) -> &CandidatePool {
        &self.pool
    }

    pub fn history(&self) -> &[(Word, FeedbackPattern)] {
        &self.history
    }

    /// Current round while active; the last round played once terminal.
    pub fn round(&self) -> usize {
        self.round
    }

    pub fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        matches!(self.status, GameStatus::Active { .. })
    }

    pub fn is_solved(&self) -> bool {
        matches!(self.status, GameStatus::Solved { .. })
    }

    /// Record `feedback` for `guess`, keep only the candidates that agree with
    /// it, and move to the next state.
    ///
    /// Feedback that rules out every candidate is not an error: the game moves
    /// to `Failed(InconsistentFeedback)`. Only a transition out of a terminal
    /// state fails, with [`WordleError::GameOver`].
    pub fn advance_round(
        mut self,
        guess: Word,
        feedback: FeedbackPattern,
    ) -> Result<Self, WordleError> {
        if !self.is_active() {
            return Err(WordleError::GameOver);
        }

        let before = self.pool.len();
        self.pool.retain_consistent(&guess, feedback);
        self.history.push((guess, feedback));
        log::debug!(
            "round {}: {} -> {} left {} of {} candidates",
            self.round,
            guess,
            feedback,
            self.pool.len(),
            before
        );

        self.status = if self.pool.is_empty() {
            GameStatus::Failed(FailureReason::InconsistentFeedback)
        } else if feedback.is_win() {
            // Only the guess itself answers all-correct, so the pool is {guess}.
            GameStatus::Solved {
                secret: guess,
                rounds_used: self.round,
            }
        } else if self.round >= self.max_rounds {
            GameStatus::Failed(FailureReason::RoundBudgetExceeded)
        } else {
            self.round += 1;
            GameStatus::Active { round: self.round }
        };

        if !self.is_active() {
            log::debug!("game over: {}", self.status);
        }
        Ok(self)
    }
}
