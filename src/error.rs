//! Errors raised by the solving engine.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordleError {
    /// The input is not exactly five letters a-z.
    #[error("'{0}' is not a valid word: expected 5 letters a-z")]
    InvalidWord(String),
    /// Human feedback that could not be parsed into a pattern.
    #[error("'{0}' is not a valid feedback pattern: expected 5 of g/y/b")]
    InvalidPattern(String),
    /// No candidate is left that matches the feedback observed so far.
    #[error("no candidate word is consistent with the observed feedback")]
    InconsistentState,
    /// A transition was requested on a solved or failed game.
    #[error("the game is already over")]
    GameOver,
}
