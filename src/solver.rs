//! Entropy-maximizing guess selection.
//!
//! Every allowed guess is scored by the expected information (entropy) of the
//! feedback it would receive over the words still possible. The highest score
//! wins; ties go to a word that could itself be the answer, then to the
//! lexicographically smallest word, so the choice is reproducible.

use crate::config::SolverConfig;
use crate::distribution::estimate_distribution;
use crate::entropy::{entropy, expected_remaining};
use crate::error::WordleError;
use crate::game::{FeedbackSource, GameState, SecretOracle};
use crate::pool::{CandidatePool, Vocabulary};
use crate::word::Word;
use once_cell::sync::OnceCell;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Result of analyzing a potential guess
#[derive(Debug, Clone, PartialEq)]
pub struct GuessAnalysis {
    pub word: Word,
    pub entropy: f64,
    pub expected_remaining: f64,
    pub is_possible_answer: bool,
}

impl GuessAnalysis {
    fn score(word: &Word, pool: &CandidatePool) -> Self {
        let distribution = estimate_distribution(word, pool);
        let entropy = entropy(&distribution, pool.len());
        Self {
            word: *word,
            entropy,
            expected_remaining: expected_remaining(pool.len(), entropy),
            is_possible_answer: pool.contains(word),
        }
    }
}

/// Total order over analyses, best guess first.
pub fn rank_order(a: &GuessAnalysis, b: &GuessAnalysis) -> Ordering {
    b.entropy
        .total_cmp(&a.entropy)
        .then_with(|| b.is_possible_answer.cmp(&a.is_possible_answer))
        .then_with(|| a.word.cmp(&b.word))
}

/// Answers that need no vocabulary scan. One candidate is simply guessed. With
/// two, guessing either one already splits them (1 bit, the most possible),
/// so the tie-break settles on the smaller.
fn forced_guess(pool: &CandidatePool) -> Result<Option<GuessAnalysis>, WordleError> {
    match pool.words() {
        [] => Err(WordleError::InconsistentState),
        [only] => Ok(Some(GuessAnalysis {
            word: *only,
            entropy: 0.0,
            expected_remaining: 1.0,
            is_possible_answer: true,
        })),
        [first, _] => Ok(Some(GuessAnalysis {
            word: *first,
            entropy: 1.0,
            expected_remaining: 1.0,
            is_possible_answer: true,
        })),
        _ => Ok(None),
    }
}

/// Words to score: the vocabulary, or the pool itself when no vocabulary was
/// supplied.
fn guess_space<'a>(vocabulary: &'a Vocabulary, pool: &'a CandidatePool) -> &'a [Word] {
    if vocabulary.is_empty() {
        pool.words()
    } else {
        vocabulary.words()
    }
}

fn score_all(guesses: &[Word], pool: &CandidatePool, parallel: bool) -> Vec<GuessAnalysis> {
    if parallel {
        guesses
            .par_iter()
            .map(|word| GuessAnalysis::score(word, pool))
            .collect()
    } else {
        guesses
            .iter()
            .map(|word| GuessAnalysis::score(word, pool))
            .collect()
    }
}

/// Best guess over `pool`, scanning `vocabulary` on the rayon pool when
/// `parallel` is set.
pub fn best_guess(
    vocabulary: &Vocabulary,
    pool: &CandidatePool,
    parallel: bool,
) -> Result<GuessAnalysis, WordleError> {
    if let Some(forced) = forced_guess(pool)? {
        log::debug!("{} candidates left, guessing {}", pool.len(), forced.word);
        return Ok(forced);
    }

    let guesses = guess_space(vocabulary, pool);
    let best = if parallel {
        guesses
            .par_iter()
            .map(|word| GuessAnalysis::score(word, pool))
            .min_by(rank_order)
    } else {
        guesses
            .iter()
            .map(|word| GuessAnalysis::score(word, pool))
            .min_by(rank_order)
    };

    let best = best.ok_or(WordleError::InconsistentState)?;
    log::debug!(
        "selected {} ({:.3} bits) from {} guesses over {} candidates",
        best.word,
        best.entropy,
        guesses.len(),
        pool.len()
    );
    Ok(best)
}

/// The highest-entropy guess from `vocabulary` given the candidates in
/// `pool`.
///
/// Fails with [`WordleError::InconsistentState`] when the pool is empty: the
/// feedback seen so far matches no word.
pub fn select_guess(vocabulary: &Vocabulary, pool: &CandidatePool) -> Result<Word, WordleError> {
    best_guess(vocabulary, pool, SolverConfig::default().parallel_scan).map(|a| a.word)
}

/// The `n` best guesses, best first, in the order [`select_guess`] ranks them.
///
/// Always scores the whole guess space, even when one or two candidates are
/// left; the first entry is then the word [`select_guess`] returns.
pub fn rank_guesses(
    vocabulary: &Vocabulary,
    pool: &CandidatePool,
    n: usize,
    parallel: bool,
) -> Result<Vec<GuessAnalysis>, WordleError> {
    if pool.is_empty() {
        return Err(WordleError::InconsistentState);
    }

    let mut analyses = score_all(guess_space(vocabulary, pool), pool, parallel);
    if parallel {
        analyses.par_sort_unstable_by(rank_order);
    } else {
        analyses.sort_unstable_by(rank_order);
    }
    analyses.truncate(n);
    Ok(analyses)
}

/// The main Wordle solver: a shared vocabulary, the answer list games start
/// from, and the first-round guess, computed once.
#[derive(Debug, Clone)]
pub struct WordleSolver {
    vocabulary: Vocabulary,
    answers: CandidatePool,
    config: SolverConfig,
    opening: OnceCell<GuessAnalysis>,
}

impl WordleSolver {
    pub fn new(vocabulary: Vocabulary, answers: CandidatePool, config: SolverConfig) -> Self {
        Self {
            vocabulary,
            answers,
            config,
            opening: OnceCell::new(),
        }
    }

    /// A solver where every word is both a legal guess and a possible answer.
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let vocabulary = Vocabulary::new(words);
        let answers = CandidatePool::from(&vocabulary);
        Self::new(vocabulary, answers, SolverConfig::default())
    }

    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn answers(&self) -> &CandidatePool {
        &self.answers
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// A fresh game over the full answer list.
    pub fn new_game(&self) -> GameState {
        GameState::new(
            self.vocabulary.clone(),
            self.answers.clone(),
            self.config.max_rounds,
        )
    }

    /// The first-round guess. It depends only on the word lists, so it is
    /// scored once and reused by every game.
    pub fn opening_guess(&self) -> Result<GuessAnalysis, WordleError> {
        self.opening
            .get_or_try_init(|| {
                log::debug!("scoring opening guess");
                best_guess(&self.vocabulary, &self.answers, self.config.parallel_scan)
            })
            .cloned()
    }

    /// Best guess for the current round of `state`.
    pub fn next_guess(&self, state: &GameState) -> Result<GuessAnalysis, WordleError> {
        if !state.is_active() {
            return Err(WordleError::GameOver);
        }
        if state.history().is_empty()
            && state.vocabulary() == &self.vocabulary
            && state.pool() == &self.answers
        {
            return self.opening_guess();
        }
        best_guess(state.vocabulary(), state.pool(), self.config.parallel_scan)
    }

    /// The `n` best guesses for the current round of `state`.
    pub fn top_guesses(
        &self,
        state: &GameState,
        n: usize,
    ) -> Result<Vec<GuessAnalysis>, WordleError> {
        rank_guesses(state.vocabulary(), state.pool(), n, self.config.parallel_scan)
    }

    /// Play one game to the end, asking `source` for the feedback to each
    /// guess. Returns the terminal state.
    pub fn play<S: FeedbackSource>(&self, source: &mut S) -> Result<GameState, WordleError> {
        let mut state = self.new_game();
        while state.is_active() {
            let guess = self.next_guess(&state)?.word;
            let feedback = source.feedback_for(&guess)?;
            state = state.advance_round(guess, feedback)?;
        }
        Ok(state)
    }

    /// Solve a puzzle knowing the target word (for testing/benchmarking)
    pub fn solve_for_target(&self, target: &str) -> Result<GameState, WordleError> {
        let mut oracle = SecretOracle::new(Word::new(target)?);
        self.play(&mut oracle)
    }
}
