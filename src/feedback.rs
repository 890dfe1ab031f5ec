//! Feedback simulation for a guess against a secret.
//!
//! This module computes the per-letter feedback pattern (green/yellow/gray)
//! a guess receives, following the official duplicate-letter rules.

use crate::error::WordleError;
use crate::word::Word;
use crate::WORD_LENGTH;
use std::fmt::{self, Write};

const ALPHABET_SIZE: usize = 26;

/// The mark one guess letter receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Right letter, right position (green)
    Correct,
    /// In the secret, elsewhere (yellow)
    Present,
    /// Not in the secret, or every copy already marked (gray)
    Absent,
}

impl Feedback {
    /// Tile shown for this mark.
    pub fn emoji(self) -> char {
        match self {
            Feedback::Correct => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬛',
        }
    }

    /// Read a typed mark: `g`/`2` green, `y`/`1` yellow, `b`/`x`/`0` gray.
    pub fn from_mark(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' | '2' => Some(Feedback::Correct),
            'y' | '1' => Some(Feedback::Present),
            'b' | 'x' | '0' => Some(Feedback::Absent),
            _ => None,
        }
    }

    fn digit(self) -> u8 {
        match self {
            Feedback::Absent => 0,
            Feedback::Present => 1,
            Feedback::Correct => 2,
        }
    }

    fn from_digit(digit: u8) -> Self {
        match digit {
            0 => Feedback::Absent,
            1 => Feedback::Present,
            _ => Feedback::Correct,
        }
    }
}

/// The marks for a whole guess, packed base 3 with position 0 as the least
/// significant digit. Values run 0..243, so a pattern can index a dense
/// histogram directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeedbackPattern(pub u8);

impl FeedbackPattern {
    /// Number of distinct patterns, 3^5.
    pub const NUM_PATTERNS: usize = 243;

    /// Five greens; every digit is 2.
    pub const ALL_CORRECT: Self = Self((Self::NUM_PATTERNS - 1) as u8);

    pub fn new(feedbacks: [Feedback; WORD_LENGTH]) -> Self {
        Self(feedbacks.iter().rev().fold(0, |acc, f| acc * 3 + f.digit()))
    }

    /// Validate both words, then compute the feedback `guess` receives
    /// against `secret`.
    pub fn calculate(guess: &str, secret: &str) -> Result<Self, WordleError> {
        let guess = Word::new(guess)?;
        let secret = Word::new(secret)?;
        Ok(compute_feedback(&guess, &secret))
    }

    /// Unpack into per-position marks.
    pub fn to_feedbacks(self) -> [Feedback; WORD_LENGTH] {
        let mut rest = self.0;
        std::array::from_fn(|_| {
            let digit = rest % 3;
            rest /= 3;
            Feedback::from_digit(digit)
        })
    }

    pub fn is_win(self) -> bool {
        self == Self::ALL_CORRECT
    }

    /// Number of positions marked with `kind`.
    pub fn count(self, kind: Feedback) -> usize {
        self.to_feedbacks().iter().filter(|&&f| f == kind).count()
    }

    /// Parse five typed marks such as `gybbb` or `21000`.
    pub fn parse(s: &str) -> Result<Self, WordleError> {
        let invalid = || WordleError::InvalidPattern(s.to_string());
        let trimmed = s.trim();
        if trimmed.chars().count() != WORD_LENGTH {
            return Err(invalid());
        }
        let mut feedbacks = [Feedback::Absent; WORD_LENGTH];
        for (slot, c) in feedbacks.iter_mut().zip(trimmed.chars()) {
            *slot = Feedback::from_mark(c).ok_or_else(invalid)?;
        }
        Ok(Self::new(feedbacks))
    }

    /// The pattern as a row of colored tiles.
    pub fn to_emoji_string(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_feedbacks()
            .iter()
            .try_for_each(|mark| f.write_char(mark.emoji()))
    }
}

/// Compute the feedback `guess` receives when the hidden word is `secret`.
///
/// Greens are assigned first and consume their letter from the secret. The
/// second pass hands out yellows only while unconsumed copies of the letter
/// remain, so a doubled letter in the guess never earns more marks than the
/// secret has copies.
pub fn compute_feedback(guess: &Word, secret: &Word) -> FeedbackPattern {
    let guess_bytes = guess.as_bytes();
    let secret_bytes = secret.as_bytes();

    let mut feedback = [Feedback::Absent; WORD_LENGTH];
    let mut secret_remaining = [0u8; ALPHABET_SIZE];

    for i in 0..WORD_LENGTH {
        if guess_bytes[i] == secret_bytes[i] {
            feedback[i] = Feedback::Correct;
        } else {
            secret_remaining[secret.letter_idx(i)] += 1;
        }
    }

    for i in 0..WORD_LENGTH {
        if feedback[i] != Feedback::Correct {
            let idx = guess.letter_idx(i);
            if secret_remaining[idx] > 0 {
                feedback[i] = Feedback::Present;
                secret_remaining[idx] -= 1;
            }
        }
    }

    FeedbackPattern::new(feedback)
}
