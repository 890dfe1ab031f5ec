//! The validated five-letter word type every other module works with.

use crate::error::WordleError;
use crate::WORD_LENGTH;
use std::fmt;
use std::str::FromStr;

/// A five-letter word, stored as lowercase ASCII bytes.
///
/// Ordering is lexicographic, which the guess selector uses as its final
/// tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Normalize and validate `s`. Surrounding whitespace is trimmed and
    /// letters are lowercased; anything other than five letters a-z fails.
    pub fn new(s: &str) -> Result<Self, WordleError> {
        let trimmed = s.trim();
        let bytes = trimmed.as_bytes();
        if bytes.len() != WORD_LENGTH || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(WordleError::InvalidWord(s.to_string()));
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, b) in letters.iter_mut().zip(bytes) {
            *slot = b.to_ascii_lowercase();
        }
        Ok(Self(letters))
    }

    pub fn as_bytes(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        // Construction only admits ASCII letters.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Index of the letter at `pos` within the alphabet ('a' = 0).
    #[inline]
    pub fn letter_idx(&self, pos: usize) -> usize {
        (self.0[pos] - b'a') as usize
    }

    pub fn to_uppercase(&self) -> String {
        self.as_str().to_ascii_uppercase()
    }
}

impl FromStr for Word {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Word {
    type Error = WordleError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
