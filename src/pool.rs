//! Word sets: the shared guess vocabulary and the per-game candidate pool.

use crate::feedback::{compute_feedback, FeedbackPattern};
use crate::word::Word;
use std::sync::Arc;

fn sorted_unique(words: impl IntoIterator<Item = Word>) -> Vec<Word> {
    let mut words: Vec<Word> = words.into_iter().collect();
    words.sort_unstable();
    words.dedup();
    words
}

/// Every word that may be submitted as a guess.
///
/// Immutable after construction and cheap to clone, so any number of games
/// can read the same list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    words: Arc<[Word]>,
}

impl Vocabulary {
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        Self {
            words: sorted_unique(words).into(),
        }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.words.binary_search(word).is_ok()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl FromIterator<Word> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// The words still possible as the secret, kept sorted and deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CandidatePool {
    words: Vec<Word>,
}

impl CandidatePool {
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        Self {
            words: sorted_unique(words),
        }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.words.binary_search(word).is_ok()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Keep exactly the candidates that would have produced `pattern` for
    /// `guess`. Never grows the pool.
    pub fn retain_consistent(&mut self, guess: &Word, pattern: FeedbackPattern) {
        self.words
            .retain(|candidate| compute_feedback(guess, candidate) == pattern);
    }

    /// Like [`retain_consistent`](Self::retain_consistent), but leaves `self`
    /// untouched.
    pub fn filtered(&self, guess: &Word, pattern: FeedbackPattern) -> Self {
        let mut next = self.clone();
        next.retain_consistent(guess, pattern);
        next
    }
}

impl From<&Vocabulary> for CandidatePool {
    fn from(vocabulary: &Vocabulary) -> Self {
        Self {
            words: vocabulary.words().to_vec(),
        }
    }
}

impl FromIterator<Word> for CandidatePool {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter)
    }
}
