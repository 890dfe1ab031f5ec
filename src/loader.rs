//! Reading word lists from disk.

use crate::config::WordListConfig;
use crate::error::WordleError;
use crate::pool::{CandidatePool, Vocabulary};
use crate::word::Word;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{origin}:{line}: bad word list entry")]
    InvalidWord {
        origin: String,
        line: usize,
        #[source]
        source: WordleError,
    },
    #[error("word list {0} contains no words")]
    Empty(String),
}

/// Parse a word list, one word per line. Blank lines and lines starting with
/// `#` are skipped. `origin` names the source in error messages.
pub fn parse_word_list(text: &str, origin: &str) -> Result<Vec<Word>, LoadError> {
    let mut words = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let word = Word::new(line).map_err(|source| LoadError::InvalidWord {
            origin: origin.to_string(),
            line: idx + 1,
            source,
        })?;
        words.push(word);
    }

    if words.is_empty() {
        return Err(LoadError::Empty(origin.to_string()));
    }
    Ok(words)
}

/// Read a word list from a file (one word per line).
pub fn load_word_list(path: &Path) -> Result<Vec<Word>, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let words = parse_word_list(&text, &path.display().to_string())?;
    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Load the vocabulary and the initial candidate pool named by `config`.
/// Without an answers file every vocabulary word is a possible secret; with
/// one, the answers are also added to the vocabulary so every secret can be
/// guessed.
pub fn load(config: &WordListConfig) -> Result<(Vocabulary, CandidatePool), LoadError> {
    let guesses = load_word_list(&config.vocabulary)?;
    let (vocabulary, answers) = match &config.answers {
        Some(path) => {
            let answers = CandidatePool::new(load_word_list(path)?);
            let vocabulary: Vocabulary =
                guesses.into_iter().chain(answers.iter().copied()).collect();
            (vocabulary, answers)
        }
        None => {
            let vocabulary = Vocabulary::new(guesses);
            let answers = CandidatePool::from(&vocabulary);
            (vocabulary, answers)
        }
    };
    log::debug!(
        "vocabulary has {} words, {} possible answers",
        vocabulary.len(),
        answers.len()
    );
    Ok((vocabulary, answers))
}
