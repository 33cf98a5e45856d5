//! Board word commands
//!
//! Enumerate scorable words, locate a single word, and score a submission.

use crate::core::GameError;
use crate::engine::Engine;

/// Result of enumerating every scorable word on the board
pub struct WordsResult {
    pub min_length: usize,
    pub words: Vec<String>,
    pub total_score: usize,
}

/// Result of locating one word on the board
pub struct LocateResult {
    pub word: String,
    pub path: Vec<usize>,
}

impl LocateResult {
    #[must_use]
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Result of scoring a submitted list of words
pub struct ScoreResult {
    pub min_length: usize,
    pub entries: Vec<(String, usize)>,
    pub total: usize,
}

/// Find every scorable word and the score of finding all of them
///
/// # Errors
///
/// Returns an error if `min_length` is zero or no lexicon is loaded.
pub fn find_words(engine: &Engine, min_length: usize) -> Result<WordsResult, GameError> {
    let words = engine.all_scorable_words(min_length)?;
    let total_score = engine.score_for_words(&words, min_length)?;

    Ok(WordsResult {
        min_length,
        words: words.into_iter().collect(),
        total_score,
    })
}

/// Locate a word on the board
///
/// # Errors
///
/// Returns an error if no lexicon is loaded.
pub fn locate_word(engine: &Engine, word: &str) -> Result<LocateResult, GameError> {
    let path = engine.is_on_board(word)?;
    Ok(LocateResult {
        word: word.to_ascii_uppercase(),
        path,
    })
}

/// Score a list of words, keeping the per-word breakdown
///
/// # Errors
///
/// Returns an error if `min_length` is zero or no lexicon is loaded.
pub fn score_words(
    engine: &Engine,
    words: &[String],
    min_length: usize,
) -> Result<ScoreResult, GameError> {
    let entries = engine.score_breakdown(words, min_length)?;
    let total = entries.iter().map(|(_, points)| points).sum();

    Ok(ScoreResult {
        min_length,
        entries,
        total,
    })
}
