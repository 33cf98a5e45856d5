//! Scoring of submitted words
//!
//! A word scores only if it is long enough, in the lexicon, and spelled by
//! some path on the board. It earns one point at the minimum length plus one
//! point per extra character.

use super::finder::WordFinder;
use crate::core::{GameError, check_min_length, normalize};
use rayon::prelude::*;
use std::collections::BTreeSet;

/// Points for a word of the given length, ignoring board and lexicon checks
///
/// # Examples
/// ```
/// use word_games::search::points;
///
/// assert_eq!(points("CAT", 3), 1);
/// assert_eq!(points("CAPE", 3), 2);
/// assert_eq!(points("AT", 3), 0);
/// ```
#[must_use]
pub fn points(word: &str, min_length: usize) -> usize {
    let length = word.chars().count();
    if length >= min_length {
        length - min_length + 1
    } else {
        0
    }
}

/// Points a single word earns on this board (zero if it is not scorable)
fn scorable_points(finder: &WordFinder<'_>, word: &str, min_length: usize) -> usize {
    if word.chars().count() >= min_length
        && finder.lexicon().is_word(word)
        && !finder.locate(word).is_empty()
    {
        points(word, min_length)
    } else {
        0
    }
}

/// Normalize submitted words into a de-duplicated sorted set
fn canonical_set<I, S>(words: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words.into_iter().map(|w| normalize(w.as_ref())).collect()
}

/// Total score for a set of words
///
/// Submitted words are normalized and de-duplicated first.
///
/// # Errors
/// Returns `GameError::InvalidArgument` if `min_length` is zero.
pub fn score<I, S>(finder: &WordFinder<'_>, words: I, min_length: usize) -> Result<usize, GameError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    check_min_length(min_length)?;

    let total = canonical_set(words)
        .par_iter()
        .map(|word| scorable_points(finder, word, min_length))
        .sum();
    Ok(total)
}

/// Per-word breakdown of a score, in sorted word order
///
/// # Errors
/// Returns `GameError::InvalidArgument` if `min_length` is zero.
pub fn score_each<I, S>(
    finder: &WordFinder<'_>,
    words: I,
    min_length: usize,
) -> Result<Vec<(String, usize)>, GameError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    check_min_length(min_length)?;

    Ok(canonical_set(words)
        .into_par_iter()
        .map(|word| {
            let earned = scorable_points(finder, &word, min_length);
            (word, earned)
        })
        .collect())
}
