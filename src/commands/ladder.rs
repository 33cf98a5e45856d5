//! Word ladder commands

use crate::core::GameError;
use crate::engine::Engine;
use std::time::{Duration, Instant};

/// Result of a minimum ladder search
pub struct LadderResult {
    pub start: String,
    pub end: String,
    pub ladder: Vec<String>,
    pub duration: Duration,
}

impl LadderResult {
    /// Number of single-letter changes in the ladder
    #[must_use]
    pub fn steps(&self) -> Option<usize> {
        self.ladder.len().checked_sub(1)
    }
}

/// Result of checking a proposed ladder
pub struct CheckResult {
    pub sequence: Vec<String>,
    pub valid: bool,
}

/// Search for a minimum ladder, timing the search
///
/// # Errors
///
/// Returns an error if no lexicon is loaded.
pub fn solve_ladder(engine: &Engine, start: &str, end: &str) -> Result<LadderResult, GameError> {
    let timer = Instant::now();
    let ladder = engine.min_ladder(start, end)?;

    Ok(LadderResult {
        start: start.to_ascii_uppercase(),
        end: end.to_ascii_uppercase(),
        ladder,
        duration: timer.elapsed(),
    })
}

/// Check whether a sequence of words forms a ladder
///
/// # Errors
///
/// Returns an error if no lexicon is loaded.
pub fn check_ladder(engine: &Engine, sequence: &[String]) -> Result<CheckResult, GameError> {
    let valid = engine.is_word_ladder(sequence)?;
    Ok(CheckResult {
        sequence: sequence.iter().map(|w| w.to_ascii_uppercase()).collect(),
        valid,
    })
}
