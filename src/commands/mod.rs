//! Command implementations

pub mod ladder;
pub mod words;

pub use ladder::{CheckResult, LadderResult, check_ladder, solve_ladder};
pub use words::{LocateResult, ScoreResult, WordsResult, find_words, locate_word, score_words};
