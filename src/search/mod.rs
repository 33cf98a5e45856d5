//! Board word search
//!
//! Depth-first, prefix-pruned enumeration of dictionary words on a tile
//! board, path location for a single word, and scoring.

mod finder;
mod scorer;

pub use finder::WordFinder;
pub use scorer::{points, score, score_each};
