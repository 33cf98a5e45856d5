//! Core domain types
//!
//! The lexicon oracle, the tile board and the error type shared by both
//! search strategies. Everything here is read-only once built.

mod board;
mod error;
mod lexicon;
mod path;

pub use board::{Board, DEFAULT_TILES, Position};
pub use error::{GameError, check_min_length};
pub use lexicon::{Lexicon, normalize};
pub use path::Path;
