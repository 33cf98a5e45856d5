//! Word Games
//!
//! Lexicon-constrained graph search: depth-first, prefix-pruned word search
//! on a tile board, and breadth-first minimum word ladders.
//!
//! # Quick Start
//!
//! ```rust
//! use word_games::core::Lexicon;
//! use word_games::engine::Engine;
//!
//! let mut engine = Engine::new();
//! engine.set_lexicon(Lexicon::from_words(["cape", "pea", "cat", "cot", "cog", "dog"]));
//!
//! // Default board: E E C A / A L E P / H N B O / Q T T Y
//! let words = engine.all_scorable_words(3).unwrap();
//! assert!(words.contains("CAPE"));
//!
//! let ladder = engine.min_ladder("cat", "dog").unwrap();
//! assert_eq!(ladder.len(), 4);
//! ```

// Core domain types
pub mod core;

// Board word search
pub mod search;

// Word ladders
pub mod ladder;

// Facade over lexicon, board and both searches
pub mod engine;

// Dictionaries
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup for the binary
pub mod logging;
