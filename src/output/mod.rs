//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_check_result, print_ladder_result, print_locate_result, print_neighbors,
    print_score_result, print_words_result,
};
