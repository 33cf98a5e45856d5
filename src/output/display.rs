//! Display functions for command results

use super::formatters::{columns, ladder_chain, path_grid};
use crate::commands::{CheckResult, LadderResult, LocateResult, ScoreResult, WordsResult};
use crate::core::Board;
use colored::Colorize;

fn print_header(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print the board, one row per line
pub fn print_board(board: &Board) {
    print_header(&format!("BOARD {0}x{0}", board.size()));
    println!("\n{}", board.render().bright_yellow().bold());
}

/// Print every scorable word found on the board
pub fn print_words_result(result: &WordsResult) {
    print_header("SCORABLE WORDS");

    println!(
        "\n📖 {} words of at least {} letters",
        result.words.len(),
        result.min_length
    );
    if !result.words.is_empty() {
        println!("\n{}", columns(&result.words, 6));
    }
    println!(
        "\n   Total score: {}",
        format!("{}", result.total_score).bright_yellow().bold()
    );
}

/// Print the path of a located word
pub fn print_locate_result(result: &LocateResult, board: &Board) {
    print_header(&format!("LOCATE {}", result.word));

    if result.found() {
        println!("\n   Path: {:?}", result.path);
        println!("\n{}", path_grid(board, &result.path).green().bold());
    } else {
        println!("\n{}", format!("❌ {} is not on the board", result.word).red());
    }
}

/// Print per-word points and the total
pub fn print_score_result(result: &ScoreResult) {
    print_header("SCORE");

    println!("\n   Minimum length: {}", result.min_length);
    for (word, points) in &result.entries {
        if *points > 0 {
            println!("   {} {:>3}", format!("{word:<16}").green(), points);
        } else {
            println!("   {} {:>3}", format!("{word:<16}").bright_black(), 0);
        }
    }
    println!(
        "\n   Total: {}",
        format!("{}", result.total).bright_yellow().bold()
    );
}

/// Print a ladder search result
pub fn print_ladder_result(result: &LadderResult, verbose: bool) {
    print_header(&format!("LADDER {} → {}", result.start, result.end));

    match result.steps() {
        Some(steps) => {
            println!("\n   {}", ladder_chain(&result.ladder).green().bold());
            println!("   {steps} step(s)");
        }
        None => println!("\n{}", "❌ No ladder exists".red().bold()),
    }

    if verbose {
        println!("   Time taken: {:.3}ms", result.duration.as_secs_f64() * 1000.0);
    }
}

/// Print the one-letter neighbors of a word
pub fn print_neighbors(word: &str, neighbors: &[String]) {
    print_header(&format!("NEIGHBORS OF {}", word.to_ascii_uppercase()));

    if neighbors.is_empty() {
        println!("\n   (none)");
    } else {
        println!("\n{}", columns(neighbors, 8));
    }
}

/// Print whether a sequence is a valid ladder
pub fn print_check_result(result: &CheckResult) {
    print_header("LADDER CHECK");

    println!("\n   {}", ladder_chain(&result.sequence));
    if result.valid {
        println!("{}", "✅ Valid word ladder".green().bold());
    } else {
        println!("{}", "❌ Not a word ladder".red().bold());
    }
}
