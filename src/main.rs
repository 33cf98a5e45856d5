//! Word Games - CLI
//!
//! Board word search and minimum word ladders over a dictionary.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use word_games::{
    commands::{check_ladder, find_words, locate_word, score_words, solve_ladder},
    engine::Engine,
    ladder::NeighborMode,
    logging::init_logger,
    output::{
        print_board, print_check_result, print_ladder_result, print_locate_result,
        print_neighbors, print_score_result, print_words_result,
    },
    wordlists::{DICTIONARY, loader::lexicon_from_slice},
};

#[derive(Parser)]
#[command(
    name = "word_games",
    about = "Board word search and shortest word ladders over a dictionary",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dictionary file (first word on each line); defaults to the built-in list
    #[arg(short, long, global = true)]
    dictionary: Option<String>,

    /// Board tiles in row-major order, separated by commas or spaces
    #[arg(short, long, global = true)]
    board: Option<String>,

    /// Ladder neighbor strategy: indexed (default) or scan
    #[arg(short, long, global = true, default_value = "indexed")]
    neighbors: String,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the board
    Board,

    /// Number of words in the dictionary
    Count,

    /// List every scorable word on the board
    Words {
        /// Minimum word length
        #[arg(short, long, default_value = "3")]
        min_length: usize,
    },

    /// Find the board path spelling a word
    Locate {
        /// Word to look for
        word: String,
    },

    /// Score a list of words against the board
    Score {
        /// Minimum word length
        #[arg(short, long, default_value = "3")]
        min_length: usize,

        /// Words to score
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Find a shortest word ladder
    Ladder {
        /// First word
        start: String,

        /// Last word
        end: String,
    },

    /// List words one letter away
    Neighbors {
        /// Word to expand
        word: String,
    },

    /// Check whether words form a ladder
    Check {
        /// Ladder words in order
        #[arg(required = true)]
        words: Vec<String>,
    },
}

/// Build the engine from the dictionary, board and strategy flags
fn build_engine(cli: &Cli) -> Result<Engine> {
    let mut engine = Engine::with_neighbor_mode(NeighborMode::from_name(&cli.neighbors));

    match &cli.dictionary {
        Some(path) => engine
            .load_lexicon(path)
            .with_context(|| format!("loading dictionary {path}"))?,
        None => engine.set_lexicon(lexicon_from_slice(DICTIONARY)),
    }

    if let Some(board_tiles) = &cli.board {
        let tiles: Vec<&str> = board_tiles
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .collect();
        engine.set_board(&tiles).context("parsing --board")?;
    }

    Ok(engine)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let engine = build_engine(&cli)?;
    log::debug!("engine ready: {} words", engine.word_count()?);

    match &cli.command {
        Commands::Board => print_board(engine.board()),
        Commands::Count => println!("{}", engine.word_count()?),
        Commands::Words { min_length } => {
            let result = find_words(&engine, *min_length)?;
            print_words_result(&result);
        }
        Commands::Locate { word } => {
            let result = locate_word(&engine, word)?;
            print_locate_result(&result, engine.board());
        }
        Commands::Score { min_length, words } => {
            let result = score_words(&engine, words, *min_length)?;
            print_score_result(&result);
        }
        Commands::Ladder { start, end } => {
            let result = solve_ladder(&engine, start, end)?;
            print_ladder_result(&result, cli.verbose);
        }
        Commands::Neighbors { word } => {
            let neighbors: Vec<String> = engine.neighbors(word)?.into_iter().collect();
            print_neighbors(word, &neighbors);
        }
        Commands::Check { words } => {
            let result = check_ladder(&engine, words)?;
            print_check_result(&result);
        }
    }

    Ok(())
}
