//! Dictionary loading utilities
//!
//! A dictionary source is line-oriented: the first whitespace-delimited
//! token of each line is a word, anything after it is ignored.

use crate::core::{GameError, Lexicon};
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Build a lexicon from a line-oriented reader
///
/// # Errors
///
/// Returns `GameError::InvalidArgument` if the reader fails.
///
/// # Examples
/// ```
/// use word_games::wordlists::loader::load_from_reader;
///
/// let source = "cat 12\ndog noun\n\ncat\n";
/// let lexicon = load_from_reader(source.as_bytes()).unwrap();
/// assert_eq!(lexicon.len(), 2);
/// ```
pub fn load_from_reader<R: BufRead>(reader: R) -> Result<Lexicon, GameError> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| GameError::invalid(format!("cannot read dictionary: {e}")))?;
        if let Some(word) = line.split_whitespace().next() {
            words.push(word.to_string());
        }
    }

    Ok(Lexicon::from_words(words))
}

/// Load a lexicon from a file
///
/// # Errors
///
/// Returns `GameError::InvalidArgument` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use word_games::wordlists::loader::load_from_file;
///
/// let lexicon = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", lexicon.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Lexicon, GameError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        GameError::invalid(format!("cannot open dictionary {}: {e}", path.display()))
    })?;

    let lexicon = load_from_reader(BufReader::new(file))?;
    debug!("loaded {} words from {}", lexicon.len(), path.display());
    Ok(lexicon)
}

/// Build a lexicon from an embedded string slice
///
/// # Examples
/// ```
/// use word_games::wordlists::loader::lexicon_from_slice;
/// use word_games::wordlists::DICTIONARY;
///
/// let lexicon = lexicon_from_slice(DICTIONARY);
/// assert!(lexicon.len() <= DICTIONARY.len());
/// ```
#[must_use]
pub fn lexicon_from_slice(slice: &[&str]) -> Lexicon {
    Lexicon::from_words(slice.iter().filter_map(|s| s.split_whitespace().next()))
}
