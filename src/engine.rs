//! Game engine facade
//!
//! Owns the lexicon and the board and exposes every word-search and
//! word-ladder query. Inputs are normalized to canonical case here, before
//! they reach any comparison logic.

use crate::core::{Board, GameError, Lexicon, check_min_length, normalize};
use crate::ladder::{LadderSolver, NeighborMode, NeighborSource, NeighborStrategy, hamming_distance};
use crate::search::{WordFinder, score, score_each};
use crate::wordlists::loader::load_from_file;
use log::debug;
use std::collections::BTreeSet;
use std::path::Path;

/// A loaded lexicon together with its prepared neighbor source
#[derive(Debug, Clone)]
struct Loaded {
    lexicon: Lexicon,
    neighbors: NeighborStrategy,
}

/// Word search and word ladder engine
///
/// Query methods take `&self` and allocate their own search state, so one
/// engine can be shared between threads.
///
/// # Examples
/// ```
/// use word_games::core::Lexicon;
/// use word_games::engine::Engine;
///
/// let mut engine = Engine::new();
/// engine.set_lexicon(Lexicon::from_words(["cat", "cot", "cog", "dog"]));
///
/// let ladder = engine.min_ladder("cat", "dog").unwrap();
/// assert_eq!(ladder, vec!["CAT", "COT", "COG", "DOG"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    loaded: Option<Loaded>,
    board: Board,
    mode: NeighborMode,
}

impl Engine {
    /// Engine with the default board and no lexicon
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine using the given neighbor strategy for ladders
    #[must_use]
    pub fn with_neighbor_mode(mode: NeighborMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Load the lexicon from a dictionary file
    ///
    /// On failure the previously loaded lexicon (if any) is kept.
    ///
    /// # Errors
    /// Returns `GameError::InvalidArgument` if the file cannot be opened or read.
    pub fn load_lexicon<P: AsRef<Path>>(&mut self, path: P) -> Result<(), GameError> {
        let lexicon = load_from_file(path)?;
        self.set_lexicon(lexicon);
        Ok(())
    }

    /// Install an already-built lexicon
    pub fn set_lexicon(&mut self, lexicon: Lexicon) {
        let neighbors = NeighborStrategy::build(self.mode, &lexicon);
        debug!("lexicon set: {} words, {:?} neighbors", lexicon.len(), self.mode);
        self.loaded = Some(Loaded { lexicon, neighbors });
    }

    /// Replace the board with row-major tiles
    ///
    /// # Errors
    /// Returns `GameError::InvalidArgument` if the tiles do not form a
    /// non-empty square or a tile is empty.
    pub fn set_board<S: AsRef<str>>(&mut self, tiles: &[S]) -> Result<(), GameError> {
        self.board = Board::new(tiles)?;
        debug!("board set: {0}x{0}", self.board.size());
        Ok(())
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn neighbor_mode(&self) -> NeighborMode {
        self.mode
    }

    /// The loaded lexicon
    ///
    /// # Errors
    /// Returns `GameError::Uninitialized` if no lexicon has been loaded.
    pub fn lexicon(&self) -> Result<&Lexicon, GameError> {
        self.loaded().map(|l| &l.lexicon)
    }

    fn loaded(&self) -> Result<&Loaded, GameError> {
        self.loaded.as_ref().ok_or(GameError::Uninitialized)
    }

    fn finder(&self) -> Result<WordFinder<'_>, GameError> {
        Ok(WordFinder::new(self.lexicon()?, &self.board))
    }

    /// Number of words in the lexicon
    ///
    /// # Errors
    /// Returns `GameError::Uninitialized` if no lexicon has been loaded.
    pub fn word_count(&self) -> Result<usize, GameError> {
        Ok(self.lexicon()?.len())
    }

    /// # Errors
    /// Returns `GameError::Uninitialized` if no lexicon has been loaded.
    pub fn is_word(&self, word: &str) -> Result<bool, GameError> {
        Ok(self.lexicon()?.is_word(&normalize(word)))
    }

    /// # Errors
    /// Returns `GameError::Uninitialized` if no lexicon has been loaded.
    pub fn is_valid_prefix(&self, prefix: &str) -> Result<bool, GameError> {
        Ok(self.lexicon()?.is_valid_prefix(&normalize(prefix)))
    }

    /// Every lexicon word of at least `min_length` characters on the board
    ///
    /// # Errors
    /// Returns `GameError::InvalidArgument` if `min_length` is zero, or
    /// `GameError::Uninitialized` if no lexicon has been loaded.
    pub fn all_scorable_words(&self, min_length: usize) -> Result<BTreeSet<String>, GameError> {
        check_min_length(min_length)?;
        self.finder()?.find_all(min_length)
    }

    /// Total score of the given words on the current board
    ///
    /// # Errors
    /// Returns `GameError::InvalidArgument` if `min_length` is zero, or
    /// `GameError::Uninitialized` if no lexicon has been loaded.
    pub fn score_for_words<I, S>(&self, words: I, min_length: usize) -> Result<usize, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        check_min_length(min_length)?;
        score(&self.finder()?, words, min_length)
    }

    /// Points earned by each given word, in sorted order
    ///
    /// # Errors
    /// Same conditions as [`Engine::score_for_words`].
    pub fn score_breakdown<I, S>(
        &self,
        words: I,
        min_length: usize,
    ) -> Result<Vec<(String, usize)>, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        check_min_length(min_length)?;
        score_each(&self.finder()?, words, min_length)
    }

    /// Board indices spelling `word`, or empty if it is not on the board
    ///
    /// # Errors
    /// Returns `GameError::Uninitialized` if no lexicon has been loaded.
    pub fn is_on_board(&self, word: &str) -> Result<Vec<usize>, GameError> {
        Ok(self.finder()?.locate(&normalize(word)))
    }

    /// Hamming distance after case normalization; `None` for unequal lengths
    #[must_use]
    pub fn hamming_distance(&self, a: &str, b: &str) -> Option<usize> {
        hamming_distance(&normalize(a), &normalize(b))
    }

    /// Lexicon words one letter away from `word`
    ///
    /// # Errors
    /// Returns `GameError::Uninitialized` if no lexicon has been loaded.
    pub fn neighbors(&self, word: &str) -> Result<BTreeSet<String>, GameError> {
        let loaded = self.loaded()?;
        Ok(loaded
            .neighbors
            .neighbors(&loaded.lexicon, &normalize(word))
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    /// # Errors
    /// Returns `GameError::Uninitialized` if no lexicon has been loaded.
    pub fn is_word_ladder<S: AsRef<str>>(&self, sequence: &[S]) -> Result<bool, GameError> {
        let loaded = self.loaded()?;
        let sequence: Vec<String> = sequence.iter().map(|w| normalize(w.as_ref())).collect();
        Ok(LadderSolver::new(&loaded.lexicon, &loaded.neighbors).is_word_ladder(&sequence))
    }

    /// A minimum-length ladder from `start` to `end`, or empty if none exists
    ///
    /// # Errors
    /// Returns `GameError::Uninitialized` if no lexicon has been loaded.
    pub fn min_ladder(&self, start: &str, end: &str) -> Result<Vec<String>, GameError> {
        let loaded = self.loaded()?;
        let solver = LadderSolver::new(&loaded.lexicon, &loaded.neighbors);
        Ok(solver.min_ladder(&normalize(start), &normalize(end)))
    }
}
