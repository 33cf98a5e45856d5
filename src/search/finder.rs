//! Depth-first, prefix-pruned board search
//!
//! Every search walks simple paths over the board with an explicit stack of
//! neighbor frames. All walk state is created per call, so a single
//! `WordFinder` can serve concurrent queries.

use crate::core::{Board, GameError, Lexicon, Path, Position, check_min_length};
use log::{debug, trace};
use rayon::prelude::*;
use std::collections::BTreeSet;

/// Remaining neighbors to try at one depth of the walk
type Frame = std::vec::IntoIter<Position>;

/// In-progress simple path together with the word it spells
struct Walk<'b> {
    board: &'b Board,
    path: Path,
    word: String,
    // word length before each tile was appended
    marks: Vec<usize>,
}

impl<'b> Walk<'b> {
    fn new(board: &'b Board) -> Self {
        Self {
            board,
            path: Path::new(board.cell_count()),
            word: String::new(),
            marks: Vec::new(),
        }
    }

    fn push(&mut self, position: Position) {
        if self.path.push(position.index) {
            self.marks.push(self.word.len());
            self.word.push_str(self.board.tile(position));
        }
    }

    fn pop(&mut self) {
        if self.path.pop().is_some() {
            let mark = self.marks.pop().unwrap_or(0);
            self.word.truncate(mark);
        }
    }

    fn word(&self) -> &str {
        &self.word
    }

    /// Neighbors of `position` not yet on the walk
    fn frame(&self, position: Position) -> Frame {
        self.board.adjacent(position, &self.path).into_iter()
    }

    fn into_indices(self) -> Vec<usize> {
        self.path.into_indices()
    }
}

/// Board word search backed by a lexicon
///
/// Words passed to `locate` must already be in canonical case
/// (see [`crate::core::normalize`]).
#[derive(Debug, Clone, Copy)]
pub struct WordFinder<'a> {
    lexicon: &'a Lexicon,
    board: &'a Board,
}

impl<'a> WordFinder<'a> {
    #[must_use]
    pub const fn new(lexicon: &'a Lexicon, board: &'a Board) -> Self {
        Self { lexicon, board }
    }

    #[must_use]
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    #[must_use]
    pub const fn board(&self) -> &'a Board {
        self.board
    }

    /// All lexicon words of at least `min_length` characters spelled by a
    /// simple path on the board
    ///
    /// Each start cell is searched independently and the per-cell results
    /// are merged, so the set is the same however the work is scheduled.
    ///
    /// # Errors
    /// Returns `GameError::InvalidArgument` if `min_length` is zero.
    pub fn find_all(&self, min_length: usize) -> Result<BTreeSet<String>, GameError> {
        check_min_length(min_length)?;

        let words = (0..self.board.cell_count())
            .into_par_iter()
            .map(|start| self.words_from(start, min_length))
            .reduce(BTreeSet::new, |mut all, mut part| {
                all.append(&mut part);
                all
            });

        debug!(
            "found {} words of length >= {min_length} on {}x{} board",
            words.len(),
            self.board.size(),
            self.board.size()
        );
        Ok(words)
    }

    /// Search every path starting at one cell
    fn words_from(&self, start: usize, min_length: usize) -> BTreeSet<String> {
        let mut found = BTreeSet::new();
        let Some(origin) = self.board.position(start) else {
            return found;
        };

        let mut walk = Walk::new(self.board);
        walk.push(origin);
        if !self.lexicon.is_valid_prefix(walk.word()) {
            return found;
        }
        self.record(walk.word(), min_length, &mut found);

        let mut frames = vec![walk.frame(origin)];
        loop {
            let next = match frames.last_mut() {
                Some(frame) => frame.next(),
                None => break,
            };

            match next {
                Some(position) => {
                    walk.push(position);
                    if self.lexicon.is_valid_prefix(walk.word()) {
                        self.record(walk.word(), min_length, &mut found);
                        frames.push(walk.frame(position));
                    } else {
                        trace!("prune {}", walk.word());
                        walk.pop();
                    }
                }
                None => {
                    frames.pop();
                    walk.pop();
                }
            }
        }

        found
    }

    fn record(&self, word: &str, min_length: usize, found: &mut BTreeSet<String>) {
        if word.chars().count() >= min_length && self.lexicon.is_word(word) {
            trace!("record {word}");
            found.insert(word.to_string());
        }
    }

    /// Board indices of a simple path spelling `word`, or empty if none exists
    ///
    /// Start cells are tried in index order and neighbors in row-major order;
    /// the first complete path wins. The lexicon is not consulted.
    #[must_use]
    pub fn locate(&self, word: &str) -> Vec<usize> {
        if word.is_empty() {
            return Vec::new();
        }

        (0..self.board.cell_count())
            .filter_map(|index| self.board.position(index))
            .filter(|&origin| word.starts_with(self.board.tile(origin)))
            .find_map(|origin| self.locate_from(origin, word))
            .unwrap_or_default()
    }

    fn locate_from(&self, origin: Position, target: &str) -> Option<Vec<usize>> {
        let mut walk = Walk::new(self.board);
        walk.push(origin);
        if walk.word() == target {
            return Some(walk.into_indices());
        }

        let mut frames = vec![walk.frame(origin)];
        while let Some(frame) = frames.last_mut() {
            match frame.next() {
                Some(position) => {
                    walk.push(position);
                    if walk.word() == target {
                        return Some(walk.into_indices());
                    }
                    if target.starts_with(walk.word()) {
                        frames.push(walk.frame(position));
                    } else {
                        walk.pop();
                    }
                }
                None => {
                    frames.pop();
                    walk.pop();
                }
            }
        }

        None
    }
}
