//! Breadth-first word ladder search

use super::neighbors::{NeighborSource, hamming_distance};
use crate::core::Lexicon;
use log::{debug, trace};
use rustc_hash::FxHashMap;
use std::collections::VecDeque;

/// Shortest-ladder solver over the implicit word graph
///
/// Words must already be in canonical case (see [`crate::core::normalize`]).
pub struct LadderSolver<'a, N: NeighborSource> {
    lexicon: &'a Lexicon,
    neighbors: &'a N,
}

impl<'a, N: NeighborSource> LadderSolver<'a, N> {
    /// Create a solver over a lexicon and its neighbor source
    pub const fn new(lexicon: &'a Lexicon, neighbors: &'a N) -> Self {
        Self { lexicon, neighbors }
    }

    /// Words one letter away from `word`, in sorted order
    pub fn neighbors(&self, word: &str) -> Vec<&'a str> {
        self.neighbors.neighbors(self.lexicon, word)
    }

    /// A minimum-length ladder from `start` to `end`, or empty if none exists
    ///
    /// When `start == end` the ladder is `[start]`, provided `start` is a word.
    /// Among several shortest ladders the one found first in sorted neighbor
    /// order is returned.
    pub fn min_ladder(&self, start: &str, end: &str) -> Vec<String> {
        let (Some(start), Some(end)) = (self.lookup(start), self.lookup(end)) else {
            return Vec::new();
        };
        if start == end {
            return vec![start.to_string()];
        }
        if hamming_distance(start, end).is_none() {
            return Vec::new();
        }

        // child -> parent; together with `start` this is the visited set
        let mut parents: FxHashMap<&'a str, &'a str> = FxHashMap::default();
        let mut queue: VecDeque<&'a str> = VecDeque::from([start]);

        while let Some(word) = queue.pop_front() {
            trace!("expand {word}");
            for next in self.neighbors(word) {
                if next == start || parents.contains_key(next) {
                    continue;
                }
                parents.insert(next, word);
                if next == end {
                    let ladder = reconstruct(&parents, end);
                    debug!("ladder {start} -> {end}: {} words", ladder.len());
                    return ladder;
                }
                queue.push_back(next);
            }
        }

        debug!(
            "no ladder {start} -> {end} ({} words reached)",
            parents.len() + 1
        );
        Vec::new()
    }

    /// True if each consecutive pair are lexicon words that differ in
    /// exactly one position
    ///
    /// An empty sequence is not a ladder. A single word has no pairs to
    /// check and is always a ladder.
    pub fn is_word_ladder<S: AsRef<str>>(&self, sequence: &[S]) -> bool {
        if sequence.is_empty() {
            return false;
        }
        sequence.windows(2).all(|pair| {
            let (a, b) = (pair[0].as_ref(), pair[1].as_ref());
            self.lexicon.is_word(a) && self.lexicon.is_word(b) && hamming_distance(a, b) == Some(1)
        })
    }

    /// The lexicon's own copy of a word, if present
    fn lookup(&self, word: &str) -> Option<&'a str> {
        self.lexicon.id_of(word).and_then(|id| self.lexicon.word(id))
    }
}

/// Walk parent links back from `end` and return the ladder in forward order
fn reconstruct(parents: &FxHashMap<&str, &str>, end: &str) -> Vec<String> {
    let mut ladder = vec![end.to_string()];
    let mut current = end;
    while let Some(&parent) = parents.get(current) {
        ladder.push(parent.to_string());
        current = parent;
    }
    ladder.reverse();
    ladder
}
