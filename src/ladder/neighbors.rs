//! Edges of the word graph
//!
//! Two words are adjacent when they have the same length and differ in
//! exactly one position. Neighbor sources always return words in lexicon
//! (sorted) order so that breadth-first search is reproducible.

use crate::core::Lexicon;
use rustc_hash::FxHashMap;

/// Number of positions at which two equal-length strings differ
///
/// Returns `None` when the lengths (in characters) differ.
///
/// # Examples
/// ```
/// use word_games::ladder::hamming_distance;
///
/// assert_eq!(hamming_distance("CAT", "COT"), Some(1));
/// assert_eq!(hamming_distance("CAT", "CAT"), Some(0));
/// assert_eq!(hamming_distance("CAT", "CATS"), None);
/// ```
#[must_use]
pub fn hamming_distance(a: &str, b: &str) -> Option<usize> {
    if a.chars().count() != b.chars().count() {
        return None;
    }
    Some(a.chars().zip(b.chars()).filter(|(x, y)| x != y).count())
}

/// A way of listing the lexicon words one edit away from a word
pub trait NeighborSource {
    /// Lexicon entries at Hamming distance exactly 1 from `word`, sorted
    fn neighbors<'l>(&self, lexicon: &'l Lexicon, word: &str) -> Vec<&'l str>;
}

/// Full scan of the lexicon for every query
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScan;

impl NeighborSource for LexiconScan {
    fn neighbors<'l>(&self, lexicon: &'l Lexicon, word: &str) -> Vec<&'l str> {
        lexicon
            .iter()
            .filter(|candidate| hamming_distance(word, candidate) == Some(1))
            .collect()
    }
}

/// Index from (wildcard position, remaining letters) to lexicon ids
///
/// "CAT" is filed under `(0, "AT")`, `(1, "CT")` and `(2, "CA")`. Two words
/// share a bucket exactly when they are equal or differ only at the
/// wildcard position. The index must be queried with the lexicon it was
/// built from.
#[derive(Debug, Clone, Default)]
pub struct BucketIndex {
    buckets: FxHashMap<(usize, String), Vec<usize>>,
    indexed_words: usize,
}

impl BucketIndex {
    #[must_use]
    pub fn build(lexicon: &Lexicon) -> Self {
        let mut buckets: FxHashMap<(usize, String), Vec<usize>> = FxHashMap::default();
        for (id, word) in lexicon.iter().enumerate() {
            for position in 0..word.chars().count() {
                buckets.entry(bucket_key(word, position)).or_default().push(id);
            }
        }

        Self {
            buckets,
            indexed_words: lexicon.len(),
        }
    }

    /// Number of distinct buckets
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}

impl NeighborSource for BucketIndex {
    fn neighbors<'l>(&self, lexicon: &'l Lexicon, word: &str) -> Vec<&'l str> {
        debug_assert_eq!(
            self.indexed_words,
            lexicon.len(),
            "bucket index queried with a different lexicon"
        );

        let mut ids: Vec<usize> = (0..word.chars().count())
            .filter_map(|position| self.buckets.get(&bucket_key(word, position)))
            .flatten()
            .copied()
            .filter(|&id| lexicon.word(id) != Some(word))
            .collect();
        // ids are lexicon positions, so sorting them sorts the words
        ids.sort_unstable();
        ids.dedup();

        ids.into_iter().filter_map(|id| lexicon.word(id)).collect()
    }
}

/// Key for `word` with the character at `position` blanked out
fn bucket_key(word: &str, position: usize) -> (usize, String) {
    let rest = word
        .chars()
        .enumerate()
        .filter(|&(i, _)| i != position)
        .map(|(_, c)| c)
        .collect();
    (position, rest)
}

/// Name of a neighbor-generation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NeighborMode {
    /// Scan the whole lexicon per query
    Scan,
    /// Precomputed bucket index (default)
    #[default]
    Indexed,
}

impl NeighborMode {
    /// Parse a mode name
    ///
    /// Supported names: "scan", "indexed". Unrecognized names select the default.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "scan" | "full-scan" => Self::Scan,
            _ => Self::Indexed,
        }
    }
}

/// Runtime-selectable neighbor source
///
/// Both variants produce identical results; only their cost differs.
#[derive(Debug, Clone)]
pub enum NeighborStrategy {
    Scan(LexiconScan),
    Indexed(BucketIndex),
}

impl NeighborStrategy {
    /// Prepare the strategy for a lexicon
    #[must_use]
    pub fn build(mode: NeighborMode, lexicon: &Lexicon) -> Self {
        match mode {
            NeighborMode::Scan => Self::Scan(LexiconScan),
            NeighborMode::Indexed => Self::Indexed(BucketIndex::build(lexicon)),
        }
    }

    #[must_use]
    pub const fn mode(&self) -> NeighborMode {
        match self {
            Self::Scan(_) => NeighborMode::Scan,
            Self::Indexed(_) => NeighborMode::Indexed,
        }
    }
}

impl NeighborSource for NeighborStrategy {
    fn neighbors<'l>(&self, lexicon: &'l Lexicon, word: &str) -> Vec<&'l str> {
        match self {
            Self::Scan(s) => s.neighbors(lexicon, word),
            Self::Indexed(s) => s.neighbors(lexicon, word),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Lexicon {
        Lexicon::from_words([
            "cat", "cot", "cog", "dog", "bat", "cut", "cats", "act", "at", "coat",
        ])
    }

    #[test]
    fn hamming_counts_differences() {
        assert_eq!(hamming_distance("CAT", "DOG"), Some(3));
        assert_eq!(hamming_distance("CAT", "COT"), Some(1));
        assert_eq!(hamming_distance("", ""), Some(0));
    }

    #[test]
    fn hamming_undefined_for_unequal_lengths() {
        assert_eq!(hamming_distance("CAT", "CATS"), None);
        assert_eq!(hamming_distance("", "A"), None);
    }

    #[test]
    fn hamming_is_symmetric() {
        let words = ["CAT", "COT", "DOG", "CATS", "", "QUIT", "A"];
        for a in words {
            for b in words {
                assert_eq!(hamming_distance(a, b), hamming_distance(b, a), "{a} / {b}");
            }
        }
    }

    #[test]
    fn hamming_counts_characters_not_bytes() {
        assert_eq!(hamming_distance("CAFÉ", "CAFE"), Some(1));
    }

    #[test]
    fn scan_finds_one_letter_changes() {
        let lexicon = sample();
        let neighbors = LexiconScan.neighbors(&lexicon, "CAT");
        assert_eq!(neighbors, vec!["BAT", "COT", "CUT"]);
    }

    #[test]
    fn scan_excludes_other_lengths_and_self() {
        let lexicon = sample();
        let neighbors = LexiconScan.neighbors(&lexicon, "CAT");
        assert!(!neighbors.contains(&"CAT"));
        assert!(!neighbors.contains(&"CATS"));
        assert!(!neighbors.contains(&"AT"));
    }

    #[test]
    fn index_matches_scan() {
        let lexicon = sample();
        let index = BucketIndex::build(&lexicon);

        for word in ["CAT", "COT", "DOG", "CATS", "AT", "ZZZ", "COAT", "CAG", ""] {
            assert_eq!(
                index.neighbors(&lexicon, word),
                LexiconScan.neighbors(&lexicon, word),
                "mismatch for {word:?}"
            );
        }
    }

    #[test]
    fn index_buckets_by_position() {
        let lexicon = Lexicon::from_words(["cat", "bat"]);
        let index = BucketIndex::build(&lexicon);
        // (0,"AT") shared; (1,"CT"), (2,"CA"), (1,"BT"), (2,"BA") distinct
        assert_eq!(index.bucket_count(), 5);
    }

    #[test]
    fn neighbors_of_unknown_word() {
        let lexicon = sample();
        assert_eq!(LexiconScan.neighbors(&lexicon, "CAG"), vec!["CAT", "COG"]);
    }

    #[test]
    fn mode_from_name() {
        assert_eq!(NeighborMode::from_name("scan"), NeighborMode::Scan);
        assert_eq!(NeighborMode::from_name("indexed"), NeighborMode::Indexed);
        assert_eq!(NeighborMode::from_name("bogus"), NeighborMode::Indexed);
    }

    #[test]
    fn strategy_dispatches() {
        let lexicon = sample();
        let scan = NeighborStrategy::build(NeighborMode::Scan, &lexicon);
        let indexed = NeighborStrategy::build(NeighborMode::Indexed, &lexicon);

        assert_eq!(scan.mode(), NeighborMode::Scan);
        assert_eq!(indexed.mode(), NeighborMode::Indexed);
        assert_eq!(
            scan.neighbors(&lexicon, "COG"),
            indexed.neighbors(&lexicon, "COG")
        );
        assert_eq!(scan.neighbors(&lexicon, "COG"), vec!["COT", "DOG"]);
    }
}
