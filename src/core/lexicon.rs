//! Sorted dictionary oracle
//!
//! A `Lexicon` stores canonical (ASCII uppercase) words in sorted order and
//! answers membership and prefix queries with binary search.

use std::fmt;

/// Normalize text to the canonical case used by every lexicon and board
///
/// Only ASCII letters are folded; other characters pass through unchanged.
///
/// # Examples
/// ```
/// use word_games::core::normalize;
///
/// assert_eq!(normalize("Cat"), "CAT");
/// assert_eq!(normalize("qu"), "QU");
/// ```
#[inline]
#[must_use]
pub fn normalize(text: &str) -> String {
    text.to_ascii_uppercase()
}

/// Immutable sorted set of dictionary words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: Vec<String>,
}

impl Lexicon {
    /// Build a lexicon from raw words
    ///
    /// Words are normalized, sorted and de-duplicated. Empty entries are dropped.
    ///
    /// # Examples
    /// ```
    /// use word_games::core::Lexicon;
    ///
    /// let lexicon = Lexicon::from_words(["cat", "Cot", "CAT"]);
    /// assert_eq!(lexicon.len(), 2);
    /// assert!(lexicon.is_word("COT"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        words.sort_unstable();
        words.dedup();

        Self { words }
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the lexicon holds no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Exact membership test for a canonical word
    #[must_use]
    pub fn is_word(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|probe| probe.as_str().cmp(word))
            .is_ok()
    }

    /// True if at least one stored word starts with `prefix`
    ///
    /// Words sharing a prefix are contiguous in sorted order, so only the
    /// smallest stored word `>= prefix` needs to be checked.
    #[must_use]
    pub fn is_valid_prefix(&self, prefix: &str) -> bool {
        self.ceiling(prefix)
            .is_some_and(|word| word.starts_with(prefix))
    }

    /// Smallest stored word greater than or equal to `key`
    #[must_use]
    pub fn ceiling(&self, key: &str) -> Option<&str> {
        let at = self.words.partition_point(|w| w.as_str() < key);
        self.words.get(at).map(String::as_str)
    }

    /// Position of a word in sorted order
    #[must_use]
    pub fn id_of(&self, word: &str) -> Option<usize> {
        self.words
            .binary_search_by(|probe| probe.as_str().cmp(word))
            .ok()
    }

    /// Word stored at a sorted position
    #[inline]
    #[must_use]
    pub fn word(&self, id: usize) -> Option<&str> {
        self.words.get(id).map(String::as_str)
    }

    /// Iterate over all words in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl fmt::Display for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lexicon({} words)", self.words.len())
    }
}
