//! Dictionary sources
//!
//! Provides the embedded default dictionary and loaders for external word
//! list files.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn dictionary_entries_are_single_tokens() {
        for &word in DICTIONARY {
            assert!(!word.is_empty());
            assert!(
                !word.chars().any(char::is_whitespace),
                "Entry '{word}' contains whitespace"
            );
        }
    }

    #[test]
    fn dictionary_has_ladder_words() {
        for word in ["cat", "cot", "cog", "dog"] {
            assert!(DICTIONARY.contains(&word), "missing '{word}'");
        }
    }
}
