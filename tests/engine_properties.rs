//! Integration tests for the word games engine.
//!
//! These exercise the public `Engine` API end to end: dictionary loading,
//! board search, scoring and word ladders.

use std::collections::BTreeSet;
use std::io::Write;

use word_games::core::{GameError, Lexicon};
use word_games::engine::Engine;
use word_games::ladder::NeighborMode;
use word_games::wordlists::{DICTIONARY, loader::lexicon_from_slice};

fn engine_with(words: &[&str], tiles: &[&str]) -> Engine {
    let mut engine = Engine::new();
    engine.set_lexicon(Lexicon::from_words(words));
    engine.set_board(tiles).unwrap();
    engine
}

fn default_engine() -> Engine {
    let mut engine = Engine::new();
    engine.set_lexicon(lexicon_from_slice(DICTIONARY));
    engine
}

/// Check a located path: distinct, adjacent, spelling `word`
fn assert_path_spells(engine: &Engine, path: &[usize], word: &str) {
    let board = engine.board();
    let distinct: BTreeSet<_> = path.iter().collect();
    assert_eq!(distinct.len(), path.len(), "{word}: repeated tile in {path:?}");

    for pair in path.windows(2) {
        let a = board.position(pair[0]).unwrap();
        let b = board.position(pair[1]).unwrap();
        assert!(a.is_adjacent(&b), "{word}: {pair:?} not adjacent");
    }

    assert_eq!(board.word_for(path).unwrap(), word.to_ascii_uppercase());
}

#[cfg(test)]
mod board_search {
    use super::*;

    #[test]
    fn two_by_two_scenario() {
        let engine = engine_with(&["ab", "ac", "ad"], &["A", "B", "C", "D"]);

        let words = engine.all_scorable_words(2).unwrap();
        let expected: BTreeSet<String> = ["AB", "AC", "AD"].iter().map(|s| s.to_string()).collect();
        assert_eq!(words, expected);

        let score = engine.score_for_words(["AB", "AC", "AD", "ZZ"], 2).unwrap();
        assert_eq!(score, 3);
    }

    #[test]
    fn scorable_words_are_words_on_the_board() {
        let engine = default_engine();

        for k in 1..=5 {
            for word in engine.all_scorable_words(k).unwrap() {
                assert!(engine.is_word(&word).unwrap());
                assert!(word.chars().count() >= k);

                let path = engine.is_on_board(&word).unwrap();
                assert!(!path.is_empty(), "{word} not on board");
                assert_path_spells(&engine, &path, &word);
            }
        }
    }

    #[test]
    fn default_board_finds_known_words() {
        let engine = default_engine();
        let words = engine.all_scorable_words(3).unwrap();

        for word in ["CAPE", "BOY", "TOY", "PEA", "ACE", "LEA", "BENT"] {
            assert!(words.contains(word), "missing {word}");
        }
        // Dictionary words that need a missing letter or a reused tile
        for word in ["CAT", "DOG", "EPEE"] {
            assert!(!words.contains(word), "unexpected {word}");
        }
    }

    #[test]
    fn score_does_not_credit_words_off_the_board() {
        let engine = default_engine();

        // DOG is a dictionary word but the board has no D or G
        assert!(engine.is_word("dog").unwrap());
        assert!(engine.is_on_board("dog").unwrap().is_empty());
        assert_eq!(engine.score_for_words(["dog"], 3).unwrap(), 0);

        // CAPE scores 2 at minimum length 3
        assert_eq!(engine.score_for_words(["dog", "cape"], 3).unwrap(), 2);
    }

    #[test]
    fn score_of_all_words_matches_points() {
        let engine = default_engine();
        let words = engine.all_scorable_words(3).unwrap();

        let expected: usize = words.iter().map(|w| w.chars().count() - 3 + 1).sum();
        assert_eq!(engine.score_for_words(&words, 3).unwrap(), expected);
    }

    #[test]
    fn larger_board_is_searched_without_recursion_limits() {
        // 20x20 board of a single letter with a 200-letter word: every
        // prefix stays valid, so walks run hundreds of tiles deep
        let tiles = vec!["A"; 400];
        let long_word = "A".repeat(200);
        let mut engine = Engine::new();
        engine.set_lexicon(Lexicon::from_words([long_word.as_str(), "aaab"]));
        engine.set_board(&tiles).unwrap();

        let path = engine.is_on_board(&long_word).unwrap();
        assert_eq!(path.len(), 200);
        assert_path_spells(&engine, &path, &long_word);
    }

    #[test]
    fn invalid_arguments() {
        let mut engine = default_engine();

        assert!(matches!(
            engine.all_scorable_words(0),
            Err(GameError::InvalidArgument(_))
        ));
        assert!(matches!(
            engine.set_board(&["a", "b", "c", "d", "e"]),
            Err(GameError::InvalidArgument(_))
        ));
    }
}

#[cfg(test)]
mod ladders {
    use super::*;

    #[test]
    fn hamming_symmetry_and_domain() {
        let engine = Engine::new();
        let samples = ["cat", "cot", "dog", "cats", "", "quit", "QUIT", "a"];

        for a in samples {
            for b in samples {
                let ab = engine.hamming_distance(a, b);
                assert_eq!(ab, engine.hamming_distance(b, a));
                assert_eq!(ab.is_none(), a.chars().count() != b.chars().count());
            }
        }
    }

    #[test]
    fn minimal_ladder_length() {
        for mode in [NeighborMode::Scan, NeighborMode::Indexed] {
            let mut engine = Engine::with_neighbor_mode(mode);
            engine.set_lexicon(Lexicon::from_words(["cat", "cot", "cog", "dog"]));

            let ladder = engine.min_ladder("cat", "dog").unwrap();
            assert_eq!(ladder.len(), 4);
            assert_eq!(ladder, vec!["CAT", "COT", "COG", "DOG"]);
        }
    }

    #[test]
    fn ladders_are_valid_and_anchored() {
        let engine = default_engine();
        let pairs = [
            ("cat", "dog"),
            ("hat", "pen"),
            ("bag", "ton"),
            ("pit", "gas"),
            ("cap", "bun"),
        ];

        for (start, end) in pairs {
            let ladder = engine.min_ladder(start, end).unwrap();
            if ladder.is_empty() {
                continue;
            }
            assert!(engine.is_word_ladder(&ladder).unwrap(), "{ladder:?}");
            assert_eq!(ladder.first().unwrap(), &start.to_ascii_uppercase());
            assert_eq!(ladder.last().unwrap(), &end.to_ascii_uppercase());
        }
    }

    #[test]
    fn scan_and_index_agree_on_default_dictionary() {
        let mut scan = Engine::with_neighbor_mode(NeighborMode::Scan);
        scan.set_lexicon(lexicon_from_slice(DICTIONARY));
        let indexed = default_engine();

        for word in ["cat", "dog", "ten", "cape", "zzz"] {
            assert_eq!(scan.neighbors(word).unwrap(), indexed.neighbors(word).unwrap());
        }
        for (start, end) in [("cat", "dog"), ("hat", "pen"), ("bag", "ton")] {
            assert_eq!(
                scan.min_ladder(start, end).unwrap(),
                indexed.min_ladder(start, end).unwrap()
            );
        }
    }

    #[test]
    fn degenerate_ladder() {
        let engine = engine_with(&["cat"], &["A"]);
        assert_eq!(engine.min_ladder("cat", "cat").unwrap(), vec!["CAT"]);

        let engine = engine_with(&["dog"], &["A"]);
        assert!(engine.min_ladder("cat", "cat").unwrap().is_empty());
    }

    #[test]
    fn no_ladder_across_lengths() {
        let engine = engine_with(&["cat", "cats", "cot"], &["A"]);
        assert!(engine.min_ladder("cat", "cats").unwrap().is_empty());
    }

    #[test]
    fn is_word_ladder_rejects_empty() {
        let engine = default_engine();
        assert!(!engine.is_word_ladder::<&str>(&[]).unwrap());
    }

    #[test]
    fn single_word_is_a_ladder_even_off_the_lexicon() {
        let engine = engine_with(&["cat", "cot"], &["A"]);
        assert_eq!(engine.is_word_ladder(&["zzz"]), Ok(true));
        assert_eq!(engine.is_word_ladder(&["cat"]), Ok(true));
        assert_eq!(engine.is_word_ladder(&["zzz", "cat"]), Ok(false));
    }
}

#[cfg(test)]
mod loading {
    use super::*;

    #[test]
    fn load_lexicon_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cat 1").unwrap();
        writeln!(file, "Cot").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "COG noun").unwrap();
        writeln!(file, "cat").unwrap();
        file.flush().unwrap();

        let mut engine = Engine::new();
        engine.load_lexicon(file.path()).unwrap();

        assert_eq!(engine.word_count().unwrap(), 3);
        assert!(engine.is_word("cog").unwrap());
        assert!(engine.is_valid_prefix("CO").unwrap());
        assert!(!engine.is_valid_prefix("CX").unwrap());
    }

    #[test]
    fn unreadable_source_is_invalid_argument() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = Engine::new();

        let result = engine.load_lexicon(dir.path().join("nope.txt"));
        assert!(matches!(result, Err(GameError::InvalidArgument(_))));
        assert_eq!(engine.word_count(), Err(GameError::Uninitialized));
    }

    #[test]
    fn engine_shared_across_threads() {
        let engine = default_engine();
        let expected_words = engine.all_scorable_words(3).unwrap();
        let expected_ladder = engine.min_ladder("cat", "dog").unwrap();

        std::thread::scope(|scope| {
            let searches: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| engine.all_scorable_words(3).unwrap()))
                .collect();
            let ladders: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| engine.min_ladder("cat", "dog").unwrap()))
                .collect();

            for handle in searches {
                assert_eq!(handle.join().unwrap(), expected_words);
            }
            for handle in ladders {
                assert_eq!(handle.join().unwrap(), expected_ladder);
            }
        });
    }
}
