//! In-memory word catalog

use super::{GuessQuery, WordCatalog};
use crate::core::Word;
use crate::puzzles::{GameBook, PuzzleLookup};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::sync::{Mutex, PoisonError};

/// Word catalog backed by a vector of words
///
/// Past answers are read from a [`PuzzleLookup`] so that a word which solved
/// another day's puzzle is only guessed as a last resort. Hand it the same
/// puzzle source the player uses. The random source sits behind a mutex so
/// one catalog can serve games on several threads.
pub struct InMemoryCatalog<'a, P: ?Sized = GameBook> {
    words: Vec<Word>,
    known: FxHashSet<Word>,
    games: &'a P,
    rng: Mutex<StdRng>,
}

impl<'a, P: PuzzleLookup + ?Sized> InMemoryCatalog<'a, P> {
    /// Create a catalog with an OS-seeded random source
    ///
    /// Duplicate words are dropped.
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>, games: &'a P) -> Self {
        Self::with_rng(words, games, StdRng::from_os_rng())
    }

    /// Create a catalog with a fixed seed, for reproducible play
    #[must_use]
    pub fn seeded(words: impl IntoIterator<Item = Word>, games: &'a P, seed: u64) -> Self {
        Self::with_rng(words, games, StdRng::seed_from_u64(seed))
    }

    fn with_rng(words: impl IntoIterator<Item = Word>, games: &'a P, rng: StdRng) -> Self {
        let mut catalog = Self {
            words: Vec::new(),
            known: FxHashSet::default(),
            games,
            rng: Mutex::new(rng),
        };
        for word in words {
            catalog.add_word(word);
        }
        catalog
    }

    /// Add a word to the corpus
    ///
    /// Returns `false` if the word was already present.
    pub fn add_word(&mut self, word: Word) -> bool {
        if self.known.insert(word.clone()) {
            self.words.push(word);
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.known.contains(word)
    }

    /// Number of words in the corpus
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn pick(&self, matches: &[&Word]) -> Option<Word> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        matches.choose(&mut *rng).map(|&w| w.clone())
    }
}

impl<P: PuzzleLookup + ?Sized> WordCatalog for InMemoryCatalog<'_, P> {
    fn find_guess(&self, query: &GuessQuery<'_>) -> Option<Word> {
        let matches: Vec<&Word> = self
            .words
            .iter()
            .filter(|w| query.constraints.matches(w))
            .collect();

        if !query.relax_duplicate_filter {
            let strict: Vec<&Word> = matches
                .iter()
                .copied()
                .filter(|w| !w.has_repeated_letter())
                .filter(|w| !self.games.is_solution_elsewhere(w, query.game))
                .collect();

            if let Some(word) = self.pick(&strict) {
                return Some(word);
            }
            debug!(
                "No strict match for {} in game {}, relaxing filters",
                query.constraints.pattern(),
                query.game
            );
        }

        self.pick(&matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ConstraintState, Feedback, GameId};

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| word(s)).collect()
    }

    fn query(constraints: &ConstraintState, relax: bool, game: GameId) -> GuessQuery<'_> {
        GuessQuery {
            constraints,
            relax_duplicate_filter: relax,
            game,
        }
    }

    #[test]
    fn add_word_ignores_duplicates() {
        let book = GameBook::new();
        let mut catalog = InMemoryCatalog::seeded(words(&["slate", "slate", "crane"]), &book, 1);
        assert_eq!(catalog.len(), 2);

        assert!(!catalog.add_word(word("crane")));
        assert!(catalog.add_word(word("swear")));
        assert!(catalog.contains(&word("swear")));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn empty_catalog_has_no_guess() {
        let book = GameBook::new();
        let catalog = InMemoryCatalog::seeded(Vec::new(), &book, 1);
        let state = ConstraintState::new();

        assert!(catalog.is_empty());
        assert_eq!(catalog.find_guess(&query(&state, false, 1)), None);
        assert_eq!(catalog.find_guess(&query(&state, true, 1)), None);
    }

    #[test]
    fn guess_respects_constraints() {
        let book = GameBook::new();
        let catalog =
            InMemoryCatalog::seeded(words(&["slate", "swear", "crane", "stale", "plate"]), &book, 7);

        let mut state = ConstraintState::new();
        let guess = word("swear");
        state.apply_feedback(&guess, "G-YY-".parse::<Feedback>().unwrap());

        for _ in 0..20 {
            let found = catalog.find_guess(&query(&state, false, 1)).unwrap();
            assert!(state.matches(&found), "{found} does not match");
            assert!(found == word("slate") || found == word("stale"));
        }
    }

    #[test]
    fn strict_pass_skips_repeated_letters() {
        let book = GameBook::new();
        let catalog = InMemoryCatalog::seeded(words(&["geese", "eerie", "crane"]), &book, 3);
        let state = ConstraintState::new();

        for _ in 0..20 {
            assert_eq!(
                catalog.find_guess(&query(&state, false, 1)),
                Some(word("crane"))
            );
        }
    }

    #[test]
    fn strict_pass_skips_other_games_answers() {
        let mut book = GameBook::new();
        book.record_solution(10, word("crane"));
        book.record_solution(11, word("slate"));
        let catalog = InMemoryCatalog::seeded(words(&["crane", "slate"]), &book, 5);
        let state = ConstraintState::new();

        // Playing game 11: CRANE answered game 10, SLATE is this game's own
        for _ in 0..20 {
            assert_eq!(
                catalog.find_guess(&query(&state, false, 11)),
                Some(word("slate"))
            );
        }
    }

    /// Puzzle source that is not a `GameBook`: CRANE answered game 10
    struct Archive;

    impl PuzzleLookup for Archive {
        fn solution(&self, game: GameId) -> Option<String> {
            (game == 10).then(|| "crane".to_string())
        }

        fn is_solution_elsewhere(&self, word: &Word, game: GameId) -> bool {
            word.text() == "crane" && game != 10
        }
    }

    #[test]
    fn strict_pass_asks_any_puzzle_source() {
        let catalog = InMemoryCatalog::seeded(words(&["crane", "slate"]), &Archive, 5);
        let state = ConstraintState::new();

        for _ in 0..20 {
            assert_eq!(
                catalog.find_guess(&query(&state, false, 11)),
                Some(word("slate"))
            );
        }
    }

    #[test]
    fn falls_back_when_strict_pass_is_empty() {
        let mut book = GameBook::new();
        book.record_solution(10, word("crane"));
        let catalog = InMemoryCatalog::seeded(words(&["geese", "crane"]), &book, 9);
        let state = ConstraintState::new();

        let found = catalog.find_guess(&query(&state, false, 11)).unwrap();
        assert!(found == word("geese") || found == word("crane"));
    }

    #[test]
    fn relaxed_query_considers_every_match() {
        let book = GameBook::new();
        let catalog = InMemoryCatalog::seeded(words(&["geese", "crane"]), &book, 11);
        let state = ConstraintState::new();

        let seen: FxHashSet<Word> = (0..200)
            .filter_map(|_| catalog.find_guess(&query(&state, true, 1)))
            .collect();
        assert!(seen.contains(&word("geese")));
        assert!(seen.contains(&word("crane")));
    }

    #[test]
    fn no_match_returns_none() {
        let book = GameBook::new();
        let catalog = InMemoryCatalog::seeded(words(&["crane"]), &book, 2);

        let mut state = ConstraintState::new();
        let guess = word("crane");
        state.apply_feedback(&guess, Feedback::MISSED);

        assert_eq!(catalog.find_guess(&query(&state, false, 1)), None);
    }

    #[test]
    fn same_seed_same_guesses() {
        let book = GameBook::new();
        let list = words(&["slate", "crane", "swear", "plumb", "fjord", "nymph"]);
        let a = InMemoryCatalog::seeded(list.clone(), &book, 42);
        let b = InMemoryCatalog::seeded(list, &book, 42);
        let state = ConstraintState::new();

        for _ in 0..10 {
            assert_eq!(
                a.find_guess(&query(&state, false, 1)),
                b.find_guess(&query(&state, false, 1))
            );
        }
    }
}
