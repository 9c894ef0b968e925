//! Guess lookup over a corpus of valid words
//!
//! The player never scans the word list itself. Each round it hands the
//! current [`ConstraintState`] to a [`WordCatalog`] and gets back one
//! matching word, or nothing when the corpus is exhausted.

mod memory;

pub use memory::InMemoryCatalog;

use crate::core::{ConstraintState, GameId, Word};

/// One guess request
#[derive(Debug, Clone, Copy)]
pub struct GuessQuery<'a> {
    /// Positional candidates and letters the guess must contain
    pub constraints: &'a ConstraintState,
    /// Skip the strict pass (no repeated letters, no other game's answer)
    pub relax_duplicate_filter: bool,
    /// Game being played; its own answer is never excluded
    pub game: GameId,
}

/// A queryable word corpus
///
/// Implementations must return a word for which
/// `query.constraints.matches(word)` holds, chosen uniformly at random
/// among the matches. Unless `relax_duplicate_filter` is set, words with a
/// repeated letter and words that answered a different game are tried
/// first; when that strict pass finds nothing, the lookup falls back to the
/// constraints alone. `None` means no guesses are left.
pub trait WordCatalog {
    fn find_guess(&self, query: &GuessQuery<'_>) -> Option<Word>;
}

impl<C: WordCatalog + ?Sized> WordCatalog for &C {
    fn find_guess(&self, query: &GuessQuery<'_>) -> Option<Word> {
        (**self).find_guess(query)
    }
}
