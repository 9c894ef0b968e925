//! Puzzle solutions known to the player
//!
//! The player asks its puzzle source for the answer to game N; the catalog
//! asks the same source whether a word already answered some other game.
//! [`GameBook`] is the in-memory record used by the CLI and tests; any other
//! store can stand in by implementing [`PuzzleLookup`].

use crate::core::{GameId, Word};
use rustc_hash::FxHashMap;

/// Source of puzzle solutions
pub trait PuzzleLookup {
    /// Raw solution text for a game, if one has been recorded
    ///
    /// May be blank; callers treat blank the same as missing.
    fn solution(&self, game: GameId) -> Option<String>;

    /// Highest game number on record
    fn latest_game(&self) -> Option<GameId> {
        None
    }

    /// Check whether `word` was the answer to any game other than `game`
    fn is_solution_elsewhere(&self, _word: &Word, _game: GameId) -> bool {
        false
    }
}

impl<P: PuzzleLookup + ?Sized> PuzzleLookup for &P {
    fn solution(&self, game: GameId) -> Option<String> {
        (**self).solution(game)
    }

    fn latest_game(&self) -> Option<GameId> {
        (**self).latest_game()
    }

    fn is_solution_elsewhere(&self, word: &Word, game: GameId) -> bool {
        (**self).is_solution_elsewhere(word, game)
    }
}

/// In-memory record of games and their solutions
///
/// A game can be recorded before its solution is known; such games count
/// towards [`PuzzleLookup::latest_game`] but cannot be played.
#[derive(Debug, Default, Clone)]
pub struct GameBook {
    games: FxHashMap<GameId, Option<Word>>,
    solved_in: FxHashMap<Word, Vec<GameId>>,
}

impl GameBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a game without a solution (no-op if already present)
    pub fn record_game(&mut self, game: GameId) {
        self.games.entry(game).or_insert(None);
    }

    /// Record (or replace) the solution of a game
    pub fn record_solution(&mut self, game: GameId, word: Word) {
        if let Some(Some(previous)) = self.games.insert(game, Some(word.clone()))
            && let Some(games) = self.solved_in.get_mut(&previous)
        {
            games.retain(|&g| g != game);
        }
        self.solved_in.entry(word).or_default().push(game);
    }

    /// Recorded solution of a game
    #[must_use]
    pub fn word(&self, game: GameId) -> Option<&Word> {
        self.games.get(&game).and_then(Option::as_ref)
    }

    /// All recorded solutions, ordered by game number
    #[must_use]
    pub fn solutions(&self) -> Vec<(GameId, &Word)> {
        let mut solutions: Vec<(GameId, &Word)> = self
            .games
            .iter()
            .filter_map(|(&game, word)| word.as_ref().map(|w| (game, w)))
            .collect();
        solutions.sort_unstable_by_key(|&(game, _)| game);
        solutions
    }

    /// Number of recorded games, solved or not
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl PuzzleLookup for GameBook {
    fn solution(&self, game: GameId) -> Option<String> {
        self.word(game).map(|w| w.text().to_string())
    }

    fn latest_game(&self) -> Option<GameId> {
        self.games.keys().max().copied()
    }

    fn is_solution_elsewhere(&self, word: &Word, game: GameId) -> bool {
        self.solved_in
            .get(word)
            .is_some_and(|games| games.iter().any(|&g| g != game))
    }
}
