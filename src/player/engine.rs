//! Plays one game against a known solution

use crate::catalog::{GuessQuery, WordCatalog};
use crate::core::{
    ConstraintState, GameId, GameResult, MAX_ROUNDS, Round, Score, Word, evaluate,
};
use crate::puzzles::PuzzleLookup;
use log::{debug, info, warn};

/// Player settings
#[derive(Debug, Clone, Default)]
pub struct PlayerConfig {
    /// Fixed first guess; when set, round one never consults the catalog
    pub opener: Option<Word>,
}

impl PlayerConfig {
    #[must_use]
    pub const fn with_opener(opener: Word) -> Self {
        Self {
            opener: Some(opener),
        }
    }
}

/// Autonomous Wordle player
///
/// Looks up the solution of a game, then guesses round by round, narrowing
/// a fresh [`ConstraintState`] with each round's feedback. Holds no state
/// between games, so one player can serve many games at once.
pub struct Player<'a, C: WordCatalog, P: PuzzleLookup> {
    catalog: &'a C,
    puzzles: &'a P,
    config: PlayerConfig,
}

impl<'a, C: WordCatalog, P: PuzzleLookup> Player<'a, C, P> {
    /// Create a new player over the given catalog and puzzle source
    pub const fn new(catalog: &'a C, puzzles: &'a P, config: PlayerConfig) -> Self {
        Self {
            catalog,
            puzzles,
            config,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Play a game and render its share block
    ///
    /// Returns `None` when the game has no usable solution.
    pub fn play_game(&self, game: GameId) -> Option<String> {
        self.play(game).map(|result| result.share_text())
    }

    /// Play a game
    ///
    /// Returns `None` without guessing when the puzzle source has no
    /// solution for `game`, or only a blank or malformed one.
    pub fn play(&self, game: GameId) -> Option<GameResult> {
        info!("Playing Wordle {game}");
        let solution = self.solution(game)?;
        debug!("Game {game} solution: {solution}");

        let mut constraints = ConstraintState::new();
        let mut rounds = Vec::with_capacity(usize::from(MAX_ROUNDS));
        let mut score = Score::Failed;

        for round in 1..=MAX_ROUNDS {
            let Some(guess) = self.next_guess(game, round, &constraints) else {
                info!("Game {game}: no guesses left in round {round}");
                break;
            };

            let feedback = evaluate(&solution, Some(&guess));
            debug!("Game {game} round {round}: {guess} {feedback}");

            let solved = !feedback.has_miss();
            if !solved {
                constraints.apply_feedback(&guess, feedback);
                debug!("Game {game} constraints: {}", constraints.pattern());
            }
            rounds.push(Round { guess, feedback });

            if solved {
                score = Score::Solved(round);
                break;
            }
        }

        info!("Game {game} finished: {score}/{MAX_ROUNDS}");
        Some(GameResult {
            game,
            rounds,
            score,
        })
    }

    fn solution(&self, game: GameId) -> Option<Word> {
        let text = self.puzzles.solution(game)?;
        if text.trim().is_empty() {
            info!("Game {game} has no solution on record");
            return None;
        }

        match Word::new(&text) {
            Ok(word) => Some(word),
            Err(e) => {
                warn!("Game {game} solution {text:?} is unusable: {e}");
                None
            }
        }
    }

    fn next_guess(&self, game: GameId, round: u8, constraints: &ConstraintState) -> Option<Word> {
        if round == 1
            && let Some(opener) = &self.config.opener
        {
            return Some(opener.clone());
        }

        self.catalog.find_guess(&GuessQuery {
            constraints,
            relax_duplicate_filter: round >= MAX_ROUNDS,
            game,
        })
    }
}
