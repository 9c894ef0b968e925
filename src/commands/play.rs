//! Play command
//!
//! Plays a single game, defaulting to the latest game on record.

use crate::catalog::WordCatalog;
use crate::core::{GameId, GameResult};
use crate::player::Player;
use crate::puzzles::PuzzleLookup;

/// Result of the play command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    pub game: GameId,
    /// `None` when the game could not be played
    pub result: Option<GameResult>,
}

impl PlayOutcome {
    /// Message to post: the share block, or an apology when unplayable
    #[must_use]
    pub fn message(&self) -> String {
        self.result.as_ref().map_or_else(
            || format!("Unable to play Wordle Game: {}", self.game),
            GameResult::share_text,
        )
    }
}

/// Play `game`, or the latest recorded game when `game` is `None`
///
/// # Errors
///
/// Returns an error if no game was given and none is on record.
pub fn play_game<C: WordCatalog, P: PuzzleLookup>(
    player: &Player<C, P>,
    puzzles: &P,
    game: Option<GameId>,
) -> Result<PlayOutcome, String> {
    let game = game
        .or_else(|| puzzles.latest_game())
        .ok_or_else(|| "No games on record to play".to_string())?;

    Ok(PlayOutcome {
        game,
        result: player.play(game),
    })
}
