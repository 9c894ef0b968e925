//! Recognizing share headers in posted messages
//!
//! Players paste their results into chat; the header line carries the game
//! number and score, e.g. `Wordle 1234 4/6*` or `Wordle 1234 X/6`.

use super::{GameId, Score};
use regex::Regex;
use std::sync::LazyLock;

static SHARE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Wordle ([0-9]+) ([0-6Xx])/([0-6])\*?").expect("share header regex is valid")
});

/// Game number and score read from a share header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareCard {
    pub game: GameId,
    pub score: Score,
    /// Whether the header carried the hard-mode `*` marker
    pub hard_mode: bool,
}

impl ShareCard {
    /// Find the first share header anywhere in `text`
    ///
    /// # Examples
    /// ```
    /// use wordle_player::core::{Score, ShareCard};
    ///
    /// let card = ShareCard::find("gg! Wordle 1234 3/6*\n\n🟩🟩🟩🟩🟩").unwrap();
    /// assert_eq!(card.game, 1234);
    /// assert_eq!(card.score, Score::Solved(3));
    /// ```
    #[must_use]
    pub fn find(text: &str) -> Option<Self> {
        SHARE_HEADER.captures_iter(text).find_map(|caps| {
            let game = caps[1].parse().ok()?;
            let score = match &caps[2] {
                "X" | "x" => Score::Failed,
                digits => Score::from_value(digits.parse().ok()?),
            };
            let hard_mode = caps[0].ends_with('*');
            Some(Self {
                game,
                score,
                hard_mode,
            })
        })
    }
}
