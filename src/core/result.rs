//! Game outcome and its shareable text form

use super::{Feedback, Word};
use std::fmt;

/// Puzzle number
pub type GameId = u32;

/// Maximum rounds in one game
pub const MAX_ROUNDS: u8 = 6;

/// Final score of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Score {
    /// Solved on the given round (1-6)
    Solved(u8),
    /// Not solved within six rounds, or ran out of guesses
    Failed,
}

impl Score {
    /// Numeric score as stored: 1-6 when solved, 7 when failed
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Solved(round) => round,
            Self::Failed => MAX_ROUNDS + 1,
        }
    }

    /// Inverse of [`Score::value`]; anything outside 1-6 is a failure
    #[must_use]
    pub const fn from_value(value: u8) -> Self {
        if value >= 1 && value <= MAX_ROUNDS {
            Self::Solved(value)
        } else {
            Self::Failed
        }
    }

    #[must_use]
    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved(_))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solved(round) => write!(f, "{round}"),
            Self::Failed => f.write_str("X"),
        }
    }
}

/// One played round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Everything that happened in one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub game: GameId,
    pub rounds: Vec<Round>,
    pub score: Score,
}

impl GameResult {
    /// Render the share block posted after a game
    ///
    /// ```text
    /// Wordle 1234 3/6*
    ///
    /// 🟩⬛🟨🟨⬛
    /// 🟩🟨🟨⬛🟩
    /// 🟩🟩🟩🟩🟩
    /// ```
    ///
    /// Every feedback line ends in a newline. A game with no rounds is just
    /// the header followed by a blank line.
    #[must_use]
    pub fn share_text(&self) -> String {
        let mut text = format!("Wordle {} {}/{MAX_ROUNDS}*\n\n", self.game, self.score);
        for round in &self.rounds {
            text.push_str(&round.feedback.to_emoji());
            text.push('\n');
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(guess: &str, feedback: &str) -> Round {
        Round {
            guess: Word::new(guess).unwrap(),
            feedback: feedback.parse().unwrap(),
        }
    }

    #[test]
    fn score_values() {
        assert_eq!(Score::Solved(1).value(), 1);
        assert_eq!(Score::Solved(6).value(), 6);
        assert_eq!(Score::Failed.value(), 7);
        assert_eq!(Score::from_value(4), Score::Solved(4));
        assert_eq!(Score::from_value(7), Score::Failed);
        assert_eq!(Score::from_value(0), Score::Failed);
    }

    #[test]
    fn score_display() {
        assert_eq!(Score::Solved(3).to_string(), "3");
        assert_eq!(Score::Failed.to_string(), "X");
        assert!(Score::Solved(2).is_solved());
        assert!(!Score::Failed.is_solved());
    }

    #[test]
    fn share_text_solved() {
        let result = GameResult {
            game: 1234,
            rounds: vec![round("swear", "G-YY-"), round("slate", "GGGGG")],
            score: Score::Solved(2),
        };

        assert_eq!(
            result.share_text(),
            "Wordle 1234 2/6*\n\n🟩⬛🟨🟨⬛\n🟩🟩🟩🟩🟩\n"
        );
    }

    #[test]
    fn share_text_without_rounds() {
        let result = GameResult {
            game: 7,
            rounds: Vec::new(),
            score: Score::Failed,
        };

        assert_eq!(result.share_text(), "Wordle 7 X/6*\n\n");
    }
}
