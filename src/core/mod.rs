//! Core domain types for playing Wordle
//!
//! Words, round feedback, the per-game constraint state and game results.
//! Everything here is pure and free of I/O.

mod constraints;
mod feedback;
mod letters;
mod result;
mod share;
mod word;

pub use constraints::ConstraintState;
pub use feedback::{Feedback, FeedbackSymbol, evaluate};
pub use letters::LetterSet;
pub use result::{GameId, GameResult, MAX_ROUNDS, Round, Score};
pub use share::ShareCard;
pub use word::{Word, WordError};
