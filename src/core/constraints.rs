//! Per-game search state narrowed by round feedback

use super::{Feedback, FeedbackSymbol, LetterSet, Word};
use std::fmt::Write as _;

/// Letters still possible at each position, plus letters known to be present
///
/// Starts wide open and only ever narrows: a position set never gains
/// letters, a pinned position stays pinned, and `confirmed_present` never
/// loses letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintState {
    positions: [LetterSet; 5],
    confirmed_present: LetterSet,
}

impl Default for ConstraintState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstraintState {
    /// Fresh state: every letter allowed everywhere, nothing confirmed
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: [LetterSet::ALPHABET; 5],
            confirmed_present: LetterSet::EMPTY,
        }
    }

    /// Candidate letters for each position
    #[inline]
    #[must_use]
    pub const fn positions(&self) -> &[LetterSet; 5] {
        &self.positions
    }

    /// Letters known to be in the solution
    #[inline]
    #[must_use]
    pub const fn confirmed_present(&self) -> LetterSet {
        self.confirmed_present
    }

    /// Fold one round of feedback into the state
    ///
    /// - Correct pins the position to the guessed letter.
    /// - Present removes the letter from that position and confirms it.
    /// - Absent removes the letter from every position, even when the same
    ///   letter is correct or present elsewhere in this guess.
    pub fn apply_feedback(&mut self, guess: &Word, feedback: Feedback) {
        for (i, &symbol) in feedback.symbols().iter().enumerate() {
            let letter = guess.char_at(i);
            match symbol {
                FeedbackSymbol::Correct => self.positions[i] = LetterSet::only(letter),
                FeedbackSymbol::Present => {
                    self.positions[i].remove(letter);
                    self.confirmed_present.insert(letter);
                }
                FeedbackSymbol::Absent => {
                    for position in &mut self.positions {
                        position.remove(letter);
                    }
                }
            }
        }
    }

    /// Check whether a word fits every position and contains every
    /// confirmed letter
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        self.positions
            .iter()
            .zip(word.chars())
            .all(|(allowed, &letter)| allowed.contains(letter))
            && self.confirmed_present.is_subset(word.letters())
    }

    /// Positional constraints as an anchored regular expression,
    /// e.g. `^[s][abc][a-z...][...][...]$`
    #[must_use]
    pub fn pattern(&self) -> String {
        let mut pattern = String::from("^");
        for allowed in &self.positions {
            let _ = write!(pattern, "[{allowed}]");
        }
        pattern.push('$');
        pattern
    }
}
