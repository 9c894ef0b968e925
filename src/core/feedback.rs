//! Round feedback and its evaluation
//!
//! A round of play compares a guess to the solution and yields one
//! [`FeedbackSymbol`] per position:
//! - Correct (🟩): same letter in the same position
//! - Present (🟨): letter appears somewhere else in the solution
//! - Absent (⬛): letter does not appear in the solution

use super::Word;
use std::fmt;

/// Outcome for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackSymbol {
    Correct,
    Present,
    Absent,
}

impl FeedbackSymbol {
    /// Share glyph for this symbol
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }

    /// Parse a single glyph or shorthand letter
    ///
    /// Accepts 'G'/'g'/🟩, 'Y'/'y'/🟨 and '-'/'_'/'.'/⬛/⬜.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '⬛' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback for one guess: five symbols in position order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([FeedbackSymbol; 5]);

impl Feedback {
    /// All positions correct
    pub const SOLVED: Self = Self([FeedbackSymbol::Correct; 5]);

    /// All positions absent; also the result of a round with no guess
    pub const MISSED: Self = Self([FeedbackSymbol::Absent; 5]);

    #[inline]
    #[must_use]
    pub const fn new(symbols: [FeedbackSymbol; 5]) -> Self {
        Self(symbols)
    }

    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[FeedbackSymbol; 5] {
        &self.0
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&s| s == FeedbackSymbol::Correct)
    }

    /// Check if any position is Absent or Present
    ///
    /// This is the condition under which a round narrows the search.
    #[must_use]
    pub fn has_miss(&self) -> bool {
        self.0
            .iter()
            .any(|&s| matches!(s, FeedbackSymbol::Absent | FeedbackSymbol::Present))
    }

    /// Count positions with the given symbol
    #[must_use]
    pub fn count(&self, symbol: FeedbackSymbol) -> usize {
        self.0.iter().filter(|&&s| s == symbol).count()
    }

    /// Render as five share glyphs, e.g. "🟩⬛🟨🟨⬛"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.glyph()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    /// Parse a feedback string like "GY-GY" or "🟩🟨⬛🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_player::core::Feedback;
    ///
    /// let a: Feedback = "GY-GY".parse().unwrap();
    /// let b: Feedback = "🟩🟨⬛🟩🟨".parse().unwrap();
    /// assert_eq!(a, b);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<FeedbackSymbol> = s
            .trim()
            .chars()
            .map(|ch| {
                FeedbackSymbol::from_char(ch).ok_or_else(|| format!("Invalid feedback symbol: {ch}"))
            })
            .collect::<Result<_, _>>()?;

        let symbols: [FeedbackSymbol; 5] = symbols
            .try_into()
            .map_err(|_| format!("Feedback must have exactly 5 symbols: {s}"))?;

        Ok(Self(symbols))
    }
}

/// Score one round: compare `guess` against `solution`
///
/// A missing guess yields [`Feedback::MISSED`]. Letters are checked per
/// position only; repeated letters are not counted down against the
/// solution, so a doubled guess letter can be marked present twice.
///
/// # Examples
/// ```
/// use wordle_player::core::{Word, evaluate};
///
/// let solution = Word::new("slate").unwrap();
/// let guess = Word::new("swear").unwrap();
/// assert_eq!(evaluate(&solution, Some(&guess)).to_emoji(), "🟩⬛🟨🟨⬛");
/// ```
#[must_use]
pub fn evaluate(solution: &Word, guess: Option<&Word>) -> Feedback {
    let Some(guess) = guess else {
        return Feedback::MISSED;
    };

    let mut symbols = [FeedbackSymbol::Absent; 5];
    for (i, symbol) in symbols.iter_mut().enumerate() {
        let letter = guess.char_at(i);
        *symbol = if letter == solution.char_at(i) {
            FeedbackSymbol::Correct
        } else if solution.has_letter(letter) {
            FeedbackSymbol::Present
        } else {
            FeedbackSymbol::Absent
        };
    }

    Feedback(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn evaluate_same_word_is_solved() {
        for w in ["slate", "swear", "geese", "aaaaa"] {
            let w = word(w);
            assert_eq!(evaluate(&w, Some(&w)), Feedback::SOLVED);
        }
    }

    #[test]
    fn evaluate_without_guess_is_all_absent() {
        let feedback = evaluate(&word("slate"), None);
        assert_eq!(feedback, Feedback::MISSED);
        assert_eq!(feedback.to_emoji(), "⬛⬛⬛⬛⬛");
    }

    #[test]
    fn evaluate_mixed_round() {
        // S in place, W missing, E and A elsewhere, R missing
        let feedback = evaluate(&word("slate"), Some(&word("swear")));
        assert_eq!(feedback, "G-YY-".parse().unwrap());
        assert!(feedback.has_miss());
        assert!(!feedback.is_solved());
    }

    #[test]
    fn evaluate_is_deterministic() {
        let solution = word("crane");
        let guess = word("nacre");
        assert_eq!(
            evaluate(&solution, Some(&guess)),
            evaluate(&solution, Some(&guess))
        );
    }

    #[test]
    fn evaluate_does_not_count_duplicates() {
        // Misplaced E's are all present although SLATE has a single E
        let feedback = evaluate(&word("slate"), Some(&word("geese")));
        assert_eq!(
            feedback.symbols(),
            &[
                FeedbackSymbol::Absent,
                FeedbackSymbol::Present,
                FeedbackSymbol::Present,
                FeedbackSymbol::Present,
                FeedbackSymbol::Correct,
            ]
        );

        // Duplicated solution letter: the non-matching O is still present
        let feedback = evaluate(&word("floor"), Some(&word("robot")));
        assert_eq!(feedback, "YY-G-".parse().unwrap());
    }

    #[test]
    fn has_miss_only_false_when_solved() {
        assert!(!Feedback::SOLVED.has_miss());
        assert!(Feedback::MISSED.has_miss());
        assert!("YYYYY".parse::<Feedback>().unwrap().has_miss());
        assert!("GGGGY".parse::<Feedback>().unwrap().has_miss());
    }

    #[test]
    fn count_symbols() {
        let feedback: Feedback = "GY-GY".parse().unwrap();
        assert_eq!(feedback.count(FeedbackSymbol::Correct), 2);
        assert_eq!(feedback.count(FeedbackSymbol::Present), 2);
        assert_eq!(feedback.count(FeedbackSymbol::Absent), 1);
    }

    #[test]
    fn parse_accepts_both_gray_glyphs() {
        let dark: Feedback = "⬛🟨🟩⬛⬛".parse().unwrap();
        let light: Feedback = "⬜🟨🟩⬜⬜".parse().unwrap();
        assert_eq!(dark, light);
        assert_eq!(dark.to_string(), "⬛🟨🟩⬛⬛");
    }

    #[test]
    fn parse_invalid() {
        assert!("GYGGYG".parse::<Feedback>().is_err());
        assert!("GYG".parse::<Feedback>().is_err());
        assert!("GXGGY".parse::<Feedback>().is_err());
        assert!("".parse::<Feedback>().is_err());
    }
}
