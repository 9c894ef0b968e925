//! Formatting utilities for terminal output

use crate::core::{Feedback, FeedbackSymbol, LetterSet};
use colored::{ColoredString, Colorize};

/// Format a guess with each letter colored by its feedback
#[must_use]
pub fn colored_guess(guess: &str, feedback: Feedback) -> String {
    guess
        .to_uppercase()
        .chars()
        .zip(feedback.symbols())
        .map(|(letter, &symbol)| colored_letter(letter, symbol).to_string())
        .collect()
}

fn colored_letter(letter: char, symbol: FeedbackSymbol) -> ColoredString {
    let cell = format!(" {letter} ");
    match symbol {
        FeedbackSymbol::Correct => cell.black().on_green().bold(),
        FeedbackSymbol::Present => cell.black().on_yellow().bold(),
        FeedbackSymbol::Absent => cell.white().on_bright_black(),
    }
}

/// Format a letter set, marking pinned positions
#[must_use]
pub fn letter_set(set: LetterSet) -> String {
    match set.len() {
        0 => "(none)".to_string(),
        1 => format!("{set} (pinned)"),
        26 => "any".to_string(),
        _ => set.to_string(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colored_guess_keeps_letters() {
        colored::control::set_override(false);
        let feedback: Feedback = "G-YY-".parse().unwrap();
        assert_eq!(colored_guess("swear", feedback), " S  W  E  A  R ");
    }

    #[test]
    fn letter_set_labels() {
        assert_eq!(letter_set(LetterSet::ALPHABET), "any");
        assert_eq!(letter_set(LetterSet::EMPTY), "(none)");
        assert_eq!(letter_set(LetterSet::only(b's')), "s (pinned)");
        let set: LetterSet = b"xa".iter().copied().collect();
        assert_eq!(letter_set(set), "ax");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
