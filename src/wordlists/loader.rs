//! Word list and game file loading
//!
//! Word lists hold one word per line. Game files hold one game per line as
//! `<game> <word>`, or just `<game>` for a game whose answer is not known
//! yet. Blank lines and lines starting with `#` are ignored in both.

use crate::core::{GameId, Word};
use crate::puzzles::GameBook;
use log::warn;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error loading a word list or game file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: invalid game number {text:?}")]
    InvalidGame { line: usize, text: String },
    #[error("line {line}: invalid solution {text:?}: {reason}")]
    InvalidSolution {
        line: usize,
        text: String,
        reason: String,
    },
    #[error("line {line}: unexpected trailing text {text:?}")]
    TrailingText { line: usize, text: String },
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn content_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_player::wordlists::loader::load_words;
///
/// let words = load_words("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_words<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    Ok(parse_words(&read(path.as_ref())?))
}

/// Parse a word list, skipping invalid entries
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    content_lines(content)
        .filter_map(|(line, text)| match Word::new(text) {
            Ok(word) => Some(word),
            Err(e) => {
                warn!("Skipping word list line {line} ({text:?}): {e}");
                None
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_player::wordlists::loader::words_from_slice;
/// use wordle_player::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Load a game file into a [`GameBook`]
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be read or a line is malformed.
pub fn load_games<P: AsRef<Path>>(path: P) -> Result<GameBook, LoadError> {
    parse_games(&read(path.as_ref())?)
}

/// Parse game file content into a [`GameBook`]
///
/// # Errors
///
/// Returns the first malformed line: a bad game number, an invalid
/// solution word, or extra text after the word.
pub fn parse_games(content: &str) -> Result<GameBook, LoadError> {
    let mut book = GameBook::new();

    for (line, text) in content_lines(content) {
        let mut fields = text.split_whitespace();

        let game_text = fields.next().unwrap_or_default();
        let game: GameId = game_text.parse().map_err(|_| LoadError::InvalidGame {
            line,
            text: game_text.to_string(),
        })?;

        match fields.next() {
            None => book.record_game(game),
            Some(word_text) => {
                let word = Word::new(word_text).map_err(|e| LoadError::InvalidSolution {
                    line,
                    text: word_text.to_string(),
                    reason: e.to_string(),
                })?;
                book.record_solution(game, word);
            }
        }

        if let Some(extra) = fields.next() {
            return Err(LoadError::TrailingText {
                line,
                text: extra.to_string(),
            });
        }
    }

    Ok(book)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzles::PuzzleLookup;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn parse_words_skips_comments_blanks_and_invalid() {
        let content = "# guesses\ncrane\n\n  Slate  \nnope\nsw3ar\n";
        let words = parse_words(content);

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate"]);
    }

    #[test]
    fn parse_games_records_solved_and_unsolved() {
        let content = "# games\n0 cigar\n1 REBUT\n\n2\n";
        let book = parse_games(content).unwrap();

        assert_eq!(book.len(), 3);
        assert_eq!(book.solution(0).as_deref(), Some("cigar"));
        assert_eq!(book.solution(1).as_deref(), Some("rebut"));
        assert_eq!(book.solution(2), None);
        assert_eq!(book.latest_game(), Some(2));
    }

    #[test]
    fn parse_games_rejects_bad_game_number() {
        let err = parse_games("0 cigar\nten rebut\n").unwrap_err();
        assert!(matches!(err, LoadError::InvalidGame { line: 2, .. }));
        assert_eq!(err.to_string(), "line 2: invalid game number \"ten\"");
    }

    #[test]
    fn parse_games_rejects_bad_solution() {
        let err = parse_games("3 cigars\n").unwrap_err();
        assert!(matches!(err, LoadError::InvalidSolution { line: 1, .. }));
    }

    #[test]
    fn parse_games_rejects_trailing_text() {
        let err = parse_games("4 cigar extra\n").unwrap_err();
        assert!(matches!(err, LoadError::TrailingText { line: 1, .. }));
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = load_words("definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("definitely/not/here.txt"));
    }

    #[test]
    fn load_bundled_games_file() {
        let book = load_games(concat!(env!("CARGO_MANIFEST_DIR"), "/data/games.txt")).unwrap();
        assert_eq!(book.solution(0).as_deref(), Some("cigar"));
        assert_eq!(book.latest_game(), Some(10));
        assert_eq!(book.solution(10), None);
    }
}
