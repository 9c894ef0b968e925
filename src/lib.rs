//! Wordle Player
//!
//! Plays daily Wordle puzzles on its own: given a puzzle whose answer is on
//! record, it guesses round by round from a word catalog, narrows the
//! letters allowed at each position from the feedback, and renders the
//! familiar share block.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_player::catalog::InMemoryCatalog;
//! use wordle_player::core::Word;
//! use wordle_player::player::{Player, PlayerConfig};
//! use wordle_player::puzzles::GameBook;
//!
//! let mut book = GameBook::new();
//! book.record_solution(1234, Word::new("slate").unwrap());
//!
//! let catalog = InMemoryCatalog::seeded(Vec::new(), &book, 7);
//! let config = PlayerConfig::with_opener(Word::new("slate").unwrap());
//! let player = Player::new(&catalog, &book, config);
//!
//! assert_eq!(
//!     player.play_game(1234).unwrap(),
//!     "Wordle 1234 1/6*\n\n🟩🟩🟩🟩🟩\n"
//! );
//! ```

// Core domain types
pub mod core;

// Guess lookup
pub mod catalog;

// Puzzle solutions
pub mod puzzles;

// Game play
pub mod player;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
