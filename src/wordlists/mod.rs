//! Word lists and game records
//!
//! Provides the embedded guess corpus and loaders for word list and game
//! files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
