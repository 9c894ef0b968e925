//! Autonomous game play
//!
//! The [`Player`] drives a game round by round against a [`WordCatalog`]
//! and a [`PuzzleLookup`], and renders the share block at the end.
//!
//! [`WordCatalog`]: crate::catalog::WordCatalog
//! [`PuzzleLookup`]: crate::puzzles::PuzzleLookup

mod engine;

pub use engine::{Player, PlayerConfig};
