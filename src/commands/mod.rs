//! Command implementations

pub mod benchmark;
pub mod evaluate;
pub mod play;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use evaluate::{EvaluationResult, evaluate_guess};
pub use play::{PlayOutcome, play_game};
