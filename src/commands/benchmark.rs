//! Benchmark command
//!
//! Plays many recorded games in parallel and summarizes the scores.

use crate::catalog::WordCatalog;
use crate::core::{GameId, MAX_ROUNDS, Score};
use crate::player::Player;
use crate::puzzles::PuzzleLookup;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub solved: usize,
    pub failed: usize,
    pub unplayable: usize,
    /// Average rounds over solved games only
    pub average_rounds: f64,
    /// Games per score value (1-6, 7 for failed)
    pub distribution: HashMap<u8, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play every game in `games` and collect statistics
///
/// Games run on the rayon thread pool; each one builds its own constraint
/// state, so they share nothing but the catalog and puzzle source.
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_benchmark<C, P>(
    player: &Player<C, P>,
    games: &[GameId],
    show_progress: bool,
) -> BenchmarkResult
where
    C: WordCatalog + Sync,
    P: PuzzleLookup + Sync,
{
    let start = Instant::now();

    let pb = if show_progress {
        let pb = ProgressBar::new(games.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let scores: Vec<Option<Score>> = games
        .par_iter()
        .map(|&game| {
            let score = player.play(game).map(|result| result.score);
            pb.inc(1);
            score
        })
        .collect();

    pb.finish_and_clear();

    let mut distribution: HashMap<u8, usize> = HashMap::new();
    let mut solved = 0;
    let mut solved_rounds = 0usize;
    let mut unplayable = 0;

    for score in &scores {
        match score {
            Some(score) => {
                *distribution.entry(score.value()).or_insert(0) += 1;
                if let Score::Solved(round) = score {
                    solved += 1;
                    solved_rounds += usize::from(*round);
                }
            }
            None => unplayable += 1,
        }
    }

    let duration = start.elapsed();
    let total_games = games.len();
    let played = total_games - unplayable;

    BenchmarkResult {
        total_games,
        solved,
        failed: played - solved,
        unplayable,
        average_rounds: if solved > 0 {
            solved_rounds as f64 / solved as f64
        } else {
            0.0
        },
        distribution,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

impl BenchmarkResult {
    /// Share of played games that were solved, in percent
    #[must_use]
    pub fn solve_rate(&self) -> f64 {
        let played = self.solved + self.failed;
        if played == 0 {
            0.0
        } else {
            self.solved as f64 / played as f64 * 100.0
        }
    }

    /// Count of games with the given score value
    #[must_use]
    pub fn count_for(&self, value: u8) -> usize {
        debug_assert!(value >= 1 && value <= MAX_ROUNDS + 1);
        self.distribution.get(&value).copied().unwrap_or(0)
    }
}
