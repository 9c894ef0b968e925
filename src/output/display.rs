//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, letter_set};
use crate::commands::{BenchmarkResult, EvaluationResult, PlayOutcome};
use crate::core::{MAX_ROUNDS, ShareCard};
use colored::Colorize;

/// Print the result of playing a game
///
/// The share block itself goes to stdout untouched so it can be piped
/// straight into a chat message; the colored replay is shown when `verbose`.
pub fn print_play_result(outcome: &PlayOutcome, verbose: bool) {
    if verbose && let Some(result) = &outcome.result {
        println!("{}", "─".repeat(40).cyan());
        for (i, round) in result.rounds.iter().enumerate() {
            println!(
                "Round {}: {}",
                i + 1,
                colored_guess(round.guess.text(), round.feedback)
            );
        }
        println!("{}", "─".repeat(40).cyan());
    }

    print!("{}", outcome.message());
    if outcome.result.is_none() {
        println!();
    }
}

/// Print a single guess evaluation
pub fn print_evaluation(result: &EvaluationResult) {
    println!(
        "\n{} {}   {}",
        colored_guess(result.guess.text(), result.feedback),
        result.feedback,
        format!("vs {}", result.solution.text().to_uppercase()).bright_black()
    );

    if result.feedback.is_solved() {
        println!("\n{}", "✅ Solved!".green().bold());
        return;
    }

    println!("\n{}", "Constraints after this round:".bright_cyan().bold());
    for (i, &allowed) in result.constraints.positions().iter().enumerate() {
        println!("   Position {}: {}", i + 1, letter_set(allowed));
    }
    let present = result.constraints.confirmed_present();
    if !present.is_empty() {
        println!("   Must contain: {}", present.to_string().bright_yellow());
    }
}

/// Print a parsed share header
pub fn print_share_card(card: Option<&ShareCard>) {
    match card {
        Some(card) => {
            println!(
                "Game {}: {}/{MAX_ROUNDS}{}",
                card.game.to_string().bright_yellow().bold(),
                card.score,
                if card.hard_mode { " (hard mode)" } else { "" }
            );
        }
        None => println!("{}", "No Wordle score found".red()),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.solved + result.failed);
    println!(
        "   Solved:           {} ({:.1}%)",
        result.solved.to_string().green(),
        result.solve_rate()
    );
    println!("   Failed:           {}", result.failed.to_string().red());
    if result.unplayable > 0 {
        println!(
            "   Unplayable:       {}",
            result.unplayable.to_string().yellow()
        );
    }
    println!(
        "   Average rounds:   {}",
        format!("{:.2}", result.average_rounds)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    let played = result.solved + result.failed;
    if played == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for value in 1..=MAX_ROUNDS + 1 {
        let count = result.count_for(value);
        let pct = count as f64 / played as f64 * 100.0;
        let label = if value > MAX_ROUNDS {
            "X".to_string()
        } else {
            value.to_string()
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        let bar = if value > MAX_ROUNDS {
            bar.red()
        } else {
            bar.green()
        };
        println!("   {label}: {bar} {count:4} ({pct:5.1}%)");
    }
}
