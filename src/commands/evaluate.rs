//! Evaluate command
//!
//! Scores a single guess against a solution and shows how it would narrow
//! a fresh search.

use crate::core::{ConstraintState, Feedback, Word, evaluate};

/// Result of evaluating one guess
pub struct EvaluationResult {
    pub solution: Word,
    pub guess: Word,
    pub feedback: Feedback,
    /// Constraints after folding the feedback into a fresh state
    pub constraints: ConstraintState,
}

/// Evaluate `guess` against `solution`
///
/// # Errors
///
/// Returns an error if either word is invalid.
pub fn evaluate_guess(solution: &str, guess: &str) -> Result<EvaluationResult, String> {
    let solution = Word::new(solution).map_err(|e| format!("Invalid solution: {e}"))?;
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    let feedback = evaluate(&solution, Some(&guess));
    let mut constraints = ConstraintState::new();
    if feedback.has_miss() {
        constraints.apply_feedback(&guess, feedback);
    }

    Ok(EvaluationResult {
        solution,
        guess,
        feedback,
        constraints,
    })
}
