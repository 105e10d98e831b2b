//! Crack command
//!
//! Solves a known secret with the deterministic oracle and records the full
//! deduction trace for display.

use crate::core::{Code, Error, Feedback};
use crate::solver::scoring::{expected_remaining, max_remaining};
use crate::solver::{Strategy, StrategyType};
use crate::space;

/// Result of cracking a known secret
pub struct CrackResult {
    /// The secret that was deduced
    pub secret: String,
    /// Oracle queries made, including the final confirming guess
    pub attempts: usize,
    /// One entry per guess, in order
    pub steps: Vec<GuessStep>,
}

/// A single guess in the deduction trace
pub struct GuessStep {
    pub guess: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Expected remaining candidates, when more than one remained
    pub expected: Option<f64>,
    /// Worst-case remaining candidates, when more than one remained
    pub worst_case: Option<usize>,
}

/// Crack a known secret, recording per-round metrics
///
/// # Errors
/// - `Error::InvalidInput` if the secret has zero length
/// - `Error::InconsistentFeedback` cannot occur with an honest evaluator but
///   is propagated for uniformity with the solve loop
pub fn crack_secret(secret: &Code, optimal: bool) -> Result<CrackResult, Error> {
    let length = secret.len();
    let universe = space::universe(length)?;
    let strategy = StrategyType::from_optimal(optimal);

    let mut candidates = universe.clone();
    let mut guess = Code::seed(length);
    let mut steps = Vec::new();
    let mut attempts = 0;

    loop {
        attempts += 1;
        let candidates_before = candidates.len();
        let (expected, worst_case) = if candidates_before > 1 {
            (
                Some(expected_remaining(&guess, &candidates)),
                Some(max_remaining(&guess, &candidates)),
            )
        } else {
            (None, None)
        };

        let feedback = Feedback::evaluate(secret, &guess)?;

        if feedback.is_solved(length) {
            steps.push(GuessStep {
                guess: guess.to_string(),
                feedback,
                candidates_before,
                candidates_after: 1,
                expected,
                worst_case,
            });
            return Ok(CrackResult {
                secret: secret.to_string(),
                attempts,
                steps,
            });
        }

        candidates = space::filter_candidates(&candidates, &guess, feedback);
        steps.push(GuessStep {
            guess: guess.to_string(),
            feedback,
            candidates_before,
            candidates_after: candidates.len(),
            expected,
            worst_case,
        });

        if candidates.is_empty() {
            return Err(Error::InconsistentFeedback);
        }

        guess = strategy
            .select_guess(&universe, &candidates)
            .ok_or(Error::InconsistentFeedback)?
            .clone();
    }
}
