//! The solve loop
//!
//! Orchestrates one session: pick a guess, query the oracle, prune the
//! candidate set, repeat until the oracle confirms every position. All session
//! state lives in the one call; concurrent sessions share nothing.

use super::strategy::{Strategy, StrategyType};
use crate::core::{Code, Error};
use crate::oracle::Oracle;
use crate::space;

/// Outcome of a successful solve session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Oracle queries made, including the final confirming guess
    pub attempts: usize,
    /// The code the oracle confirmed
    pub code: Code,
}

/// Deduce a code of the given length by querying the oracle
///
/// The opening guess is the fixed seed pattern; afterwards the strategy picked
/// by `optimal` selects each probe from the narrowed candidate set. The loop
/// imposes no round cap: the candidate set shrinks strictly every round, so
/// termination within `|universe|` rounds is guaranteed. Callers wanting a
/// timeout must impose one around the oracle.
///
/// # Errors
/// - `Error::InvalidInput` if `length` is zero or too large to enumerate
/// - `Error::InconsistentFeedback` if the oracle's answers rule out every code
/// - any error returned by the oracle itself, such as `Error::OracleAborted`
///
/// # Examples
/// ```
/// use pin_cracker::core::Code;
/// use pin_cracker::oracle::SecretOracle;
/// use pin_cracker::solver::solve;
///
/// let secret = Code::parse("0194")?;
/// let mut oracle = SecretOracle::new(secret.clone());
///
/// let solution = solve(4, &mut oracle, false)?;
/// assert_eq!(solution.code, secret);
/// assert!(solution.attempts >= 1);
/// # Ok::<(), pin_cracker::core::Error>(())
/// ```
pub fn solve<O: Oracle>(length: usize, oracle: &mut O, optimal: bool) -> Result<Solution, Error> {
    let universe = space::universe(length)?;
    let strategy = StrategyType::from_optimal(optimal);
    solve_in(&universe, oracle, &strategy)
}

/// Solve against a pre-generated universe
///
/// Universe generation is the expensive part of session setup; callers running
/// many sessions of the same length can generate it once and pass it here.
/// The universe is only read, never mutated.
///
/// # Errors
/// Same conditions as [`solve`], plus `Error::InvalidInput` for an empty
/// universe.
pub fn solve_in<O: Oracle, S: Strategy>(
    universe: &[Code],
    oracle: &mut O,
    strategy: &S,
) -> Result<Solution, Error> {
    let Some(first) = universe.first() else {
        return Err(Error::InvalidInput("universe is empty".to_string()));
    };
    let length = first.len();

    let mut candidates = universe.to_vec();
    let mut guess = Code::seed(length);
    let mut attempts = 0;

    loop {
        attempts += 1;
        let feedback = oracle.feedback(&guess)?;

        if feedback.is_solved(length) {
            return Ok(Solution {
                attempts,
                code: guess,
            });
        }

        candidates = space::filter_candidates(&candidates, &guess, feedback);
        if candidates.is_empty() {
            return Err(Error::InconsistentFeedback);
        }

        guess = strategy
            .select_guess(universe, &candidates)
            .ok_or(Error::InconsistentFeedback)?
            .clone();
    }
}
