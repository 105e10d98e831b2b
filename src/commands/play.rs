//! Interactive play session
//!
//! The user thinks of a PIN and scores each guess at the prompt; the solver
//! deduces the code from the answers.

use colored::Colorize;

use crate::core::Error;
use crate::oracle::InteractiveOracle;
use crate::solver::solve;

/// Run one interactive session
///
/// A user quit is reported and treated as a normal exit; contradictory
/// feedback is a session failure and propagates.
///
/// # Errors
/// Returns `Error::InconsistentFeedback` when the supplied answers rule out
/// every code, or `Error::InvalidInput` for a zero length.
pub fn run_play(length: usize, optimal: bool) -> Result<(), Error> {
    println!("\n{}", "PIN Cracker".bold());
    println!("Think of a secret {length}-digit PIN and I'll deduce it.");
    println!("Score each guess by how many digits are exactly placed, misplaced, or absent.");

    let mut oracle = InteractiveOracle::new(length);
    match solve(length, &mut oracle, optimal) {
        Ok(solution) => {
            let rounds = if solution.attempts == 1 {
                "attempt"
            } else {
                "attempts"
            };
            println!(
                "\n{}",
                format!(
                    "Secret PIN {} cracked in {} {rounds}!",
                    solution.code, solution.attempts
                )
                .green()
                .bold()
            );
            Ok(())
        }
        Err(Error::OracleAborted) => {
            println!("\nGame aborted.");
            Ok(())
        }
        Err(err) => Err(err),
    }
}
