//! Human-in-the-loop oracle
//!
//! Prints each guess and reads the scoring from stdin. Malformed input is
//! handled locally with a diagnostic and a re-prompt; only an explicit quit
//! token (or a closed stdin) ends the session, as `Error::OracleAborted`.

use std::io::{self, BufRead, Write};

use super::Oracle;
use crate::core::{Code, Error, Feedback};

/// Oracle that asks a human to score each guess
pub struct InteractiveOracle {
    length: usize,
    attempt: usize,
}

impl InteractiveOracle {
    #[must_use]
    pub const fn new(length: usize) -> Self {
        Self { length, attempt: 0 }
    }
}

impl Oracle for InteractiveOracle {
    fn feedback(&mut self, guess: &Code) -> Result<Feedback, Error> {
        self.attempt += 1;
        println!("\nAttempt {}: my guess is {guess}", self.attempt);
        println!(
            "Enter feedback as 'exact misplaced [absent]' (e.g. '2 1' or '2 1 1'), or 'q' to quit:"
        );

        loop {
            print!(" > ");
            if io::stdout().flush().is_err() {
                return Err(Error::OracleAborted);
            }

            let mut line = String::new();
            match io::stdin().lock().read_line(&mut line) {
                // Closed stdin ends the session the same way a quit does.
                Ok(0) | Err(_) => return Err(Error::OracleAborted),
                Ok(_) => {}
            }

            let input = line.trim().to_lowercase();
            if matches!(input.as_str(), "q" | "quit" | "exit") {
                return Err(Error::OracleAborted);
            }

            match parse_feedback(&input, self.length) {
                Ok(feedback) => return Ok(feedback),
                Err(diagnostic) => println!("{diagnostic}"),
            }
        }
    }
}

/// Parse `exact misplaced [absent]` against the session length
///
/// Two numbers infer `absent`; three are taken as given. The counts must sum
/// to the PIN length. The error value is the diagnostic to show before
/// re-prompting.
fn parse_feedback(input: &str, length: usize) -> Result<Feedback, String> {
    let numbers = input
        .split_whitespace()
        .map(str::parse::<usize>)
        .collect::<Result<Vec<usize>, _>>()
        .map_err(|_| "Invalid feedback, enter numbers only.".to_string())?;

    let (exact, misplaced, absent) = match numbers[..] {
        [exact, misplaced] => {
            let seen = exact.saturating_add(misplaced);
            if seen > length {
                return Err(format!(
                    "Counts exceed the PIN length of {length}, try again."
                ));
            }
            (exact, misplaced, length - seen)
        }
        [exact, misplaced, absent] => (exact, misplaced, absent),
        _ => return Err("Enter two or three numbers, e.g. '2 1' or '2 1 1'.".to_string()),
    };

    if exact.saturating_add(misplaced).saturating_add(absent) != length {
        return Err(format!(
            "Counts do not sum to the PIN length of {length}, try again."
        ));
    }

    Ok(Feedback::new(exact, misplaced, absent))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_numbers_infer_absent() {
        let feedback = parse_feedback("2 1", 4).unwrap();
        assert_eq!(feedback, Feedback::new(2, 1, 1));
    }

    #[test]
    fn three_numbers_taken_as_given() {
        let feedback = parse_feedback("2 1 1", 4).unwrap();
        assert_eq!(feedback, Feedback::new(2, 1, 1));
    }

    #[test]
    fn all_exact_is_accepted() {
        let feedback = parse_feedback("4 0", 4).unwrap();
        assert!(feedback.is_solved(4));
    }

    #[test]
    fn sum_mismatch_is_rejected() {
        let err = parse_feedback("2 1 3", 4).unwrap_err();
        assert!(err.contains("sum"));
    }

    #[test]
    fn counts_exceeding_length_are_rejected() {
        let err = parse_feedback("3 2", 4).unwrap_err();
        assert!(err.contains("exceed"));
    }

    #[test]
    fn non_numeric_input_is_rejected() {
        assert!(parse_feedback("two one", 4).is_err());
        assert!(parse_feedback("2 -1", 4).is_err());
    }

    #[test]
    fn wrong_token_count_is_rejected() {
        assert!(parse_feedback("2", 4).is_err());
        assert!(parse_feedback("2 1 1 0", 4).is_err());
        assert!(parse_feedback("", 4).is_err());
    }

    #[test]
    fn whitespace_is_tolerated() {
        let feedback = parse_feedback("  2   1 ", 4).unwrap();
        assert_eq!(feedback, Feedback::new(2, 1, 1));
    }
}
