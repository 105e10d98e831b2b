//! Feedback sources
//!
//! The solve loop only ever talks to an [`Oracle`]; whether the feedback comes
//! from a known secret, a human at a terminal, or something else entirely is
//! invisible to the core.

mod interactive;

pub use interactive::InteractiveOracle;

use crate::core::{Code, Error, Feedback};

/// External source of feedback for a guess, queried once per round
///
/// A query may block arbitrarily long, for example while a human types. An
/// implementation can abort the whole session by returning an error instead
/// of feedback.
pub trait Oracle {
    /// Score one guess
    ///
    /// # Errors
    /// Implementation-defined; `Error::OracleAborted` signals external
    /// cancellation.
    fn feedback(&mut self, guess: &Code) -> Result<Feedback, Error>;
}

/// Deterministic oracle wrapping a known secret
///
/// Answers through the feedback evaluator; used for testing, simulation, and
/// the crack/benchmark commands.
pub struct SecretOracle {
    secret: Code,
}

impl SecretOracle {
    #[must_use]
    pub const fn new(secret: Code) -> Self {
        Self { secret }
    }

    /// The wrapped secret
    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }
}

impl Oracle for SecretOracle {
    fn feedback(&mut self, guess: &Code) -> Result<Feedback, Error> {
        Feedback::evaluate(&self.secret, guess)
    }
}
