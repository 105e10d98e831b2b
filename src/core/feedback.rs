//! Feedback evaluation for a guess against a secret
//!
//! Feedback is the Mastermind-style triple (exact, misplaced, absent):
//! - exact: digits in the correct position
//! - misplaced: correct digits in the wrong position
//! - absent: digits that do not appear at all
//!
//! The three counts always sum to the code length. Repeated digits follow
//! multiset semantics: a guess digit only counts as misplaced while unmatched
//! copies of it remain in the secret.

use std::fmt;

use super::code::Code;
use super::error::Error;

/// Scoring triple for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    exact: usize,
    misplaced: usize,
    absent: usize,
}

impl Feedback {
    /// Assemble feedback from raw counts
    #[must_use]
    pub const fn new(exact: usize, misplaced: usize, absent: usize) -> Self {
        Self {
            exact,
            misplaced,
            absent,
        }
    }

    /// Digits in the correct position
    #[inline]
    #[must_use]
    pub const fn exact(self) -> usize {
        self.exact
    }

    /// Correct digits in the wrong position
    #[inline]
    #[must_use]
    pub const fn misplaced(self) -> usize {
        self.misplaced
    }

    /// Digits absent from the secret
    #[inline]
    #[must_use]
    pub const fn absent(self) -> usize {
        self.absent
    }

    /// Total positions this feedback accounts for
    #[inline]
    #[must_use]
    pub const fn total(self) -> usize {
        self.exact + self.misplaced + self.absent
    }

    /// True when every position is an exact match
    #[inline]
    #[must_use]
    pub const fn is_solved(self, length: usize) -> bool {
        self.exact == length
    }

    /// Score a guess against a secret
    ///
    /// `exact` counts index-wise equal digits. The multiset intersection
    /// `common` is the sum over each digit of the smaller occurrence count in
    /// secret and guess; then `misplaced = common - exact` and
    /// `absent = length - common`.
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` if the two codes differ in length.
    ///
    /// # Examples
    /// ```
    /// use pin_cracker::core::{Code, Feedback};
    ///
    /// let secret = Code::parse("1122")?;
    /// let guess = Code::parse("1111")?;
    /// let feedback = Feedback::evaluate(&secret, &guess)?;
    ///
    /// assert_eq!(feedback.exact(), 2);
    /// assert_eq!(feedback.misplaced(), 0);
    /// assert_eq!(feedback.absent(), 2);
    /// # Ok::<(), pin_cracker::core::Error>(())
    /// ```
    pub fn evaluate(secret: &Code, guess: &Code) -> Result<Self, Error> {
        if secret.len() != guess.len() {
            return Err(Error::InvalidInput(format!(
                "secret has {} digits but guess has {}",
                secret.len(),
                guess.len()
            )));
        }
        Ok(Self::score(secret, guess))
    }

    /// Length-unchecked scoring for callers that guarantee equal lengths,
    /// such as filtering within one universe
    pub(crate) fn score(secret: &Code, guess: &Code) -> Self {
        debug_assert_eq!(secret.len(), guess.len());

        let exact = secret
            .digits()
            .iter()
            .zip(guess.digits())
            .filter(|(s, g)| s == g)
            .count();

        let secret_counts = secret.digit_counts();
        let guess_counts = guess.digit_counts();
        let common: usize = secret_counts
            .iter()
            .zip(&guess_counts)
            .map(|(&s, &g)| s.min(g))
            .sum();

        Self {
            exact,
            misplaced: common - exact,
            absent: secret.len() - common,
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} exact, {} misplaced, {} absent",
            self.exact, self.misplaced, self.absent
        )
    }
}
