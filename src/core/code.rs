//! Numeric code representation
//!
//! A Code stores a fixed-length sequence of decimal digits. Ordering is
//! lexicographic over the digit string, matching universe enumeration order.

use std::fmt;

use super::error::Error;

/// Number of symbols in the digit alphabet (`0`-`9`)
pub const ALPHABET_SIZE: usize = 10;

/// A fixed-length numeric code
///
/// Digits are stored as values `0..=9`. Equality and ordering are defined over
/// the digit sequence, so two codes parsed from the same string are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code {
    digits: Box<[u8]>,
}

impl Code {
    /// Parse a code from a string of ASCII digits
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` if:
    /// - The string is empty
    /// - Any character is not an ASCII digit
    ///
    /// # Examples
    /// ```
    /// use pin_cracker::core::Code;
    ///
    /// let code = Code::parse("0194").unwrap();
    /// assert_eq!(code.len(), 4);
    /// assert_eq!(code.to_string(), "0194");
    ///
    /// assert!(Code::parse("").is_err());
    /// assert!(Code::parse("01a4").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, Error> {
        if text.is_empty() {
            return Err(Error::InvalidInput(
                "code must have at least one digit".to_string(),
            ));
        }

        let digits = text
            .chars()
            .map(|c| {
                c.to_digit(10).map(|d| d as u8).ok_or_else(|| {
                    Error::InvalidInput(format!("invalid digit {c:?} in code {text:?}"))
                })
            })
            .collect::<Result<Vec<u8>, Error>>()?;

        Ok(Self {
            digits: digits.into_boxed_slice(),
        })
    }

    /// Deterministic opening guess: digit `i % 10` at position `i`
    ///
    /// Guarantees a reproducible first move that is independent of the
    /// candidate set.
    ///
    /// # Examples
    /// ```
    /// use pin_cracker::core::Code;
    ///
    /// assert_eq!(Code::seed(4).to_string(), "0123");
    /// assert_eq!(Code::seed(12).to_string(), "012345678901");
    /// ```
    #[must_use]
    pub fn seed(length: usize) -> Self {
        debug_assert!(length > 0, "code length must be positive");
        let digits = (0..length)
            .map(|i| (i % ALPHABET_SIZE) as u8)
            .collect::<Vec<u8>>();
        Self {
            digits: digits.into_boxed_slice(),
        }
    }

    /// Build a code from already-validated digit values
    pub(crate) fn from_digits(digits: &[u8]) -> Self {
        debug_assert!(digits.iter().all(|&d| d < ALPHABET_SIZE as u8));
        Self {
            digits: digits.into(),
        }
    }

    /// Number of digits in the code
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// True for the zero-length code, which no valid constructor produces
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// The digit values, in position order
    #[inline]
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Occurrence count of each digit, for multiset intersection
    pub(crate) fn digit_counts(&self) -> [usize; ALPHABET_SIZE] {
        let mut counts = [0usize; ALPHABET_SIZE];
        for &d in &self.digits {
            counts[usize::from(d)] += 1;
        }
        counts
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in &self.digits {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_code() {
        let code = Code::parse("0194").unwrap();
        assert_eq!(code.len(), 4);
        assert_eq!(code.digits(), &[0, 1, 9, 4]);
    }

    #[test]
    fn parse_empty_rejected() {
        assert!(matches!(Code::parse(""), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn parse_non_digit_rejected() {
        assert!(Code::parse("12x4").is_err());
        assert!(Code::parse("1 23").is_err());
        assert!(Code::parse("-123").is_err());
    }

    #[test]
    fn parse_accepts_any_length() {
        assert_eq!(Code::parse("7").unwrap().len(), 1);
        assert_eq!(Code::parse("0123456789").unwrap().len(), 10);
    }

    #[test]
    fn seed_follows_cyclic_pattern() {
        assert_eq!(Code::seed(1).to_string(), "0");
        assert_eq!(Code::seed(4).to_string(), "0123");
        assert_eq!(Code::seed(11).to_string(), "01234567890");
    }

    #[test]
    fn display_round_trips() {
        for text in ["0", "42", "0194", "00000"] {
            assert_eq!(Code::parse(text).unwrap().to_string(), text);
        }
    }

    #[test]
    fn ordering_is_lexicographic() {
        let a = Code::parse("0194").unwrap();
        let b = Code::parse("0200").unwrap();
        let c = Code::parse("9999").unwrap();

        assert!(a < b);
        assert!(b < c);
        assert_eq!(a, Code::parse("0194").unwrap());
    }

    #[test]
    fn digit_counts_track_duplicates() {
        let code = Code::parse("1123").unwrap();
        let counts = code.digit_counts();
        assert_eq!(counts[1], 2);
        assert_eq!(counts[2], 1);
        assert_eq!(counts[3], 1);
        assert_eq!(counts[0], 0);
    }
}
