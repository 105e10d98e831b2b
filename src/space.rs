//! Candidate space generation and narrowing
//!
//! The universe is the full enumeration of codes for a given length, generated
//! once per solve session in lexicographic order and never mutated. The
//! candidate set starts as the universe and monotonically shrinks as feedback
//! arrives; if honest feedback is given, the true secret stays a member until
//! solved.

use crate::core::{ALPHABET_SIZE, Code, Error, Feedback};

/// Generate every code of the given length in lexicographic order
///
/// The result has `10^length` entries, so lengths beyond 5 or so get
/// expensive; callers own that trade-off. The returned universe is safe to
/// cache and share across solve sessions since it is never mutated.
///
/// # Errors
/// Returns `Error::InvalidInput` if `length` is zero or `10^length` does not
/// fit in `usize`.
///
/// # Examples
/// ```
/// use pin_cracker::space::universe;
///
/// let codes = universe(2)?;
/// assert_eq!(codes.len(), 100);
/// assert_eq!(codes.first().unwrap().to_string(), "00");
/// assert_eq!(codes.last().unwrap().to_string(), "99");
/// # Ok::<(), pin_cracker::core::Error>(())
/// ```
pub fn universe(length: usize) -> Result<Vec<Code>, Error> {
    if length == 0 {
        return Err(Error::InvalidInput(
            "code length must be positive".to_string(),
        ));
    }

    let exponent = u32::try_from(length)
        .map_err(|_| Error::InvalidInput(format!("code length {length} is too large")))?;
    let size = ALPHABET_SIZE.checked_pow(exponent).ok_or_else(|| {
        Error::InvalidInput(format!("universe for length {length} overflows usize"))
    })?;

    let mut codes = Vec::with_capacity(size);
    let mut digits = vec![0u8; length];

    // Odometer enumeration: increment from the last position, carrying left.
    loop {
        codes.push(Code::from_digits(&digits));

        let mut pos = length;
        loop {
            if pos == 0 {
                return Ok(codes);
            }
            pos -= 1;
            digits[pos] += 1;
            if digits[pos] < ALPHABET_SIZE as u8 {
                break;
            }
            digits[pos] = 0;
        }
    }
}

/// Retain the candidates consistent with one observed feedback
///
/// Keeps exactly those candidates that, as the secret, would have produced
/// `feedback` for `guess`. Order-preserving. An empty result means the
/// feedback received so far is mutually unsatisfiable; the solve loop treats
/// that as fatal for the session.
#[must_use]
pub fn filter_candidates(candidates: &[Code], guess: &Code, feedback: Feedback) -> Vec<Code> {
    candidates
        .iter()
        .filter(|candidate| Feedback::score(candidate, guess) == feedback)
        .cloned()
        .collect()
}
