//! Error type shared by the solving core

use std::fmt;

/// Errors surfaced by the solving core
///
/// `InvalidInput` and `InconsistentFeedback` are fatal to the current solve
/// session and propagate to the caller; malformed interactive input never
/// reaches the core because the oracle adapter re-prompts locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A code or length argument failed validation
    InvalidInput(String),
    /// The feedback received so far admits no remaining code
    InconsistentFeedback,
    /// An interactive oracle asked to stop the session
    OracleAborted,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(reason) => write!(f, "invalid input: {reason}"),
            Self::InconsistentFeedback => {
                write!(f, "no possible codes match the provided feedback")
            }
            Self::OracleAborted => write!(f, "session aborted by the oracle"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = Error::InvalidInput("code must have at least one digit".to_string());
        assert!(err.to_string().contains("invalid input"));

        assert_eq!(
            Error::InconsistentFeedback.to_string(),
            "no possible codes match the provided feedback"
        );
        assert_eq!(
            Error::OracleAborted.to_string(),
            "session aborted by the oracle"
        );
    }

    #[test]
    fn errors_compare_by_value() {
        assert_eq!(Error::InconsistentFeedback, Error::InconsistentFeedback);
        assert_ne!(Error::OracleAborted, Error::InconsistentFeedback);
    }
}
