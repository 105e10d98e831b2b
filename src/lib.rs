//! PIN Cracker
//!
//! An adaptive solver for fixed-length numeric codes under Mastermind-style
//! feedback. Each round the solver proposes a guess, an oracle scores it as
//! `(exact, misplaced, absent)`, and the candidate space narrows until the
//! code is confirmed. Two interchangeable strategies drive guess selection:
//! a sampling heuristic that minimizes the expected remaining candidates, and
//! an exhaustive minimax mode that minimizes the worst case.
//!
//! # Quick Start
//!
//! ```
//! use pin_cracker::core::Code;
//! use pin_cracker::oracle::SecretOracle;
//! use pin_cracker::solver::solve;
//!
//! let secret = Code::parse("0194")?;
//! let mut oracle = SecretOracle::new(secret.clone());
//!
//! let solution = solve(4, &mut oracle, false)?;
//! assert_eq!(solution.code, secret);
//! # Ok::<(), pin_cracker::core::Error>(())
//! ```

// Core domain types
pub mod core;

// Candidate universe generation and narrowing
pub mod space;

// Guess selection and the solve loop
pub mod solver;

// Feedback sources
pub mod oracle;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
