//! Core domain types for the PIN solver
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod code;
mod error;
mod feedback;

pub use code::{ALPHABET_SIZE, Code};
pub use error::Error;
pub use feedback::Feedback;
