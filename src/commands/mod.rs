//! Command implementations
//!
//! Each command is a thin orchestration over the solver core; presentation
//! lives in the output module.

mod benchmark;
mod crack;
mod play;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use crack::{CrackResult, GuessStep, crack_secret};
pub use play::run_play;
