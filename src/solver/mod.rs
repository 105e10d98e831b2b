//! Guess selection and the solve loop
//!
//! The adaptive guessing engine: pool construction, partition scoring, the
//! two selection strategies, and the loop that drives a session against an
//! oracle.

mod engine;
pub mod pool;
pub mod scoring;
pub mod strategy;

pub use engine::{Solution, solve, solve_in};
pub use strategy::{HeuristicStrategy, MinimaxStrategy, Strategy, StrategyType};
