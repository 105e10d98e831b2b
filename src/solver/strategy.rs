//! Guess selection strategies
//!
//! Defines the Strategy trait and the two concrete selectors. Both are pure
//! functions of `(universe, candidates)` plus the fixed pool constants, so a
//! given position always yields the same guess.

use rayon::prelude::*;
use rustc_hash::FxHashSet;

use super::pool::build_pool;
use super::scoring::{max_remaining, sum_squared_partitions};
use crate::core::Code;

/// A strategy for selecting the next probe from the candidate space
pub trait Strategy {
    /// Select the next guess given the universe and the remaining candidates
    ///
    /// Returns `None` only when there is nothing to choose from.
    fn select_guess<'a>(&self, universe: &'a [Code], candidates: &'a [Code]) -> Option<&'a Code>;
}

/// Enum wrapper for the available strategies
///
/// Allows runtime selection while keeping static dispatch inside each arm.
pub enum StrategyType {
    /// Expected-remaining minimization with pool sampling (default)
    Heuristic(HeuristicStrategy),
    /// Worst-case minimization over the full universe
    Minimax(MinimaxStrategy),
}

impl StrategyType {
    /// Pick the strategy for the `optimal` flag
    #[must_use]
    pub const fn from_optimal(optimal: bool) -> Self {
        if optimal {
            Self::Minimax(MinimaxStrategy)
        } else {
            Self::Heuristic(HeuristicStrategy)
        }
    }
}

impl Strategy for StrategyType {
    fn select_guess<'a>(&self, universe: &'a [Code], candidates: &'a [Code]) -> Option<&'a Code> {
        match self {
            Self::Heuristic(s) => s.select_guess(universe, candidates),
            Self::Minimax(s) => s.select_guess(universe, candidates),
        }
    }
}

/// Expected-remaining minimization strategy
///
/// Scores each pool guess by the sum of squared partition sizes (expected
/// remaining candidates under a uniform prior, up to the constant divisor)
/// and keeps the minimum. Ties go to the lexicographically smallest code.
pub struct HeuristicStrategy;

impl Strategy for HeuristicStrategy {
    fn select_guess<'a>(&self, universe: &'a [Code], candidates: &'a [Code]) -> Option<&'a Code> {
        // A lone survivor must be the secret.
        if candidates.len() == 1 {
            return candidates.first();
        }

        let pool = build_pool(universe, candidates, false);
        pool.into_par_iter()
            .min_by_key(|&guess| (sum_squared_partitions(guess, candidates), guess))
    }
}

/// Worst-case minimization strategy, after Knuth
///
/// Always scores the full universe, trading runtime that grows with
/// `|universe|^2` for a provable bound on the number of rounds. Tie order:
/// smaller worst case, then a guess that is itself still a viable candidate,
/// then the lexicographically smallest code.
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess<'a>(&self, universe: &'a [Code], candidates: &'a [Code]) -> Option<&'a Code> {
        if candidates.len() == 1 {
            return candidates.first();
        }

        let viable: FxHashSet<&Code> = candidates.iter().collect();
        let pool = build_pool(universe, candidates, true);
        pool.into_par_iter().min_by_key(|&guess| {
            (
                max_remaining(guess, candidates),
                !viable.contains(guess),
                guess,
            )
        })
    }
}
