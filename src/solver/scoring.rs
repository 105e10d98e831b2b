//! Partition scoring for candidate guesses
//!
//! A probe guess partitions the candidate set by the feedback each candidate
//! would produce. The heuristic strategy minimizes the expected partition a
//! secret lands in; the minimax strategy minimizes the largest partition.

use rustc_hash::FxHashMap;

use crate::core::{Code, Feedback};

/// Group candidates by the feedback they would produce for the guess
fn group_by_feedback(guess: &Code, candidates: &[Code]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        *counts.entry(Feedback::score(candidate, guess)).or_insert(0) += 1;
    }

    counts
}

/// Sum of squared partition sizes for a guess
///
/// Dividing by `|candidates|` gives the expected remaining-candidate count
/// under a uniform prior, but the undivided integer is what strategies
/// compare: the divisor is constant across one selection round and integer
/// comparison keeps tie detection exact.
#[must_use]
pub fn sum_squared_partitions(guess: &Code, candidates: &[Code]) -> u64 {
    group_by_feedback(guess, candidates)
        .values()
        .map(|&count| (count as u64) * (count as u64))
        .sum()
}

/// Expected remaining candidates after this guess, under a uniform prior
#[must_use]
pub fn expected_remaining(guess: &Code, candidates: &[Code]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }
    sum_squared_partitions(guess, candidates) as f64 / candidates.len() as f64
}

/// Worst-case remaining candidates after this guess
///
/// The largest partition size, per Knuth's minimax criterion.
#[must_use]
pub fn max_remaining(guess: &Code, candidates: &[Code]) -> usize {
    group_by_feedback(guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(texts: &[&str]) -> Vec<Code> {
        texts.iter().map(|t| Code::parse(t).unwrap()).collect()
    }

    #[test]
    fn degenerate_guess_leaves_one_partition() {
        // None of the candidates share a digit with the guess, so every
        // candidate lands in the all-absent partition.
        let guess = Code::parse("99").unwrap();
        let candidates = codes(&["00", "11", "01"]);

        assert_eq!(sum_squared_partitions(&guess, &candidates), 9);
        assert!((expected_remaining(&guess, &candidates) - 3.0).abs() < f64::EPSILON);
        assert_eq!(max_remaining(&guess, &candidates), 3);
    }

    #[test]
    fn perfect_split_scores_one_each() {
        let guess = Code::parse("00").unwrap();
        let candidates = codes(&["00", "99"]);

        // Partitions: {00} with perfect feedback, {99} all absent.
        assert_eq!(sum_squared_partitions(&guess, &candidates), 2);
        assert!((expected_remaining(&guess, &candidates) - 1.0).abs() < f64::EPSILON);
        assert_eq!(max_remaining(&guess, &candidates), 1);
    }

    #[test]
    fn skewed_split_counts_the_largest_partition() {
        // 05 and 06 both score (1 exact, 0 misplaced, 1 absent) against 00;
        // 99 is all absent.
        let guess = Code::parse("00").unwrap();
        let candidates = codes(&["05", "06", "99"]);

        assert_eq!(max_remaining(&guess, &candidates), 2);
        assert_eq!(sum_squared_partitions(&guess, &candidates), 5);
    }

    #[test]
    fn splitting_guess_beats_degenerate_guess() {
        let candidates = codes(&["12", "21", "34", "43"]);
        let splitter = Code::parse("12").unwrap();
        let degenerate = Code::parse("99").unwrap();

        assert!(
            sum_squared_partitions(&splitter, &candidates)
                < sum_squared_partitions(&degenerate, &candidates)
        );
        assert!(max_remaining(&splitter, &candidates) < max_remaining(&degenerate, &candidates));
    }

    #[test]
    fn empty_candidates_score_zero() {
        let guess = Code::parse("00").unwrap();
        assert_eq!(sum_squared_partitions(&guess, &[]), 0);
        assert!(expected_remaining(&guess, &[]).abs() < f64::EPSILON);
        assert_eq!(max_remaining(&guess, &[]), 0);
    }

    #[test]
    fn expected_remaining_matches_partition_sum() {
        let guess = Code::parse("01").unwrap();
        let candidates = codes(&["01", "10", "11", "22", "23"]);

        let sum = sum_squared_partitions(&guess, &candidates) as f64;
        let expected = expected_remaining(&guess, &candidates);
        assert!((expected - sum / 5.0).abs() < 1e-12);
    }
}
