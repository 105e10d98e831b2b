//! Benchmark command
//!
//! Measures attempt counts across a deterministic sweep of secrets.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use indicatif::ProgressBar;

use crate::core::{Code, Error};
use crate::oracle::SecretOracle;
use crate::solver::{StrategyType, solve_in};
use crate::space;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_secrets: usize,
    pub total_attempts: usize,
    pub average_attempts: f64,
    pub min_attempts: usize,
    pub max_attempts: usize,
    /// attempts -> number of secrets solved in that many attempts
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub secrets_per_second: f64,
}

/// Solve an evenly spaced sample of secrets and aggregate attempt counts
///
/// The sample is drawn from the universe with a fixed stride, so repeated
/// runs measure identical work. The universe is generated once and shared
/// across all sessions.
///
/// # Errors
/// Returns `Error::InvalidInput` for a zero or oversized length. Individual
/// sessions cannot fail against the honest deterministic oracle, but any
/// session error would propagate.
pub fn run_benchmark(
    length: usize,
    count: usize,
    optimal: bool,
    show_progress: bool,
) -> Result<BenchmarkResult, Error> {
    let universe = space::universe(length)?;
    let secrets = evenly_spaced(&universe, count);
    let strategy = StrategyType::from_optimal(optimal);

    let bar = if show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut total_attempts = 0;
    let mut min_attempts = usize::MAX;
    let mut max_attempts = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for secret in &secrets {
        let mut oracle = SecretOracle::new(secret.clone());
        let solution = solve_in(&universe, &mut oracle, &strategy)?;
        debug_assert_eq!(&solution.code, secret);

        total_attempts += solution.attempts;
        min_attempts = min_attempts.min(solution.attempts);
        max_attempts = max_attempts.max(solution.attempts);
        *distribution.entry(solution.attempts).or_insert(0) += 1;
        bar.inc(1);
    }
    bar.finish_and_clear();

    let duration = start.elapsed();
    let total_secrets = secrets.len();
    let (average_attempts, secrets_per_second) = if total_secrets == 0 {
        (0.0, 0.0)
    } else {
        (
            total_attempts as f64 / total_secrets as f64,
            total_secrets as f64 / duration.as_secs_f64(),
        )
    };

    Ok(BenchmarkResult {
        total_secrets,
        total_attempts,
        average_attempts,
        min_attempts: if total_secrets == 0 { 0 } else { min_attempts },
        max_attempts,
        distribution,
        duration,
        secrets_per_second,
    })
}

/// Fixed-stride sample of at most `count` secrets
fn evenly_spaced(universe: &[Code], count: usize) -> Vec<Code> {
    if count == 0 || universe.is_empty() {
        return Vec::new();
    }
    if universe.len() <= count {
        return universe.to_vec();
    }
    let stride = universe.len() / count;
    universe.iter().step_by(stride).take(count).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn benchmark_aggregates_consistently() {
        let result = run_benchmark(2, 10, false, false).unwrap();

        assert_eq!(result.total_secrets, 10);
        assert!(result.total_attempts >= 10);
        assert!(result.average_attempts >= 1.0);
        assert!(result.min_attempts >= 1);
        assert!(result.min_attempts <= result.max_attempts);
        assert!(result.average_attempts >= result.min_attempts as f64);
        assert!(result.average_attempts <= result.max_attempts as f64);
    }

    #[test]
    fn distribution_accounts_for_every_secret() {
        let result = run_benchmark(2, 10, false, false).unwrap();
        let counted: usize = result.distribution.values().sum();
        assert_eq!(counted, result.total_secrets);
    }

    #[test]
    fn benchmark_is_reproducible() {
        let first = run_benchmark(2, 5, false, false).unwrap();
        let second = run_benchmark(2, 5, false, false).unwrap();

        assert_eq!(first.total_attempts, second.total_attempts);
        assert_eq!(first.distribution, second.distribution);
    }

    #[test]
    fn zero_count_yields_an_empty_run() {
        let result = run_benchmark(2, 0, false, false).unwrap();
        assert_eq!(result.total_secrets, 0);
        assert_eq!(result.total_attempts, 0);
        assert!(result.average_attempts.abs() < f64::EPSILON);
    }

    #[test]
    fn sample_covers_the_whole_range() {
        let universe = space::universe(2).unwrap();
        let secrets = evenly_spaced(&universe, 10);

        assert_eq!(secrets.len(), 10);
        assert_eq!(secrets[0].to_string(), "00");
        assert_eq!(secrets[9].to_string(), "90");
    }

    #[test]
    fn small_universe_is_swept_entirely() {
        let universe = space::universe(1).unwrap();
        let secrets = evenly_spaced(&universe, 50);
        assert_eq!(secrets.len(), 10);
    }
}
