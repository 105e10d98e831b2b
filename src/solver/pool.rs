//! Guess pool construction
//!
//! Strategies evaluate every pool member against every candidate, so the pool
//! is the full universe only while that product stays tractable. Past the
//! threshold the pool becomes a fixed-stride sample of candidates plus an
//! equal allowance of non-candidate codes in enumeration order. Sampling is
//! seed-free and reproducible: identical inputs always yield identical pools.

use rustc_hash::FxHashSet;

use crate::core::Code;

/// Full-universe pools are used while `|candidates| * |universe|` stays at or
/// below this
pub const TRACTABLE_LIMIT: usize = 1_000_000;

/// Cap on sampled candidates, and separately on sampled non-candidates
pub const SAMPLE_SIZE: usize = 100;

/// Build the pool of guesses worth scoring this round
///
/// With `exhaustive` set the tractability threshold is ignored and the whole
/// universe is returned regardless of cost.
#[must_use]
pub fn build_pool<'a>(
    universe: &'a [Code],
    candidates: &'a [Code],
    exhaustive: bool,
) -> Vec<&'a Code> {
    let cost = candidates.len().saturating_mul(universe.len());
    if exhaustive || cost <= TRACTABLE_LIMIT {
        return universe.iter().collect();
    }

    let mut pool = stride_sample(candidates, SAMPLE_SIZE);

    // Top up with non-candidate probes in enumeration order. Guesses outside
    // the candidate set can still split it more evenly than any member.
    let members: FxHashSet<&Code> = candidates.iter().collect();
    pool.extend(
        universe
            .iter()
            .filter(|code| !members.contains(code))
            .take(SAMPLE_SIZE),
    );

    pool
}

/// Evenly spaced deterministic sample of at most `limit` codes
fn stride_sample(codes: &[Code], limit: usize) -> Vec<&Code> {
    if codes.len() <= limit {
        return codes.iter().collect();
    }
    let stride = codes.len() / limit;
    codes.iter().step_by(stride).take(limit).collect()
}
