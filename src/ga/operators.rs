//! Variation operators for binary individuals.
//!
//! Both operators work in place on individuals the driver has already
//! cloned out of the selection pool, and both clear the fitness of any
//! individual whose contents actually changed.
//!
//! # Crossover
//!
//! - [`one_point_crossover`]: exchange the tails after a random split point
//!
//! # Mutation
//!
//! - [`flip_bit_mutation`]: flip each position independently with
//!   probability `indpb`
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Fortin et al. (2012), "DEAP: Evolutionary Algorithms Made Easy"

use super::types::Individual;
use crate::random::RandomSource;

// ============================================================================
// Crossover
// ============================================================================

/// Single-point crossover.
///
/// Picks a split point uniformly in `[1, L-1]` and swaps the tails of `a`
/// and `b` from that point on, turning the two parents into the two
/// children. Returns the split point, or 0 without drawing anything when
/// `L < 2`.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn one_point_crossover<R: RandomSource + ?Sized>(
    a: &mut Individual,
    b: &mut Individual,
    rng: &mut R,
) -> usize {
    let n = a.len();
    assert_eq!(n, b.len(), "parents must have equal length");
    if n < 2 {
        return 0;
    }
    let point = rng.uniform_int(1, n);
    swap_tails(a, b, point);
    point
}

/// Swaps `a[point..]` with `b[point..]`.
///
/// Children whose contents end up unchanged (identical tails) keep their
/// cached fitness.
///
/// # Panics
/// Panics if the lengths differ or `point > len`.
pub fn swap_tails(a: &mut Individual, b: &mut Individual, point: usize) {
    assert_eq!(a.len(), b.len(), "parents must have equal length");
    if a.genes()[point..] == b.genes()[point..] {
        return;
    }
    a.genes_mut()[point..].swap_with_slice(&mut b.genes_mut()[point..]);
}

// ============================================================================
// Mutation
// ============================================================================

/// Bit-flip mutation: each position flips independently with probability
/// `indpb`.
///
/// Returns the number of flipped positions. Nothing bounds the resulting
/// active count; an infeasible result is only penalized at the next
/// evaluation.
pub fn flip_bit_mutation<R: RandomSource + ?Sized>(
    ind: &mut Individual,
    indpb: f64,
    rng: &mut R,
) -> usize {
    let mut flips = 0;
    for i in 0..ind.len() {
        if rng.bernoulli(indpb) {
            ind.flip(i);
            flips += 1;
        }
    }
    flips
}

// ============================================================================
// Tests
// ============================================================================
