//! Fitness evaluation policies.
//!
//! Fitness is maximized. Both policies score an individual by the sum of the
//! weights at its active positions; [`CappedEvaluator`] additionally flattens
//! infeasible individuals to zero.

use super::types::{Individual, WeightVector};
use crate::error::{EvolutionError, Result};

/// Computes a fitness value for an individual.
///
/// Evaluation is pure: it draws no randomness and touches no shared mutable
/// state, which is what allows the driver to run it in parallel.
pub trait Evaluator: Send + Sync {
    /// Length of the individuals this evaluator accepts.
    fn len(&self) -> usize;

    /// Returns the fitness of `individual` (higher is better).
    fn evaluate(&self, individual: &Individual) -> f64;
}

/// Sum of the weights at the active positions of `individual`.
///
/// Positions beyond the shorter of the two lengths are ignored.
pub fn dot(individual: &Individual, weights: &WeightVector) -> f64 {
    individual
        .genes()
        .iter()
        .zip(weights.iter())
        .filter_map(|(&g, &w)| g.then_some(w))
        .sum()
}

/// Scores every individual by its plain dot product.
#[derive(Debug, Clone, PartialEq)]
pub struct UnconstrainedEvaluator {
    weights: WeightVector,
}

impl UnconstrainedEvaluator {
    /// Creates an evaluator over `weights`.
    pub fn new(weights: WeightVector) -> Self {
        Self { weights }
    }

    /// The shared weights.
    pub fn weights(&self) -> &WeightVector {
        &self.weights
    }
}

impl Evaluator for UnconstrainedEvaluator {
    fn len(&self) -> usize {
        self.weights.len()
    }

    fn evaluate(&self, individual: &Individual) -> f64 {
        dot(individual, &self.weights)
    }
}

/// Scores feasible individuals by their dot product and infeasible ones as 0.
///
/// An individual with more than `max_ones` active positions gets exactly
/// `0.0`, whatever its true score. A feasible individual whose dot product is
/// negative therefore ranks *below* every infeasible one; this asymmetry is
/// part of the penalty's behavior and is kept as is.
#[derive(Debug, Clone, PartialEq)]
pub struct CappedEvaluator {
    weights: WeightVector,
    max_ones: usize,
}

impl CappedEvaluator {
    /// Creates a capped evaluator.
    ///
    /// Requires `0 < max_ones < weights.len()`, the same bound the capped
    /// generator enforces.
    pub fn new(weights: WeightVector, max_ones: usize) -> Result<Self> {
        if max_ones == 0 || max_ones >= weights.len() {
            return Err(EvolutionError::PreconditionViolation {
                max_ones,
                len: weights.len(),
            });
        }
        Ok(Self { weights, max_ones })
    }

    /// The cardinality bound.
    pub fn max_ones(&self) -> usize {
        self.max_ones
    }

    /// The shared weights.
    pub fn weights(&self) -> &WeightVector {
        &self.weights
    }
}

impl Evaluator for CappedEvaluator {
    fn len(&self) -> usize {
        self.weights.len()
    }

    fn evaluate(&self, individual: &Individual) -> f64 {
        if individual.count_ones() > self.max_ones {
            0.0
        } else {
            dot(individual, &self.weights)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn weights() -> WeightVector {
        WeightVector::new(vec![1.5, -2.0, 0.25, 3.0, -0.5, 0.75])
    }

    #[test]
    fn test_dot_sums_active_weights() {
        let ind = Individual::from_bits(&[1, 1, 0, 1, 0, 0]);
        assert!((dot(&ind, &weights()) - 2.5).abs() < 1e-12);
        assert_eq!(dot(&Individual::zeros(6), &weights()), 0.0);
    }

    #[test]
    fn test_unconstrained_ignores_cardinality() {
        let eval = UnconstrainedEvaluator::new(weights());
        let all = Individual::from_bits(&[1, 1, 1, 1, 1, 1]);
        assert!((eval.evaluate(&all) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_capped_feasible_is_exact_dot() {
        let eval = CappedEvaluator::new(weights(), 3).unwrap();
        let ind = Individual::from_bits(&[1, 1, 0, 1, 0, 0]);
        assert_eq!(eval.evaluate(&ind), dot(&ind, &weights()));
    }

    #[test]
    fn test_capped_infeasible_is_zero() {
        let eval = CappedEvaluator::new(weights(), 3).unwrap();
        // True score 5.5, still flattened.
        let good = Individual::from_bits(&[1, 0, 1, 1, 0, 1]);
        assert_eq!(eval.evaluate(&good), 0.0);
        // True score -1.5, also flattened.
        let bad = Individual::from_bits(&[0, 1, 1, 0, 1, 1]);
        assert_eq!(eval.evaluate(&bad), 0.0);
    }

    #[test]
    fn test_capped_negative_feasible_ranks_below_infeasible() {
        let eval = CappedEvaluator::new(weights(), 2).unwrap();
        let feasible = Individual::from_bits(&[0, 1, 0, 0, 1, 0]);
        let infeasible = Individual::from_bits(&[1, 0, 1, 1, 0, 0]);
        assert!(eval.evaluate(&feasible) < eval.evaluate(&infeasible));
        assert_eq!(eval.evaluate(&infeasible), 0.0);
    }

    #[test]
    fn test_capped_precondition() {
        assert!(matches!(
            CappedEvaluator::new(weights(), 6),
            Err(EvolutionError::PreconditionViolation { max_ones: 6, len: 6 })
        ));
        assert!(CappedEvaluator::new(weights(), 0).is_err());
    }

    proptest! {
        #[test]
        fn prop_capped_matches_definition(
            bits in prop::collection::vec(any::<bool>(), 12),
            ws in prop::collection::vec(-10.0f64..10.0, 12),
            cap in 1usize..12,
        ) {
            let weights = WeightVector::new(ws);
            let ind = Individual::new(bits);
            let eval = CappedEvaluator::new(weights.clone(), cap).unwrap();
            let expected = if ind.count_ones() > cap { 0.0 } else { dot(&ind, &weights) };
            prop_assert_eq!(eval.evaluate(&ind), expected);
        }
    }
}
