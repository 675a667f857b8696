//! Population construction and evaluation.

use super::evaluator::Evaluator;
use super::generator::Generator;
use super::types::Individual;
use crate::random::RandomSource;
use std::ops::{Deref, DerefMut};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// An ordered collection of individuals.
///
/// The driver replaces the whole population each generation; nothing is
/// carried over in place.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Builds `size` individuals by calling `generator` repeatedly.
    pub fn generate<G: Generator, R: RandomSource + ?Sized>(
        generator: &G,
        size: usize,
        rng: &mut R,
    ) -> Self {
        Self {
            individuals: (0..size).map(|_| generator.generate(rng)).collect(),
        }
    }

    /// Evaluates every individual without a valid cached fitness.
    ///
    /// Returns the number of evaluations performed. With `parallel` set (and
    /// the `parallel` feature enabled) evaluation runs on the rayon pool;
    /// results are identical either way since evaluation draws no randomness.
    pub fn evaluate_invalid<E: Evaluator>(&mut self, evaluator: &E, parallel: bool) -> usize {
        #[cfg(feature = "parallel")]
        if parallel {
            return self
                .individuals
                .par_iter_mut()
                .filter(|ind| !ind.is_evaluated())
                .map(|ind| {
                    let f = evaluator.evaluate(ind);
                    ind.set_fitness(f);
                })
                .count();
        }
        #[cfg(not(feature = "parallel"))]
        let _ = parallel;

        let mut evaluations = 0;
        for ind in self.individuals.iter_mut().filter(|ind| !ind.is_evaluated()) {
            let f = evaluator.evaluate(ind);
            ind.set_fitness(f);
            evaluations += 1;
        }
        evaluations
    }

    /// The individual with the highest fitness, first one on ties.
    pub fn best(&self) -> Option<&Individual> {
        self.individuals.iter().reduce(|best, ind| {
            if ind.rank_key() > best.rank_key() {
                ind
            } else {
                best
            }
        })
    }

    /// Fitness values of the evaluated individuals, in order.
    pub fn fitnesses(&self) -> Vec<f64> {
        self.individuals.iter().filter_map(Individual::fitness).collect()
    }

    /// Consumes the population, returning its individuals.
    pub fn into_vec(self) -> Vec<Individual> {
        self.individuals
    }
}

impl From<Vec<Individual>> for Population {
    fn from(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }
}

impl Deref for Population {
    type Target = [Individual];

    fn deref(&self) -> &[Individual] {
        &self.individuals
    }
}

impl DerefMut for Population {
    fn deref_mut(&mut self) -> &mut [Individual] {
        &mut self.individuals
    }
}
