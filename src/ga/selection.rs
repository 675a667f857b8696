//! Tournament selection.
//!
//! # References
//!
//! - Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection,
//!   and the Effects of Noise"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Individual;
use crate::random::RandomSource;

/// Tournament selection over a scored population (maximization).
///
/// Higher `size` = stronger selection pressure.
/// - size=1: uniform random selection, no fitness bias
/// - size=2-3: light to moderate pressure
/// - size>5: strong pressure (risk of premature convergence)
///
/// # Examples
///
/// ```
/// use u_bitevo::ga::Tournament;
///
/// let sel = Tournament::new(3);
/// assert_eq!(sel.size(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tournament {
    size: usize,
}

impl Default for Tournament {
    fn default() -> Self {
        Tournament { size: 3 }
    }
}

impl Tournament {
    /// Creates a tournament of `size` aspirants (at least 1).
    pub fn new(size: usize) -> Self {
        Tournament { size: size.max(1) }
    }

    /// Number of aspirants per tournament.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Selects one index from `population`.
    ///
    /// Draws `size` indices uniformly with replacement and returns the one
    /// with the highest fitness; ties go to the first drawn. Unevaluated
    /// individuals lose to any evaluated one.
    ///
    /// # Complexity
    /// O(size) per selection
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<R: RandomSource + ?Sized>(&self, population: &[Individual], rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );
        let n = population.len();

        let mut best_idx = rng.uniform_int(0, n);
        for _ in 1..self.size {
            let idx = rng.uniform_int(0, n);
            if population[idx].rank_key() > population[best_idx].rank_key() {
                best_idx = idx;
            }
        }
        best_idx
    }

    /// Fills a candidate pool of `count` clones by independent tournaments.
    pub fn select_many<R: RandomSource + ?Sized>(
        &self,
        population: &[Individual],
        count: usize,
        rng: &mut R,
    ) -> Vec<Individual> {
        (0..count)
            .map(|_| population[self.select(population, rng)].clone())
            .collect()
    }
}
