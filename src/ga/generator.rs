//! Individual generation policies.
//!
//! A [`Generator`] builds one fresh [`Individual`] per call. Two policies are
//! provided:
//!
//! - [`BinomialGenerator`]: independent Bernoulli bits, at least one active.
//! - [`CappedGenerator`]: between 1 and `max_ones` active bits, skewed
//!   toward the bound.

use super::types::Individual;
use crate::error::{EvolutionError, Result};
use crate::random::RandomSource;

/// Default per-position activation probability of [`BinomialGenerator`].
pub const DEFAULT_ACTIVATION_PROBABILITY: f64 = 0.2;

/// Produces new individuals.
///
/// Implementations carry their parameters (length, bounds) as fields; the
/// only input at generation time is the random source.
pub trait Generator: Send + Sync {
    /// Length of every individual this generator produces.
    fn len(&self) -> usize;

    /// Creates a fresh, unevaluated individual.
    fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Individual;
}

/// Unbiased-binomial policy.
///
/// Each position is drawn independently as Bernoulli(`probability`). An
/// all-zero draw gets exactly one uniformly chosen position forced to 1, so
/// every individual has at least one active position. There is no upper
/// bound on the active count.
#[derive(Debug, Clone, PartialEq)]
pub struct BinomialGenerator {
    len: usize,
    probability: f64,
}

impl BinomialGenerator {
    /// Creates a generator for vectors of length `len` with activation
    /// probability 0.2.
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(EvolutionError::config("genome_length", len, "must be positive"));
        }
        Ok(Self {
            len,
            probability: DEFAULT_ACTIVATION_PROBABILITY,
        })
    }

    /// Overrides the per-position activation probability.
    pub fn with_probability(mut self, probability: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(EvolutionError::config(
                "activation_probability",
                probability,
                "must be within [0, 1]",
            ));
        }
        self.probability = probability;
        Ok(self)
    }

    /// Per-position activation probability.
    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl Generator for BinomialGenerator {
    fn len(&self) -> usize {
        self.len
    }

    fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Individual {
        let mut genes: Vec<bool> = (0..self.len).map(|_| rng.bernoulli(self.probability)).collect();
        if !genes.contains(&true) {
            let idx = rng.uniform_int(0, self.len);
            genes[idx] = true;
        }
        Individual::new(genes)
    }
}

/// Hard-capped policy.
///
/// Draws a target count `k ~ Poisson(max_ones)` and redraws while
/// `k > max_ones` or `k == 0`, then activates `k` distinct positions chosen
/// uniformly without replacement.
///
/// # Distribution of the active count
///
/// The realized `k` is *not* uniform over `1..=max_ones`. It follows a
/// Poisson(`max_ones`) truncated to `1..=max_ones`, whose mass piles up at
/// the top of the range: for `max_ones = 4` the probabilities of
/// `k = 1, 2, 3, 4` are roughly 0.12, 0.24, 0.32, 0.32 (`k = 3` and `k = 4`
/// tie, since P(λ-1) = P(λ) for integer λ). Initial populations therefore
/// sit near the constraint boundary, which is where the optimum of a cardinality-capped
/// linear objective usually lies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CappedGenerator {
    len: usize,
    max_ones: usize,
}

impl CappedGenerator {
    /// Creates a generator for vectors of length `len` with at most
    /// `max_ones` active positions.
    ///
    /// Fails with [`EvolutionError::PreconditionViolation`] unless
    /// `0 < max_ones < len`. Nothing is drawn before this check.
    pub fn new(len: usize, max_ones: usize) -> Result<Self> {
        if max_ones == 0 || max_ones >= len {
            return Err(EvolutionError::PreconditionViolation { max_ones, len });
        }
        Ok(Self { len, max_ones })
    }

    /// The cardinality bound.
    pub fn max_ones(&self) -> usize {
        self.max_ones
    }

    /// Draws the number of active positions for one individual.
    pub fn draw_count<R: RandomSource + ?Sized>(&self, rng: &mut R) -> usize {
        let lambda = self.max_ones as f64;
        loop {
            let k = rng.poisson(lambda);
            if k >= 1 && k <= self.max_ones as u64 {
                return k as usize;
            }
        }
    }
}

impl Generator for CappedGenerator {
    fn len(&self) -> usize {
        self.len
    }

    fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Individual {
        let k = self.draw_count(rng);
        let mut ind = Individual::zeros(self.len);
        let genes = ind.genes_mut();
        for idx in rng.choice_without_replacement(self.len, k) {
            genes[idx] = true;
        }
        ind
    }
}
