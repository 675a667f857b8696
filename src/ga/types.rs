//! Core data types: the binary [`Individual`] and the shared [`WeightVector`].

use crate::random::RandomSource;
use std::ops::Deref;
use std::sync::Arc;

/// A candidate solution: a fixed-length binary vector with a cached fitness.
///
/// The fitness cache is explicit. It starts out empty, is filled by the
/// driver after evaluation, and is cleared by every operation that changes
/// the vector's contents ([`flip`](Individual::flip),
/// [`genes_mut`](Individual::genes_mut)). No operation changes the length.
///
/// Equality compares genes only, so two individuals with the same vector are
/// equal whether or not either has been evaluated.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    genes: Vec<bool>,
    fitness: Option<f64>,
}

impl Individual {
    /// Creates an unevaluated individual from raw genes.
    pub fn new(genes: Vec<bool>) -> Self {
        Self {
            genes,
            fitness: None,
        }
    }

    /// Creates an individual from `0`/`1` values; any non-zero value is a one.
    pub fn from_bits(bits: &[u8]) -> Self {
        Self::new(bits.iter().map(|&b| b != 0).collect())
    }

    /// Creates an all-zero individual of length `len`.
    pub fn zeros(len: usize) -> Self {
        Self::new(vec![false; len])
    }

    /// Vector length.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the vector has no positions at all.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// The binary vector.
    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    /// Mutable access to the vector.
    ///
    /// Invalidates the cached fitness unconditionally, since the caller may
    /// write through the slice.
    pub fn genes_mut(&mut self) -> &mut [bool] {
        self.fitness = None;
        &mut self.genes
    }

    /// Number of active (one-valued) positions.
    pub fn count_ones(&self) -> usize {
        self.genes.iter().filter(|&&g| g).count()
    }

    /// Whether the active count is within `max_ones`.
    pub fn is_feasible(&self, max_ones: usize) -> bool {
        self.count_ones() <= max_ones
    }

    /// Flips position `idx` and invalidates the fitness.
    ///
    /// # Panics
    /// Panics if `idx` is out of bounds.
    pub fn flip(&mut self, idx: usize) {
        self.genes[idx] = !self.genes[idx];
        self.fitness = None;
    }

    /// Cached fitness, `None` when missing or stale.
    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    /// Stores an evaluated fitness.
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some(fitness);
    }

    /// Marks the cached fitness as stale.
    pub fn invalidate_fitness(&mut self) {
        self.fitness = None;
    }

    /// Whether a valid fitness is cached.
    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    /// Fitness used for ranking: unevaluated individuals rank below everyone.
    pub(crate) fn rank_key(&self) -> f64 {
        self.fitness.unwrap_or(f64::NEG_INFINITY)
    }
}

impl PartialEq for Individual {
    fn eq(&self, other: &Self) -> bool {
        self.genes == other.genes
    }
}

impl Eq for Individual {}

impl std::fmt::Display for Individual {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &g in &self.genes {
            f.write_str(if g { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Read-only real weights scoring each position.
///
/// Cloning is cheap: all clones share one allocation, so every evaluator in
/// a run sees the same weights.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightVector(Arc<[f64]>);

impl WeightVector {
    /// Wraps explicit weights.
    pub fn new(weights: impl Into<Vec<f64>>) -> Self {
        Self(Arc::from(weights.into()))
    }

    /// Draws `len` independent standard normal weights.
    pub fn standard_normal<R: RandomSource + ?Sized>(len: usize, rng: &mut R) -> Self {
        Self::new((0..len).map(|_| rng.standard_normal()).collect::<Vec<_>>())
    }

    /// The weights as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Largest score any vector with at most `max_ones` active positions can
    /// reach: the sum of the `max_ones` largest positive weights.
    pub fn best_feasible_score(&self, max_ones: usize) -> f64 {
        let mut positive: Vec<f64> = self.0.iter().copied().filter(|&w| w > 0.0).collect();
        positive.sort_by(|a, b| b.total_cmp(a));
        positive.iter().take(max_ones).sum()
    }
}

impl Deref for WeightVector {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for WeightVector {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for WeightVector {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<f64>::deserialize(deserializer).map(Self::new)
    }
}
