//! Run configuration.
//!
//! [`EvolutionConfig`] holds every numeric parameter of a run. Defaults
//! reproduce the reference setup: 20-bit vectors, at most 4 active
//! positions, 55 individuals for 90 generations.

use crate::error::{EvolutionError, Result};
use crate::random::SeededSource;

/// Configuration for the evolutionary loop.
///
/// # Defaults
///
/// ```
/// use u_bitevo::ga::EvolutionConfig;
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.genome_length, 20);
/// assert_eq!(config.population_size, 55);
/// assert_eq!(config.max_generations, 90);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_bitevo::ga::EvolutionConfig;
///
/// let config = EvolutionConfig::default()
///     .with_genome_length(40)
///     .with_max_ones(6)
///     .with_tournament_size(5)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionConfig {
    /// Length L of every binary vector.
    pub genome_length: usize,

    /// Cardinality bound used by the capped generator and evaluator.
    ///
    /// Ignored by the unconstrained policies.
    pub max_ones: usize,

    /// Number of individuals in the population.
    pub population_size: usize,

    /// Number of generations after the initial one.
    pub max_generations: usize,

    /// Aspirants per tournament.
    pub tournament_size: usize,

    /// Probability of crossing each adjacent pair of candidates.
    pub crossover_rate: f64,

    /// Probability of mutating each candidate.
    pub mutation_rate: f64,

    /// Per-position flip probability inside a mutation.
    pub mutation_indpb: f64,

    /// Capacity of the hall of fame.
    pub hall_of_fame_size: usize,

    /// Whether to evaluate individuals in parallel.
    ///
    /// Only takes effect with the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            genome_length: 20,
            max_ones: 4,
            population_size: 55,
            max_generations: 90,
            tournament_size: 3,
            crossover_rate: 0.5,
            mutation_rate: 0.2,
            mutation_indpb: 0.05,
            hall_of_fame_size: 5,
            parallel: false,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Sets the vector length.
    pub fn with_genome_length(mut self, len: usize) -> Self {
        self.genome_length = len;
        self
    }

    /// Sets the cardinality bound.
    pub fn with_max_ones(mut self, max_ones: usize) -> Self {
        self.max_ones = max_ones;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the crossover rate.
    ///
    /// Out-of-range values are kept as given and rejected by
    /// [`validate`](Self::validate).
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the per-position flip probability.
    pub fn with_mutation_indpb(mut self, indpb: f64) -> Self {
        self.mutation_indpb = indpb;
        self
    }

    /// Sets the hall of fame capacity.
    pub fn with_hall_of_fame_size(mut self, k: usize) -> Self {
        self.hall_of_fame_size = k;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the random source for a run: seeded when `seed` is set,
    /// otherwise from a fresh random seed.
    pub fn seeded_source(&self) -> SeededSource {
        match self.seed {
            Some(seed) => SeededSource::new(seed),
            None => SeededSource::from_entropy(),
        }
    }

    /// Validates the configuration.
    ///
    /// Returns [`EvolutionError::ConfigurationInconsistency`] naming the
    /// first offending parameter. The cardinality bound is checked by the
    /// capped policies themselves, since unconstrained runs ignore it.
    pub fn validate(&self) -> Result<()> {
        if self.genome_length < 2 {
            return Err(EvolutionError::config(
                "genome_length",
                self.genome_length,
                "must be at least 2",
            ));
        }
        if self.population_size == 0 {
            return Err(EvolutionError::config(
                "population_size",
                self.population_size,
                "must be positive",
            ));
        }
        if self.max_generations == 0 {
            return Err(EvolutionError::config(
                "max_generations",
                self.max_generations,
                "must be positive",
            ));
        }
        if self.tournament_size == 0 {
            return Err(EvolutionError::config(
                "tournament_size",
                self.tournament_size,
                "must be positive",
            ));
        }
        if self.hall_of_fame_size == 0 {
            return Err(EvolutionError::config(
                "hall_of_fame_size",
                self.hall_of_fame_size,
                "must be positive",
            ));
        }
        for (name, p) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
            ("mutation_indpb", self.mutation_indpb),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(EvolutionError::config(name, p, "must be within [0, 1]"));
            }
        }
        Ok(())
    }
}
