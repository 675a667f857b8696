//! Generational loop execution.
//!
//! [`EvolutionDriver`] runs the complete evolutionary process as an explicit
//! state machine (see [`Phase`]):
//! initialization → evaluation → archiving → selection → variation →
//! re-evaluation → archiving → … → termination.

use super::archive::HallOfFame;
use super::config::EvolutionConfig;
use super::evaluator::{CappedEvaluator, Evaluator, UnconstrainedEvaluator};
use super::generator::{BinomialGenerator, CappedGenerator, Generator};
use super::operators::{flip_bit_mutation, one_point_crossover};
use super::population::Population;
use super::selection::Tournament;
use super::stats::GenerationStats;
use super::types::{Individual, WeightVector};
use crate::error::{EvolutionError, Result};
use crate::random::RandomSource;
use tracing::{debug, info, trace};

/// States of the generational loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Building the initial population.
    Initializing,
    /// Scoring the initial population.
    Evaluating,
    /// Updating the hall of fame and recording statistics.
    Archiving,
    /// Filling the candidate pool by tournament.
    Selecting,
    /// Applying crossover and mutation to the pool.
    Varying,
    /// Scoring altered candidates; the pool becomes the population.
    RecombiningEvaluating,
    /// Moving to the next generation.
    Advancing,
    /// The run is complete.
    Terminated,
}

/// Result of an evolutionary run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionResult {
    /// Population of the final generation.
    pub population: Population,

    /// Best individuals seen across the whole run.
    pub hall_of_fame: HallOfFame,

    /// Statistics per generation, starting with the initial population.
    pub logbook: Vec<GenerationStats>,

    /// Number of generations executed after the initial one.
    pub generations: usize,

    /// Total fitness evaluations.
    pub evaluations: usize,
}

impl EvolutionResult {
    /// Best individual found during the run.
    pub fn best(&self) -> Option<&Individual> {
        self.hall_of_fame.best()
    }

    /// Fitness of [`best`](Self::best).
    pub fn best_fitness(&self) -> Option<f64> {
        self.best().and_then(Individual::fitness)
    }
}

/// Executes the evolutionary loop with a chosen generator and evaluator.
///
/// # Usage
///
/// ```
/// use u_bitevo::ga::{EvolutionConfig, EvolutionDriver};
///
/// let config = EvolutionConfig::default().with_max_generations(10).with_seed(7);
/// let mut rng = config.seeded_source();
/// let driver = EvolutionDriver::capped_with_normal_weights(config, &mut rng).unwrap();
/// let result = driver.run_with(&mut rng);
///
/// let best = result.best().unwrap();
/// assert!(best.count_ones() <= 4);
/// assert_eq!(result.logbook.len(), 11);
/// ```
#[derive(Debug, Clone)]
pub struct EvolutionDriver<G, E> {
    config: EvolutionConfig,
    generator: G,
    evaluator: E,
    selection: Tournament,
}

impl<G: Generator, E: Evaluator> EvolutionDriver<G, E> {
    /// Creates a driver after validating `config` and checking that the
    /// generator and evaluator both work on `config.genome_length` positions.
    pub fn new(config: EvolutionConfig, generator: G, evaluator: E) -> Result<Self> {
        config.validate()?;
        check_len("generator_length", generator.len(), config.genome_length)?;
        check_len("evaluator_length", evaluator.len(), config.genome_length)?;
        let selection = Tournament::new(config.tournament_size);
        Ok(Self {
            config,
            generator,
            evaluator,
            selection,
        })
    }

    /// The run configuration.
    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// The generation policy.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// The evaluation policy.
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Runs with a source built from the configured seed.
    pub fn run(&self) -> EvolutionResult {
        let mut rng = self.config.seeded_source();
        self.run_with(&mut rng)
    }

    /// Runs, drawing every random decision from `rng`.
    pub fn run_with<R: RandomSource + ?Sized>(&self, rng: &mut R) -> EvolutionResult {
        self.run_with_observer(rng, |_| {})
    }

    /// Runs and calls `observer` with each generation's statistics right
    /// after they are recorded.
    pub fn run_with_observer<R, F>(&self, rng: &mut R, mut observer: F) -> EvolutionResult
    where
        R: RandomSource + ?Sized,
        F: FnMut(&GenerationStats),
    {
        let cfg = &self.config;
        info!(
            genome_length = cfg.genome_length,
            population_size = cfg.population_size,
            max_generations = cfg.max_generations,
            tournament_size = cfg.tournament_size,
            crossover_rate = cfg.crossover_rate,
            mutation_rate = cfg.mutation_rate,
            "starting evolutionary run"
        );

        let mut phase = Phase::Initializing;
        let mut population = Population::default();
        let mut offspring = Population::default();
        let mut hall_of_fame = HallOfFame::new(cfg.hall_of_fame_size);
        let mut logbook = Vec::with_capacity(cfg.max_generations + 1);
        let mut generation = 0usize;
        let mut generation_evals = 0usize;
        let mut total_evals = 0usize;

        loop {
            trace!(?phase, generation, "phase");
            phase = match phase {
                Phase::Initializing => {
                    population = Population::generate(&self.generator, cfg.population_size, rng);
                    Phase::Evaluating
                }
                Phase::Evaluating => {
                    generation_evals = population.evaluate_invalid(&self.evaluator, cfg.parallel);
                    total_evals += generation_evals;
                    Phase::Archiving
                }
                Phase::Archiving => {
                    hall_of_fame.update(&population);
                    let stats = GenerationStats::from_fitnesses(
                        generation,
                        generation_evals,
                        &population.fitnesses(),
                    );
                    debug!(
                        generation,
                        nevals = stats.evaluations,
                        avg = stats.mean,
                        std = stats.std,
                        min = stats.min,
                        max = stats.max,
                        "generation complete"
                    );
                    observer(&stats);
                    logbook.push(stats);
                    if generation >= cfg.max_generations {
                        Phase::Terminated
                    } else {
                        Phase::Selecting
                    }
                }
                Phase::Selecting => {
                    offspring = self
                        .selection
                        .select_many(&population, cfg.population_size, rng)
                        .into();
                    Phase::Varying
                }
                Phase::Varying => {
                    self.vary(&mut offspring, rng);
                    Phase::RecombiningEvaluating
                }
                Phase::RecombiningEvaluating => {
                    generation_evals = offspring.evaluate_invalid(&self.evaluator, cfg.parallel);
                    total_evals += generation_evals;
                    population = std::mem::take(&mut offspring);
                    Phase::Advancing
                }
                Phase::Advancing => {
                    generation += 1;
                    Phase::Archiving
                }
                Phase::Terminated => break,
            };
        }

        let result = EvolutionResult {
            population,
            hall_of_fame,
            logbook,
            generations: generation,
            evaluations: total_evals,
        };
        info!(
            generations = result.generations,
            evaluations = result.evaluations,
            best_fitness = result.best_fitness(),
            "evolutionary run finished"
        );
        result
    }

    /// Crossover on adjacent pairs, then mutation on every candidate.
    fn vary<R: RandomSource + ?Sized>(&self, pool: &mut [Individual], rng: &mut R) {
        for i in (1..pool.len()).step_by(2) {
            if rng.bernoulli(self.config.crossover_rate) {
                let (left, right) = pool.split_at_mut(i);
                one_point_crossover(&mut left[i - 1], &mut right[0], rng);
            }
        }
        for ind in pool.iter_mut() {
            if rng.bernoulli(self.config.mutation_rate) {
                flip_bit_mutation(ind, self.config.mutation_indpb, rng);
            }
        }
    }
}

impl EvolutionDriver<CappedGenerator, CappedEvaluator> {
    /// Hard-capped run: Poisson-rejection generator and zero-penalty
    /// evaluator, both bounded by `config.max_ones`.
    pub fn capped(config: EvolutionConfig, weights: WeightVector) -> Result<Self> {
        config.validate()?;
        check_len("weights_length", weights.len(), config.genome_length)?;
        let generator = CappedGenerator::new(config.genome_length, config.max_ones)?;
        let evaluator = CappedEvaluator::new(weights, config.max_ones)?;
        Self::new(config, generator, evaluator)
    }

    /// Like [`capped`](Self::capped), drawing standard normal weights from
    /// `rng`. Every check runs before the first draw.
    pub fn capped_with_normal_weights<R: RandomSource + ?Sized>(
        config: EvolutionConfig,
        rng: &mut R,
    ) -> Result<Self> {
        config.validate()?;
        CappedGenerator::new(config.genome_length, config.max_ones)?;
        let weights = WeightVector::standard_normal(config.genome_length, rng);
        Self::capped(config, weights)
    }
}

impl EvolutionDriver<BinomialGenerator, UnconstrainedEvaluator> {
    /// Unconstrained run: binomial generator and plain dot-product evaluator.
    pub fn unconstrained(config: EvolutionConfig, weights: WeightVector) -> Result<Self> {
        config.validate()?;
        check_len("weights_length", weights.len(), config.genome_length)?;
        let generator = BinomialGenerator::new(config.genome_length)?;
        let evaluator = UnconstrainedEvaluator::new(weights);
        Self::new(config, generator, evaluator)
    }

    /// Like [`unconstrained`](Self::unconstrained), drawing standard normal
    /// weights from `rng`.
    pub fn unconstrained_with_normal_weights<R: RandomSource + ?Sized>(
        config: EvolutionConfig,
        rng: &mut R,
    ) -> Result<Self> {
        config.validate()?;
        let weights = WeightVector::standard_normal(config.genome_length, rng);
        Self::unconstrained(config, weights)
    }
}

fn check_len(parameter: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(EvolutionError::config(
            parameter,
            actual,
            "must equal genome_length",
        ));
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
