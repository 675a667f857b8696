//! Cardinality-constrained genetic algorithm over binary vectors.
//!
//! Fitness is the dot product of a binary [`Individual`] with a fixed
//! [`WeightVector`], maximized. The two policy points that shape the search
//! are pluggable:
//!
//! - [`Generator`]: how new individuals are drawn
//!   ([`BinomialGenerator`], [`CappedGenerator`])
//! - [`Evaluator`]: how they are scored
//!   ([`UnconstrainedEvaluator`], [`CappedEvaluator`])
//!
//! # Key Types
//!
//! - [`EvolutionConfig`]: run parameters (sizes, rates, seed)
//! - [`EvolutionDriver`]: executes the generational loop
//! - [`EvolutionResult`]: final population, hall of fame and logbook
//!
//! # Submodules
//!
//! - [`operators`]: single-point crossover and bit-flip mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Fortin et al. (2012), "DEAP: Evolutionary Algorithms Made Easy", JMLR 13

mod archive;
mod config;
mod evaluator;
mod generator;
pub mod operators;
mod population;
mod runner;
mod selection;
mod stats;
mod types;

pub use archive::HallOfFame;
pub use config::EvolutionConfig;
pub use evaluator::{dot, CappedEvaluator, Evaluator, UnconstrainedEvaluator};
pub use generator::{BinomialGenerator, CappedGenerator, Generator, DEFAULT_ACTIVATION_PROBABILITY};
pub use population::Population;
pub use runner::{EvolutionDriver, EvolutionResult, Phase};
pub use selection::Tournament;
pub use stats::GenerationStats;
pub use types::{Individual, WeightVector};
