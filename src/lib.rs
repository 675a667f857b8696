//! Cardinality-constrained evolutionary optimization over binary vectors.
//!
//! Searches for the fixed-length binary vector maximizing a linear score
//! `Σ wᵢ·xᵢ` subject to at most `max_ones` active positions.
//!
//! - [`ga`]: individuals, generation and evaluation policies, variation and
//!   selection operators, and the generational driver.
//! - [`random`]: the sampling primitives every stochastic step draws from.
//! - [`error`]: the two fatal setup errors.
//!
//! # Example
//!
//! ```
//! use u_bitevo::ga::{EvolutionConfig, EvolutionDriver};
//!
//! let config = EvolutionConfig::default().with_seed(42);
//! let mut rng = config.seeded_source();
//! let driver = EvolutionDriver::capped_with_normal_weights(config, &mut rng)?;
//! let result = driver.run_with(&mut rng);
//!
//! for (rank, ind) in result.hall_of_fame.entries().iter().enumerate() {
//!     println!("#{rank}: {ind} fitness={:?}", ind.fitness());
//! }
//! # Ok::<(), u_bitevo::EvolutionError>(())
//! ```

pub mod error;
pub mod ga;
pub mod random;

pub use error::EvolutionError;
