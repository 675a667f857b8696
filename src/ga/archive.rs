//! Bounded best-so-far archive.

use super::types::Individual;

/// Keeps the best `capacity` individuals seen over a whole run.
///
/// Entries are owned copies, sorted by fitness descending. An individual
/// whose genes match an archived entry is not added again, and among equal
/// fitnesses the entry archived first stays ahead.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HallOfFame {
    capacity: usize,
    entries: Vec<Individual>,
}

impl HallOfFame {
    /// Creates an empty archive holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Offers every evaluated individual in `population` to the archive.
    ///
    /// Returns how many entries were inserted.
    pub fn update(&mut self, population: &[Individual]) -> usize {
        population.iter().filter(|ind| self.insert(ind)).count()
    }

    /// Offers one individual; returns whether it was archived.
    ///
    /// It goes in when it is evaluated, not already archived, and either the
    /// archive has room or it beats the current worst entry (which is then
    /// dropped).
    pub fn insert(&mut self, ind: &Individual) -> bool {
        let Some(fitness) = ind.fitness() else {
            return false;
        };
        if self.capacity == 0 {
            return false;
        }
        if self.entries.len() == self.capacity {
            match self.worst_fitness() {
                Some(worst) if fitness > worst => {}
                _ => return false,
            }
        }
        if self.entries.iter().any(|e| e == ind) {
            return false;
        }

        if self.entries.len() == self.capacity {
            self.entries.pop();
        }
        let pos = self.entries.partition_point(|e| e.rank_key() >= fitness);
        self.entries.insert(pos, ind.clone());
        true
    }

    /// Archived individuals, best first.
    pub fn entries(&self) -> &[Individual] {
        &self.entries
    }

    /// Best archived individual.
    pub fn best(&self) -> Option<&Individual> {
        self.entries.first()
    }

    /// Fitness of the weakest archived individual.
    pub fn worst_fitness(&self) -> Option<f64> {
        self.entries.last().and_then(Individual::fitness)
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been archived yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the archive, returning its entries best first.
    pub fn into_vec(self) -> Vec<Individual> {
        self.entries
    }
}
