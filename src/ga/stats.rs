//! Per-generation fitness statistics.

/// Fitness summary of one generation's population.
///
/// `std` is the population standard deviation (divisor `n`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation index; 0 is the initial population.
    pub generation: usize,

    /// Fitness evaluations performed while producing this generation.
    pub evaluations: usize,

    /// Mean fitness.
    pub mean: f64,

    /// Standard deviation of fitness.
    pub std: f64,

    /// Lowest fitness.
    pub min: f64,

    /// Highest fitness.
    pub max: f64,
}

impl GenerationStats {
    /// Summarizes `fitnesses`. An empty slice yields NaN moments and
    /// infinite extremes.
    pub fn from_fitnesses(generation: usize, evaluations: usize, fitnesses: &[f64]) -> Self {
        let n = fitnesses.len() as f64;
        let mean = fitnesses.iter().sum::<f64>() / n;
        let variance = fitnesses.iter().map(|f| (f - mean).powi(2)).sum::<f64>() / n;
        Self {
            generation,
            evaluations,
            mean,
            std: variance.sqrt(),
            min: fitnesses.iter().copied().fold(f64::INFINITY, f64::min),
            max: fitnesses.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }
}

impl std::fmt::Display for GenerationStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "gen={} nevals={} avg={:.4} std={:.4} min={:.4} max={:.4}",
            self.generation, self.evaluations, self.mean, self.std, self.min, self.max
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_values() {
        let s = GenerationStats::from_fitnesses(3, 10, &[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_eq!(s.generation, 3);
        assert_eq!(s.evaluations, 10);
        assert!((s.mean - 5.0).abs() < 1e-12);
        assert!((s.std - 2.0).abs() < 1e-12);
        assert_eq!(s.min, 2.0);
        assert_eq!(s.max, 9.0);
    }

    #[test]
    fn test_constant_population_has_zero_std() {
        let s = GenerationStats::from_fitnesses(0, 4, &[1.5; 4]);
        assert_eq!(s.std, 0.0);
        assert_eq!(s.min, s.max);
    }

    #[test]
    fn test_display() {
        let s = GenerationStats::from_fitnesses(1, 2, &[0.0, 1.0]);
        assert_eq!(
            s.to_string(),
            "gen=1 nevals=2 avg=0.5000 std=0.5000 min=0.0000 max=1.0000"
        );
    }
}
