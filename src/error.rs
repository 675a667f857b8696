//! Error types.
//!
//! Both failure kinds are fatal: they surface at construction time,
//! before any population is built, and a run never resumes after one.

/// Errors raised while setting up an evolutionary run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvolutionError {
    /// The cardinality bound is unusable for the genome length.
    ///
    /// The capped generator needs `0 < max_ones < len`; with
    /// `max_ones >= len` the constraint is vacuous and with `max_ones == 0`
    /// its rejection loop could never terminate.
    #[error("precondition violated: max_ones must satisfy 0 < max_ones < len (max_ones={max_ones}, len={len})")]
    PreconditionViolation { max_ones: usize, len: usize },

    /// A run parameter is out of range or disagrees with another one.
    #[error("inconsistent configuration: {parameter}={value} ({reason})")]
    ConfigurationInconsistency {
        parameter: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl EvolutionError {
    pub(crate) fn config(
        parameter: &'static str,
        value: impl ToString,
        reason: &'static str,
    ) -> Self {
        Self::ConfigurationInconsistency {
            parameter,
            value: value.to_string(),
            reason,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EvolutionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_message_names_values() {
        let err = EvolutionError::PreconditionViolation {
            max_ones: 20,
            len: 20,
        };
        let msg = err.to_string();
        assert!(msg.contains("max_ones=20"), "got: {msg}");
        assert!(msg.contains("len=20"), "got: {msg}");
    }

    #[test]
    fn test_config_message_names_parameter() {
        let err = EvolutionError::config("crossover_rate", 1.5, "must be within [0, 1]");
        assert_eq!(
            err.to_string(),
            "inconsistent configuration: crossover_rate=1.5 (must be within [0, 1])"
        );
    }
}
