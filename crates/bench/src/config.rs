use attbench_consensus::error::BenchError;

pub const DEFAULT_NUM_ATTESTATIONS: usize = 100;
pub const DEFAULT_TRIAL_DURATION: u64 = 5;
pub const DEFAULT_NUM_TRIALS: usize = 3;
pub const DEFAULT_BATCH_SIZES: [usize; 4] = [1, 10, 50, 100];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Corpus size, generated once and reused by every trial.
    pub num_attestations: usize,

    /// Length of one measurement window, in seconds.
    pub trial_duration: u64,

    pub num_trials: usize,

    pub batch_sizes: Vec<usize>,

    /// Worker threads for the parallel sweep; `0` skips it.
    pub threads: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            num_attestations: DEFAULT_NUM_ATTESTATIONS,
            trial_duration: DEFAULT_TRIAL_DURATION,
            num_trials: DEFAULT_NUM_TRIALS,
            batch_sizes: DEFAULT_BATCH_SIZES.to_vec(),
            threads: 0,
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.num_attestations == 0 {
            return Err(config_error("number of attestations must be positive"));
        }
        if self.trial_duration == 0 {
            return Err(config_error("trial duration must be positive"));
        }
        if self.num_trials == 0 {
            return Err(config_error("number of trials must be positive"));
        }
        if self.batch_sizes.contains(&0) {
            return Err(config_error("batch sizes must be positive"));
        }
        Ok(())
    }
}

fn config_error(message: &str) -> BenchError {
    BenchError::ConfigurationError(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = BenchConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.batch_sizes, vec![1, 10, 50, 100]);
        assert_eq!(config.threads, 0);
    }

    #[rstest::rstest]
    #[case(BenchConfig { num_attestations: 0, ..Default::default() })]
    #[case(BenchConfig { trial_duration: 0, ..Default::default() })]
    #[case(BenchConfig { num_trials: 0, ..Default::default() })]
    #[case(BenchConfig { batch_sizes: vec![1, 0, 10], ..Default::default() })]
    fn test_invalid_config(#[case] config: BenchConfig) {
        assert!(matches!(
            config.validate(),
            Err(BenchError::ConfigurationError(_))
        ));
    }
}
