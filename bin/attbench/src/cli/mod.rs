use attbench_bench::config::{
    BenchConfig, DEFAULT_BATCH_SIZES, DEFAULT_NUM_ATTESTATIONS, DEFAULT_NUM_TRIALS,
    DEFAULT_TRIAL_DURATION,
};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Number of signed attestations in the corpus
    #[arg(
        long = "attestations",
        env = "ATTBENCH_ATTESTATIONS",
        default_value_t = DEFAULT_NUM_ATTESTATIONS
    )]
    pub num_attestations: usize,

    /// Duration of each trial in seconds
    #[arg(
        long = "duration",
        env = "ATTBENCH_DURATION",
        default_value_t = DEFAULT_TRIAL_DURATION
    )]
    pub trial_duration: u64,

    /// Number of trials per benchmark mode
    #[arg(long = "trials", env = "ATTBENCH_TRIALS", default_value_t = DEFAULT_NUM_TRIALS)]
    pub num_trials: usize,

    /// Comma separated batch sizes to sweep
    #[arg(
        long,
        env = "ATTBENCH_BATCH_SIZES",
        value_delimiter = ',',
        default_values_t = DEFAULT_BATCH_SIZES
    )]
    pub batch_sizes: Vec<usize>,

    /// Worker threads for an additional parallel sweep (0 disables it)
    #[arg(long, env = "ATTBENCH_THREADS", default_value_t = 0)]
    pub threads: usize,
}

impl Cli {
    pub fn bench_config(&self) -> BenchConfig {
        BenchConfig {
            num_attestations: self.num_attestations,
            trial_duration: self.trial_duration,
            num_trials: self.num_trials,
            batch_sizes: self.batch_sizes.clone(),
            threads: self.threads,
        }
    }
}
