use attbench_consensus::error::BenchError;

/// Summary of a set of per-trial throughput samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub mean: f64,
    pub median: f64,

    /// Population standard deviation.
    pub std_dev: f64,
}

impl Stats {
    /// Ratio of this mean to `baseline`'s mean.
    pub fn speedup_over(&self, baseline: &Stats) -> f64 {
        self.mean / baseline.mean
    }
}

pub fn compute_stats(samples: &[f64]) -> Result<Stats, BenchError> {
    if samples.is_empty() {
        return Err(BenchError::ConfigurationError(
            "cannot summarize an empty sample set".to_string(),
        ));
    }

    let len = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / len;

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };

    let variance = samples
        .iter()
        .map(|&value| {
            let diff = value - mean;
            diff * diff
        })
        .sum::<f64>()
        / len;

    Ok(Stats {
        mean,
        median,
        std_dev: variance.sqrt(),
    })
}
