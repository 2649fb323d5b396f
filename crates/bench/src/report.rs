use std::io::{self, Write};

use chrono::{DateTime, Local};

use crate::stats::Stats;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const TITLE: &str = "BLS Signature Verification Benchmark for Ethereum Attestations";

/// Throughput samples of one trial series and their summary.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialSet {
    /// Verifications per second, one entry per trial, in run order.
    pub samples: Vec<f64>,
    pub stats: Stats,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchResult {
    pub batch_size: usize,
    pub trials: TrialSet,

    /// Mean batch throughput over mean individual throughput.
    pub speedup: f64,
}

/// Multi-threaded numbers. These are aggregate wall-clock throughput across
/// all workers and are never mixed into the single-threaded results.
#[derive(Debug, Clone, PartialEq)]
pub struct ParallelResult {
    pub threads: usize,
    pub trials: TrialSet,
    pub scaling: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkReport {
    pub individual: TrialSet,
    pub batches: Vec<BatchResult>,
    pub parallel: Option<ParallelResult>,
}

/// Writes the human readable console report, section by section, as the run
/// progresses.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn header(&mut self, started_at: DateTime<Local>) -> io::Result<()> {
        writeln!(self.out, "{TITLE}")?;
        writeln!(self.out, "{}", "=".repeat(70))?;
        writeln!(
            self.out,
            "Started at: {}",
            started_at.format(TIMESTAMP_FORMAT)
        )
    }

    pub fn generating(&mut self, count: usize) -> io::Result<()> {
        writeln!(self.out, "\nGenerating {count} test attestations...")?;
        self.out.flush()
    }

    pub fn generated(&mut self) -> io::Result<()> {
        writeln!(self.out, "Test attestations generated successfully.")
    }

    pub fn individual_start(&mut self, num_trials: usize, trial_duration: u64) -> io::Result<()> {
        writeln!(
            self.out,
            "\nRunning {num_trials} individual verification benchmark trials (each {trial_duration} seconds):"
        )
    }

    pub fn batch_section(&mut self) -> io::Result<()> {
        writeln!(self.out, "\nBatch Verification Results:")
    }

    pub fn batch_start(
        &mut self,
        batch_size: usize,
        num_trials: usize,
        trial_duration: u64,
    ) -> io::Result<()> {
        writeln!(self.out, "\nBatch size: {batch_size}")?;
        writeln!(
            self.out,
            "Running {num_trials} batch verification benchmark trials (each {trial_duration} seconds):"
        )
    }

    pub fn parallel_start(
        &mut self,
        threads: usize,
        num_trials: usize,
        trial_duration: u64,
    ) -> io::Result<()> {
        writeln!(
            self.out,
            "\nParallel Verification Results ({threads} threads, aggregate wall-clock throughput):"
        )?;
        writeln!(
            self.out,
            "Running {num_trials} parallel verification benchmark trials (each {trial_duration} seconds):"
        )
    }

    /// Leaves the line open so the throughput lands next to it.
    pub fn trial_started(&mut self, trial: usize, num_trials: usize) -> io::Result<()> {
        write!(self.out, "  Trial {}/{} ... ", trial + 1, num_trials)?;
        self.out.flush()
    }

    pub fn trial_finished(&mut self, throughput: f64) -> io::Result<()> {
        writeln!(self.out, "{throughput:.2} verifications/second")
    }

    pub fn individual_summary(&mut self, stats: &Stats) -> io::Result<()> {
        writeln!(self.out, "\nIndividual Verification Results:")?;
        self.stats_block(stats, "  ")
    }

    pub fn batch_summary(&mut self, result: &BatchResult) -> io::Result<()> {
        writeln!(self.out, "\n  Batch Size {} Results:", result.batch_size)?;
        self.stats_block(&result.trials.stats, "    ")?;
        writeln!(
            self.out,
            "    Speedup: {:.2}x compared to individual verification",
            result.speedup
        )
    }

    pub fn parallel_summary(&mut self, result: &ParallelResult) -> io::Result<()> {
        writeln!(self.out, "\n  Parallel Results ({} threads):", result.threads)?;
        self.stats_block(&result.trials.stats, "    ")?;
        writeln!(
            self.out,
            "    Per thread: {:.2} verifications/second",
            result.trials.stats.mean / result.threads as f64
        )?;
        writeln!(
            self.out,
            "    Scaling: {:.2}x compared to single-threaded individual verification",
            result.scaling
        )
    }

    pub fn individual_trials(&mut self, samples: &[f64]) -> io::Result<()> {
        writeln!(
            self.out,
            "\nIndividual verification trial results (verifications/second):"
        )?;
        for (i, sample) in samples.iter().enumerate() {
            writeln!(self.out, "  Trial {}: {:.2}", i + 1, sample)?;
        }
        Ok(())
    }

    pub fn footer(&mut self, completed_at: DateTime<Local>) -> io::Result<()> {
        writeln!(
            self.out,
            "\nCompleted at: {}",
            completed_at.format(TIMESTAMP_FORMAT)
        )?;
        self.out.flush()
    }

    fn stats_block(&mut self, stats: &Stats, indent: &str) -> io::Result<()> {
        writeln!(
            self.out,
            "{indent}Average: {:.2} verifications/second",
            stats.mean
        )?;
        writeln!(
            self.out,
            "{indent}Median:  {:.2} verifications/second",
            stats.median
        )?;
        writeln!(self.out, "{indent}Std Dev: {:.2}", stats.std_dev)
    }
}
