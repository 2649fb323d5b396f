use std::io::Write;

use anyhow::Context;
use attbench_consensus::{
    bls::BlsScheme, error::BenchError, generator::generate, signed_attestation::Verifiable,
};
use chrono::Local;
use tracing::info;

use crate::{
    config::BenchConfig,
    driver::{run_batch, run_individual, run_parallel, throughput},
    report::{BatchResult, BenchmarkReport, ParallelResult, Reporter, TrialSet},
    stats::compute_stats,
};

/// Full benchmark run: generate the corpus once, then run the individual,
/// batch and (if enabled) parallel sweeps against it while printing the
/// report to `out`.
pub fn run<W: Write>(
    config: &BenchConfig,
    scheme: &'static BlsScheme,
    out: W,
) -> anyhow::Result<BenchmarkReport> {
    config.validate()?;

    let mut reporter = Reporter::new(out);
    reporter.header(Local::now())?;
    reporter.generating(config.num_attestations)?;
    let corpus = generate(scheme, config.num_attestations)
        .context("Failed to generate test attestations")?;
    reporter.generated()?;

    let report = run_with_corpus(config, &corpus, &mut reporter)?;
    reporter.footer(Local::now())?;
    Ok(report)
}

/// Runs every sweep over an already built corpus.
pub fn run_with_corpus<T: Verifiable + Sync, W: Write>(
    config: &BenchConfig,
    corpus: &[T],
    reporter: &mut Reporter<W>,
) -> anyhow::Result<BenchmarkReport> {
    config.validate()?;
    let duration = config.trial_duration;

    info!(
        "Running {} individual trials of {duration}s over {} attestations",
        config.num_trials,
        corpus.len()
    );
    reporter.individual_start(config.num_trials, duration)?;
    let individual = run_trials(config, reporter, || run_individual(corpus, duration))
        .context("Individual verification benchmark failed")?;
    reporter.individual_summary(&individual.stats)?;

    reporter.batch_section()?;
    let mut batches = Vec::with_capacity(config.batch_sizes.len());
    for &batch_size in &config.batch_sizes {
        info!("Running batch trials with batch size {batch_size}");
        reporter.batch_start(batch_size, config.num_trials, duration)?;
        let trials = run_trials(config, reporter, || run_batch(corpus, duration, batch_size))
            .with_context(|| format!("Batch verification benchmark (size {batch_size}) failed"))?;

        let result = BatchResult {
            batch_size,
            speedup: trials.stats.speedup_over(&individual.stats),
            trials,
        };
        reporter.batch_summary(&result)?;
        batches.push(result);
    }

    let parallel = if config.threads > 0 {
        let threads = config.threads;
        info!("Running parallel trials on {threads} threads");
        reporter.parallel_start(threads, config.num_trials, duration)?;
        let trials = run_trials(config, reporter, || {
            run_parallel(corpus, duration, threads).map(|outcome| outcome.total())
        })
        .context("Parallel verification benchmark failed")?;

        let result = ParallelResult {
            threads,
            scaling: trials.stats.speedup_over(&individual.stats),
            trials,
        };
        reporter.parallel_summary(&result)?;
        Some(result)
    } else {
        None
    };

    reporter.individual_trials(&individual.samples)?;

    Ok(BenchmarkReport {
        individual,
        batches,
        parallel,
    })
}

fn run_trials<W, F>(
    config: &BenchConfig,
    reporter: &mut Reporter<W>,
    mut trial: F,
) -> anyhow::Result<TrialSet>
where
    W: Write,
    F: FnMut() -> Result<u64, BenchError>,
{
    let mut samples = Vec::with_capacity(config.num_trials);
    for i in 0..config.num_trials {
        reporter.trial_started(i, config.num_trials)?;
        let verifications = trial()?;
        let verifications_per_second = throughput(verifications, config.trial_duration);
        reporter.trial_finished(verifications_per_second)?;
        samples.push(verifications_per_second);
    }

    let stats = compute_stats(&samples)?;
    Ok(TrialSet { samples, stats })
}
