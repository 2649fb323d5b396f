use std::time::{Duration, Instant};

use attbench_consensus::{error::BenchError, signed_attestation::Verifiable};
use tracing::debug;

/// Counts produced by one parallel trial, one entry per worker thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallelOutcome {
    pub per_worker: Vec<u64>,
}

impl ParallelOutcome {
    pub fn total(&self) -> u64 {
        self.per_worker.iter().sum()
    }
}

/// Verifies one corpus entry per iteration, cycling through the corpus until
/// `duration_secs` of wall-clock time have passed. Returns the number of
/// successful verifications.
pub fn run_individual<T: Verifiable>(
    corpus: &[T],
    duration_secs: u64,
) -> Result<u64, BenchError> {
    check_corpus(corpus)?;
    check_duration(duration_secs)?;

    let deadline = Instant::now() + Duration::from_secs(duration_secs);
    let count = verify_until(corpus, 0, deadline)?;
    debug!("Individual trial finished with {count} verifications");
    Ok(count)
}

/// Like [`run_individual`], but each iteration verifies `batch_size`
/// consecutive entries and only then adds them to the count. The entries are
/// still checked one by one; nothing is aggregated.
pub fn run_batch<T: Verifiable>(
    corpus: &[T],
    duration_secs: u64,
    batch_size: usize,
) -> Result<u64, BenchError> {
    check_corpus(corpus)?;
    check_duration(duration_secs)?;
    if batch_size == 0 {
        return Err(BenchError::ConfigurationError(
            "batch size must be positive".to_string(),
        ));
    }

    let len = corpus.len() as u64;
    let batch_size = batch_size as u64;
    let deadline = Instant::now() + Duration::from_secs(duration_secs);
    let mut count = 0u64;
    while Instant::now() < deadline {
        let batch_start = count % len;
        for offset in 0..batch_size {
            verify_entry(corpus, ((batch_start + offset) % len) as usize)?;
        }
        count += batch_size;
    }

    debug!("Batch trial (size {batch_size}) finished with {count} verifications");
    Ok(count)
}

/// Runs the individual loop on `threads` dedicated workers sharing the
/// read-only corpus. Workers start at evenly spaced offsets and stop at a
/// common deadline.
pub fn run_parallel<T: Verifiable + Sync>(
    corpus: &[T],
    duration_secs: u64,
    threads: usize,
) -> Result<ParallelOutcome, BenchError> {
    check_corpus(corpus)?;
    check_duration(duration_secs)?;
    if threads == 0 {
        return Err(BenchError::ConfigurationError(
            "thread count must be positive".to_string(),
        ));
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|index| format!("attbench-worker-{index}"))
        .build()
        .map_err(|err| BenchError::SetupFailure(format!("worker pool: {err}")))?;

    let deadline = Instant::now() + Duration::from_secs(duration_secs);
    let per_worker = pool
        .broadcast(|ctx| verify_until(corpus, ctx.index() * corpus.len() / threads, deadline))
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    let outcome = ParallelOutcome { per_worker };
    debug!(
        "Parallel trial ({threads} threads) finished with {} verifications",
        outcome.total()
    );
    Ok(outcome)
}

/// Verifications per second for a trial of `duration_secs`.
pub fn throughput(count: u64, duration_secs: u64) -> f64 {
    count as f64 / duration_secs as f64
}

fn verify_until<T: Verifiable>(
    corpus: &[T],
    start: usize,
    deadline: Instant,
) -> Result<u64, BenchError> {
    let len = corpus.len() as u64;
    let start = start as u64;
    let mut count = 0u64;
    while Instant::now() < deadline {
        verify_entry(corpus, ((start + count) % len) as usize)?;
        count += 1;
    }
    Ok(count)
}

fn verify_entry<T: Verifiable>(corpus: &[T], index: usize) -> Result<(), BenchError> {
    if corpus[index].verify() {
        Ok(())
    } else {
        Err(BenchError::VerificationMismatch { index })
    }
}

fn check_corpus<T>(corpus: &[T]) -> Result<(), BenchError> {
    if corpus.is_empty() {
        return Err(BenchError::ConfigurationError(
            "corpus must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn check_duration(duration_secs: u64) -> Result<(), BenchError> {
    if duration_secs == 0 {
        return Err(BenchError::ConfigurationError(
            "trial duration must be positive".to_string(),
        ));
    }
    Ok(())
}
