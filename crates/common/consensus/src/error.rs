use thiserror::Error;

/// Every failure the benchmark can hit. None of them are recoverable: the
/// caller is expected to stop the run rather than report skewed numbers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BenchError {
    /// The secure random source or the curve library could not be set up.
    #[error("setup failure: {0}")]
    SetupFailure(String),

    /// A self-generated signature did not verify.
    #[error("signature verification failed for corpus entry {index}")]
    VerificationMismatch { index: usize },

    /// Invalid benchmark parameters, detected before any trial runs.
    #[error("configuration error: {0}")]
    ConfigurationError(String),
}
