//! Probe error types.

use thiserror::Error;

use crate::cache::CacheError;

/// Errors that abort a probing run.
///
/// Per-batch and per-provider failures never show up here; they are logged
/// and absorbed where they happen.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The cache document could not be written.
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// A worker task panicked or was cancelled.
    #[error("probe worker failed: {0}")]
    Worker(String),
}
