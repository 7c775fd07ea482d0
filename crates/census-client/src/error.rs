//! Client error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when talking to OPTIMADE endpoints.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport or body decoding error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the endpoint.
        status: u16,
        /// Response body, if it could be read.
        message: String,
    },

    /// A response or local document did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// Reading a local fallback file failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Neither the remote provider directory nor the local copy was usable.
    #[error("provider directory unavailable (remote: {remote}; fallback: {fallback})")]
    ProvidersUnavailable { remote: String, fallback: String },

    /// Every direct and proxied link-discovery attempt failed.
    #[error("link discovery failed for {base_url} after {attempts} attempts")]
    LinksUnavailable { base_url: String, attempts: usize },
}
