//! Output document locations.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_ptable_path() -> PathBuf {
    PathBuf::from("public/cachedPTable.json")
}

fn default_counts_path() -> PathBuf {
    PathBuf::from("public/counts.json")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Presence cache, read at start and rewritten after every child.
    #[serde(default = "default_ptable_path")]
    pub ptable_path: PathBuf,

    /// Count statistics written by the counts pass.
    #[serde(default = "default_counts_path")]
    pub counts_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            ptable_path: default_ptable_path(),
            counts_path: default_counts_path(),
        }
    }
}
