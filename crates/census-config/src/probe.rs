//! Prober and driver tuning.

use serde::{Deserialize, Serialize};

const fn default_batch_size() -> usize {
    32
}

const fn default_max_concurrent_providers() -> usize {
    8
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProbeConfig {
    /// Size of the initial chunks of unknown elements. `1` means one query
    /// per element.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Number of providers probed at the same time.
    #[serde(default = "default_max_concurrent_providers")]
    pub max_concurrent_providers: usize,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            max_concurrent_providers: default_max_concurrent_providers(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ProbeConfig::default();
        assert_eq!(config.batch_size, 32);
        assert_eq!(config.max_concurrent_providers, 8);
    }
}
