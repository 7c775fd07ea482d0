//! Provider directory configuration.

use serde::{Deserialize, Serialize};

/// The Materials-Consortia provider list.
pub const DEFAULT_PROVIDERS_URL: &str = "https://raw.githubusercontent.com/Materials-Consortia/providers/refs/heads/master/src/links/v1/providers.json";

fn default_providers_url() -> String {
    DEFAULT_PROVIDERS_URL.to_string()
}

fn default_fallback_path() -> String {
    "public/cachedProviders.json".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistryConfig {
    /// Remote provider directory (`providers.json`).
    #[serde(default = "default_providers_url")]
    pub providers_url: String,

    /// Local copy of the directory, read when the remote is unreachable.
    #[serde(default = "default_fallback_path")]
    pub fallback_path: String,

    /// Provider ids to leave out entirely.
    #[serde(default)]
    pub exclude_ids: Vec<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            providers_url: default_providers_url(),
            fallback_path: default_fallback_path(),
            exclude_ids: Vec::new(),
        }
    }
}
