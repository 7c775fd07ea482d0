//! HTTP transport configuration.

use census_core::CorsProxy;
use serde::{Deserialize, Serialize};

fn default_user_agent() -> String {
    concat!("optimade-census/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_cors_proxies() -> Vec<CorsProxy> {
    vec![CorsProxy::materials_cloud()]
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds. `0` disables the timeout.
    #[serde(default)]
    pub timeout_secs: u64,

    /// Proxies tried in order when a direct link-discovery request fails.
    #[serde(default = "default_cors_proxies")]
    pub cors_proxies: Vec<CorsProxy>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: 0,
            cors_proxies: default_cors_proxies(),
        }
    }
}

impl HttpConfig {
    /// The request timeout, if one is configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<std::time::Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(std::time::Duration::from_secs(self.timeout_secs))
        }
    }
}
