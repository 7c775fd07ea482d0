//! CORS proxy rewriting rules.
//!
//! A proxy turns a target URL into an alternate URL for the same logical
//! request. Link discovery tries the direct URL first, then each proxy in
//! configured order.

use serde::{Deserialize, Serialize};

/// A single proxy rewrite rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsProxy {
    /// Display name used in logs.
    pub name: String,
    /// Prefix placed in front of the target URL.
    pub prefix: String,
    /// Percent-encode the target before appending it (for `?url=` style
    /// proxies).
    #[serde(default)]
    pub encode_target: bool,
}

impl CorsProxy {
    #[must_use]
    pub fn new(name: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: prefix.into(),
            encode_target: false,
        }
    }

    /// The proxy deployed alongside the public OPTIMADE client.
    #[must_use]
    pub fn materials_cloud() -> Self {
        Self::new("cors-materialscloud", "https://cors.materialscloud.org/")
    }

    /// Rewrite `target` through this proxy.
    #[must_use]
    pub fn rewrite(&self, target: &str) -> String {
        if self.encode_target {
            format!("{}{}", self.prefix, urlencoding::encode(target))
        } else {
            format!("{}{target}", self.prefix)
        }
    }
}
