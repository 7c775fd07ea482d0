//! # census-client
//!
//! HTTP client for the OPTIMADE endpoints the census talks to:
//! - the provider directory (`providers.json`), with a local fallback file
//! - per-provider link discovery (`/v1/links`), with a CORS proxy chain
//! - structure existence checks and count bounds (`/v1/structures`)

pub mod links;
pub mod providers;
pub mod structures;

mod error;
mod http;

pub use error::ClientError;
pub use links::{LinkAttributes, LinkResource};
pub use providers::{Provider, ProviderAttributes};
pub use structures::{CountField, SortOrder, has_any_filter};

use census_config::HttpConfig;
use census_core::CorsProxy;
use serde::{Deserialize, Serialize};

// ── Types ──────────────────────────────────────────────────────────

/// A `base_url` as found in OPTIMADE resources: either a plain string or a
/// link object with an `href`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BaseUrl {
    Plain(String),
    Link { href: String },
}

impl BaseUrl {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Plain(url) | Self::Link { href: url } => url,
        }
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for OPTIMADE providers.
#[derive(Debug, Clone)]
pub struct OptimadeClient {
    http: reqwest::Client,
    cors_proxies: Vec<CorsProxy>,
}

impl OptimadeClient {
    /// Build a client from the `[http]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn from_config(config: &HttpConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            cors_proxies: config.cors_proxies.clone(),
        })
    }

    /// Replace the CORS proxy chain.
    #[must_use]
    pub fn with_cors_proxies(mut self, proxies: Vec<CorsProxy>) -> Self {
        self.cors_proxies = proxies;
        self
    }

    #[must_use]
    pub fn cors_proxies(&self) -> &[CorsProxy] {
        &self.cors_proxies
    }
}
