//! Seams between the probing logic and the network.

use async_trait::async_trait;
use census_client::{ClientError, CountField, LinkResource, OptimadeClient};
use census_core::CountBounds;

/// One existence check for a batch of element symbols.
#[async_trait]
pub trait BatchQuery: Send + Sync {
    /// Whether any structure at `provider_url` contains any of `symbols`.
    ///
    /// Implementations never fail: every error counts as "not present".
    async fn any_present(&self, provider_url: &str, symbols: &[&str]) -> bool;
}

/// Child database discovery for a provider.
#[async_trait]
pub trait LinkSource: Send + Sync {
    async fn child_links(&self, base_url: &str) -> Result<Vec<LinkResource>, ClientError>;
}

/// Min/max statistics of a per-structure count field.
#[async_trait]
pub trait CountSource: Send + Sync {
    async fn count_bounds(&self, provider_url: &str, field: CountField) -> CountBounds;
}

#[async_trait]
impl BatchQuery for OptimadeClient {
    async fn any_present(&self, provider_url: &str, symbols: &[&str]) -> bool {
        match self.any_structures(provider_url, symbols).await {
            Ok(present) => present,
            Err(error) => {
                tracing::warn!(
                    provider_url,
                    batch = %symbols.join(", "),
                    %error,
                    "batch query failed, treating batch as absent"
                );
                false
            }
        }
    }
}

#[async_trait]
impl LinkSource for OptimadeClient {
    async fn child_links(&self, base_url: &str) -> Result<Vec<LinkResource>, ClientError> {
        Self::child_links(self, base_url).await
    }
}

#[async_trait]
impl CountSource for OptimadeClient {
    async fn count_bounds(&self, provider_url: &str, field: CountField) -> CountBounds {
        Self::count_bounds(self, provider_url, field).await
    }
}
