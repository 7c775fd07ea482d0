use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use census_client::{OptimadeClient, Provider};
use census_config::CensusConfig;

/// Loaded configuration plus the shared HTTP client.
pub struct AppContext {
    pub config: CensusConfig,
    pub client: Arc<OptimadeClient>,
}

impl AppContext {
    pub fn init(config: CensusConfig) -> anyhow::Result<Self> {
        let client = OptimadeClient::from_config(&config.http)
            .context("failed to build HTTP client")?;
        Ok(Self {
            config,
            client: Arc::new(client),
        })
    }

    /// Fetch the provider directory, honouring the exclude list. Failure here
    /// is fatal for every pass.
    pub async fn providers(&self) -> anyhow::Result<Vec<Provider>> {
        let registry = &self.config.registry;
        let providers = self
            .client
            .list_providers(
                &registry.providers_url,
                Path::new(&registry.fallback_path),
                &registry.exclude_ids,
            )
            .await
            .context("failed to load the provider directory")?;
        tracing::info!(providers = providers.len(), "loaded provider directory");
        Ok(providers)
    }
}
