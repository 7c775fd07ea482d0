//! The counts pass: min/max `nelements` and `nsites` per child database.
//!
//! Providers are processed one at a time and the document is written once
//! at the end.

use std::path::Path;
use std::sync::Arc;

use census_client::{CountField, Provider};
use census_core::{CountsChild, CountsEntry, is_http_url};

use crate::cache::{CacheError, write_document};
use crate::source::{CountSource, LinkSource};

pub struct CountsDriver<S> {
    source: Arc<S>,
}

impl<S> CountsDriver<S>
where
    S: LinkSource + CountSource,
{
    #[must_use]
    pub const fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Collect count bounds for every reachable child of every provider.
    pub async fn run(&self, providers: &[Provider]) -> Vec<CountsEntry> {
        let mut results = Vec::new();
        for provider in providers {
            if let Some(entry) = self.process_provider(provider).await {
                results.push(entry);
            }
        }
        tracing::info!(providers = results.len(), "counts pass complete");
        results
    }

    async fn process_provider(&self, provider: &Provider) -> Option<CountsEntry> {
        let Some(base_url) = provider.base_url().filter(|url| is_http_url(Some(url))) else {
            tracing::warn!(provider = %provider.id, "skipping provider without http base_url");
            return None;
        };

        let children = match self.source.child_links(base_url).await {
            Ok(children) => children,
            Err(error) => {
                tracing::warn!(provider = %provider.id, %error, "skipping provider, link discovery failed");
                return None;
            }
        };
        tracing::info!(provider = %provider.id, children = children.len(), "collecting counts");

        let mut counted = Vec::new();
        for child in &children {
            let Some(url) = child.base_url().filter(|url| is_http_url(Some(url))) else {
                tracing::warn!(provider = %provider.id, child = %child.id, "skipping child without http base_url");
                continue;
            };

            let (elements, sites) = tokio::join!(
                self.source.count_bounds(url, CountField::Elements),
                self.source.count_bounds(url, CountField::Sites),
            );
            tracing::debug!(
                url,
                elements_min = elements.min,
                elements_max = elements.max,
                sites_min = sites.min,
                sites_max = sites.max,
                "counted child database"
            );
            counted.push(CountsChild {
                provider_url: url.to_string(),
                elements,
                sites,
            });
        }

        Some(CountsEntry {
            provider_url: base_url.to_string(),
            children: counted,
        })
    }
}

/// Write the counts document to `path`.
///
/// # Errors
///
/// Returns [`CacheError`] if serialization or the write fails.
pub async fn write_counts(path: &Path, entries: &[CountsEntry]) -> Result<(), CacheError> {
    let json = serde_json::to_string_pretty(entries)?;
    write_document(path, &json).await
}
