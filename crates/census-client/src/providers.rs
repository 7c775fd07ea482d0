//! Provider directory.
//!
//! The directory is fetched from the remote registry. If that fails, a local
//! copy of the same JSON document is read instead; only when both fail is the
//! error returned.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{BaseUrl, OptimadeClient, error::ClientError, http::check_response};

/// A top-level registered database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
    #[serde(default)]
    pub attributes: ProviderAttributes,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderAttributes {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub base_url: Option<BaseUrl>,
}

impl Provider {
    /// The provider's base URL, if it has one.
    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.attributes.base_url.as_ref().map(BaseUrl::as_str)
    }
}

#[derive(Deserialize)]
struct ProvidersResponse {
    data: Vec<Provider>,
}

impl OptimadeClient {
    /// List registered providers, leaving out any whose id is in
    /// `exclude_ids`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ProvidersUnavailable`] when neither
    /// `registry_url` nor `fallback_path` yields a valid directory.
    pub async fn list_providers(
        &self,
        registry_url: &str,
        fallback_path: &Path,
        exclude_ids: &[String],
    ) -> Result<Vec<Provider>, ClientError> {
        let providers = match self.fetch_directory(registry_url).await {
            Ok(providers) => providers,
            Err(remote) => {
                tracing::warn!(
                    %remote,
                    fallback = %fallback_path.display(),
                    "remote provider directory unavailable, using local copy"
                );
                read_directory(fallback_path).await.map_err(|fallback| {
                    ClientError::ProvidersUnavailable {
                        remote: remote.to_string(),
                        fallback: fallback.to_string(),
                    }
                })?
            }
        };

        Ok(providers
            .into_iter()
            .filter(|p| !exclude_ids.contains(&p.id))
            .collect())
    }

    async fn fetch_directory(&self, url: &str) -> Result<Vec<Provider>, ClientError> {
        let resp = check_response(self.http.get(url).send().await?).await?;
        let data: ProvidersResponse = resp.json().await?;
        Ok(data.data)
    }
}

async fn read_directory(path: &Path) -> Result<Vec<Provider>, ClientError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ClientError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    parse_directory(&raw)
}

fn parse_directory(raw: &str) -> Result<Vec<Provider>, ClientError> {
    serde_json::from_str::<ProvidersResponse>(raw)
        .map(|r| r.data)
        .map_err(|e| ClientError::Parse(e.to_string()))
}
