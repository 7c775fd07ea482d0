//! Link discovery: the child databases behind a provider.
//!
//! `GET {base}/v1/links` is tried directly first, then through every
//! configured CORS proxy in order. The first successful JSON response wins.

use serde::{Deserialize, Serialize};

use crate::{BaseUrl, OptimadeClient, error::ClientError, http::endpoint};

/// `link_type` of entries that point at a provider's own sub-databases.
pub const CHILD_LINK_TYPE: &str = "child";

/// An entry of a `/v1/links` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkResource {
    pub id: String,
    #[serde(default)]
    pub attributes: LinkAttributes,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkAttributes {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub base_url: Option<BaseUrl>,
    #[serde(default)]
    pub link_type: Option<String>,
}

impl LinkResource {
    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.attributes.base_url.as_ref().map(BaseUrl::as_str)
    }

    #[must_use]
    pub fn is_child(&self) -> bool {
        self.attributes.link_type.as_deref() == Some(CHILD_LINK_TYPE)
    }
}

#[derive(Deserialize)]
struct LinksResponse {
    #[serde(default)]
    data: Vec<LinkResource>,
}

impl OptimadeClient {
    /// Discover the child databases of the provider at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::LinksUnavailable`] if the direct request and
    /// every proxied request failed.
    pub async fn child_links(&self, base_url: &str) -> Result<Vec<LinkResource>, ClientError> {
        let target = endpoint(base_url, "v1/links");
        let attempts: Vec<(&str, String)> = std::iter::once(("direct", target.clone()))
            .chain(
                self.cors_proxies
                    .iter()
                    .map(|proxy| (proxy.name.as_str(), proxy.rewrite(&target))),
            )
            .collect();

        for (name, url) in &attempts {
            match self.fetch_links(url).await {
                Ok(links) => {
                    tracing::debug!(base_url, via = name, count = links.len(), "links discovered");
                    return Ok(links.into_iter().filter(LinkResource::is_child).collect());
                }
                Err(error) => {
                    tracing::debug!(base_url, via = name, %error, "link discovery attempt failed");
                }
            }
        }

        Err(ClientError::LinksUnavailable {
            base_url: base_url.to_string(),
            attempts: attempts.len(),
        })
    }

    async fn fetch_links(&self, url: &str) -> Result<Vec<LinkResource>, ClientError> {
        let resp = crate::http::check_response(self.http.get(url).send().await?).await?;
        let data: LinksResponse = resp.json().await?;
        Ok(data.data)
    }
}
