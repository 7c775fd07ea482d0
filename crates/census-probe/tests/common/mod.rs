//! In-memory OPTIMADE fakes for probe tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use census_client::{
    BaseUrl, ClientError, CountField, LinkAttributes, LinkResource, Provider, ProviderAttributes,
};
use census_core::{CountBounds, Element, ElementGroup};
use census_probe::{BatchQuery, CountSource, LinkSource};

/// `H`, `He`, `Li`.
pub static TINY_TABLE: [Element; 3] = [
    Element::new("H", 1, ElementGroup::Nonmetal),
    Element::new("He", 2, ElementGroup::NobleGas),
    Element::new("Li", 3, ElementGroup::AlkaliMetal),
];

/// A fake network: which elements each child database holds, which
/// providers expose which children, and a log of every call.
#[derive(Default)]
pub struct FakeOptimade {
    holdings: HashMap<String, HashSet<String>>,
    failing: HashSet<String>,
    links: HashMap<String, Vec<LinkResource>>,
    counts: HashMap<(String, &'static str), CountBounds>,
    queries: Mutex<Vec<(String, Vec<String>)>>,
    link_calls: Mutex<Vec<String>>,
}

impl FakeOptimade {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the elements held by the child database at `url`.
    pub fn holds(mut self, url: &str, symbols: &[&str]) -> Self {
        self.holdings.insert(
            url.to_string(),
            symbols.iter().map(ToString::to_string).collect(),
        );
        self
    }

    /// Every query against `url` fails.
    pub fn failing(mut self, url: &str) -> Self {
        self.failing.insert(url.to_string());
        self
    }

    /// Provider at `base_url` lists these child URLs.
    pub fn children(mut self, base_url: &str, child_urls: &[&str]) -> Self {
        self.links.insert(
            base_url.to_string(),
            child_urls.iter().map(|url| child_link(url)).collect(),
        );
        self
    }

    /// Provider at `base_url` lists arbitrary link entries.
    pub fn raw_links(mut self, base_url: &str, links: Vec<LinkResource>) -> Self {
        self.links.insert(base_url.to_string(), links);
        self
    }

    pub fn counts(mut self, url: &str, field: CountField, bounds: CountBounds) -> Self {
        self.counts.insert((url.to_string(), field.as_str()), bounds);
        self
    }

    pub fn queries(&self) -> Vec<(String, Vec<String>)> {
        self.queries.lock().unwrap().clone()
    }

    pub fn queries_for(&self, url: &str) -> Vec<Vec<String>> {
        self.queries()
            .into_iter()
            .filter(|(u, _)| u == url)
            .map(|(_, batch)| batch)
            .collect()
    }

    pub fn link_calls(&self) -> Vec<String> {
        self.link_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BatchQuery for FakeOptimade {
    async fn any_present(&self, provider_url: &str, symbols: &[&str]) -> bool {
        self.queries.lock().unwrap().push((
            provider_url.to_string(),
            symbols.iter().map(ToString::to_string).collect(),
        ));
        tokio::task::yield_now().await;

        if self.failing.contains(provider_url) {
            return false;
        }
        self.holdings
            .get(provider_url)
            .is_some_and(|held| symbols.iter().any(|s| held.contains(*s)))
    }
}

#[async_trait]
impl LinkSource for FakeOptimade {
    async fn child_links(&self, base_url: &str) -> Result<Vec<LinkResource>, ClientError> {
        self.link_calls.lock().unwrap().push(base_url.to_string());
        self.links
            .get(base_url)
            .cloned()
            .ok_or_else(|| ClientError::LinksUnavailable {
                base_url: base_url.to_string(),
                attempts: 2,
            })
    }
}

#[async_trait]
impl CountSource for FakeOptimade {
    async fn count_bounds(&self, provider_url: &str, field: CountField) -> CountBounds {
        self.counts
            .get(&(provider_url.to_string(), field.as_str()))
            .copied()
            .unwrap_or_default()
    }
}

pub fn child_link(url: &str) -> LinkResource {
    LinkResource {
        id: url.rsplit('/').next().unwrap_or(url).to_string(),
        attributes: LinkAttributes {
            name: None,
            base_url: Some(BaseUrl::Plain(url.to_string())),
            link_type: Some("child".to_string()),
        },
    }
}

pub fn provider(id: &str, base_url: Option<&str>) -> Provider {
    Provider {
        id: id.to_string(),
        attributes: ProviderAttributes {
            name: None,
            description: None,
            base_url: base_url.map(|url| BaseUrl::Plain(url.to_string())),
        },
    }
}

pub fn symbols(batches: &[&[&str]]) -> Vec<Vec<String>> {
    batches
        .iter()
        .map(|batch| batch.iter().map(ToString::to_string).collect())
        .collect()
}
