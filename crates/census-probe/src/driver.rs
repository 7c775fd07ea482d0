//! Aggregation driver for the ptable pass.
//!
//! A fixed number of workers pull providers from a shared queue. Each worker
//! discovers a provider's child databases and probes them one after another;
//! different providers are probed concurrently. After every child the cache
//! is updated and the whole document is rewritten, so an aborted run keeps
//! everything finished before it.

use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex, PoisonError};

use census_client::Provider;
use census_config::ProbeConfig;
use census_core::{Element, PERIODIC_TABLE, is_http_url};
use tokio::task::JoinSet;

use crate::cache::{CacheStore, PtableCache};
use crate::error::ProbeError;
use crate::prober::Prober;
use crate::source::{BatchQuery, LinkSource};

/// What a run did, summed over all workers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Providers whose children were discovered.
    pub providers_processed: usize,
    /// Providers without a usable base URL or with failing link discovery.
    pub providers_skipped: usize,
    /// Child databases probed and written to the cache.
    pub children_probed: usize,
    /// Children without a usable base URL.
    pub children_skipped: usize,
    /// Children already probed earlier in the same run via another provider.
    pub children_duplicate: usize,
}

impl RunSummary {
    fn merge(&mut self, other: Self) {
        self.providers_processed += other.providers_processed;
        self.providers_skipped += other.providers_skipped;
        self.children_probed += other.children_probed;
        self.children_skipped += other.children_skipped;
        self.children_duplicate += other.children_duplicate;
    }
}

/// Probes every child database of a set of providers into the ptable cache.
pub struct PtableDriver<S> {
    source: Arc<S>,
    store: CacheStore,
    table: &'static [Element],
    batch_size: usize,
    workers: usize,
}

impl<S> PtableDriver<S>
where
    S: BatchQuery + LinkSource + 'static,
{
    #[must_use]
    pub fn new(source: Arc<S>, store: CacheStore, config: &ProbeConfig) -> Self {
        Self {
            source,
            store,
            table: &PERIODIC_TABLE,
            batch_size: config.batch_size,
            workers: config.max_concurrent_providers.max(1),
        }
    }

    /// Probe over a different element table.
    #[must_use]
    pub fn with_table(mut self, table: &'static [Element]) -> Self {
        self.table = table;
        self
    }

    /// Load the cache, probe every provider, and return the summary.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Cache`] if the cache document cannot be written,
    /// or [`ProbeError::Worker`] if a worker task dies. Remaining workers are
    /// aborted in both cases; everything written before stays on disk.
    pub async fn run(self, providers: Vec<Provider>) -> Result<RunSummary, ProbeError> {
        let cache = self.store.load().await;
        let workers = self.workers.min(providers.len()).max(1);

        tracing::info!(
            providers = providers.len(),
            workers,
            batch_size = self.batch_size,
            cached = cache.len(),
            "starting ptable run"
        );

        let shared = Arc::new(RunState {
            source: self.source,
            store: self.store,
            table: self.table,
            batch_size: self.batch_size,
            queue: Mutex::new(providers.into()),
            claimed: Mutex::new(HashSet::new()),
            cache: tokio::sync::Mutex::new(cache),
        });

        let mut set = JoinSet::new();
        for _ in 0..workers {
            let state = Arc::clone(&shared);
            set.spawn(async move { state.work().await });
        }

        let mut summary = RunSummary::default();
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok(Ok(worker_summary)) => summary.merge(worker_summary),
                Ok(Err(error)) => {
                    set.abort_all();
                    return Err(error);
                }
                Err(error) => {
                    set.abort_all();
                    return Err(ProbeError::Worker(error.to_string()));
                }
            }
        }

        tracing::info!(
            providers_processed = summary.providers_processed,
            providers_skipped = summary.providers_skipped,
            children_probed = summary.children_probed,
            children_skipped = summary.children_skipped,
            path = %shared.store.path().display(),
            "ptable run complete"
        );
        Ok(summary)
    }
}

/// State shared by the workers of one run.
struct RunState<S> {
    source: Arc<S>,
    store: CacheStore,
    table: &'static [Element],
    batch_size: usize,
    queue: Mutex<VecDeque<Provider>>,
    /// Child URLs already taken by some worker in this run.
    claimed: Mutex<HashSet<String>>,
    cache: tokio::sync::Mutex<PtableCache>,
}

impl<S> RunState<S>
where
    S: BatchQuery + LinkSource + 'static,
{
    async fn work(&self) -> Result<RunSummary, ProbeError> {
        let mut summary = RunSummary::default();
        while let Some(provider) = self.next_provider() {
            self.process_provider(&provider, &mut summary).await?;
        }
        Ok(summary)
    }

    fn next_provider(&self) -> Option<Provider> {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
    }

    /// Returns `false` if `url` was already claimed in this run.
    fn claim(&self, url: &str) -> bool {
        self.claimed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(url.to_string())
    }

    async fn process_provider(
        &self,
        provider: &Provider,
        summary: &mut RunSummary,
    ) -> Result<(), ProbeError> {
        let base_url = provider.base_url();
        let Some(base_url) = base_url.filter(|url| is_http_url(Some(url))) else {
            tracing::warn!(provider = %provider.id, base_url, "skipping provider without http base_url");
            summary.providers_skipped += 1;
            return Ok(());
        };

        let children = match self.source.child_links(base_url).await {
            Ok(children) => children,
            Err(error) => {
                tracing::warn!(provider = %provider.id, base_url, %error, "skipping provider, link discovery failed");
                summary.providers_skipped += 1;
                return Ok(());
            }
        };

        tracing::info!(provider = %provider.id, children = children.len(), "processing provider");
        summary.providers_processed += 1;

        for child in &children {
            let Some(url) = child.base_url().filter(|url| is_http_url(Some(url))) else {
                tracing::warn!(
                    provider = %provider.id,
                    child = %child.id,
                    base_url = child.base_url(),
                    "skipping child without http base_url"
                );
                summary.children_skipped += 1;
                continue;
            };

            if !self.claim(url) {
                tracing::debug!(provider = %provider.id, url, "child already probed in this run");
                summary.children_duplicate += 1;
                continue;
            }

            self.probe_child(url).await?;
            summary.children_probed += 1;
        }

        Ok(())
    }

    async fn probe_child(&self, url: &str) -> Result<(), ProbeError> {
        let seed = self.cache.lock().await.seed(url).cloned();

        let prober = Prober::new(self.source.as_ref(), self.table, self.batch_size);
        let outcome = prober.probe(url, seed.as_ref()).await;

        tracing::info!(
            url,
            present = outcome.present_count(),
            requests = outcome.stats.requests,
            element_slots = outcome.stats.element_slots,
            elapsed_secs = outcome.stats.elapsed.as_secs_f64(),
            "finished child database"
        );

        let avg = outcome.stats.avg_time_per_request_ms();
        let mut cache = self.cache.lock().await;
        cache.record(url, outcome.presence, avg);
        self.store.save(&cache).await?;
        Ok(())
    }
}
