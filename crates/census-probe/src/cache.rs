//! The ptable cache: in-memory state plus its on-disk document.
//!
//! [`PtableCache`] is keyed by child database URL, so recording a probe for a
//! URL that is already present replaces the old entry. [`CacheStore`] reads
//! and writes the whole document; there are no partial writes.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use census_core::{PresenceTable, PtableDocument, PtableEntry};
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    /// The document could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document could not be serialized.
    #[error("failed to serialize cache document: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Presence results for every child database seen so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PtableCache {
    entries: BTreeMap<String, PtableEntry>,
}

impl PtableCache {
    /// Build the cache from a loaded document. Later duplicates of a URL win.
    #[must_use]
    pub fn from_document(document: PtableDocument) -> Self {
        let entries = document
            .data
            .into_iter()
            .map(|entry| (entry.provider_url.clone(), entry))
            .collect();
        Self { entries }
    }

    /// The stored presence table for `provider_url`, used to seed the prober.
    #[must_use]
    pub fn seed(&self, provider_url: &str) -> Option<&PresenceTable> {
        self.entries.get(provider_url).map(|entry| &entry.ptable)
    }

    /// Fold a fresh probe result into the cache, replacing any previous
    /// entry for the same URL. An all-absent result is stored as
    /// `{ "all": false }`.
    pub fn record(
        &mut self,
        provider_url: &str,
        presence: BTreeMap<String, bool>,
        avg_time_per_request: f64,
    ) {
        self.entries.insert(
            provider_url.to_string(),
            PtableEntry {
                provider_url: provider_url.to_string(),
                ptable: PresenceTable::fold(presence),
                avg_time_per_request,
            },
        );
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot the cache as a document stamped with `now`.
    #[must_use]
    pub fn to_document(&self, now: DateTime<Utc>) -> PtableDocument {
        PtableDocument {
            last_updated: Some(now),
            data: self.entries.values().cloned().collect(),
        }
    }
}

/// Location of the persisted cache document.
#[derive(Debug, Clone)]
pub struct CacheStore {
    path: PathBuf,
}

impl CacheStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the cache. A missing file yields an empty cache; an unreadable or
    /// malformed one is logged and also yields an empty cache.
    pub async fn load(&self) -> PtableCache {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no previous ptable cache");
                return PtableCache::default();
            }
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "failed to read ptable cache");
                return PtableCache::default();
            }
        };

        match PtableDocument::from_json(&raw) {
            Ok(document) => {
                let cache = PtableCache::from_document(document);
                tracing::info!(path = %self.path.display(), entries = cache.len(), "loaded ptable cache");
                cache
            }
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "failed to parse ptable cache");
                PtableCache::default()
            }
        }
    }

    /// Overwrite the document with the current cache contents.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the document cannot be serialized or the
    /// file (or its parent directory) cannot be written.
    pub async fn save(&self, cache: &PtableCache) -> Result<(), CacheError> {
        let json = serde_json::to_string_pretty(&cache.to_document(Utc::now()))?;
        write_document(&self.path, &json).await
    }
}

/// Write `contents` to `path`, creating missing parent directories.
pub(crate) async fn write_document(path: &Path, contents: &str) -> Result<(), CacheError> {
    let to_error = |source| CacheError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(to_error)?;
    }
    tokio::fs::write(path, contents).await.map_err(to_error)
}
