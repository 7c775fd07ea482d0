//! Records of the two persisted documents: the ptable cache and the counts
//! statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::presence::PresenceTable;

// ---------------------------------------------------------------------------
// Ptable cache
// ---------------------------------------------------------------------------

/// One probed child database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PtableEntry {
    /// Base URL of the child database. Unique within a document.
    pub provider_url: String,
    #[serde(default)]
    pub ptable: PresenceTable,
    /// Mean wall time per existence query, in milliseconds.
    #[serde(default)]
    pub avg_time_per_request: f64,
}

/// The persisted ptable cache document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PtableDocument {
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub data: Vec<PtableEntry>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AnyPtableDocument {
    Wrapped(PtableDocument),
    Bare(Vec<PtableEntry>),
}

impl PtableDocument {
    /// Parse a document, accepting the wrapped `{ lastUpdated, data }` shape
    /// as well as a bare array of entries.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if `raw` matches neither shape.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        Ok(match serde_json::from_str(raw)? {
            AnyPtableDocument::Wrapped(doc) => doc,
            AnyPtableDocument::Bare(data) => Self {
                last_updated: None,
                data,
            },
        })
    }
}

// ---------------------------------------------------------------------------
// Counts statistics
// ---------------------------------------------------------------------------

/// Smallest and largest value of a per-structure count field.
///
/// Either bound is `None` when the provider could not answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountBounds {
    pub min: Option<u64>,
    pub max: Option<u64>,
}

/// Count bounds for one child database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountsChild {
    pub provider_url: String,
    /// Bounds of `nelements`.
    pub elements: CountBounds,
    /// Bounds of `nsites`.
    pub sites: CountBounds,
}

/// Count bounds for every child of one provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountsEntry {
    pub provider_url: String,
    pub children: Vec<CountsChild>,
}
