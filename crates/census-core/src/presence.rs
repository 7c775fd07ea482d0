//! Presence maps: which elements a provider's structures contain.
//!
//! On disk a presence map is either an object of `symbol -> bool` or the
//! compact sentinel `{ "all": false }`, which stands for "every element is
//! absent". The sentinel carries no per-element information, so a later run
//! reads it back as "nothing known" and probes every element again.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

const ALL_KEY: &str = "all";

/// Per-provider presence information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenceTable {
    /// Every element is absent (`{ "all": false }`).
    AllAbsent,
    /// Explicit `symbol -> present` entries.
    Elements(BTreeMap<String, bool>),
}

impl PresenceTable {
    /// Build a table from a probe result.
    ///
    /// A map where every value is `false` collapses to [`Self::AllAbsent`].
    #[must_use]
    pub fn fold(map: BTreeMap<String, bool>) -> Self {
        if map.values().all(|present| !present) {
            Self::AllAbsent
        } else {
            Self::Elements(map)
        }
    }

    /// Returns `true` when nothing can be reused from this table.
    ///
    /// Both the sentinel and an empty map carry no usable information.
    #[must_use]
    pub fn is_uninformative(&self) -> bool {
        match self {
            Self::AllAbsent => true,
            Self::Elements(map) => map.is_empty(),
        }
    }

    /// Whether `sym` is recorded as present. Missing symbols are not present.
    #[must_use]
    pub fn is_present(&self, sym: &str) -> bool {
        match self {
            Self::AllAbsent => false,
            Self::Elements(map) => map.get(sym).copied().unwrap_or(false),
        }
    }
}

impl Default for PresenceTable {
    fn default() -> Self {
        Self::Elements(BTreeMap::new())
    }
}

impl Serialize for PresenceTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::AllAbsent => {
                let mut sentinel = BTreeMap::new();
                sentinel.insert(ALL_KEY, false);
                sentinel.serialize(serializer)
            }
            Self::Elements(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for PresenceTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Older documents carried a numeric `timing` key next to the symbols;
        // anything that is not a bool is dropped.
        let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;

        if raw.get(ALL_KEY).and_then(serde_json::Value::as_bool) == Some(false) {
            return Ok(Self::AllAbsent);
        }

        let map = raw
            .into_iter()
            .filter(|(key, _)| key != ALL_KEY)
            .filter_map(|(key, value)| value.as_bool().map(|present| (key, present)))
            .collect();
        Ok(Self::Elements(map))
    }
}
