//! Divide-and-conquer population probing.
//!
//! The unknown elements are cut into chunks of `batch_size`. Each chunk is
//! checked with a single `HAS ANY` query:
//!
//! - no structure matches: every element of the batch is absent, and no
//!   sub-batch is ever queried (`HAS ANY` is monotone)
//! - a match on a single element: that element is present
//! - a match on several elements: split at `len / 2` and check the left half,
//!   then the right half
//!
//! Every batch that is reached is queried, so a single element is only ever
//! marked present by its own response.
//!
//! Batches live on an explicit stack instead of recursing, so the query order
//! is the same as a left-first recursion without boxing recursive futures.
//! For `k` present elements among `n`, this issues on the order of
//! `k * log2(n / k) + k` queries instead of `n`.

use std::collections::{BTreeMap, BTreeSet};
use std::time::{Duration, Instant};

use census_core::{Element, PresenceTable};

use crate::source::BatchQuery;

/// Request telemetry for one probing run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeStats {
    /// Number of existence queries issued.
    pub requests: usize,
    /// Sum of batch sizes over all queries.
    pub element_slots: usize,
    pub elapsed: Duration,
}

impl ProbeStats {
    /// Mean wall time per query in milliseconds, `0.0` when nothing was
    /// queried.
    #[must_use]
    pub fn avg_time_per_request_ms(&self) -> f64 {
        if self.requests == 0 {
            return 0.0;
        }
        let requests = u32::try_from(self.requests).unwrap_or(u32::MAX);
        self.elapsed.as_secs_f64() * 1000.0 / f64::from(requests)
    }
}

/// Result of probing one child database.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeOutcome {
    /// A decision for every element of the table.
    pub presence: BTreeMap<String, bool>,
    pub stats: ProbeStats,
}

impl ProbeOutcome {
    #[must_use]
    pub fn present_count(&self) -> usize {
        self.presence.values().filter(|present| **present).count()
    }
}

/// Split `table` into elements that still need querying and symbols already
/// known to be present.
///
/// A missing, empty or `{ "all": false }` seed makes every element unknown.
/// Otherwise only elements the seed marks `true` are skipped; `false` and
/// missing entries are probed again.
#[must_use]
pub fn partition_unknown<'t>(
    table: &'t [Element],
    seed: Option<&PresenceTable>,
) -> (Vec<&'t Element>, BTreeSet<&'static str>) {
    let Some(seed) = seed.filter(|s| !s.is_uninformative()) else {
        return (table.iter().collect(), BTreeSet::new());
    };

    let mut unknown = Vec::new();
    let mut known = BTreeSet::new();
    for element in table {
        if seed.is_present(element.sym) {
            known.insert(element.sym);
        } else {
            unknown.push(element);
        }
    }
    (unknown, known)
}

/// Probes one child database at a time over a fixed element table.
pub struct Prober<'a, Q: ?Sized> {
    query: &'a Q,
    table: &'a [Element],
    batch_size: usize,
}

impl<'a, Q: BatchQuery + ?Sized> Prober<'a, Q> {
    /// A `batch_size` of zero is treated as one.
    pub fn new(query: &'a Q, table: &'a [Element], batch_size: usize) -> Self {
        Self {
            query,
            table,
            batch_size: batch_size.max(1),
        }
    }

    /// Determine which elements of the table `provider_url` holds, reusing
    /// the present elements recorded in `seed`.
    pub async fn probe(&self, provider_url: &str, seed: Option<&PresenceTable>) -> ProbeOutcome {
        let started = Instant::now();
        let (unknown, mut present) = partition_unknown(self.table, seed);
        let mut stats = ProbeStats::default();

        tracing::debug!(
            provider_url,
            unknown = unknown.len(),
            known_present = present.len(),
            "probing child database"
        );

        for chunk in unknown.chunks(self.batch_size) {
            self.check(provider_url, chunk, &mut present, &mut stats).await;
        }

        stats.elapsed = started.elapsed();
        let presence = self
            .table
            .iter()
            .map(|e| (e.sym.to_string(), present.contains(e.sym)))
            .collect();

        ProbeOutcome { presence, stats }
    }

    /// Resolve every element of `chunk`, adding present ones to `present`.
    async fn check(
        &self,
        provider_url: &str,
        chunk: &[&Element],
        present: &mut BTreeSet<&'static str>,
        stats: &mut ProbeStats,
    ) {
        let mut pending: Vec<&[&Element]> = vec![chunk];

        while let Some(batch) = pending.pop() {
            if batch.is_empty() {
                continue;
            }

            let symbols: Vec<&str> = batch.iter().map(|e| e.sym).collect();
            stats.requests += 1;
            stats.element_slots += batch.len();
            if !self.query.any_present(provider_url, &symbols).await {
                continue;
            }

            if let [only] = batch {
                present.insert(only.sym);
                continue;
            }

            // Right half first so the left half is popped next.
            let (left, right) = batch.split_at(batch.len() / 2);
            pending.push(right);
            pending.push(left);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use census_core::{ElementGroup, PERIODIC_TABLE};

    #[test]
    fn no_seed_means_everything_unknown() {
        let (unknown, known) = partition_unknown(&PERIODIC_TABLE, None);
        assert_eq!(unknown.len(), 118);
        assert!(known.is_empty());
    }

    #[test]
    fn sentinel_seed_means_everything_unknown() {
        let (unknown, known) = partition_unknown(&PERIODIC_TABLE, Some(&PresenceTable::AllAbsent));
        assert_eq!(unknown.len(), 118);
        assert!(known.is_empty());
    }

    #[test]
    fn empty_seed_means_everything_unknown() {
        let seed = PresenceTable::Elements(BTreeMap::new());
        let (unknown, _) = partition_unknown(&PERIODIC_TABLE, Some(&seed));
        assert_eq!(unknown.len(), 118);
    }

    #[test]
    fn only_true_entries_are_skipped() {
        let table = [
            Element::new("H", 1, ElementGroup::Nonmetal),
            Element::new("He", 2, ElementGroup::NobleGas),
            Element::new("Li", 3, ElementGroup::AlkaliMetal),
        ];
        let seed = PresenceTable::Elements(BTreeMap::from([
            ("H".to_string(), true),
            ("He".to_string(), false),
        ]));
        let (unknown, known) = partition_unknown(&table, Some(&seed));
        let unknown: Vec<_> = unknown.iter().map(|e| e.sym).collect();
        assert_eq!(unknown, vec!["He", "Li"]);
        assert_eq!(known.into_iter().collect::<Vec<_>>(), vec!["H"]);
    }

    #[test]
    fn average_time_per_request() {
        let stats = ProbeStats {
            requests: 4,
            element_slots: 7,
            elapsed: Duration::from_millis(200),
        };
        assert!((stats.avg_time_per_request_ms() - 50.0).abs() < 1e-9);
        assert!(ProbeStats::default().avg_time_per_request_ms().abs() < f64::EPSILON);
    }
}
