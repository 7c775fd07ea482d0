//! # census-probe
//!
//! Works out which chemical elements each OPTIMADE child database holds.
//!
//! - [`prober`]: divide-and-conquer existence probing over the periodic table
//! - [`cache`]: loading, seeding, folding and persisting the ptable cache
//! - [`driver`]: worker pool over providers, flushing the cache after every
//!   child database
//! - [`counts`]: the simpler min/max `nelements`/`nsites` pass
//!
//! Network access goes through the traits in [`source`], implemented for
//! [`census_client::OptimadeClient`] and by in-memory fakes in tests.

pub mod cache;
pub mod counts;
pub mod driver;
pub mod prober;
pub mod source;

mod error;

pub use cache::{CacheError, CacheStore, PtableCache};
pub use counts::{CountsDriver, write_counts};
pub use driver::{PtableDriver, RunSummary};
pub use error::ProbeError;
pub use prober::{ProbeOutcome, ProbeStats, Prober};
pub use source::{BatchQuery, CountSource, LinkSource};
