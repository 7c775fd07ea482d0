use clap::Subcommand;

/// Top-level command tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Probe which elements every child database holds and update the
    /// ptable cache.
    #[default]
    Ptable,
    /// Collect min/max element and site counts per child database.
    Counts,
}
