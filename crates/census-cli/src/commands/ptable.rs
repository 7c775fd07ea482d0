use anyhow::Context;
use census_probe::{CacheStore, PtableDriver};

use crate::context::AppContext;

/// Handle `census ptable`.
pub async fn handle(ctx: &AppContext) -> anyhow::Result<()> {
    let providers = ctx.providers().await?;
    let store = CacheStore::new(&ctx.config.output.ptable_path);

    let summary = PtableDriver::new(ctx.client.clone(), store, &ctx.config.probe)
        .run(providers)
        .await
        .context("ptable run aborted")?;

    tracing::info!(
        children = summary.children_probed,
        path = %ctx.config.output.ptable_path.display(),
        "all providers processed, final write complete"
    );
    Ok(())
}
