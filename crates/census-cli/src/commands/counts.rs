use anyhow::Context;
use census_probe::{CountsDriver, write_counts};

use crate::context::AppContext;

/// Handle `census counts`.
pub async fn handle(ctx: &AppContext) -> anyhow::Result<()> {
    let providers = ctx.providers().await?;
    let entries = CountsDriver::new(ctx.client.clone()).run(&providers).await;

    let path = &ctx.config.output.counts_path;
    write_counts(path, &entries)
        .await
        .with_context(|| format!("failed to write counts to {}", path.display()))?;

    tracing::info!(providers = entries.len(), path = %path.display(), "counts written");
    Ok(())
}
