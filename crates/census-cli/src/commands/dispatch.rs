use crate::cli::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext) -> anyhow::Result<()> {
    match command {
        Commands::Ptable => commands::ptable::handle(ctx).await,
        Commands::Counts => commands::counts::handle(ctx).await,
    }
}
