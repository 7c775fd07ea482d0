use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod context;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("census error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = census_config::CensusConfig::load_with_dotenv(cli.config.as_deref())
        .context("failed to load census configuration")?;

    let ctx = context::AppContext::init(config).context("failed to initialize census")?;
    commands::dispatch::dispatch(cli.command.unwrap_or_default(), &ctx).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("CENSUS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
