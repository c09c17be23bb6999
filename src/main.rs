use clap::Parser;
use podscreen_lib::bootstrap::{config::load_config, tracing::init_tracing_subscriber};
use podscreen_lib::cli::Cli;
use ps_core::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::empty(),
    };

    podscreen_lib::run(config, cli.episode_uri.clone(), cli.settle()).await?;
    Ok(())
}
