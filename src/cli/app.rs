use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use super::context::CliContext;
use super::dispatch::dispatch;
use super::env::CliArgs;
use super::runtime::{init_logging, load_config, LoadedConfig};

pub async fn run() -> Result<()> {
    let cli = CliArgs::parse();

    init_logging(&cli.log_level, cli.debug, cli.log_format)?;

    info!(
        git = env!("GIT_HASH"),
        built = env!("BUILD_DATE"),
        "Starting vizdriver v{}",
        env!("CARGO_PKG_VERSION")
    );

    let LoadedConfig { mut config, path } = load_config(cli.config.as_ref()).await?;
    if let Some(url) = &cli.url {
        config.target.url = url.clone();
    }
    let cli_context = CliContext::new(config, path);

    match dispatch(&cli, &cli_context).await {
        Ok(()) => {
            info!("Command completed successfully");
            Ok(())
        }
        Err(err) => {
            error!("Command failed: {:#}", err);
            Err(err)
        }
    }
}
