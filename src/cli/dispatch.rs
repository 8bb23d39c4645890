use super::config::cmd_config;
use super::env::CliArgs;
use super::sequence::{cmd_delete, cmd_insert};
use crate::cli::commands::Commands;
use crate::cli::context::CliContext;
use anyhow::Result;

pub async fn dispatch(cli: &CliArgs, ctx: &CliContext) -> Result<()> {
    match cli.command.clone() {
        Commands::Insert(args) => cmd_insert(args, ctx).await,
        Commands::Delete(args) => cmd_delete(args, ctx).await,
        Commands::Config(args) => cmd_config(args, ctx).await,
    }
}
