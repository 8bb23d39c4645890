use crate::cli::context::CliContext;
use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use serde_json::Value as JsonValue;
use tokio::fs;
use vizdriver::Config;

#[derive(Args, Clone, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Clone, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Get a configuration value by dotted key (e.g. sequencer.settle_delay_ms)
    Get {
        /// Configuration key
        key: String,
    },

    /// Validate the configuration file
    Validate,
}

pub async fn cmd_config(args: ConfigArgs, ctx: &CliContext) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            println!("Effective configuration ({}):", ctx.config_path().display());
            println!("{}", serde_yaml::to_string(ctx.config())?);
        }
        ConfigAction::Get { key } => {
            let json = serde_json::to_value(ctx.config())?;
            match get_json_value(&json, &key) {
                Some(value) => println!("{}", serde_yaml::to_string(value)?.trim_end()),
                None => bail!("{} not found in configuration", key),
            }
        }
        ConfigAction::Validate => {
            let path = ctx.config_path();
            if fs::try_exists(path).await? {
                let raw = fs::read_to_string(path)
                    .await
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_yaml::from_str::<Config>(&raw)
                    .with_context(|| format!("parsing {}", path.display()))?;
                println!("Configuration file {} is valid", path.display());
            } else {
                println!(
                    "No configuration file at {}; defaults are valid",
                    path.display()
                );
            }
        }
    }

    Ok(())
}

fn get_json_value<'a>(root: &'a JsonValue, key: &str) -> Option<&'a JsonValue> {
    key.split('.')
        .filter(|segment| !segment.is_empty())
        .try_fold(root, |node, segment| node.get(segment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dotted_lookup_walks_objects() {
        let value = json!({ "sequencer": { "settle_delay_ms": 500 } });
        assert_eq!(
            get_json_value(&value, "sequencer.settle_delay_ms"),
            Some(&json!(500))
        );
        assert!(get_json_value(&value, "sequencer.missing").is_none());
    }
}
