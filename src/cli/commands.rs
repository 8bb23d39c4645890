use clap::Subcommand;

use super::config::ConfigArgs;
use super::sequence::{DeleteArgs, InsertArgs};

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Insert 1..=COUNT into the visualization
    Insert(InsertArgs),

    /// Delete the given values from the visualization, in order
    Delete(DeleteArgs),

    /// Inspect vizdriver configuration
    Config(ConfigArgs),
}
