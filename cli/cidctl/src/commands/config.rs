//! Configuration display.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config::Config;
use crate::output::{print_fields, Field};

use super::CommandContext;

/// Inspect CLI configuration.
#[derive(Debug, Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Debug, Subcommand)]
enum ConfigSubcommand {
    /// Show the effective configuration.
    Show,
}

impl ConfigCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        match self.command {
            ConfigSubcommand::Show => show(ctx),
        }
    }
}

fn show(ctx: &CommandContext) -> Result<()> {
    let fields = [
        Field::new("path", Config::path()?.display().to_string()),
        Field::new("format", ctx.config.format.clone()),
        Field::new("log_level", ctx.config.log_level.clone()),
        Field::new("leaf_by_default", ctx.config.leaf_by_default.to_string()),
    ];
    print_fields(&fields, ctx.format);
    Ok(())
}
