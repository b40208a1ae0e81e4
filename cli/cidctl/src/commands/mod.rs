//! CLI commands.

mod config;
mod inspect;
mod navigate;
mod page;

use anyhow::Result;
use cidtree_id::{CidId, NodeKind};
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::CliError;
use crate::output::OutputFormat;

/// cidctl - Inspect hierarchical IPFS content identifiers.
#[derive(Debug, Parser)]
#[command(name = "cidctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json). Defaults to the configured format.
    #[arg(long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the components of an identifier.
    Parse(inspect::ParseCommand),

    /// Show the storage directory key of an identifier.
    Key(inspect::KeyCommand),

    /// List alternate identifiers (DNSLink pointers).
    AltIds(inspect::AltIdsCommand),

    /// Show the parent of an identifier.
    Parent(navigate::ParentCommand),

    /// Show how many levels one identifier lies below another.
    Distance(navigate::DistanceCommand),

    /// Derive the id of a child object.
    Child(navigate::ChildCommand),

    /// Show the label of an identifier relative to its parent.
    Label(navigate::LabelCommand),

    /// Render the content page text of an identifier.
    Page(page::PageCommand),

    /// Show the effective configuration.
    Config(config::ConfigCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self, config: Config) -> Result<()> {
        let format = OutputFormat::from_name(self.format.as_deref().unwrap_or(&config.format));
        let ctx = CommandContext { config, format };

        match self.command {
            Commands::Parse(cmd) => cmd.run(&ctx),
            Commands::Key(cmd) => cmd.run(&ctx),
            Commands::AltIds(cmd) => cmd.run(&ctx),
            Commands::Parent(cmd) => cmd.run(&ctx),
            Commands::Distance(cmd) => cmd.run(&ctx),
            Commands::Child(cmd) => cmd.run(&ctx),
            Commands::Label(cmd) => cmd.run(&ctx),
            Commands::Page(cmd) => cmd.run(&ctx),
            Commands::Config(cmd) => cmd.run(&ctx),
            Commands::Version => {
                println!("cidctl {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Context passed to all commands.
#[derive(Debug)]
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Classification to use when the command line does not force a leaf.
    pub fn node_kind(&self, leaf_flag: bool) -> NodeKind {
        NodeKind::from_leaf_flag(leaf_flag || self.config.leaf_by_default)
    }
}

/// Parse an identifier argument, keeping the reason on failure.
pub fn parse_id(input: &str) -> Result<CidId, CliError> {
    input
        .parse::<CidId>()
        .map_err(|e| CliError::invalid_id(input, e))
}
