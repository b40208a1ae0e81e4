//! Error handling and display for the CLI.

use cidtree_id::IdError;
use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid identifier '{input}': {source}")]
    InvalidId {
        input: String,
        #[source]
        source: IdError,
    },

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl CliError {
    pub fn invalid_id(input: impl Into<String>, source: IdError) -> Self {
        Self::InvalidId {
            input: input.into(),
            source,
        }
    }
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(CliError::InvalidId { source, .. }) = err.downcast_ref::<CliError>() {
        if source.is_foreign() {
            eprintln!(
                "\n{}",
                "Hint: identifiers look like `ipfs:/ipfs/<cid>`; namespaces are ipfs, ipns, dnslink."
                    .yellow()
            );
        }
    }
}
