//! Commands that describe a single identifier.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use cidtree_id::AltId;

use crate::output::{print_fields, print_output, print_value, Field};

use super::{parse_id, CommandContext};

/// Show the components of an identifier.
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Identifier, e.g. `ipfs:/ipfs/<cid>`.
    id: String,
}

impl ParseCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let id = parse_id(&self.id)?;

        let fields = [
            Field::new("id", id.to_string()),
            Field::new("namespace", id.namespace().as_str()),
            Field::new("path", id.path()),
            Field::new("root", id.is_root().to_string()),
            Field::new("title", id.display_title()),
            Field::new("storage_key", id.storage_key()),
        ];
        print_fields(&fields, ctx.format);

        Ok(())
    }
}

/// Show the storage directory key of an identifier.
#[derive(Debug, Args)]
pub struct KeyCommand {
    id: String,
}

impl KeyCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let key = parse_id(&self.id)?.storage_key();
        print_value(&key, &serde_json::json!({ "storage_key": key }), ctx.format);
        Ok(())
    }
}

/// List alternate identifiers.
#[derive(Debug, Args)]
pub struct AltIdsCommand {
    id: String,

    /// Treat the object as a leaf (only leaves carry alternate ids).
    #[arg(long)]
    leaf: bool,
}

#[derive(Debug, Serialize, Tabled)]
struct AltIdRow {
    kind: String,
    value: String,
    description: String,
}

impl From<&AltId> for AltIdRow {
    fn from(alt: &AltId) -> Self {
        Self {
            kind: alt.kind().to_string(),
            value: alt.value().to_string(),
            description: alt.description().to_string(),
        }
    }
}

impl AltIdsCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let id = parse_id(&self.id)?;
        let kind = ctx.node_kind(self.leaf);

        let rows: Vec<AltIdRow> = id
            .alternate_identifiers(kind)
            .iter()
            .map(AltIdRow::from)
            .collect();

        tracing::debug!(id = %id, ?kind, count = rows.len(), "listed alternate ids");
        print_output(&rows, ctx.format);

        Ok(())
    }
}
