//! Commands that move through the identifier hierarchy.

use anyhow::Result;
use clap::Args;

use crate::output::print_value;

use super::{parse_id, CommandContext};

/// Placeholder printed when a relation does not exist.
const NONE: &str = "-";

/// Show the parent of an identifier.
#[derive(Debug, Args)]
pub struct ParentCommand {
    id: String,
}

impl ParentCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let parent = parse_id(&self.id)?.parent_identifier();

        let text = parent
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| NONE.to_string());
        print_value(&text, &serde_json::json!({ "parent": parent }), ctx.format);

        Ok(())
    }
}

/// Show how many levels `to` lies below `from` (negative when above).
#[derive(Debug, Args)]
pub struct DistanceCommand {
    from: String,
    to: String,
}

impl DistanceCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let from = parse_id(&self.from)?;
        let to = parse_id(&self.to)?;
        let distance = from.ancestor_distance(&to);

        let text = distance.map_or_else(|| NONE.to_string(), |d| d.to_string());
        print_value(&text, &serde_json::json!({ "distance": distance }), ctx.format);

        Ok(())
    }
}

/// Derive the id of a child object.
#[derive(Debug, Args)]
pub struct ChildCommand {
    id: String,

    /// Name of the child below `id`.
    segment: String,
}

impl ChildCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let child = parse_id(&self.id)?.derived_child_id(&self.segment);
        print_value(&child, &serde_json::json!({ "child": child }), ctx.format);
        Ok(())
    }
}

/// Show the label of an identifier relative to a parent.
#[derive(Debug, Args)]
pub struct LabelCommand {
    id: String,

    /// Ancestor the label is relative to.
    parent: String,
}

impl LabelCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let id = parse_id(&self.id)?;
        let parent = parse_id(&self.parent)?;

        if !id.to_string().starts_with(&parent.to_string()) {
            tracing::warn!(id = %id, parent = %parent, "parent is not a prefix of id");
        }

        let label = id.relative_label(&parent);
        print_value(&label, &serde_json::json!({ "label": label }), ctx.format);

        Ok(())
    }
}
