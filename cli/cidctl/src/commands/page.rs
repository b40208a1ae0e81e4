//! Content page rendering with command-line stand-ins for host services.

use anyhow::Result;
use clap::Args;

use cidtree_id::{content_page, AccessCheck, CidId, IconLocator, IdError, ObjectQuery, Ports};

use crate::output::{print_fields, Field};

use super::{parse_id, CommandContext};

/// Render the content page text of an identifier.
#[derive(Debug, Args)]
pub struct PageCommand {
    id: String,

    /// Stored title of the object.
    #[arg(long, default_value = "")]
    title: String,

    /// Treat the object as a leaf (no child table).
    #[arg(long)]
    leaf: bool,

    /// Render as a logged-in administrator.
    #[arg(long)]
    admin: bool,

    /// Render as a user with write rights on the object.
    #[arg(long)]
    writable: bool,

    /// Pretend the root has registered children.
    #[arg(long)]
    has_children: bool,

    /// Base URL for plugin assets; without it no icon is shown.
    #[arg(long)]
    asset_base: Option<String>,
}

struct Flags<'a>(&'a PageCommand);

impl ObjectQuery for Flags<'_> {
    fn has_children(&self, _parent_id: &str) -> Result<bool, IdError> {
        Ok(self.0.has_children)
    }
}

impl AccessCheck for Flags<'_> {
    fn is_admin_logged_in(&self) -> bool {
        self.0.admin
    }

    fn has_write_rights(&self, _id: &CidId) -> bool {
        self.0.admin || self.0.writable
    }
}

impl IconLocator for Flags<'_> {
    fn locate(&self, relative: &str) -> Option<String> {
        self.0
            .asset_base
            .as_ref()
            .map(|base| format!("{}/{}", base.trim_end_matches('/'), relative))
    }
}

impl PageCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let id = parse_id(&self.id)?;
        let flags = Flags(&self);
        let ports = Ports {
            query: &flags,
            access: &flags,
            icons: &flags,
        };

        let page = content_page(&id, ctx.node_kind(self.leaf), &self.title, ports)?;

        let fields = [
            Field::new("title", page.title),
            Field::new("icon", page.icon.unwrap_or_default()),
            Field::new("content", page.content),
        ];
        print_fields(&fields, ctx.format);

        Ok(())
    }
}
