//! Content page text for IPFS objects.
//!
//! The host fills `%%DESC%%` and `%%CRUD%%` with the object description and
//! the child table. Everything this module needs from the host (child
//! lookups, permissions, icon files) is passed in through [`Ports`].

use serde::Serialize;
use tracing::debug;

use crate::identifier::CidId;
use crate::object::{NodeKind, ObjectType, MAIN_ICON};
use crate::IdError;

/// Placeholder replaced by the host with the object description.
pub const DESC_PLACEHOLDER: &str = "%%DESC%%";

/// Placeholder replaced by the host with the child CRUD table.
pub const CRUD_PLACEHOLDER: &str = "%%CRUD%%";

/// Child lookups against the host's object store.
pub trait ObjectQuery {
    /// Whether any object is registered with `parent_id` as its parent.
    fn has_children(&self, parent_id: &str) -> Result<bool, IdError>;
}

/// Permission checks against the host's session.
pub trait AccessCheck {
    fn is_admin_logged_in(&self) -> bool;

    fn has_write_rights(&self, id: &CidId) -> bool;
}

/// Resolves plugin-relative asset paths to URLs.
pub trait IconLocator {
    /// Web path of `relative` if the asset exists.
    fn locate(&self, relative: &str) -> Option<String>;
}

/// Host collaborators needed to assemble a page.
#[derive(Clone, Copy)]
pub struct Ports<'a> {
    pub query: &'a dyn ObjectQuery,
    pub access: &'a dyn AccessCheck,
    pub icons: &'a dyn IconLocator,
}

/// Title, HTML body, and icon of an object's content page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentPage {
    pub title: String,
    pub content: String,
    pub icon: Option<String>,
}

/// Builds the content page of `id`.
///
/// `title` is the object's stored title; when empty, the last path segment
/// is used instead.
pub fn content_page(
    id: &CidId,
    kind: NodeKind,
    title: &str,
    ports: Ports<'_>,
) -> Result<ContentPage, IdError> {
    let icon = ports.icons.locate(MAIN_ICON);

    let (title, mut content, heading) = if id.is_root() {
        let has_children = ports.query.has_children(&id.serialize(true))?;
        let intro = if has_children {
            "Please select an object in the tree view at the left to show its contents."
        } else {
            "Currently, no IPFS objects are registered in the system."
        };
        let heading = if ports.access.is_admin_logged_in() {
            "Manage root objects"
        } else {
            "Available objects"
        };
        (id.type_title().to_string(), intro.to_string(), heading)
    } else {
        let title = if title.is_empty() {
            id.display_title().to_string()
        } else {
            title.to_string()
        };
        let heading = if ports.access.has_write_rights(id) {
            "Create or change subsequent objects"
        } else {
            "Subsequent objects"
        };
        (title, format!("<h2>Description</h2>{DESC_PLACEHOLDER}"), heading)
    };

    if !kind.is_leaf() {
        content.push_str(&format!("<h2>{heading}</h2>{CRUD_PLACEHOLDER}"));
    }

    debug!(id = %id, ?kind, "assembled content page");

    Ok(ContentPage {
        title,
        content,
        icon,
    })
}
