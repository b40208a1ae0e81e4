//! The object-type contract a directory host consumes.
//!
//! Hosts keep one implementation per identifier scheme and call through
//! `dyn ObjectType`, so every method here is object safe and passes other
//! objects by serialized id or by trait object.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::alt_id::AltId;
use crate::identifier::{strip_parent_id, CidId};

/// Icon shown on the content page of every IPFS object.
pub const MAIN_ICON: &str = "img/main_icon.png";

/// Whether an object may have children in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Leaf,
    #[default]
    Branch,
}

impl NodeKind {
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    #[must_use]
    pub const fn from_leaf_flag(leaf: bool) -> Self {
        if leaf {
            Self::Leaf
        } else {
            Self::Branch
        }
    }
}

/// Path of the 16px tree icon for a display mode (e.g. `tree`, `root`).
#[must_use]
pub fn tree_icon_filename(mode: &str) -> String {
    format!("img/{mode}_icon16.png")
}

/// Operations the host's tree, CRUD, and storage subsystems call on an object.
pub trait ObjectType: fmt::Debug + Send + Sync {
    /// Canonical namespace tag of the object type.
    fn namespace_tag(&self) -> &'static str;

    fn type_title(&self) -> &'static str;

    fn type_title_short(&self) -> &'static str;

    fn node_id(&self, with_ns: bool) -> String;

    fn is_root(&self) -> bool;

    /// Leaf/branch classification; objects are branches unless stated.
    fn node_kind(&self) -> NodeKind {
        NodeKind::Branch
    }

    /// Serialized id one level up, if there is one.
    fn parent_id(&self) -> Option<String>;

    /// Level distance to the object with serialized id `other_id`.
    fn distance_to(&self, other_id: &str) -> Option<i64>;

    /// Serialized id of a child named `segment`.
    fn add_child(&self, segment: &str) -> String;

    /// Directory name for files attached to this object.
    fn directory_name(&self) -> String;

    fn default_title(&self) -> String;

    fn alt_ids(&self) -> Vec<AltId>;

    /// Id shown in the CRUD table of `parent`.
    fn crud_show_id(&self, parent: &dyn ObjectType) -> String {
        strip_parent_id(&self.node_id(true), &parent.node_id(true), parent.is_root())
    }

    /// Tree label: the type title at the top level, the relative id below.
    fn tree_node_name(&self, parent: Option<&dyn ObjectType>) -> String {
        match parent {
            None => self.type_title().to_string(),
            Some(parent) => self.crud_show_id(parent),
        }
    }
}

impl ObjectType for CidId {
    fn namespace_tag(&self) -> &'static str {
        crate::Namespace::CANONICAL.as_str()
    }

    fn type_title(&self) -> &'static str {
        "IPFS CID"
    }

    fn type_title_short(&self) -> &'static str {
        "CID"
    }

    fn node_id(&self, with_ns: bool) -> String {
        self.serialize(with_ns)
    }

    fn is_root(&self) -> bool {
        CidId::is_root(self)
    }

    fn parent_id(&self) -> Option<String> {
        self.parent_identifier().map(|parent| parent.to_string())
    }

    fn distance_to(&self, other_id: &str) -> Option<i64> {
        let other = CidId::parse(other_id)?;
        self.ancestor_distance(&other)
    }

    fn add_child(&self, segment: &str) -> String {
        self.derived_child_id(segment)
    }

    fn directory_name(&self) -> String {
        self.storage_key()
    }

    fn default_title(&self) -> String {
        self.display_title().to_string()
    }

    fn alt_ids(&self) -> Vec<AltId> {
        self.alternate_identifiers(self.node_kind())
    }
}
