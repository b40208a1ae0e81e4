//! # cidtree-id
//!
//! IPFS, IPNS, and DNSLink content identifiers as objects in a hierarchical
//! directory tree.
//!
//! ## ID Format
//!
//! Identifiers use a namespaced format: `{namespace}:{path}`
//!
//! Examples:
//! - `ipfs:` (the root of the `ipfs` namespace)
//! - `ipfs:/ipfs/QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG`
//! - `ipfs:/ipfs/QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG/readme`
//! - `ipns:/ipns/k51qzi5uqu5dlvj2baxnqndepeb86cbk3ng7n3i46uzyxzyqj2xjonzllnv0v8`
//!
//! The path after the namespace is a `/`-separated hierarchy. It is accepted
//! as-is: parsing only checks the namespace tag.
//!
//! ## Host Integration
//!
//! - [`ObjectType`] is the object-safe contract a directory host calls
//! - [`content_page`] builds page text from host-supplied [`Ports`]
//! - [`CidId::parse`] returns `None` for foreign ids so hosts can fall
//!   through to other object types

mod alt_id;
mod error;
mod identifier;
mod namespace;
mod object;
mod page;

pub use alt_id::{AltId, DNSLINK_DESCRIPTION, DNSLINK_KIND};
pub use error::IdError;
pub use identifier::CidId;
pub use namespace::Namespace;
pub use object::{tree_icon_filename, NodeKind, ObjectType, MAIN_ICON};
pub use page::{
    content_page, AccessCheck, ContentPage, IconLocator, ObjectQuery, Ports, CRUD_PLACEHOLDER,
    DESC_PLACEHOLDER,
};
