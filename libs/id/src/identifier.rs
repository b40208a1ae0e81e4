//! The hierarchical content identifier value type.
//!
//! Identifiers are written `{namespace}:{path}`, where the path is a
//! slash-delimited sequence such as `/ipfs/Qm.../sub/dir`. The path is kept
//! exactly as given: no CID syntax checks are performed.

use std::fmt;
use std::str::FromStr;

use sha2::{Digest, Sha256};

use crate::alt_id::AltId;
use crate::namespace::Namespace;
use crate::object::NodeKind;
use crate::IdError;

/// Path prefixes removed from a CID when writing a DNSLink pointer.
const DNSLINK_STRIP_PREFIXES: [&str; 2] = ["/ipfs/", "/ipns/"];

/// A namespaced, slash-delimited content identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CidId {
    namespace: Namespace,
    path: String,
}

impl CidId {
    /// Creates an identifier from its parts.
    #[must_use]
    pub fn new(namespace: Namespace, path: impl Into<String>) -> Self {
        Self {
            namespace,
            path: path.into(),
        }
    }

    /// The root of a namespace (empty path).
    #[must_use]
    pub fn root(namespace: Namespace) -> Self {
        Self::new(namespace, String::new())
    }

    /// The root of this identifier's namespace.
    #[must_use]
    pub fn root_of(&self) -> Self {
        Self::root(self.namespace)
    }

    #[must_use]
    pub const fn namespace(&self) -> Namespace {
        self.namespace
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Parses `{namespace}:{path}`, returning `None` when the namespace is
    /// not one of ours so a dispatcher can try other object types.
    pub fn parse(s: &str) -> Option<Self> {
        match s.parse() {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::trace!(input = s, error = %e, "not an IPFS identifier");
                None
            }
        }
    }

    /// Formats the identifier, optionally without the namespace prefix.
    #[must_use]
    pub fn serialize(&self, with_namespace: bool) -> String {
        if with_namespace {
            format!("{}:{}", self.namespace, self.path)
        } else {
            self.path.clone()
        }
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Moves one level up the slash hierarchy.
    ///
    /// A path without any `/` is re-parsed as a serialized identifier of its
    /// own, which is how older directory trees resolved it. For ordinary
    /// CIDs and for the root this yields `None`.
    pub fn parent_identifier(&self) -> Option<Self> {
        match self.path.rfind('/') {
            None => Self::parse(&self.path),
            Some(0) => Some(Self::new(self.namespace, "/")),
            Some(idx) => Some(Self::new(self.namespace, &self.path[..idx])),
        }
    }

    /// Number of levels `other` lies below `self` (negative when above).
    ///
    /// Returns `None` when the namespaces differ or neither segment sequence
    /// is a prefix of the other.
    #[must_use]
    pub fn ancestor_distance(&self, other: &Self) -> Option<i64> {
        if self.namespace != other.namespace {
            return None;
        }

        let ours = segments(&self.path);
        let theirs = segments(&other.path);

        if ours.iter().zip(&theirs).any(|(a, b)| a != b) {
            return None;
        }

        Some(theirs.len() as i64 - ours.len() as i64)
    }

    /// Last path segment.
    ///
    /// A CID that itself contains `/` cannot be told apart from a path
    /// boundary, so only its final piece is returned.
    #[must_use]
    pub fn display_title(&self) -> &str {
        match self.path.rfind('/') {
            Some(idx) => &self.path[idx + 1..],
            None => &self.path,
        }
    }

    /// Short label for this identifier below `parent`.
    ///
    /// Callers must pass an actual ancestor; anything else produces an
    /// arbitrary (possibly empty) suffix.
    #[must_use]
    pub fn relative_label(&self, parent: &Self) -> String {
        strip_parent_id(
            &self.serialize(true),
            &parent.serialize(true),
            parent.is_root(),
        )
    }

    /// Serialized id of a child named `segment`.
    #[must_use]
    pub fn derived_child_id(&self, segment: &str) -> String {
        if self.is_root() {
            format!("{}:{}", self.namespace, segment)
        } else {
            format!("{}/{}", self.serialize(true), segment)
        }
    }

    /// Filesystem-safe directory key.
    ///
    /// The root maps to the bare namespace tag; everything else to
    /// `{namespace}_{sha256(path)}` in lowercase hex.
    #[must_use]
    pub fn storage_key(&self) -> String {
        if self.is_root() {
            return self.namespace.to_string();
        }
        let mut hasher = Sha256::new();
        hasher.update(self.path.as_bytes());
        format!("{}_{:x}", self.namespace, hasher.finalize())
    }

    /// Alternate representations of this identifier.
    ///
    /// Only non-root leaves get one: a DNSLink TXT record value pointing at
    /// the CID.
    #[must_use]
    pub fn alternate_identifiers(&self, kind: NodeKind) -> Vec<AltId> {
        if self.is_root() || !kind.is_leaf() {
            return Vec::new();
        }

        let cid = DNSLINK_STRIP_PREFIXES
            .iter()
            .find_map(|prefix| self.path.strip_prefix(*prefix))
            .unwrap_or(&self.path);

        vec![AltId::dnslink(self.namespace, cid)]
    }
}

/// Splits a path into segments after dropping one leading `/`.
fn segments(path: &str) -> Vec<&str> {
    path.strip_prefix('/').unwrap_or(path).split('/').collect()
}

/// Removes `parent_id` (and the separator after it, unless the parent is a
/// root) from the front of `id`.
pub(crate) fn strip_parent_id(id: &str, parent_id: &str, parent_is_root: bool) -> String {
    let skip = parent_id.len() + usize::from(!parent_is_root);
    id.get(skip..).unwrap_or_default().to_string()
}

impl fmt::Display for CidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for CidId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(IdError::Empty);
        }

        let Some((tag, path)) = s.split_once(':') else {
            // A bare tag such as `ipfs` names the root of that namespace.
            return Namespace::from_tag(s)
                .map(Self::root)
                .ok_or(IdError::MissingSeparator);
        };

        let namespace = tag.parse::<Namespace>()?;
        Ok(Self::new(namespace, path))
    }
}

impl serde::Serialize for CidId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for CidId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn id(s: &str) -> CidId {
        CidId::parse(s).unwrap()
    }

    #[test]
    fn test_parse_root() {
        let root = id("ipfs:");
        assert!(root.is_root());
        assert_eq!(root.namespace(), Namespace::Ipfs);
        assert_eq!(root, CidId::root(Namespace::Ipfs));
        assert_eq!(id("ipns:/ipns/k51/a").root_of(), CidId::root(Namespace::Ipns));
    }

    #[test]
    fn test_parse_unknown_namespace() {
        assert_eq!(CidId::parse("unknown:foo"), None);
        assert!(matches!(
            "oid:2.999".parse::<CidId>().unwrap_err(),
            IdError::UnknownNamespace { .. }
        ));
    }

    #[test]
    fn test_parse_aliases_keep_namespace() {
        let ipns = id("ipns:/ipns/k51qzi5uqu5dl");
        assert_eq!(ipns.namespace(), Namespace::Ipns);
        assert_eq!(ipns.serialize(true), "ipns:/ipns/k51qzi5uqu5dl");

        let dnslink = id("dnslink:example.org");
        assert_eq!(dnslink.namespace(), Namespace::Dnslink);
        assert_eq!(dnslink.path(), "example.org");
    }

    #[test]
    fn test_parse_splits_on_first_colon_only() {
        let parsed = id("ipfs:/ipfs/Qm123:extra");
        assert_eq!(parsed.path(), "/ipfs/Qm123:extra");
    }

    #[test]
    fn test_parse_without_separator() {
        assert!(id("ipfs").is_root());
        assert_eq!(CidId::parse("Qm123"), None);
        assert!(matches!(
            "Qm123".parse::<CidId>().unwrap_err(),
            IdError::MissingSeparator
        ));
        assert!("".parse::<CidId>().unwrap_err().is_empty());
    }

    #[test]
    fn test_parse_is_permissive_about_path() {
        let odd = id("ipfs://double//slashes/");
        assert_eq!(odd.path(), "//double//slashes/");
    }

    #[test]
    fn test_serialize_without_namespace() {
        let x = id("ipfs:/ipfs/Qm123");
        assert_eq!(x.serialize(false), "/ipfs/Qm123");
        assert_eq!(x.to_string(), "ipfs:/ipfs/Qm123");
    }

    #[test]
    fn test_display_title_and_parent() {
        let x = id("ipfs:/ipfs/Qm123/sub/dir");
        assert_eq!(x.display_title(), "dir");
        assert_eq!(
            x.parent_identifier().unwrap().serialize(true),
            "ipfs:/ipfs/Qm123/sub"
        );
        assert_eq!(id("ipfs:Qm123").display_title(), "Qm123");
    }

    #[test]
    fn test_parent_of_single_leading_segment() {
        let parent = id("ipns:/foo").parent_identifier().unwrap();
        assert_eq!(parent.namespace(), Namespace::Ipns);
        assert_eq!(parent.path(), "/");
    }

    #[test]
    fn test_parent_without_slash_reparses_path() {
        assert_eq!(id("ipfs:Qm123").parent_identifier(), None);
        assert_eq!(id("ipfs:").parent_identifier(), None);
        // The path is read as a serialized id in its own right.
        assert_eq!(
            id("ipfs:ipns").parent_identifier(),
            Some(CidId::root(Namespace::Ipns))
        );
    }

    #[test]
    fn test_ancestor_distance() {
        let a = id("ipfs:/ipfs/Qm123");
        let b = id("ipfs:/ipfs/Qm123/sub/dir");
        let c = id("ipfs:/ipfs/QmOther");

        assert_eq!(a.ancestor_distance(&b), Some(2));
        assert_eq!(b.ancestor_distance(&a), Some(-2));
        assert_eq!(a.ancestor_distance(&c), None);
        assert_eq!(a.ancestor_distance(&a), Some(0));
    }

    #[test]
    fn test_ancestor_distance_ignores_one_leading_slash() {
        let with = id("ipfs:/ipfs/Qm123");
        let without = id("ipfs:ipfs/Qm123/sub");
        assert_eq!(with.ancestor_distance(&without), Some(1));
    }

    #[test]
    fn test_ancestor_distance_across_namespaces() {
        let a = id("ipfs:/ipfs/Qm123");
        let b = id("ipns:/ipfs/Qm123/sub");
        assert_eq!(a.ancestor_distance(&b), None);
    }

    #[test]
    fn test_relative_label() {
        let root = id("ipfs:");
        let top = id("ipfs:/ipfs/Qm123");
        let deep = id("ipfs:/ipfs/Qm123/sub");

        assert_eq!(top.relative_label(&root), "/ipfs/Qm123");
        assert_eq!(deep.relative_label(&top), "sub");
    }

    #[test]
    fn test_relative_label_out_of_range() {
        let short = id("ipfs:/a");
        let long = id("ipfs:/a/b/c");
        assert_eq!(short.relative_label(&long), "");
    }

    #[test]
    fn test_derived_child_id() {
        assert_eq!(id("ipfs:").derived_child_id("Qm123"), "ipfs:Qm123");
        assert_eq!(
            id("ipfs:/ipfs/Qm123").derived_child_id("sub"),
            "ipfs:/ipfs/Qm123/sub"
        );
        assert_eq!(id("ipns:").derived_child_id("k51"), "ipns:k51");
    }

    #[test]
    fn test_storage_key() {
        assert_eq!(id("ipfs:").storage_key(), "ipfs");

        let a = id("ipfs:/ipfs/Qm123");
        let key = a.storage_key();
        assert_eq!(key, a.clone().storage_key());
        assert!(key.starts_with("ipfs_"));
        assert_eq!(key.len(), "ipfs_".len() + 64);
        assert!(key["ipfs_".len()..].chars().all(|c| c.is_ascii_hexdigit()));

        assert_ne!(key, id("ipfs:/ipfs/Qm124").storage_key());
    }

    #[test]
    fn test_alternate_identifiers() {
        let leaf = id("ipfs:/ipfs/Qm123");
        let alts = leaf.alternate_identifiers(NodeKind::Leaf);
        assert_eq!(alts.len(), 1);
        assert_eq!(alts[0].value(), "dnslink=/ipfs/Qm123");
        assert_eq!(alts[0].kind(), "dnslink");

        assert!(leaf.alternate_identifiers(NodeKind::Branch).is_empty());
        assert!(id("ipfs:").alternate_identifiers(NodeKind::Leaf).is_empty());
    }

    #[test]
    fn test_alternate_identifiers_strip_ipns_prefix() {
        let alts = id("ipns:/ipns/example.org").alternate_identifiers(NodeKind::Leaf);
        assert_eq!(alts[0].value(), "dnslink=/ipns/example.org");

        let bare = id("ipfs:Qm123").alternate_identifiers(NodeKind::Leaf);
        assert_eq!(bare[0].value(), "dnslink=/ipfs/Qm123");
    }

    #[test]
    fn test_json_roundtrip() {
        let x = id("ipns:/ipns/k51/sub");
        let json = serde_json::to_string(&x).unwrap();
        assert_eq!(json, "\"ipns:/ipns/k51/sub\"");
        let parsed: CidId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, x);

        assert!(serde_json::from_str::<CidId>("\"oid:1.2\"").is_err());
    }

    fn any_namespace() -> impl Strategy<Value = Namespace> {
        prop::sample::select(Namespace::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_serialize_parse_roundtrip(ns in any_namespace(), path in ".*") {
            let x = CidId::new(ns, path);
            prop_assert_eq!(CidId::parse(&x.serialize(true)), Some(x));
        }

        #[test]
        fn prop_distance_is_antisymmetric(
            base in prop::collection::vec("[a-zA-Z0-9]{1,8}", 1..4),
            extra in prop::collection::vec("[a-zA-Z0-9]{1,8}", 0..4),
        ) {
            let upper = CidId::new(Namespace::Ipfs, format!("/{}", base.join("/")));
            let mut all = base.clone();
            all.extend(extra.iter().cloned());
            let lower = CidId::new(Namespace::Ipfs, format!("/{}", all.join("/")));

            prop_assert_eq!(upper.ancestor_distance(&lower), Some(extra.len() as i64));
            prop_assert_eq!(lower.ancestor_distance(&upper), Some(-(extra.len() as i64)));
        }
    }
}
