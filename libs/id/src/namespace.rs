//! Namespace tags understood by the IPFS object type.

use std::fmt;
use std::str::FromStr;

use crate::IdError;

/// The scheme an identifier belongs to.
///
/// `ipfs` is the canonical tag. `ipns` and `dnslink` are accepted for input
/// compatibility and kept on the parsed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Namespace {
    #[default]
    Ipfs,
    Ipns,
    Dnslink,
}

impl Namespace {
    /// The canonical namespace of this object type.
    pub const CANONICAL: Self = Self::Ipfs;

    /// Every recognized tag, canonical first.
    pub const ALL: [Self; 3] = [Self::Ipfs, Self::Ipns, Self::Dnslink];

    /// Returns the tag as written in serialized identifiers.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ipfs => "ipfs",
            Self::Ipns => "ipns",
            Self::Dnslink => "dnslink",
        }
    }

    /// Looks up a tag, returning `None` for anything unrecognized.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ns| ns.as_str() == tag)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Namespace {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| IdError::UnknownNamespace {
            actual: s.to_string(),
        })
    }
}
