//! Alternate identifiers published next to an object.

use serde::{Deserialize, Serialize};

use crate::namespace::Namespace;

/// Kind tag for DNSLink pointers.
pub const DNSLINK_KIND: &str = "dnslink";

/// Human-readable description attached to DNSLink pointers.
pub const DNSLINK_DESCRIPTION: &str = "DNSLink (uses DNS TXT records)";

/// An alternate representation of an object identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AltId {
    kind: String,
    value: String,
    description: String,
}

impl AltId {
    pub fn new(
        kind: impl Into<String>,
        value: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
            description: description.into(),
        }
    }

    /// A DNS TXT record value of the form `dnslink=/{namespace}/{cid}`.
    pub fn dnslink(namespace: Namespace, cid: &str) -> Self {
        Self::new(
            DNSLINK_KIND,
            format!("dnslink=/{namespace}/{cid}"),
            DNSLINK_DESCRIPTION,
        )
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
