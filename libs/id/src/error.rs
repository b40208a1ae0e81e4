//! Error types for identifier parsing and page assembly.

use thiserror::Error;

/// Errors that can occur when parsing identifiers or talking to host ports.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The identifier string is empty.
    #[error("identifier cannot be empty")]
    Empty,

    /// The identifier has no `:` between namespace and path.
    #[error("identifier missing ':' separator")]
    MissingSeparator,

    /// The namespace tag is not one this object type handles.
    #[error("unknown namespace '{actual}': expected one of ipfs, ipns, dnslink")]
    UnknownNamespace { actual: String },

    /// The host's object query port failed.
    #[error("object query failed: {message}")]
    Query { message: String },
}

impl IdError {
    /// Creates a query error from any displayable cause.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Returns true if this error indicates the input was empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, IdError::Empty)
    }

    /// Returns true if the input belongs to some other object type.
    ///
    /// Dispatchers use this to move on to the next registered type.
    pub fn is_foreign(&self) -> bool {
        matches!(
            self,
            IdError::MissingSeparator | IdError::UnknownNamespace { .. }
        )
    }
}
