use std::fmt;
use thiserror::Error;

/// A specialized `Result` type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors returned by the [`AttributeRegistry`](super::AttributeRegistry).
///
/// A failed registration leaves the registry exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RegistryError {
    /// A group with the same id is already registered.
    #[error("attribute group `{0}` is already registered")]
    DuplicateGroup(String),

    /// An attribute id collides with one that is already registered, possibly
    /// in another group.
    #[error("attribute `{id}` of group `{group}` is already registered by group `{existing_group}`")]
    DuplicateAttribute {
        /// The colliding attribute id.
        id: String,
        /// The group being registered.
        group: String,
        /// The group that already owns the id.
        existing_group: String,
    },

    /// Lookup of an unknown group or attribute id.
    #[error("{kind} `{id}` is not registered")]
    NotFound {
        /// What was looked up.
        kind: LookupKind,
        /// The id that was looked up.
        id: String,
    },

    /// A non-empty mime type hint matched none of the known mime types.
    #[error("unknown mime type `{0}`")]
    UnknownMimeType(String),

    /// The group cannot be registered as it stands.
    #[error("invalid attribute group `{group}`: {reason}")]
    InvalidGroup {
        /// The offending group id.
        group: String,
        /// Why the group was rejected.
        reason: &'static str,
    },

    /// A descriptor of the group is malformed.
    #[error("invalid attribute `{id}` in group `{group}`: {reason}")]
    InvalidDescriptor {
        /// The offending attribute id.
        id: String,
        /// The group being registered.
        group: String,
        /// Why the descriptor was rejected.
        reason: &'static str,
    },
}

impl RegistryError {
    pub(crate) fn group_not_found(id: impl Into<String>) -> Self {
        RegistryError::NotFound {
            kind: LookupKind::Group,
            id: id.into(),
        }
    }

    pub(crate) fn attribute_not_found(id: impl Into<String>) -> Self {
        RegistryError::NotFound {
            kind: LookupKind::Attribute,
            id: id.into(),
        }
    }
}

/// The kind of entry a failed lookup was searching for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    /// An attribute group.
    Group,
    /// An attribute descriptor.
    Attribute,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKind::Group => f.write_str("attribute group"),
            LookupKind::Attribute => f.write_str("attribute"),
        }
    }
}
