//! Error taxonomy for atomspace operations.
//!
//! # Responsibility
//! - Provide one semantic error type for creation, listing and lookup.
//! - Keep failure kinds distinguishable for callers and tests.
//!
//! # Invariants
//! - Every fallible operation fails fast with exactly one variant.
//! - A failed operation leaves the tree unchanged.

use crate::model::atom::{AtomId, AtomKind};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type used by atomspace operations.
pub type AtomSpaceResult<T> = Result<T, AtomSpaceError>;

/// Errors from atomspace creation, listing and lookup operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtomSpaceError {
    /// Name is empty or contains the path separator.
    InvalidName { name: String, reason: &'static str },
    /// A sibling of the same kind already holds this name.
    DuplicateName {
        /// Path of the intended parent. Empty for root-level collisions.
        parent_path: String,
        kind: AtomKind,
        name: String,
    },
    /// Federation patterns forbid this parent/child pair.
    InvalidContainment {
        parent_kind: AtomKind,
        child_kind: AtomKind,
    },
    /// A named ancestor or path segment does not exist.
    NotFound {
        /// Segment that could not be resolved.
        segment: String,
        /// Path resolved before the failing segment. Empty when the root is missing.
        walked: String,
    },
    /// No atom is registered under this id.
    AtomNotFound(AtomId),
    /// Attribute access on an atom that is not a resource.
    NotAResource(AtomId),
    /// Resource query pattern failed to compile.
    InvalidQuery { pattern: String, message: String },
}

impl AtomSpaceError {
    pub(crate) fn no_such_root(name: &str) -> Self {
        Self::NotFound {
            segment: name.to_string(),
            walked: String::new(),
        }
    }

    pub(crate) fn missing_segment(segment: &str, walked: &str) -> Self {
        Self::NotFound {
            segment: segment.to_string(),
            walked: walked.to_string(),
        }
    }

    /// Returns whether this error reports a missing atom, by path or by id.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::AtomNotFound(_))
    }
}

impl Display for AtomSpaceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName { name, reason } => write!(f, "invalid name `{name}`: {reason}"),
            Self::DuplicateName {
                parent_path,
                kind,
                name,
            } => {
                if parent_path.is_empty() {
                    write!(f, "duplicate {kind} name `{name}`")
                } else {
                    write!(f, "duplicate {kind} name `{name}` under `{parent_path}`")
                }
            }
            Self::InvalidContainment {
                parent_kind,
                child_kind,
            } => write!(f, "{parent_kind} cannot contain {child_kind}"),
            Self::NotFound { segment, walked } => {
                if walked.is_empty() {
                    write!(f, "no such root `{segment}`")
                } else {
                    write!(f, "`{segment}` not found under `{walked}`")
                }
            }
            Self::AtomNotFound(id) => write!(f, "atom not found: {id}"),
            Self::NotAResource(id) => write!(f, "atom is not a resource: {id}"),
            Self::InvalidQuery { pattern, message } => {
                write!(f, "invalid name pattern `{pattern}`: {message}")
            }
        }
    }
}

impl Error for AtomSpaceError {}

#[cfg(test)]
mod tests {
    use super::AtomSpaceError;
    use crate::model::atom::AtomKind;

    #[test]
    fn not_found_message_distinguishes_missing_root() {
        let root = AtomSpaceError::no_such_root("nowhere");
        assert_eq!(root.to_string(), "no such root `nowhere`");

        let segment = AtomSpaceError::missing_segment("ghost", "global/acme");
        assert_eq!(segment.to_string(), "`ghost` not found under `global/acme`");
        assert!(segment.is_not_found());
    }

    #[test]
    fn containment_message_names_both_kinds() {
        let err = AtomSpaceError::InvalidContainment {
            parent_kind: AtomKind::Global,
            child_kind: AtomKind::Project,
        };
        assert_eq!(err.to_string(), "global cannot contain project");
        assert!(!err.is_not_found());
    }
}
