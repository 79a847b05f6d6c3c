//! Path resolution from slash-delimited strings to atoms.
//!
//! # Invariants
//! - Resolution is read-only and deterministic for an unchanged tree.
//! - At each level child kinds are tried in federation-pattern order and the
//!   first match wins.
//! - Trailing separators are ignored; interior empty segments never match.

use crate::error::{AtomSpaceError, AtomSpaceResult};
use crate::model::atom::{AtomId, PATH_SEPARATOR};
use crate::model::federation::allowed_children;
use crate::tree::atom_tree::AtomTree;

/// Splits a path into segments, dropping trailing separators.
///
/// Returns an empty list for an empty (or separator-only) path.
pub fn split_path(path: &str) -> Vec<&str> {
    let trimmed = path.trim_end_matches(PATH_SEPARATOR);
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split(PATH_SEPARATOR).collect()
}

/// Walks one rooted tree segment by segment.
pub struct PathResolver<'tree> {
    tree: &'tree AtomTree,
}

impl<'tree> PathResolver<'tree> {
    pub fn new(tree: &'tree AtomTree) -> Self {
        Self { tree }
    }

    /// Resolves `path` against the root `root_id`.
    ///
    /// # Errors
    /// - `NotFound` with an empty `walked` when the first segment is not the
    ///   root's name (including an empty path).
    /// - `NotFound` naming the first unresolved segment and the path walked
    ///   before it.
    pub fn resolve(&self, root_id: AtomId, path: &str) -> AtomSpaceResult<AtomId> {
        let root = self
            .tree
            .get(root_id)
            .ok_or(AtomSpaceError::AtomNotFound(root_id))?;
        let segments = split_path(path);
        let (first, rest) = match segments.split_first() {
            Some(split) => split,
            None => return Err(AtomSpaceError::no_such_root("")),
        };
        if *first != root.name() {
            return Err(AtomSpaceError::no_such_root(first));
        }

        let mut current = root;
        for segment in rest {
            let next = allowed_children(current.kind())
                .iter()
                .find_map(|kind| self.tree.find_child(current.id(), *kind, segment))
                .and_then(|child_id| self.tree.get(child_id));
            current = match next {
                Some(child) => child,
                None => return Err(AtomSpaceError::missing_segment(segment, current.path())),
            };
        }
        Ok(current.id())
    }
}
