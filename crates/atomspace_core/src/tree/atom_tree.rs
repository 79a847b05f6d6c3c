//! Id-keyed arena holding every atom of an atomspace.
//!
//! # Responsibility
//! - Own all atoms top-down; parent links are ids, never owning references.
//! - Enforce federation patterns and sibling-name uniqueness on attach.
//!
//! # Invariants
//! - Child listing order equals creation order per (parent, kind).
//! - A failed attach leaves the arena unchanged.

use crate::error::{AtomSpaceError, AtomSpaceResult};
use crate::model::atom::{Atom, AtomId, AtomKind};
use crate::model::federation::may_contain;
use std::collections::HashMap;

/// Arena storage for atoms of one or more roots.
#[derive(Debug, Default)]
pub struct AtomTree {
    atoms: HashMap<AtomId, Atom>,
}

impl AtomTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a parentless global atom and returns its id.
    ///
    /// Root-name uniqueness is the caller's concern; the arena keys by id.
    pub fn insert_root(&mut self, name: impl Into<String>) -> AtomId {
        let root = Atom::new_root(name);
        let id = root.id();
        self.atoms.insert(id, root);
        id
    }

    /// Creates and links one child under `parent_id`.
    ///
    /// # Errors
    /// - `AtomNotFound` when `parent_id` is not in this arena.
    /// - `InvalidContainment` when the federation patterns forbid the pair.
    /// - `DuplicateName` when a same-kind sibling already uses `name`.
    pub fn attach_child(
        &mut self,
        parent_id: AtomId,
        kind: AtomKind,
        name: &str,
        resource_kind: Option<&str>,
    ) -> AtomSpaceResult<AtomId> {
        let parent = self
            .atoms
            .get(&parent_id)
            .ok_or(AtomSpaceError::AtomNotFound(parent_id))?;
        if !may_contain(parent.kind(), kind) {
            return Err(AtomSpaceError::InvalidContainment {
                parent_kind: parent.kind(),
                child_kind: kind,
            });
        }
        if self.find_child(parent_id, kind, name).is_some() {
            return Err(AtomSpaceError::DuplicateName {
                parent_path: parent.path().to_string(),
                kind,
                name: name.to_string(),
            });
        }

        let child = Atom::new_child(parent, kind, name, resource_kind);
        let child_id = child.id();
        self.atoms.insert(child_id, child);
        if let Some(parent) = self.atoms.get_mut(&parent_id) {
            parent.push_child(kind, child_id);
        }
        Ok(child_id)
    }

    pub fn get(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: AtomId) -> Option<&mut Atom> {
        self.atoms.get_mut(&id)
    }

    /// Looks up one child by kind and name. Absent is `None`, not an error.
    pub fn find_child(&self, parent_id: AtomId, kind: AtomKind, name: &str) -> Option<AtomId> {
        self.children(parent_id, kind)
            .iter()
            .copied()
            .find(|child_id| {
                self.atoms
                    .get(child_id)
                    .is_some_and(|child| child.name() == name)
            })
    }

    /// Child ids of one kind in creation order. Empty for unknown parents.
    pub fn children(&self, parent_id: AtomId, kind: AtomKind) -> &[AtomId] {
        self.atoms
            .get(&parent_id)
            .map(|parent| parent.children(kind))
            .unwrap_or(&[])
    }

    /// Child atoms of one kind in creation order.
    pub fn child_atoms(&self, parent_id: AtomId, kind: AtomKind) -> Vec<&Atom> {
        self.children(parent_id, kind)
            .iter()
            .filter_map(|child_id| self.atoms.get(child_id))
            .collect()
    }

    pub fn parent(&self, id: AtomId) -> Option<AtomId> {
        self.atoms.get(&id).and_then(Atom::parent_id)
    }

    /// Atom ids from the root down to `id`, inclusive. Empty for unknown ids.
    pub fn ancestors(&self, id: AtomId) -> Vec<AtomId> {
        let mut chain = Vec::new();
        let mut cursor = self.atoms.get(&id).map(Atom::id);
        while let Some(current) = cursor {
            chain.push(current);
            cursor = self.parent(current);
        }
        chain.reverse();
        chain
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::AtomTree;
    use crate::error::AtomSpaceError;
    use crate::model::atom::AtomKind;

    #[test]
    fn attach_appends_in_creation_order() {
        let mut tree = AtomTree::new();
        let root = tree.insert_root("global");
        let a = tree
            .attach_child(root, AtomKind::Organization, "a", None)
            .unwrap();
        let b = tree
            .attach_child(root, AtomKind::Organization, "b", None)
            .unwrap();

        assert_eq!(tree.children(root, AtomKind::Organization), &[a, b]);
        assert_eq!(tree.parent(b), Some(root));
        assert_eq!(tree.ancestors(b), vec![root, b]);
    }

    #[test]
    fn same_name_is_allowed_across_kinds() {
        let mut tree = AtomTree::new();
        let root = tree.insert_root("global");
        let org = tree
            .attach_child(root, AtomKind::Organization, "shared", None)
            .unwrap();
        let res = tree
            .attach_child(root, AtomKind::Resource, "shared", Some("host"))
            .unwrap();

        assert_ne!(org, res);
        assert_eq!(tree.find_child(root, AtomKind::Organization, "shared"), Some(org));
        assert_eq!(tree.find_child(root, AtomKind::Resource, "shared"), Some(res));
    }

    #[test]
    fn duplicate_sibling_is_rejected_without_side_effects() {
        let mut tree = AtomTree::new();
        let root = tree.insert_root("global");
        tree.attach_child(root, AtomKind::Organization, "acme", None)
            .unwrap();
        let before = tree.len();

        let err = tree
            .attach_child(root, AtomKind::Organization, "acme", None)
            .unwrap_err();
        assert!(matches!(
            err,
            AtomSpaceError::DuplicateName { ref parent_path, kind: AtomKind::Organization, ref name }
                if parent_path == "global" && name == "acme"
        ));
        assert_eq!(tree.len(), before);
        assert_eq!(tree.children(root, AtomKind::Organization).len(), 1);
    }

    #[test]
    fn containment_is_checked_before_duplicates() {
        let mut tree = AtomTree::new();
        let root = tree.insert_root("global");
        let res = tree
            .attach_child(root, AtomKind::Resource, "dns", Some("service"))
            .unwrap();

        let err = tree
            .attach_child(res, AtomKind::Resource, "nested", None)
            .unwrap_err();
        assert_eq!(
            err,
            AtomSpaceError::InvalidContainment {
                parent_kind: AtomKind::Resource,
                child_kind: AtomKind::Resource,
            }
        );
    }

    #[test]
    fn unknown_parent_is_reported_by_id() {
        let mut tree = AtomTree::new();
        let ghost = uuid::Uuid::new_v4();
        let err = tree
            .attach_child(ghost, AtomKind::Organization, "acme", None)
            .unwrap_err();
        assert_eq!(err, AtomSpaceError::AtomNotFound(ghost));
        assert!(tree.ancestors(ghost).is_empty());
    }
}
