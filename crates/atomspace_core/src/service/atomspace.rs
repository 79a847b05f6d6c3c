//! AtomSpace facade: the entry point for building and querying federations.
//!
//! # Responsibility
//! - Own every global root and its containment tree.
//! - Validate names, resolve ancestor chains by name, and delegate attach and
//!   path lookup to the tree layer.
//!
//! # Invariants
//! - Root names are unique within one atomspace.
//! - Names are non-empty and never contain `/`.
//! - Every operation either fully succeeds or leaves the atomspace unchanged.
//! - Only resource atoms carry mutable attributes.

use crate::error::{AtomSpaceError, AtomSpaceResult};
use crate::model::atom::{Atom, AtomId, AtomKind, PATH_SEPARATOR};
use crate::model::attribute::AttributeValue;
use crate::tree::atom_tree::AtomTree;
use crate::tree::path_resolver::{split_path, PathResolver};
use log::debug;

/// Root name used by [`AtomSpace::with_default_global`].
pub const DEFAULT_GLOBAL_NAME: &str = "global";

/// In-memory federation of one or more independently rooted hierarchies.
///
/// Not internally synchronized. Embedders sharing one atomspace across
/// threads must wrap the whole value in a single lock.
#[derive(Debug, Default)]
pub struct AtomSpace {
    tree: AtomTree,
    roots: Vec<AtomId>,
}

impl AtomSpace {
    /// Creates an empty atomspace with no roots.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an atomspace with one root named [`DEFAULT_GLOBAL_NAME`].
    pub fn with_default_global() -> Self {
        let mut space = Self::new();
        let id = space.tree.insert_root(DEFAULT_GLOBAL_NAME);
        space.roots.push(id);
        space
    }

    /// Creates a new global root.
    pub fn create_global(&mut self, name: &str) -> AtomSpaceResult<AtomId> {
        let result = validate_name(name).and_then(|()| {
            if self.find_root(name).is_some() {
                return Err(AtomSpaceError::DuplicateName {
                    parent_path: String::new(),
                    kind: AtomKind::Global,
                    name: name.to_string(),
                });
            }
            let id = self.tree.insert_root(name);
            self.roots.push(id);
            Ok(id)
        });
        self.log_creation(AtomKind::Global, name, result)
    }

    pub fn create_organization(&mut self, global: &str, org: &str) -> AtomSpaceResult<AtomId> {
        self.create_under(AtomKind::Organization, org, None, |space| {
            space.root_id(global)
        })
    }

    pub fn create_project(
        &mut self,
        global: &str,
        org: &str,
        project: &str,
    ) -> AtomSpaceResult<AtomId> {
        self.create_under(AtomKind::Project, project, None, |space| {
            space.org_id(global, org)
        })
    }

    /// Creates a resource inside a project.
    pub fn create_resource(
        &mut self,
        global: &str,
        org: &str,
        project: &str,
        resource: &str,
        kind: &str,
    ) -> AtomSpaceResult<AtomId> {
        self.create_under(AtomKind::Resource, resource, Some(kind), |space| {
            space.project_id(global, org, project)
        })
    }

    /// Creates a resource directly under a global root.
    ///
    /// If an organization with the same name exists under this root, path
    /// lookup of `<global>/<resource>` resolves to the organization; the
    /// resource is then reachable only by id or through
    /// [`AtomSpace::list_global_resources`].
    pub fn create_global_resource(
        &mut self,
        global: &str,
        resource: &str,
        kind: &str,
    ) -> AtomSpaceResult<AtomId> {
        self.create_under(AtomKind::Resource, resource, Some(kind), |space| {
            space.root_id(global)
        })
    }

    /// Creates a resource directly under an organization.
    ///
    /// If a project with the same name exists under this organization, path
    /// lookup of `<global>/<org>/<resource>` resolves to the project; the
    /// resource is then reachable only by id or through
    /// [`AtomSpace::list_org_resources`].
    pub fn create_org_resource(
        &mut self,
        global: &str,
        org: &str,
        resource: &str,
        kind: &str,
    ) -> AtomSpaceResult<AtomId> {
        self.create_under(AtomKind::Resource, resource, Some(kind), |space| {
            space.org_id(global, org)
        })
    }

    /// Attaches an arbitrary child kind under an existing atom.
    ///
    /// Lower-level than the named `create_*` operations; federation patterns
    /// are still enforced, so e.g. a project under a global root fails with
    /// `InvalidContainment`.
    pub fn create_child(
        &mut self,
        parent_id: AtomId,
        kind: AtomKind,
        name: &str,
        resource_kind: Option<&str>,
    ) -> AtomSpaceResult<AtomId> {
        self.create_under(kind, name, resource_kind, |_| Ok(parent_id))
    }

    /// Global roots in creation order.
    pub fn list_globals(&self) -> Vec<&Atom> {
        self.roots
            .iter()
            .filter_map(|root_id| self.tree.get(*root_id))
            .collect()
    }

    pub fn list_organizations(&self, global: &str) -> AtomSpaceResult<Vec<&Atom>> {
        let root = self.root_id(global)?;
        Ok(self.tree.child_atoms(root, AtomKind::Organization))
    }

    pub fn list_projects(&self, global: &str, org: &str) -> AtomSpaceResult<Vec<&Atom>> {
        let org = self.org_id(global, org)?;
        Ok(self.tree.child_atoms(org, AtomKind::Project))
    }

    /// Resources attached to one project.
    pub fn list_resources(
        &self,
        global: &str,
        org: &str,
        project: &str,
    ) -> AtomSpaceResult<Vec<&Atom>> {
        let project = self.project_id(global, org, project)?;
        Ok(self.tree.child_atoms(project, AtomKind::Resource))
    }

    pub fn list_global_resources(&self, global: &str) -> AtomSpaceResult<Vec<&Atom>> {
        let root = self.root_id(global)?;
        Ok(self.tree.child_atoms(root, AtomKind::Resource))
    }

    pub fn list_org_resources(&self, global: &str, org: &str) -> AtomSpaceResult<Vec<&Atom>> {
        let org = self.org_id(global, org)?;
        Ok(self.tree.child_atoms(org, AtomKind::Resource))
    }

    /// Returns the global root with this name, if any.
    pub fn get_global(&self, name: &str) -> Option<&Atom> {
        self.find_root(name).and_then(|id| self.tree.get(id))
    }

    pub fn get_atom(&self, id: AtomId) -> Option<&Atom> {
        self.tree.get(id)
    }

    /// Same as [`AtomSpace::get_atom`]; absent ids yield `None`.
    pub fn get_atom_by_id(&self, id: AtomId) -> Option<&Atom> {
        self.get_atom(id)
    }

    /// Resolves a full path. The first segment selects the global root.
    pub fn get_atom_by_path(&self, path: &str) -> AtomSpaceResult<&Atom> {
        let root_name = split_path(path).first().copied().unwrap_or_default();
        let root = self.root_id(root_name)?;
        let id = PathResolver::new(&self.tree).resolve(root, path)?;
        self.tree.get(id).ok_or(AtomSpaceError::AtomNotFound(id))
    }

    /// Slash-joined path of an atom.
    pub fn path_of(&self, id: AtomId) -> AtomSpaceResult<&str> {
        self.atom(id).map(Atom::path)
    }

    /// Owning atom of `id`. `None` for global roots.
    pub fn parent_of(&self, id: AtomId) -> AtomSpaceResult<Option<&Atom>> {
        let atom = self.atom(id)?;
        Ok(atom.parent_id().and_then(|parent| self.tree.get(parent)))
    }

    /// Creates or overwrites one attribute on a resource.
    pub fn set_attribute(
        &mut self,
        resource_id: AtomId,
        key: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> AtomSpaceResult<()> {
        let atom = self
            .tree
            .get_mut(resource_id)
            .ok_or(AtomSpaceError::AtomNotFound(resource_id))?;
        if !atom.is_resource() {
            return Err(AtomSpaceError::NotAResource(resource_id));
        }
        atom.attributes_mut().set(key, value);
        Ok(())
    }

    /// Reads one resource attribute. A key that was never set yields `Ok(None)`.
    pub fn get_attribute(
        &self,
        resource_id: AtomId,
        key: &str,
    ) -> AtomSpaceResult<Option<&AttributeValue>> {
        let atom = self.atom(resource_id)?;
        if !atom.is_resource() {
            return Err(AtomSpaceError::NotAResource(resource_id));
        }
        Ok(atom.get_attribute(key))
    }

    /// Number of atoms across all roots.
    pub fn atom_count(&self) -> usize {
        self.tree.len()
    }

    pub(crate) fn tree(&self) -> &AtomTree {
        &self.tree
    }

    pub(crate) fn atom(&self, id: AtomId) -> AtomSpaceResult<&Atom> {
        self.tree.get(id).ok_or(AtomSpaceError::AtomNotFound(id))
    }

    pub(crate) fn root_id(&self, global: &str) -> AtomSpaceResult<AtomId> {
        self.find_root(global)
            .ok_or_else(|| AtomSpaceError::no_such_root(global))
    }

    fn find_root(&self, name: &str) -> Option<AtomId> {
        self.roots.iter().copied().find(|root_id| {
            self.tree
                .get(*root_id)
                .is_some_and(|root| root.name() == name)
        })
    }

    fn org_id(&self, global: &str, org: &str) -> AtomSpaceResult<AtomId> {
        let root = self.root_id(global)?;
        self.named_child(root, AtomKind::Organization, org)
    }

    fn project_id(&self, global: &str, org: &str, project: &str) -> AtomSpaceResult<AtomId> {
        let org = self.org_id(global, org)?;
        self.named_child(org, AtomKind::Project, project)
    }

    fn named_child(&self, parent: AtomId, kind: AtomKind, name: &str) -> AtomSpaceResult<AtomId> {
        self.tree.find_child(parent, kind, name).ok_or_else(|| {
            let walked = self.tree.get(parent).map(Atom::path).unwrap_or_default();
            AtomSpaceError::missing_segment(name, walked)
        })
    }

    /// Validates `name`, resolves the parent, then attaches. Logs either outcome.
    fn create_under<F>(
        &mut self,
        kind: AtomKind,
        name: &str,
        resource_kind: Option<&str>,
        resolve_parent: F,
    ) -> AtomSpaceResult<AtomId>
    where
        F: FnOnce(&Self) -> AtomSpaceResult<AtomId>,
    {
        let result = match validate_name(name).and_then(|()| resolve_parent(self)) {
            Ok(parent) => self.tree.attach_child(parent, kind, name, resource_kind),
            Err(err) => Err(err),
        };
        self.log_creation(kind, name, result)
    }

    fn log_creation(
        &self,
        kind: AtomKind,
        name: &str,
        result: AtomSpaceResult<AtomId>,
    ) -> AtomSpaceResult<AtomId> {
        match &result {
            Ok(id) => debug!(
                "event=atom_created module=atomspace status=ok kind={} path={}",
                kind,
                self.tree.get(*id).map(Atom::path).unwrap_or(name)
            ),
            Err(err) => debug!(
                "event=atom_created module=atomspace status=error kind={} name={} error={}",
                kind, name, err
            ),
        }
        result
    }
}

/// Rejects empty names and names containing the path separator.
pub fn validate_name(name: &str) -> AtomSpaceResult<()> {
    if name.is_empty() {
        return Err(AtomSpaceError::InvalidName {
            name: name.to_string(),
            reason: "name must not be empty",
        });
    }
    if name.contains(PATH_SEPARATOR) {
        return Err(AtomSpaceError::InvalidName {
            name: name.to_string(),
            reason: "name must not contain `/`",
        });
    }
    Ok(())
}
