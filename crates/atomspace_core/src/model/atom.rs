//! Atom domain model.
//!
//! # Responsibility
//! - Define the single node record shared by global/organization/project/resource atoms.
//! - Keep children segregated by kind so per-kind lookups never type-test.
//!
//! # Invariants
//! - `id` is stable and never reused for another atom.
//! - `name` and `path` are fixed at creation.
//! - `parent` is `None` only for global roots.
//! - `resource_kind` is `Some` only for resource atoms.

use crate::model::attribute::{AttributeBag, AttributeValue};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every atom in an atomspace.
pub type AtomId = Uuid;

/// Separator between path segments. Names may never contain it.
pub const PATH_SEPARATOR: char = '/';

/// Resource kind used when callers do not classify a resource.
pub const DEFAULT_RESOURCE_KIND: &str = "generic";

/// Level of an atom in the federation hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AtomKind {
    /// Root of one federation.
    Global,
    /// Tenant space under a global root.
    Organization,
    /// Workload space under an organization.
    Project,
    /// Leaf entry attachable at any container level.
    Resource,
}

impl AtomKind {
    /// Stable lowercase tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Organization => "organization",
            Self::Project => "project",
            Self::Resource => "resource",
        }
    }
}

impl Display for AtomKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node in the containment tree.
///
/// Child atoms are owned by the tree arena; this record only stores their ids,
/// one creation-ordered list per child kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    id: AtomId,
    kind: AtomKind,
    name: String,
    path: String,
    parent: Option<AtomId>,
    resource_kind: Option<String>,
    attributes: AttributeBag,
    organizations: Vec<AtomId>,
    projects: Vec<AtomId>,
    resources: Vec<AtomId>,
}

impl Atom {
    pub(crate) fn new_root(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: Uuid::new_v4(),
            kind: AtomKind::Global,
            path: name.clone(),
            name,
            parent: None,
            resource_kind: None,
            attributes: AttributeBag::new(),
            organizations: Vec::new(),
            projects: Vec::new(),
            resources: Vec::new(),
        }
    }

    /// Builds a child record whose path extends `parent`'s path.
    pub(crate) fn new_child(
        parent: &Atom,
        kind: AtomKind,
        name: impl Into<String>,
        resource_kind: Option<&str>,
    ) -> Self {
        let name = name.into();
        let resource_kind = match kind {
            AtomKind::Resource => {
                Some(resource_kind.unwrap_or(DEFAULT_RESOURCE_KIND).to_string())
            }
            _ => None,
        };
        Self {
            id: Uuid::new_v4(),
            kind,
            path: format!("{}{PATH_SEPARATOR}{name}", parent.path),
            name,
            parent: Some(parent.id),
            resource_kind,
            attributes: AttributeBag::new(),
            organizations: Vec::new(),
            projects: Vec::new(),
            resources: Vec::new(),
        }
    }

    pub fn id(&self) -> AtomId {
        self.id
    }

    pub fn kind(&self) -> AtomKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Slash-joined names from the root down to this atom.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Owning atom id. `None` for global roots.
    pub fn parent_id(&self) -> Option<AtomId> {
        self.parent
    }

    /// Free-form classification tag (host, service, database, ...).
    ///
    /// Not checked against any fixed set; `None` for non-resource atoms.
    pub fn resource_kind(&self) -> Option<&str> {
        self.resource_kind.as_deref()
    }

    pub fn is_resource(&self) -> bool {
        self.kind == AtomKind::Resource
    }

    pub fn attributes(&self) -> &AttributeBag {
        &self.attributes
    }

    pub fn get_attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// Returns the attribute value, or `default` when the key was never set.
    pub fn get_attribute_or<'a>(
        &'a self,
        key: &str,
        default: &'a AttributeValue,
    ) -> &'a AttributeValue {
        self.attributes.get(key).unwrap_or(default)
    }

    /// Direct child ids of one kind, in creation order.
    pub fn children(&self, kind: AtomKind) -> &[AtomId] {
        match kind {
            AtomKind::Organization => &self.organizations,
            AtomKind::Project => &self.projects,
            AtomKind::Resource => &self.resources,
            AtomKind::Global => &[],
        }
    }

    pub(crate) fn attributes_mut(&mut self) -> &mut AttributeBag {
        &mut self.attributes
    }

    pub(crate) fn push_child(&mut self, kind: AtomKind, id: AtomId) {
        match kind {
            AtomKind::Organization => self.organizations.push(id),
            AtomKind::Project => self.projects.push(id),
            AtomKind::Resource => self.resources.push(id),
            AtomKind::Global => {}
        }
    }
}

impl Display for Atom {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.kind, self.name)
    }
}
