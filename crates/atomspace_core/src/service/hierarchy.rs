//! Serializable hierarchy snapshots and full-root resource walks.
//!
//! # Invariants
//! - Snapshot ordering mirrors creation order at every level.
//! - Walk order: global-level resources, then per organization its own
//!   resources followed by each project's resources.

use crate::error::AtomSpaceResult;
use crate::model::atom::{Atom, AtomId, AtomKind, DEFAULT_RESOURCE_KIND};
use crate::service::atomspace::AtomSpace;
use serde::{Deserialize, Serialize};

/// Nested snapshot of one global root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyInfo {
    pub global: GlobalInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalInfo {
    pub name: String,
    pub resources: Vec<ResourceInfo>,
    pub organizations: Vec<OrganizationInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationInfo {
    pub name: String,
    pub resources: Vec<ResourceInfo>,
    pub projects: Vec<ProjectInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub name: String,
    pub resources: Vec<ResourceInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceInfo {
    pub name: String,
    /// Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub resource_kind: String,
}

impl ResourceInfo {
    fn from_atom(atom: &Atom) -> Self {
        Self {
            name: atom.name().to_string(),
            resource_kind: atom
                .resource_kind()
                .unwrap_or(DEFAULT_RESOURCE_KIND)
                .to_string(),
        }
    }
}

impl AtomSpace {
    /// Builds a nested snapshot of one global root.
    pub fn hierarchy_info(&self, global: &str) -> AtomSpaceResult<HierarchyInfo> {
        let root_id = self.root_id(global)?;
        let root = self.atom(root_id)?;

        let organizations = self
            .tree()
            .child_atoms(root_id, AtomKind::Organization)
            .into_iter()
            .map(|org| OrganizationInfo {
                name: org.name().to_string(),
                resources: self.resource_infos(org.id()),
                projects: self
                    .tree()
                    .child_atoms(org.id(), AtomKind::Project)
                    .into_iter()
                    .map(|project| ProjectInfo {
                        name: project.name().to_string(),
                        resources: self.resource_infos(project.id()),
                    })
                    .collect(),
            })
            .collect();

        Ok(HierarchyInfo {
            global: GlobalInfo {
                name: root.name().to_string(),
                resources: self.resource_infos(root_id),
                organizations,
            },
        })
    }

    /// Every resource under one global root, at all three levels.
    pub fn walk_resources(&self, global: &str) -> AtomSpaceResult<Vec<&Atom>> {
        let root_id = self.root_id(global)?;
        let tree = self.tree();

        let mut resources = tree.child_atoms(root_id, AtomKind::Resource);
        for org in tree.child_atoms(root_id, AtomKind::Organization) {
            resources.extend(tree.child_atoms(org.id(), AtomKind::Resource));
            for project in tree.child_atoms(org.id(), AtomKind::Project) {
                resources.extend(tree.child_atoms(project.id(), AtomKind::Resource));
            }
        }
        Ok(resources)
    }

    fn resource_infos(&self, parent: AtomId) -> Vec<ResourceInfo> {
        self.tree()
            .child_atoms(parent, AtomKind::Resource)
            .into_iter()
            .map(ResourceInfo::from_atom)
            .collect()
    }
}
