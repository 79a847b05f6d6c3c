//! Core addressing and containment engine for AtomSpace federations.
//! This crate is the single source of truth for hierarchy invariants.

pub mod error;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod tree;

pub use error::{AtomSpaceError, AtomSpaceResult};
pub use logging::{
    default_log_level, init_logging, logging_status, LoggingConfig, LoggingError,
};
pub use model::atom::{Atom, AtomId, AtomKind, DEFAULT_RESOURCE_KIND, PATH_SEPARATOR};
pub use model::attribute::{AttributeBag, AttributeValue};
pub use model::federation::{allowed_children, federation_pattern, may_contain};
pub use search::resource_query::ResourceQuery;
pub use service::atomspace::{validate_name, AtomSpace, DEFAULT_GLOBAL_NAME};
pub use service::hierarchy::{
    GlobalInfo, HierarchyInfo, OrganizationInfo, ProjectInfo, ResourceInfo,
};
pub use tree::atom_tree::AtomTree;
pub use tree::path_resolver::{split_path, PathResolver};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
