//! Resource discovery across all levels of one global root.
//!
//! # Responsibility
//! - Filter resources by kind tag, name pattern and attribute equality.
//! - Return typed atoms in walk order.
//!
//! # Invariants
//! - Filters are conjunctive; an empty query matches every resource.
//! - Queries never mutate the atomspace.

use crate::error::{AtomSpaceError, AtomSpaceResult};
use crate::model::atom::Atom;
use crate::model::attribute::AttributeValue;
use crate::service::atomspace::AtomSpace;
use regex::Regex;

/// Filter options for resource discovery.
#[derive(Debug, Clone, Default)]
pub struct ResourceQuery {
    /// Exact resource kind tag to match.
    pub kind: Option<String>,
    /// Regular expression matched against resource names.
    pub name_pattern: Option<Regex>,
    /// Attribute key/value pairs that must all be present and equal.
    pub attributes: Vec<(String, AttributeValue)>,
}

impl ResourceQuery {
    /// Creates a query that matches every resource.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Adds a name pattern.
    ///
    /// # Errors
    /// - `InvalidQuery` when `pattern` is not a valid regular expression.
    pub fn with_name_pattern(mut self, pattern: &str) -> AtomSpaceResult<Self> {
        let regex = Regex::new(pattern).map_err(|err| AtomSpaceError::InvalidQuery {
            pattern: pattern.to_string(),
            message: err.to_string(),
        })?;
        self.name_pattern = Some(regex);
        Ok(self)
    }

    pub fn with_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Returns whether one atom satisfies every filter.
    pub fn matches(&self, atom: &Atom) -> bool {
        if !atom.is_resource() {
            return false;
        }
        if let Some(kind) = &self.kind {
            if atom.resource_kind() != Some(kind.as_str()) {
                return false;
            }
        }
        if let Some(pattern) = &self.name_pattern {
            if !pattern.is_match(atom.name()) {
                return false;
            }
        }
        self.attributes
            .iter()
            .all(|(key, expected)| atom.get_attribute(key) == Some(expected))
    }
}

impl AtomSpace {
    /// Lists resources under one global root that satisfy `query`.
    pub fn find_resources(
        &self,
        global: &str,
        query: &ResourceQuery,
    ) -> AtomSpaceResult<Vec<&Atom>> {
        Ok(self
            .walk_resources(global)?
            .into_iter()
            .filter(|atom| query.matches(atom))
            .collect())
    }
}
