//! AtomSpace facade and read-side projections.
//!
//! # Responsibility
//! - Expose creation, listing and lookup entry points to callers.
//! - Keep name validation and ancestor resolution above the tree layer.

pub mod atomspace;
pub mod hierarchy;
