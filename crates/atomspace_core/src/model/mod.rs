//! Atom domain model for the federation hierarchy.
//!
//! # Responsibility
//! - Define the canonical atom record used by every hierarchy level.
//! - Encode the federation patterns consulted on every creation.
//!
//! # Invariants
//! - Every atom is identified by a stable `AtomId`.
//! - Atoms are never deleted; the tree only grows.

pub mod atom;
pub mod attribute;
pub mod federation;
