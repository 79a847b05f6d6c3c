//! Containment tree storage and path addressing.
//!
//! # Responsibility
//! - Hold atoms in an id-keyed arena with ordered, kind-segregated children.
//! - Map slash-delimited paths to atoms.
//!
//! # Invariants
//! - The tree is acyclic: children are only ever attached to existing atoms.
//! - Every non-root atom is reachable by exactly one path.

pub mod atom_tree;
pub mod path_resolver;
