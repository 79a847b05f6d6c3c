//! Resource discovery across federation levels.
//!
//! # Responsibility
//! - Provide filter-based lookup over resources of one global root.
//!
//! # Invariants
//! - Search is read-only and returns atoms in walk order.

pub mod resource_query;
