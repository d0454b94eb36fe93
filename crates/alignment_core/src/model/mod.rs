//! Domain model for alignment queries, readings and results.
//!
//! # Responsibility
//! - Define the typed inputs consumed by the resolution engine.
//! - Define table entry shapes shared by the loader and the resolvers.
//! - Define the aggregate result handed back to callers.
//!
//! # Invariants
//! - Every model value is plain data; nothing here performs I/O.
//! - Sentinel text for missing lookups is always [`UNKNOWN`].

pub mod entry;
pub mod query;
pub mod reading;
pub mod result;
pub mod season;

/// Sentinel rendered for every lookup that has no configured answer.
pub const UNKNOWN: &str = "Unknown";
