//! Alignment resolvers and the engine that composes them.
//!
//! # Responsibility
//! - Derive each displayed attribute from a query, a reading and the tables.
//! - Keep every resolver pure: no I/O, no clock reads, no shared state.
//!
//! # Invariants
//! - Resolution is total; missing lookups surface as sentinels, never errors.

pub mod engine;
pub mod events;
pub mod festival;
pub mod season;
pub mod zodiac;
