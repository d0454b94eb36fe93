//! Moon-phase feed adapters.
//!
//! # Responsibility
//! - Decode third-party moon-phase payloads into [`MoonReading`] values.
//! - Separate feed-level failure from field-level malformation.
//!
//! # Invariants
//! - Transport is out of scope; adapters receive response bodies.
//! - Field-level malformation degrades to sentinels, never an error.
//!
//! [`MoonReading`]: crate::model::reading::MoonReading

pub mod farmsense;
