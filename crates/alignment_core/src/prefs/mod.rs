//! Hemisphere preference persistence.
//!
//! # Responsibility
//! - Open and migrate the SQLite preference database.
//! - Store the single user preference: the selected hemisphere.
//! - Apply the stored → geolocated → default fallback chain.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - Preference reads happen only after migrations succeed.

use crate::model::query::ParseHemisphereError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod hemisphere;
pub mod migrations;
mod open;
pub mod store;

pub use open::{open_prefs_db, open_prefs_db_in_memory};

pub type PrefResult<T> = Result<T, PrefError>;

#[derive(Debug)]
pub enum PrefError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    /// Stored value could not be decoded.
    InvalidValue {
        key: String,
        source: ParseHemisphereError,
    },
}

impl Display for PrefError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "preference schema version {db_version} is newer than supported {latest_supported}"
            ),
            Self::InvalidValue { key, source } => {
                write!(f, "stored preference `{key}` is invalid: {source}")
            }
        }
    }
}

impl Error for PrefError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
            Self::InvalidValue { source, .. } => Some(source),
        }
    }
}

impl From<rusqlite::Error> for PrefError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
