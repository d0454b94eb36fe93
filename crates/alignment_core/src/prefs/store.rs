//! Key/value preference storage contracts and SQLite implementation.

use super::PrefResult;
use rusqlite::{params, Connection, OptionalExtension};

/// Minimal key/value persistence used by preference services.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> PrefResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> PrefResult<()>;
    fn remove(&self, key: &str) -> PrefResult<()>;
}

/// SQLite-backed preference store over a migrated connection.
pub struct SqlitePreferenceStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePreferenceStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PreferenceStore for SqlitePreferenceStore<'_> {
    fn get(&self, key: &str) -> PrefResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1;",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> PrefResult<()> {
        self.conn.execute(
            "INSERT INTO preferences (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = CAST(strftime('%s', 'now') AS INTEGER);",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> PrefResult<()> {
        self.conn
            .execute("DELETE FROM preferences WHERE key = ?1;", params![key])?;
        Ok(())
    }
}
