use alignment_core::prefs::hemisphere::HEMISPHERE_KEY;
use alignment_core::prefs::migrations::latest_version;
use alignment_core::{
    open_prefs_db, open_prefs_db_in_memory, Hemisphere, HemispherePreference, HemisphereSource,
    PrefError, PreferenceStore, SqlitePreferenceStore,
};
use rusqlite::Connection;

#[test]
fn in_memory_database_applies_migrations() {
    let conn = open_prefs_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'preferences');",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1);
}

#[test]
fn unset_preference_loads_as_none() {
    let conn = open_prefs_db_in_memory().unwrap();
    let preference = HemispherePreference::new(SqlitePreferenceStore::new(&conn));

    assert_eq!(preference.load().unwrap(), None);
}

#[test]
fn latitude_detection_is_used_and_persisted_when_nothing_is_stored() {
    let conn = open_prefs_db_in_memory().unwrap();
    let preference = HemispherePreference::new(SqlitePreferenceStore::new(&conn));

    let choice = preference.resolve(Some(-33.87)).unwrap();
    assert_eq!(choice.hemisphere, Hemisphere::Southern);
    assert_eq!(choice.source, HemisphereSource::Geolocation);

    let again = preference.resolve(Some(51.5)).unwrap();
    assert_eq!(again.hemisphere, Hemisphere::Southern);
    assert_eq!(again.source, HemisphereSource::Stored);
}

#[test]
fn defaults_to_northern_without_latitude() {
    let conn = open_prefs_db_in_memory().unwrap();
    let preference = HemispherePreference::new(SqlitePreferenceStore::new(&conn));

    let choice = preference.resolve(None).unwrap();
    assert_eq!(choice.hemisphere, Hemisphere::Northern);
    assert_eq!(choice.source, HemisphereSource::Default);
    assert_eq!(preference.load().unwrap(), Some(Hemisphere::Northern));
}

#[test]
fn non_finite_latitude_falls_back_to_default() {
    let conn = open_prefs_db_in_memory().unwrap();
    let preference = HemispherePreference::new(SqlitePreferenceStore::new(&conn));

    let choice = preference.resolve(Some(f64::NAN)).unwrap();
    assert_eq!(choice.source, HemisphereSource::Default);
}

#[test]
fn explicit_selection_overrides_stored_value() {
    let conn = open_prefs_db_in_memory().unwrap();
    let preference = HemispherePreference::new(SqlitePreferenceStore::new(&conn));

    preference.save(Hemisphere::Northern).unwrap();
    preference.save(Hemisphere::Southern).unwrap();

    let choice = preference.resolve(Some(40.0)).unwrap();
    assert_eq!(choice.hemisphere, Hemisphere::Southern);
    assert_eq!(choice.source, HemisphereSource::Stored);
}

#[test]
fn clear_forces_re_detection() {
    let conn = open_prefs_db_in_memory().unwrap();
    let preference = HemispherePreference::new(SqlitePreferenceStore::new(&conn));

    preference.save(Hemisphere::Southern).unwrap();
    preference.clear().unwrap();

    let choice = preference.resolve(Some(10.0)).unwrap();
    assert_eq!(choice.hemisphere, Hemisphere::Northern);
    assert_eq!(choice.source, HemisphereSource::Geolocation);
}

#[test]
fn corrupt_stored_value_is_reported_and_replaced_on_resolve() {
    let conn = open_prefs_db_in_memory().unwrap();
    let store = SqlitePreferenceStore::new(&conn);
    store.set(HEMISPHERE_KEY, "equatorial").unwrap();
    let preference = HemispherePreference::new(store);

    let err = preference.load().unwrap_err();
    assert!(matches!(err, PrefError::InvalidValue { .. }));

    let choice = preference.resolve(Some(-1.0)).unwrap();
    assert_eq!(choice.hemisphere, Hemisphere::Southern);
    assert_eq!(preference.load().unwrap(), Some(Hemisphere::Southern));
}

#[test]
fn preference_survives_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.sqlite3");

    {
        let conn = open_prefs_db(&path).unwrap();
        let preference = HemispherePreference::new(SqlitePreferenceStore::new(&conn));
        preference.save(Hemisphere::Southern).unwrap();
    }

    let conn = open_prefs_db(&path).unwrap();
    assert_eq!(schema_version(&conn), latest_version());
    let preference = HemispherePreference::new(SqlitePreferenceStore::new(&conn));
    assert_eq!(preference.load().unwrap(), Some(Hemisphere::Southern));
}

#[test]
fn newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_prefs_db(&path).unwrap_err() {
        PrefError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}
