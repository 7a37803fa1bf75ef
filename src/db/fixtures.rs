//! On-disk stores for tests.

use std::path::Path;

use rusqlite::{params, Connection};
use tempfile::TempDir;

pub const SCHEMA: &str = r#"
CREATE TABLE features (
    id INTEGER PRIMARY KEY,
    priority INTEGER,
    category TEXT NOT NULL,
    name TEXT NOT NULL,
    description TEXT,
    steps TEXT,
    passes INTEGER NOT NULL DEFAULT 0,
    in_progress INTEGER NOT NULL DEFAULT 0,
    dependencies TEXT
);
"#;

pub const PASCAL_SCHEMA: &str = r#"
CREATE TABLE Features (
    Id INTEGER PRIMARY KEY,
    Priority INTEGER,
    Category TEXT NOT NULL,
    Name TEXT NOT NULL,
    Description TEXT,
    Steps TEXT,
    Passes INTEGER NOT NULL DEFAULT 0,
    InProgress INTEGER NOT NULL DEFAULT 0,
    Dependencies TEXT
);
"#;

/// Declared types as the generated features stores use them. `JSON` and
/// `BOOLEAN` carry numeric affinity, so numeric-looking text is stored as a
/// number.
pub const AFFINITY_SCHEMA: &str = r#"
CREATE TABLE features (
    id INTEGER PRIMARY KEY,
    priority INTEGER,
    category VARCHAR(100),
    name VARCHAR(255),
    description TEXT,
    steps JSON,
    passes BOOLEAN,
    in_progress BOOLEAN,
    dependencies JSON
);
"#;

/// Creates `features.db` in a fresh temp dir with `ddl` applied and the
/// "Add button" feature (id 20) inserted.
pub fn store_with(ddl: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let conn = Connection::open(db_path(&dir)).unwrap();
    conn.execute_batch(ddl).unwrap();
    conn.execute(
        "INSERT INTO features VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![20, 2, "UI", "Add button", "...", "1. click", 1, 0, "[]"],
    )
    .unwrap();
    conn.close().unwrap();
    dir
}

pub fn store() -> TempDir {
    store_with(SCHEMA)
}

pub fn db_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("features.db")
}

/// Inserts feature 21 into an `AFFINITY_SCHEMA` store: real priority, NULL
/// category, text `passes` and an integer `dependencies`.
pub fn insert_loose_feature(path: &Path) {
    let conn = Connection::open(path).unwrap();
    conn.execute(
        "INSERT INTO features (id, priority, category, name, passes, in_progress, dependencies)
         VALUES (21, '2.5', NULL, 'Loose', 'true', 0, '5')",
        [],
    )
    .unwrap();
    let classes: (String, String, String) = conn
        .query_row(
            "SELECT typeof(priority), typeof(passes), typeof(dependencies) FROM features WHERE id = 21",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .unwrap();
    assert_eq!(
        classes,
        (String::from("real"), String::from("text"), String::from("integer"))
    );
    conn.close().unwrap();
}

/// Fails if anything still holds a lock on the store.
pub fn assert_released(path: &Path) {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch("BEGIN EXCLUSIVE; COMMIT;")
        .expect("store still locked");
}
