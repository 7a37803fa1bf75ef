use std::path::Path;

use rusqlite::{params, Connection, OpenFlags, OptionalExtension, Row};
use tracing::debug;

use crate::error::{AppError, Result};
use crate::models::{Feature, RawRow, StoredValue};

use super::schema::FeatureTable;

/// Read-only handle on a features store.
///
/// The connection is released when the store is closed or dropped, so an
/// early return through `?` never leaves a handle open.
pub struct FeatureStore {
    conn: Connection,
    table: FeatureTable,
}

impl FeatureStore {
    pub fn open(path: &Path, table: &str) -> Result<Self> {
        if !path.exists() {
            return Err(AppError::StoreNotFound(path.to_path_buf()));
        }

        debug!(path = %path.display(), "opening feature store");
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        let table = FeatureTable::resolve(&conn, table)?;

        Ok(Self { conn, table })
    }

    pub fn get_feature(&self, id: i64) -> Result<Option<Feature>> {
        let mut stmt = self.conn.prepare(&self.table.select_by_id())?;
        let feature = stmt.query_row(params![id], feature_from_row).optional()?;
        debug!(id, found = feature.is_some(), "feature lookup");
        Ok(feature)
    }

    pub fn get_row(&self, id: i64) -> Result<Option<RawRow>> {
        let mut stmt = self.conn.prepare(&self.table.select_row_by_id())?;
        let names: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let values = stmt
            .query_row(params![id], |row| {
                (0..names.len())
                    .map(|i| row.get_ref(i).map(StoredValue::from))
                    .collect::<rusqlite::Result<Vec<_>>>()
            })
            .optional()?;
        debug!(id, found = values.is_some(), "raw row lookup");

        Ok(values.map(|values| RawRow {
            id,
            columns: names.into_iter().zip(values).collect(),
        }))
    }

    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| e)?;
        debug!("feature store closed");
        Ok(())
    }
}

fn feature_from_row(row: &Row) -> rusqlite::Result<Feature> {
    let value = |i: usize| row.get_ref(i).map(StoredValue::from);
    Ok(Feature {
        id: value(0)?,
        priority: value(1)?,
        category: value(2)?,
        name: value(3)?,
        description: value(4)?,
        steps: value(5)?,
        passes: value(6)?,
        in_progress: value(7)?,
        dependencies: value(8)?,
    })
}
