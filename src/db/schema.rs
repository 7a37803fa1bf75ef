use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use crate::error::{AppError, Result};

/// Logical columns of a feature record, in output order.
pub const FEATURE_COLUMNS: [&str; 9] = [
    "id",
    "priority",
    "category",
    "name",
    "description",
    "steps",
    "passes",
    "in_progress",
    "dependencies",
];

/// The features table as it is actually spelled in a given store.
///
/// Stores in the wild disagree on casing (`features` vs `Features`,
/// `in_progress` vs `InProgress`), so names are matched ignoring case and
/// underscores and the physical spelling is kept for query building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureTable {
    pub table: String,
    /// Physical column names, aligned with `FEATURE_COLUMNS`.
    pub columns: Vec<String>,
}

impl FeatureTable {
    pub fn resolve(conn: &Connection, table: &str) -> Result<Self> {
        let actual: Option<String> = conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1 COLLATE NOCASE LIMIT 1",
                params![table],
                |row| row.get(0),
            )
            .optional()?;
        let actual = actual.ok_or_else(|| AppError::Schema(format!("no such table: {}", table)))?;

        let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1) ORDER BY cid")?;
        let physical = stmt
            .query_map(params![actual], |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let columns = FEATURE_COLUMNS
            .iter()
            .map(|logical| {
                physical
                    .iter()
                    .find(|candidate| normalize(candidate) == normalize(logical))
                    .cloned()
                    .ok_or_else(|| {
                        AppError::Schema(format!("table {} has no column {}", actual, logical))
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(table = %actual, ?columns, "resolved feature table");
        Ok(Self {
            table: actual,
            columns,
        })
    }

    /// Point lookup over the logical columns, id bound as `?1`.
    pub fn select_by_id(&self) -> String {
        let columns = self
            .columns
            .iter()
            .map(|c| quote_ident(c))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "SELECT {} FROM {} WHERE {} = ?1",
            columns,
            quote_ident(&self.table),
            quote_ident(&self.columns[0])
        )
    }

    /// Point lookup returning every physical column, id bound as `?1`.
    pub fn select_row_by_id(&self) -> String {
        format!(
            "SELECT * FROM {} WHERE {} = ?1",
            quote_ident(&self.table),
            quote_ident(&self.columns[0])
        )
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
