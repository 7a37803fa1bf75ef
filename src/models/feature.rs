use serde::ser::{Serialize, SerializeMap, Serializer};

use super::StoredValue;

/// One row of the features table, read through the logical column set.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub id: StoredValue,
    pub priority: StoredValue,
    pub category: StoredValue,
    pub name: StoredValue,
    pub description: StoredValue,
    pub steps: StoredValue,
    pub passes: StoredValue,
    pub in_progress: StoredValue,
    pub dependencies: StoredValue,
}

/// A row as stored: every physical column in table order.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub id: i64,
    pub columns: Vec<(String, StoredValue)>,
}

// Serializes as an object keyed by column name, in table order.
impl Serialize for RawRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, value) in &self.columns {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}
