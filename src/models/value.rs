use std::fmt;

use rusqlite::types::ValueRef;
use serde::{Serialize, Serializer};

/// A column value in the storage class SQLite actually used for it.
///
/// Declared column types are only affinities, so a `JSON` column can hold an
/// integer and a `BOOLEAN` column can hold text. Values are kept as stored
/// and printed verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl StoredValue {
    /// Reads a flag column: non-zero numbers and `true`/`yes`-like text are set.
    pub fn is_truthy(&self) -> bool {
        match self {
            StoredValue::Null => false,
            StoredValue::Integer(i) => *i != 0,
            StoredValue::Real(f) => *f != 0.0,
            StoredValue::Text(t) => {
                let t = t.trim();
                matches!(
                    t.to_ascii_lowercase().as_str(),
                    "true" | "t" | "yes" | "y"
                ) || t.parse::<f64>().is_ok_and(|n| n != 0.0)
            }
            StoredValue::Blob(b) => !b.is_empty(),
        }
    }
}

impl From<ValueRef<'_>> for StoredValue {
    fn from(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => StoredValue::Null,
            ValueRef::Integer(i) => StoredValue::Integer(i),
            ValueRef::Real(f) => StoredValue::Real(f),
            ValueRef::Text(t) => StoredValue::Text(String::from_utf8_lossy(t).into_owned()),
            ValueRef::Blob(b) => StoredValue::Blob(b.to_vec()),
        }
    }
}

impl fmt::Display for StoredValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoredValue::Null => f.write_str("null"),
            StoredValue::Integer(i) => write!(f, "{}", i),
            StoredValue::Real(r) => write!(f, "{}", r),
            StoredValue::Text(t) => f.write_str(t),
            StoredValue::Blob(b) => write!(f, "<{} bytes>", b.len()),
        }
    }
}

impl Serialize for StoredValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StoredValue::Null => serializer.serialize_none(),
            StoredValue::Integer(i) => serializer.serialize_i64(*i),
            StoredValue::Real(r) => serializer.serialize_f64(*r),
            StoredValue::Text(t) => serializer.serialize_str(t),
            StoredValue::Blob(_) => serializer.collect_str(self),
        }
    }
}
