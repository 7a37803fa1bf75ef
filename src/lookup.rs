use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::db::FeatureStore;
use crate::error::Result;
use crate::models::{Feature, RawRow};
use crate::output::{
    write_columns, write_json, write_labeled, write_not_found, write_summary, OutputFormat,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Found,
    NotFound,
}

/// Looks up one feature and prints it, or the not-found line, to `out`.
pub fn lookup_and_print<W: Write>(
    store: &FeatureStore,
    id: i64,
    format: OutputFormat,
    out: &mut W,
) -> Result<Outcome> {
    let outcome = match format {
        OutputFormat::Labeled => print_feature(store, id, out, write_labeled)?,
        OutputFormat::Summary => print_feature(store, id, out, write_summary)?,
        OutputFormat::Json => print_row(store, id, out, write_json)?,
        OutputFormat::Columns => print_row(store, id, out, write_columns)?,
    };

    if outcome == Outcome::NotFound {
        write_not_found(out, id)?;
    }
    out.flush()?;

    info!(id, ?outcome, ?format, "lookup finished");
    Ok(outcome)
}

fn print_feature<W: Write>(
    store: &FeatureStore,
    id: i64,
    out: &mut W,
    write: fn(&mut W, &Feature) -> Result<()>,
) -> Result<Outcome> {
    match store.get_feature(id)? {
        Some(feature) => {
            write(out, &feature)?;
            Ok(Outcome::Found)
        }
        None => Ok(Outcome::NotFound),
    }
}

fn print_row<W: Write>(
    store: &FeatureStore,
    id: i64,
    out: &mut W,
    write: fn(&mut W, &RawRow) -> Result<()>,
) -> Result<Outcome> {
    match store.get_row(id)? {
        Some(row) => {
            write(out, &row)?;
            Ok(Outcome::Found)
        }
        None => Ok(Outcome::NotFound),
    }
}

/// Opens the store at `path`, runs one lookup and closes the store again.
///
/// On error the store is dropped before the error is returned, which
/// releases the connection.
pub fn run<W: Write>(
    path: &Path,
    table: &str,
    id: i64,
    format: OutputFormat,
    out: &mut W,
) -> Result<Outcome> {
    let store = FeatureStore::open(path, table)?;
    let outcome = lookup_and_print(&store, id, format, out)?;
    store.close()?;
    Ok(outcome)
}
