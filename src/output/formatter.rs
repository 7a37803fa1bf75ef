use std::io::Write;

use crate::error::Result;
use crate::models::{Feature, RawRow};

/// One `Label: value` line per logical field, values as stored.
pub fn write_labeled<W: Write>(out: &mut W, feature: &Feature) -> Result<()> {
    writeln!(out, "ID: {}", feature.id)?;
    writeln!(out, "Priority: {}", feature.priority)?;
    writeln!(out, "Category: {}", feature.category)?;
    writeln!(out, "Name: {}", feature.name)?;
    writeln!(out, "Description: {}", feature.description)?;
    writeln!(out, "Steps: {}", feature.steps)?;
    writeln!(out, "Passes: {}", feature.passes)?;
    writeln!(out, "In Progress: {}", feature.in_progress)?;
    writeln!(out, "Dependencies: {}", feature.dependencies)?;
    Ok(())
}

pub fn write_summary<W: Write>(out: &mut W, feature: &Feature) -> Result<()> {
    writeln!(out, "Feature #{}: {}", feature.id, feature.name)?;
    writeln!(out, "Category: {}", feature.category)?;
    let passing = if feature.passes.is_truthy() { "YES" } else { "NO" };
    writeln!(out, "Passing: {}", passing)?;
    Ok(())
}

/// The stored row as a JSON object keyed by physical column name.
pub fn write_json<W: Write>(out: &mut W, row: &RawRow) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, row)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_columns<W: Write>(out: &mut W, row: &RawRow) -> Result<()> {
    writeln!(out, "Feature #{}:", row.id)?;
    for (column, value) in &row.columns {
        writeln!(out, "  {}: {}", column, value)?;
    }
    Ok(())
}

pub fn write_not_found<W: Write>(out: &mut W, id: i64) -> Result<()> {
    writeln!(out, "Feature #{} not found", id)?;
    Ok(())
}
