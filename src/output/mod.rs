mod formatter;

use clap::ValueEnum;
use serde::Deserialize;

pub use formatter::{write_columns, write_json, write_labeled, write_not_found, write_summary};

/// How a found record is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `Label: value` line per field
    #[default]
    Labeled,
    /// Every stored column as a pretty-printed JSON object
    Json,
    /// Name, category and pass state
    Summary,
    /// Every stored column under a `Feature #<id>:` header
    Columns,
}
