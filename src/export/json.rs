//! JSON export functionality
//!
//! Exports the full data set with schema versioning. The produced document
//! is exactly what the import pipeline accepts as the current format, so an
//! export/import round trip under the `replace` strategy reproduces the
//! original collections.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FlowError, FlowResult};
use crate::models::{Category, Expense};

/// Current export schema version
pub const EXPORT_VERSION: &str = "1.0";

/// Full data export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonExport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Export timestamp
    #[serde(rename = "exportedAt")]
    pub exported_at: DateTime<Utc>,

    /// All expenses
    pub expenses: Vec<Expense>,

    /// All categories
    pub categories: Vec<Category>,
}

impl JsonExport {
    /// Create a new export of the given collections
    pub fn new(expenses: Vec<Expense>, categories: Vec<Category>) -> Self {
        Self {
            version: EXPORT_VERSION.to_string(),
            exported_at: Utc::now(),
            expenses,
            categories,
        }
    }
}

/// Export expenses and categories to JSON
pub fn export_json<W: Write>(
    expenses: &[Expense],
    categories: &[Category],
    writer: &mut W,
    pretty: bool,
) -> FlowResult<()> {
    let export = JsonExport::new(expenses.to_vec(), categories.to_vec());

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| FlowError::Export(e.to_string()))?;

    Ok(())
}
