//! Export module for Flow
//!
//! Provides data export in two formats:
//! - CSV: spreadsheet-compatible expense rows with an optional category table
//! - JSON: versioned full export that round-trips through the import pipeline

pub mod csv;
pub mod json;

pub use csv::export_csv;
pub use json::{export_json, JsonExport, EXPORT_VERSION};
