//! Import command handler

use std::path::PathBuf;

use crate::error::{FlowError, FlowResult};
use crate::import::{import_file, MergeStrategy};
use crate::store::Tracker;

/// Import a JSON export file, combining it with the current data
pub fn handle_import(tracker: &Tracker, file: PathBuf, strategy: String) -> FlowResult<()> {
    let strategy: MergeStrategy = strategy.parse()?;
    let result = import_file(tracker, &file, strategy);

    for error in &result.errors {
        eprintln!("  {}", error);
    }

    if result.success {
        println!(
            "Imported {} expense(s) and {} categor(ies) using strategy '{}'",
            result.expenses_imported, result.categories_imported, strategy
        );
        Ok(())
    } else {
        Err(FlowError::Import(format!(
            "Nothing imported from {}",
            file.display()
        )))
    }
}
