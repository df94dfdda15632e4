//! Export command handlers

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::error::{FlowError, FlowResult};
use crate::export::{export_csv, export_json};
use crate::store::Tracker;

#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export expenses to CSV
    Csv {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Append the category table as a trailing section
        #[arg(long)]
        categories: bool,
    },

    /// Export expenses and categories to JSON
    Json {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
}

/// Handle an export subcommand
pub fn handle_export_command(tracker: &Tracker, cmd: ExportCommands) -> FlowResult<()> {
    match cmd {
        ExportCommands::Csv { output, categories } => {
            let expenses = tracker.expenses();
            let category_list = tracker.categories();
            let categories = categories.then(|| category_list.as_slice());

            match output {
                Some(path) => {
                    let mut writer = create_file_writer(&path)?;
                    export_csv(&expenses, categories, &mut writer)?;
                    finish_file(writer, &path)
                }
                None => export_csv(&expenses, categories, &mut io::stdout().lock()),
            }
        }
        ExportCommands::Json { output, compact } => {
            let expenses = tracker.expenses();
            let categories = tracker.categories();

            match output {
                Some(path) => {
                    let mut writer = create_file_writer(&path)?;
                    export_json(&expenses, &categories, &mut writer, !compact)?;
                    finish_file(writer, &path)
                }
                None => export_json(&expenses, &categories, &mut io::stdout().lock(), !compact),
            }
        }
    }
}

fn create_file_writer(path: &Path) -> FlowResult<BufWriter<File>> {
    let file = File::create(path)
        .map_err(|e| FlowError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
    Ok(BufWriter::new(file))
}

fn finish_file(mut writer: BufWriter<File>, path: &Path) -> FlowResult<()> {
    writer
        .flush()
        .map_err(|e| FlowError::Export(e.to_string()))?;
    println!("Exported to {}", path.display());
    Ok(())
}
