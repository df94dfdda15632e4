//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the store layer.

pub mod category;
pub mod currency;
pub mod expense;
pub mod export;
pub mod import;

pub use category::{handle_category_command, CategoryCommands};
pub use currency::{handle_currency_command, CurrencyCommands};
pub use expense::{handle_add, handle_delete, handle_edit, handle_list};
pub use export::{handle_export_command, ExportCommands};
pub use import::handle_import;
