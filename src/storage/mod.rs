//! Storage layer for Flow
//!
//! Persists the expense and category collections plus the selected display
//! currency as JSON files with atomic writes. The contract mirrors what the
//! tracker needs from browser-style local storage:
//!
//! - loads never fail: absent, unreadable, or malformed files fall back to
//!   a type-specific default (empty expenses, the seeded default categories,
//!   NGN) with a logged warning;
//! - saves are synchronous and best-effort: a failed write is logged and
//!   swallowed so persistence problems never poison a mutation.

pub mod file_io;

pub use file_io::{read_json_or, write_json_atomic};

use tracing::warn;

use crate::config::paths::FlowPaths;
use crate::error::FlowError;
use crate::models::{default_categories, Category, Currency, Expense};

/// JSON file persistence for the tracker's collections
#[derive(Debug, Clone)]
pub struct Storage {
    paths: FlowPaths,
}

impl Storage {
    /// Create a new Storage instance, ensuring the data directory exists
    pub fn new(paths: FlowPaths) -> Result<Self, FlowError> {
        paths.ensure_directories()?;
        Ok(Self { paths })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FlowPaths {
        &self.paths
    }

    /// Load the expense collection (empty when nothing is persisted)
    pub fn load_expenses(&self) -> Vec<Expense> {
        read_json_or(self.paths.expenses_file(), Vec::new)
    }

    /// Load the category collection (seeded defaults when nothing is persisted)
    pub fn load_categories(&self) -> Vec<Category> {
        read_json_or(self.paths.categories_file(), default_categories)
    }

    /// Load the selected display currency (NGN when nothing is persisted)
    pub fn load_currency(&self) -> Currency {
        read_json_or(self.paths.currency_file(), Currency::default)
    }

    /// Persist the expense collection, best-effort
    pub fn save_expenses(&self, expenses: &[Expense]) {
        if let Err(e) = write_json_atomic(self.paths.expenses_file(), &expenses) {
            warn!("Failed to save expenses: {}", e);
        }
    }

    /// Persist the category collection, best-effort
    pub fn save_categories(&self, categories: &[Category]) {
        if let Err(e) = write_json_atomic(self.paths.categories_file(), &categories) {
            warn!("Failed to save categories: {}", e);
        }
    }

    /// Persist the selected display currency, best-effort
    pub fn save_currency(&self, currency: Currency) {
        if let Err(e) = write_json_atomic(self.paths.currency_file(), &currency) {
            warn!("Failed to save currency: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FlowPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_fresh_storage_defaults() {
        let (_temp_dir, storage) = create_test_storage();

        assert!(storage.load_expenses().is_empty());
        assert_eq!(storage.load_categories().len(), 8);
        assert_eq!(storage.load_currency(), Currency::Ngn);
    }

    #[test]
    fn test_expenses_round_trip() {
        let (_temp_dir, storage) = create_test_storage();

        let expenses = vec![
            Expense::new(12.5, "Lunch", "Food & Dining", Utc::now()),
            Expense::new(40.0, "Fuel", "Transportation", Utc::now()),
        ];
        storage.save_expenses(&expenses);

        let loaded = storage.load_expenses();
        assert_eq!(loaded, expenses);
    }

    #[test]
    fn test_currency_round_trip() {
        let (_temp_dir, storage) = create_test_storage();

        storage.save_currency(Currency::Usd);
        assert_eq!(storage.load_currency(), Currency::Usd);
    }

    #[test]
    fn test_malformed_file_falls_back_to_default() {
        let (_temp_dir, storage) = create_test_storage();

        fs::write(storage.paths().expenses_file(), "{{ definitely not json").unwrap();
        fs::write(storage.paths().categories_file(), "[1, 2, 3]").unwrap();

        assert!(storage.load_expenses().is_empty());
        assert_eq!(storage.load_categories().len(), 8);
    }

    #[test]
    fn test_dates_persist_as_iso_strings() {
        let (_temp_dir, storage) = create_test_storage();

        let expenses = vec![Expense::new(5.0, "Coffee", "Food & Dining", Utc::now())];
        storage.save_expenses(&expenses);

        let raw = fs::read_to_string(storage.paths().expenses_file()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value[0]["date"].as_str().unwrap().contains('T'));
        assert!(value[0]["createdAt"].is_string());
    }
}
