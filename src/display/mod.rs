//! Display formatting for terminal output
//!
//! Pure formatting helpers over the data models: currency and date
//! rendering plus simple table views for the CLI.

pub mod category;
pub mod expense;
pub mod format;

pub use category::format_category_list;
pub use expense::{format_expense_list, format_summary};
pub use format::{convert_amount, format_amount_in, format_currency, format_date};
