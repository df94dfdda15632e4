//! Core data models for Flow
//!
//! This module contains the data structures that represent the expense
//! tracking domain: expenses, categories, and the currency table.

pub mod category;
pub mod currency;
pub mod expense;
pub mod ids;

pub use category::{default_categories, Category, CategoryPatch};
pub use currency::{convert_from_usd, convert_to_usd, Currency, CurrencyInfo, CURRENCIES, NGN_PER_USD};
pub use expense::{Expense, ExpensePatch, NewExpense};
pub use ids::{CategoryId, ExpenseId};
