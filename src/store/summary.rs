//! Derived expense aggregates
//!
//! Every aggregate is a total function of the expense collection: the empty
//! collection yields zeros and empty maps rather than relying on fallback
//! coercion at the call sites.

use std::collections::{BTreeMap, HashMap};

use chrono::Local;
use serde::Serialize;

use crate::models::Expense;

/// How many expenses the `recent` view holds
const RECENT_COUNT: usize = 10;

/// Aggregates derived from the current expense collection
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExpenseSummary {
    /// Sum of all amounts (USD)
    pub total: f64,

    /// Category name -> summed amount
    pub by_category: HashMap<String, f64>,

    /// Count of distinct local calendar dates across expenses
    pub unique_days: usize,

    /// `total / unique_days`, 0 when there are no days
    pub average_per_day: f64,

    /// First 10 entries in collection order (newest first)
    pub recent: Vec<Expense>,

    /// Local calendar date (YYYY-MM-DD) -> expenses on that day
    pub by_date: BTreeMap<String, Vec<Expense>>,
}

/// The local calendar date an expense falls on, as a YYYY-MM-DD key
///
/// Days are bucketed by local date, not by UTC instant, so an evening
/// purchase lands on the day the user made it.
pub fn local_date_key(expense: &Expense) -> String {
    expense
        .date
        .with_timezone(&Local)
        .date_naive()
        .format("%Y-%m-%d")
        .to_string()
}

/// Compute all derived aggregates for an expense collection
pub fn summarize(expenses: &[Expense]) -> ExpenseSummary {
    let total: f64 = expenses.iter().map(|e| e.amount).sum();

    let mut by_category: HashMap<String, f64> = HashMap::new();
    for expense in expenses {
        *by_category.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
    }

    let mut by_date: BTreeMap<String, Vec<Expense>> = BTreeMap::new();
    for expense in expenses {
        by_date
            .entry(local_date_key(expense))
            .or_default()
            .push(expense.clone());
    }

    let unique_days = by_date.len();
    let average_per_day = if unique_days > 0 {
        total / unique_days as f64
    } else {
        0.0
    };

    let recent = expenses.iter().take(RECENT_COUNT).cloned().collect();

    ExpenseSummary {
        total,
        by_category,
        unique_days,
        average_per_day,
        recent,
        by_date,
    }
}
