//! Expense command handlers

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

use crate::display::{format_currency, format_expense_list};
use crate::error::{FlowError, FlowResult};
use crate::models::{ExpenseId, ExpensePatch, NewExpense};
use crate::store::Tracker;

/// Parse a YYYY-MM-DD argument into a UTC timestamp at local midnight
pub fn parse_date_arg(s: &str) -> FlowResult<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| FlowError::Validation(format!("Invalid date (expected YYYY-MM-DD): {}", s)))?;

    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| FlowError::Validation(format!("Invalid date: {}", s)))?;

    match Local.from_local_datetime(&midnight) {
        chrono::LocalResult::Single(dt) | chrono::LocalResult::Ambiguous(dt, _) => {
            Ok(dt.with_timezone(&Utc))
        }
        chrono::LocalResult::None => Err(FlowError::Validation(format!("Invalid date: {}", s))),
    }
}

/// Record a new expense
pub fn handle_add(
    tracker: &Tracker,
    amount: f64,
    description: String,
    category: Option<String>,
    date: Option<String>,
) -> FlowResult<()> {
    let category = category.unwrap_or_else(|| "Other".to_string());
    let date = match date {
        Some(s) => parse_date_arg(&s)?,
        None => Utc::now(),
    };

    let expense = tracker.add_expense(NewExpense {
        amount,
        description,
        category,
        date,
    })?;

    println!(
        "Recorded {} for '{}' in {} (id: {})",
        format_currency(expense.amount, tracker.currency()),
        expense.description,
        expense.category,
        expense.id
    );
    Ok(())
}

/// List recorded expenses, newest first
pub fn handle_list(tracker: &Tracker, limit: usize) -> FlowResult<()> {
    let expenses = tracker.expenses();
    let shown: Vec<_> = expenses.iter().take(limit).cloned().collect();

    print!("{}", format_expense_list(&shown, tracker.currency()));
    if expenses.len() > shown.len() {
        println!("\n({} of {} shown)", shown.len(), expenses.len());
    }
    Ok(())
}

/// Delete an expense by id
pub fn handle_delete(tracker: &Tracker, id: String) -> FlowResult<()> {
    let id = ExpenseId::from_string(id);
    let known = tracker.find_expense(&id).is_some();

    tracker.delete_expense(&id);

    if known {
        println!("Deleted expense {}", id);
    } else {
        // Unknown ids are a successful no-op, not an error
        println!("No expense with id {} (nothing deleted)", id);
    }
    Ok(())
}

/// Update fields on an existing expense
pub fn handle_edit(
    tracker: &Tracker,
    id: String,
    amount: Option<f64>,
    description: Option<String>,
    category: Option<String>,
    date: Option<String>,
) -> FlowResult<()> {
    let id = ExpenseId::from_string(id);
    let known = tracker.find_expense(&id).is_some();

    let patch = ExpensePatch {
        amount,
        description,
        category,
        date: date.as_deref().map(parse_date_arg).transpose()?,
    };
    tracker.update_expense(&id, patch);

    if known {
        println!("Updated expense {}", id);
    } else {
        println!("No expense with id {} (nothing updated)", id);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_arg() {
        let date = parse_date_arg("2025-01-15").unwrap();
        assert_eq!(date.with_timezone(&Local).date_naive().to_string(), "2025-01-15");
    }

    #[test]
    fn test_parse_date_arg_rejects_garbage() {
        assert!(parse_date_arg("15/01/2025").is_err());
        assert!(parse_date_arg("not a date").is_err());
    }
}
