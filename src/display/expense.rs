//! Expense display formatting
//!
//! Formats expenses and summaries for terminal output.

use crate::models::{Currency, Expense};
use crate::store::ExpenseSummary;

use super::format::{format_currency, format_date};

/// Format a list of expenses as an aligned table
pub fn format_expense_list(expenses: &[Expense], currency: Currency) -> String {
    if expenses.is_empty() {
        return "No expenses recorded yet.\n\nRun 'flow add <amount> <description>' to record one."
            .to_string();
    }

    let desc_width = expenses
        .iter()
        .map(|e| e.description.len())
        .max()
        .unwrap_or(11)
        .max(11);
    let cat_width = expenses
        .iter()
        .map(|e| e.category.len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<desc_width$}  {:<cat_width$}  {:>14}  ID\n",
        "Date",
        "Description",
        "Category",
        "Amount",
        desc_width = desc_width,
        cat_width = cat_width
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<desc_width$}  {:-<cat_width$}  {:->14}  {:-<8}\n",
        "",
        "",
        "",
        "",
        "",
        desc_width = desc_width,
        cat_width = cat_width
    ));

    for expense in expenses {
        output.push_str(&format!(
            "{:<12}  {:<desc_width$}  {:<cat_width$}  {:>14}  {}\n",
            format_date(&expense.date),
            expense.description,
            expense.category,
            format_currency(expense.amount, currency),
            expense.id,
            desc_width = desc_width,
            cat_width = cat_width
        ));
    }

    output
}

/// Format the derived summary for terminal output
pub fn format_summary(summary: &ExpenseSummary, currency: Currency) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Total spent:     {}\n",
        format_currency(summary.total, currency)
    ));
    output.push_str(&format!("Days with spend: {}\n", summary.unique_days));
    output.push_str(&format!(
        "Average per day: {}\n",
        format_currency(summary.average_per_day, currency)
    ));

    if !summary.by_category.is_empty() {
        output.push('\n');
        output.push_str("By category:\n");

        let mut entries: Vec<_> = summary.by_category.iter().collect();
        entries.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal));

        for (name, amount) in entries {
            output.push_str(&format!(
                "  {:<20} {}\n",
                name,
                format_currency(*amount, currency)
            ));
        }
    }

    output
}
