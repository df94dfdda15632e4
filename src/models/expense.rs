//! Expense model
//!
//! An expense records a single spend against a category. Amounts are always
//! stored in USD; the selected display currency is a presentation concern
//! handled by the display layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Amount in USD (non-negative)
    pub amount: f64,

    /// What the money was spent on
    pub description: String,

    /// Category *name* this expense belongs to.
    ///
    /// Expenses reference categories by name, not by id; renaming a
    /// category does not repoint existing expenses.
    pub category: String,

    /// When the expense occurred
    pub date: DateTime<Utc>,

    /// When the record was created
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense with a fresh id and creation timestamp
    pub fn new(
        amount: f64,
        description: impl Into<String>,
        category: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            amount,
            description: description.into(),
            category: category.into(),
            date,
            created_at: Utc::now(),
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), String> {
        if self.amount < 0.0 || !self.amount.is_finite() {
            return Err(format!("Amount must be non-negative: {}", self.amount));
        }
        if self.description.trim().is_empty() {
            return Err("Description cannot be empty".into());
        }
        if self.category.trim().is_empty() {
            return Err("Category cannot be empty".into());
        }
        Ok(())
    }
}

/// Fields supplied when recording a new expense (id and creation timestamp
/// are assigned by the store)
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub amount: f64,
    pub description: String,
    pub category: String,
    pub date: DateTime<Utc>,
}

/// A partial update to an existing expense; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct ExpensePatch {
    pub amount: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

impl ExpensePatch {
    /// Apply this patch to an expense, merging set fields into the record
    pub fn apply(&self, expense: &mut Expense) {
        if let Some(amount) = self.amount {
            expense.amount = amount;
        }
        if let Some(description) = &self.description {
            expense.description = description.clone();
        }
        if let Some(category) = &self.category {
            expense.category = category.clone();
        }
        if let Some(date) = self.date {
            expense.date = date;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_expense() {
        let expense = Expense::new(12.5, "Lunch", "Food & Dining", Utc::now());
        assert_eq!(expense.amount, 12.5);
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_amount() {
        let mut expense = Expense::new(10.0, "Lunch", "Food & Dining", Utc::now());
        expense.amount = -1.0;
        assert!(expense.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_description() {
        let expense = Expense::new(10.0, "  ", "Food & Dining", Utc::now());
        assert!(expense.validate().is_err());
    }

    #[test]
    fn test_patch_applies_only_set_fields() {
        let mut expense = Expense::new(10.0, "Lunch", "Food & Dining", Utc::now());
        let original_date = expense.date;

        let patch = ExpensePatch {
            amount: Some(20.0),
            description: None,
            category: Some("Other".into()),
            date: None,
        };
        patch.apply(&mut expense);

        assert_eq!(expense.amount, 20.0);
        assert_eq!(expense.description, "Lunch");
        assert_eq!(expense.category, "Other");
        assert_eq!(expense.date, original_date);
    }

    #[test]
    fn test_dates_serialize_as_iso8601() {
        let expense = Expense::new(10.0, "Lunch", "Food & Dining", Utc::now());
        let json = serde_json::to_value(&expense).unwrap();

        let date = json["date"].as_str().unwrap();
        assert!(date.contains('T'));
        assert!(json["createdAt"].is_string());
    }
}
