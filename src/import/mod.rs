//! Import pipeline: validate, sanitize, merge, commit
//!
//! Imports accept two payload shapes: the current
//! `{expenses: [...], categories: [...]}` export format and the legacy
//! format of a bare expense array. Validation problems come back as a
//! structured error list in [`ImportResult`]; nothing in this pipeline
//! panics or propagates an error to the caller.
//!
//! Records are sanitized individually, and only records that survive
//! sanitation are counted in the result.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::FlowError;
use crate::models::{Category, CategoryId, Expense, ExpenseId};
use crate::store::Tracker;

/// How imported records are combined with the existing collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeStrategy {
    /// Discard existing data and adopt the import wholesale (existing
    /// categories are kept when the import carries none)
    Replace,
    /// Union keyed by id; imported records overwrite existing ones sharing
    /// an id, everything else is preserved
    #[default]
    Merge,
    /// Imported records get fresh ids and are appended alongside existing
    /// ones, so no id collision is possible
    KeepBoth,
}

impl fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MergeStrategy::Replace => "replace",
            MergeStrategy::Merge => "merge",
            MergeStrategy::KeepBoth => "keep-both",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for MergeStrategy {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "replace" => Ok(MergeStrategy::Replace),
            "merge" => Ok(MergeStrategy::Merge),
            "keep-both" => Ok(MergeStrategy::KeepBoth),
            other => Err(FlowError::Validation(format!(
                "Unknown merge strategy: {} (expected replace, merge, or keep-both)",
                other
            ))),
        }
    }
}

/// Outcome of an import attempt
///
/// `expenses_imported` and `categories_imported` count records that
/// survived sanitation, not the raw payload length.
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    pub success: bool,
    pub expenses_imported: usize,
    pub categories_imported: usize,
    pub errors: Vec<String>,
}

/// Structural validation of an import payload
///
/// Returns an empty list when the payload shape is acceptable.
pub fn validate_payload(data: &Value) -> Vec<String> {
    let mut errors = Vec::new();

    if data.is_null() {
        errors.push("No data provided".to_string());
        return errors;
    }

    if !data.is_object() && !data.is_array() {
        errors.push("Invalid data format".to_string());
        return errors;
    }

    if let Some(object) = data.as_object() {
        if object.contains_key("expenses") || object.contains_key("categories") {
            if let Some(expenses) = object.get("expenses") {
                if !expenses.is_array() {
                    errors.push("Expenses must be an array".to_string());
                }
            }
            if let Some(categories) = object.get("categories") {
                if !categories.is_array() {
                    errors.push("Categories must be an array".to_string());
                }
            }
        } else {
            errors.push("Data must contain expenses array or be an expenses array".to_string());
        }
    }

    errors
}

/// Split a validated payload into raw expense and category records
fn split_payload(data: &Value) -> (Vec<Value>, Vec<Value>) {
    if let Some(array) = data.as_array() {
        // Legacy format: a bare expense array
        return (array.clone(), Vec::new());
    }

    let expenses = data
        .get("expenses")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    let categories = data
        .get("categories")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    (expenses, categories)
}

fn coerce_number(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn coerce_date(value: Option<&Value>) -> DateTime<Utc> {
    value
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|d| d.with_timezone(&Utc))
        .unwrap_or_else(Utc::now)
}

fn coerce_string(value: Option<&Value>) -> String {
    value.and_then(Value::as_str).unwrap_or_default().to_string()
}

/// Sanitize one raw expense record
///
/// Amounts are coerced to numbers (0 on parse failure), missing dates
/// default to now, and a fresh id is assigned when absent. Records with a
/// non-positive amount or an empty description or category are dropped.
fn sanitize_expense(raw: &Value) -> Option<Expense> {
    if !raw.is_object() {
        return None;
    }

    let expense = Expense {
        id: raw
            .get("id")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(ExpenseId::from_string)
            .unwrap_or_default(),
        amount: coerce_number(raw.get("amount")),
        description: coerce_string(raw.get("description")),
        category: coerce_string(raw.get("category")),
        date: coerce_date(raw.get("date")),
        created_at: coerce_date(raw.get("createdAt")),
    };

    if expense.amount > 0.0 && !expense.description.is_empty() && !expense.category.is_empty() {
        Some(expense)
    } else {
        None
    }
}

/// Sanitize one raw category record
///
/// Missing name/color/icon fall back to defaults; a category with an
/// explicitly empty name is dropped.
fn sanitize_category(raw: &Value) -> Option<Category> {
    if !raw.is_object() {
        return None;
    }

    let name = raw
        .get("name")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| "Unnamed".to_string());
    if name.trim().is_empty() {
        return None;
    }

    let budget = match raw.get("budget") {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };

    Some(Category {
        id: raw
            .get("id")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(CategoryId::from_string)
            .unwrap_or_default(),
        name,
        color: raw
            .get("color")
            .and_then(Value::as_str)
            .unwrap_or("#94A3B8")
            .to_string(),
        icon: raw
            .get("icon")
            .and_then(Value::as_str)
            .unwrap_or("more-horizontal")
            .to_string(),
        budget,
    })
}

/// Sanitize a raw payload into clean collections
pub fn sanitize_payload(data: &Value) -> (Vec<Expense>, Vec<Category>) {
    let (raw_expenses, raw_categories) = split_payload(data);

    let expenses = raw_expenses.iter().filter_map(sanitize_expense).collect();
    let categories = raw_categories.iter().filter_map(sanitize_category).collect();

    (expenses, categories)
}

/// Combine sanitized imported data with the existing collections
///
/// Whatever the strategy, the merged expense collection is sorted by date
/// descending on the way out.
pub fn merge_collections(
    existing_expenses: &[Expense],
    existing_categories: &[Category],
    imported_expenses: Vec<Expense>,
    imported_categories: Vec<Category>,
    strategy: MergeStrategy,
) -> (Vec<Expense>, Vec<Category>) {
    let (mut expenses, categories) = match strategy {
        MergeStrategy::Replace => {
            let categories = if imported_categories.is_empty() {
                existing_categories.to_vec()
            } else {
                imported_categories
            };
            (imported_expenses, categories)
        }
        MergeStrategy::Merge => {
            let mut expenses = existing_expenses.to_vec();
            for imported in imported_expenses {
                match expenses.iter_mut().find(|e| e.id == imported.id) {
                    Some(existing) => *existing = imported,
                    None => expenses.push(imported),
                }
            }

            let mut categories = existing_categories.to_vec();
            for imported in imported_categories {
                match categories.iter_mut().find(|c| c.id == imported.id) {
                    Some(existing) => *existing = imported,
                    None => categories.push(imported),
                }
            }

            (expenses, categories)
        }
        MergeStrategy::KeepBoth => {
            let mut expenses = existing_expenses.to_vec();
            expenses.extend(imported_expenses.into_iter().map(|mut e| {
                e.id = ExpenseId::new();
                e
            }));

            let mut categories = existing_categories.to_vec();
            categories.extend(imported_categories.into_iter().map(|mut c| {
                c.id = CategoryId::new();
                c
            }));

            (expenses, categories)
        }
    };

    expenses.sort_by(|a, b| b.date.cmp(&a.date));

    (expenses, categories)
}

/// Run the full import pipeline over raw file content and commit the result
///
/// Parse failures and validation problems are reported in the result's
/// error list; the existing collections are left untouched unless the
/// import succeeds.
pub fn import_str(tracker: &Tracker, content: &str, strategy: MergeStrategy) -> ImportResult {
    let mut result = ImportResult::default();

    let data: Value = match serde_json::from_str(content) {
        Ok(data) => data,
        Err(e) => {
            result.errors.push(format!("Failed to parse file: {}", e));
            return result;
        }
    };

    let validation_errors = validate_payload(&data);
    if !validation_errors.is_empty() {
        result.errors = validation_errors;
        return result;
    }

    let (imported_expenses, imported_categories) = sanitize_payload(&data);
    if imported_expenses.is_empty() && imported_categories.is_empty() {
        result.errors.push("No valid data found in file".to_string());
        return result;
    }

    result.expenses_imported = imported_expenses.len();
    result.categories_imported = imported_categories.len();

    let (expenses, categories) = merge_collections(
        &tracker.expenses(),
        &tracker.categories(),
        imported_expenses,
        imported_categories,
        strategy,
    );

    tracker.replace_collections(expenses, categories);
    result.success = true;
    result
}

/// Import from a file on disk
///
/// An unreadable file is reported in the result rather than returned as an
/// error, matching the rest of the pipeline.
pub fn import_file(
    tracker: &Tracker,
    path: impl AsRef<Path>,
    strategy: MergeStrategy,
) -> ImportResult {
    match std::fs::read_to_string(path.as_ref()) {
        Ok(content) => import_str(tracker, &content, strategy),
        Err(e) => ImportResult {
            errors: vec![format!("Failed to read file: {}", e)],
            ..Default::default()
        },
    }
}
