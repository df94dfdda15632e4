//! Category model
//!
//! Categories label expenses and optionally carry a monthly budget. A fresh
//! installation is seeded with a default set so the tracker is usable
//! immediately.

use serde::{Deserialize, Serialize};

use super::ids::CategoryId;

/// An expense category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name (referenced by `Expense.category`)
    pub name: String,

    /// Icon tag for presentation layers
    pub icon: String,

    /// Display color as a hex string (e.g. "#FF6B6B")
    pub color: String,

    /// Optional monthly budget in USD
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
}

impl Category {
    /// Create a new category with a fresh id
    pub fn new(name: impl Into<String>, icon: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
            budget: None,
        }
    }

    /// Set the monthly budget
    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = Some(budget);
        self
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Category name cannot be empty".into());
        }
        if let Some(budget) = self.budget {
            if budget < 0.0 || !budget.is_finite() {
                return Err(format!("Budget must be non-negative: {}", budget));
            }
        }
        Ok(())
    }
}

/// A partial update to an existing category; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub budget: Option<Option<f64>>,
}

impl CategoryPatch {
    /// Apply this patch to a category
    pub fn apply(&self, category: &mut Category) {
        if let Some(name) = &self.name {
            category.name = name.clone();
        }
        if let Some(icon) = &self.icon {
            category.icon = icon.clone();
        }
        if let Some(color) = &self.color {
            category.color = color.clone();
        }
        if let Some(budget) = self.budget {
            category.budget = budget;
        }
    }
}

/// The default category set seeded on first run
///
/// Ids are fixed small strings so re-seeding is stable across installs and
/// legacy exports referencing them merge cleanly.
pub fn default_categories() -> Vec<Category> {
    let seed: [(&str, &str, &str, &str, f64); 8] = [
        ("1", "Food & Dining", "utensils", "#FF6B6B", 500.0),
        ("2", "Transportation", "car", "#4ECDC4", 200.0),
        ("3", "Shopping", "shopping-bag", "#45B7D1", 300.0),
        ("4", "Entertainment", "film", "#96CEB4", 150.0),
        ("5", "Bills & Utilities", "file-text", "#FFEAA7", 400.0),
        ("6", "Healthcare", "heart", "#DDA0DD", 200.0),
        ("7", "Education", "book", "#98D8C8", 300.0),
        ("8", "Other", "more-horizontal", "#B0B0B0", 100.0),
    ];

    seed.iter()
        .map(|(id, name, icon, color, budget)| Category {
            id: CategoryId::from_string(*id),
            name: (*name).to_string(),
            icon: (*icon).to_string(),
            color: (*color).to_string(),
            budget: Some(*budget),
        })
        .collect()
}
