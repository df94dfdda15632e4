//! The tracker composition root
//!
//! `Tracker` owns the live expense, category, and currency state and wires
//! the reactive plumbing in a fixed order at startup: load persisted state,
//! construct the cells, attach the persistence listeners, then attach the
//! derived-summary listener. Every mutation therefore persists the full
//! collection first and recomputes the summary second, synchronously, before
//! the call returns.

use std::sync::Arc;

use crate::config::paths::FlowPaths;
use crate::error::{FlowError, FlowResult};
use crate::models::{
    Category, CategoryId, CategoryPatch, Currency, Expense, ExpenseId, ExpensePatch, NewExpense,
};
use crate::storage::Storage;
use crate::store::cell::StateCell;
use crate::store::summary::{summarize, ExpenseSummary};

/// Live application state and the operations that mutate it
pub struct Tracker {
    storage: Arc<Storage>,
    expenses: Arc<StateCell<Vec<Expense>>>,
    categories: Arc<StateCell<Vec<Category>>>,
    currency: Arc<StateCell<Currency>>,
    summary: Arc<StateCell<ExpenseSummary>>,
}

impl Tracker {
    /// Load persisted state and wire up persistence and derived views
    pub fn open(paths: FlowPaths) -> FlowResult<Self> {
        let storage = Arc::new(Storage::new(paths)?);

        let initial_expenses = storage.load_expenses();
        let initial_summary = summarize(&initial_expenses);

        let expenses = Arc::new(StateCell::new(initial_expenses));
        let categories = Arc::new(StateCell::new(storage.load_categories()));
        let currency = Arc::new(StateCell::new(storage.load_currency()));
        let summary = Arc::new(StateCell::new(initial_summary));

        // Persistence listeners first: a mutation is saved before any
        // derived view recomputes.
        {
            let storage = Arc::clone(&storage);
            expenses.subscribe(move |value: &Vec<Expense>| storage.save_expenses(value));
        }
        {
            let storage = Arc::clone(&storage);
            categories.subscribe(move |value: &Vec<Category>| storage.save_categories(value));
        }
        {
            let storage = Arc::clone(&storage);
            currency.subscribe(move |value: &Currency| storage.save_currency(*value));
        }

        {
            let summary = Arc::clone(&summary);
            expenses.subscribe(move |value: &Vec<Expense>| summary.set(summarize(value)));
        }

        Ok(Self {
            storage,
            expenses,
            categories,
            currency,
            summary,
        })
    }

    /// The storage handle backing this tracker
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    // === Queries ===

    /// Snapshot of the expense collection (newest first)
    pub fn expenses(&self) -> Arc<Vec<Expense>> {
        self.expenses.snapshot()
    }

    /// Snapshot of the category collection
    pub fn categories(&self) -> Arc<Vec<Category>> {
        self.categories.snapshot()
    }

    /// Snapshot of the derived aggregates
    pub fn summary(&self) -> Arc<ExpenseSummary> {
        self.summary.snapshot()
    }

    /// The currently selected display currency
    pub fn currency(&self) -> Currency {
        *self.currency.snapshot()
    }

    /// Find an expense by id
    pub fn find_expense(&self, id: &ExpenseId) -> Option<Expense> {
        self.expenses.snapshot().iter().find(|e| &e.id == id).cloned()
    }

    /// Find a category by id
    pub fn find_category(&self, id: &CategoryId) -> Option<Category> {
        self.categories.snapshot().iter().find(|c| &c.id == id).cloned()
    }

    /// Find a category by name (case-insensitive)
    pub fn find_category_by_name(&self, name: &str) -> Option<Category> {
        let name_lower = name.to_lowercase();
        self.categories
            .snapshot()
            .iter()
            .find(|c| c.name.to_lowercase() == name_lower)
            .cloned()
    }

    // === Expense mutations ===

    /// Record a new expense, assigning a fresh id and creation timestamp
    ///
    /// The expense is prepended so the collection stays newest-first.
    pub fn add_expense(&self, new: NewExpense) -> FlowResult<Expense> {
        let expense = Expense::new(new.amount, new.description, new.category, new.date);
        expense.validate().map_err(FlowError::Validation)?;

        let inserted = expense.clone();
        self.expenses.mutate(move |list| list.insert(0, expense));
        Ok(inserted)
    }

    /// Delete an expense by id; a no-op when the id is unknown
    pub fn delete_expense(&self, id: &ExpenseId) {
        let id = id.clone();
        self.expenses.mutate(move |list| list.retain(|e| e.id != id));
    }

    /// Merge partial fields into the matching expense; a no-op when the id
    /// is unknown
    pub fn update_expense(&self, id: &ExpenseId, patch: ExpensePatch) {
        let id = id.clone();
        self.expenses.mutate(move |list| {
            if let Some(expense) = list.iter_mut().find(|e| e.id == id) {
                patch.apply(expense);
            }
        });
    }

    // === Category mutations ===

    /// Add a new category
    pub fn add_category(&self, category: Category) -> FlowResult<Category> {
        category.validate().map_err(FlowError::Validation)?;

        let inserted = category.clone();
        self.categories.mutate(move |list| list.push(category));
        Ok(inserted)
    }

    /// Merge partial fields into the matching category; a no-op when the id
    /// is unknown
    pub fn update_category(&self, id: &CategoryId, patch: CategoryPatch) {
        let id = id.clone();
        self.categories.mutate(move |list| {
            if let Some(category) = list.iter_mut().find(|c| c.id == id) {
                patch.apply(category);
            }
        });
    }

    /// Delete a category by id; a no-op when the id is unknown
    ///
    /// Expenses referencing the category keep their name reference.
    pub fn delete_category(&self, id: &CategoryId) {
        let id = id.clone();
        self.categories.mutate(move |list| list.retain(|c| c.id != id));
    }

    // === Currency ===

    /// Select the display currency
    pub fn set_currency(&self, currency: Currency) {
        self.currency.set(currency);
    }

    /// Cycle USD <-> NGN, returning the new selection
    pub fn toggle_currency(&self) -> Currency {
        let next = self.currency().toggled();
        self.currency.set(next);
        next
    }

    // === Import commit ===

    /// Replace both collections wholesale (the final step of an import)
    pub fn replace_collections(&self, expenses: Vec<Expense>, categories: Vec<Category>) {
        self.expenses.set(expenses);
        if !categories.is_empty() {
            self.categories.set(categories);
        }
    }
}
