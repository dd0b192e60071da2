//! Expense service
//!
//! Business logic for the expense operations. Every operation reloads the
//! store; mutating operations write it back in full.

use chrono::{Datelike, Local, Month, NaiveDate};
use tracing::info;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, Money};
use crate::storage::ExpenseStore;

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub description: String,
    pub amount: Money,
    /// Falls back to the service's default category when `None`
    pub category: Option<String>,
}

/// Filter for listing expenses
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Exact, case-sensitive category match; an empty string matches everything
    pub category: Option<String>,
}

impl ExpenseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    fn matches(&self, expense: &Expense) -> bool {
        self.category
            .as_deref()
            .filter(|category| !category.is_empty())
            .map_or(true, |category| expense.category == category)
    }
}

/// Result of a summary operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseSummary {
    /// Month the total is restricted to, if any
    pub month: Option<Month>,
    pub total: Money,
    /// Number of expenses included in the total
    pub count: usize,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    store: &'a ExpenseStore,
    default_category: String,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(store: &'a ExpenseStore, default_category: impl Into<String>) -> Self {
        Self {
            store,
            default_category: default_category.into(),
        }
    }

    /// Record a new expense dated today
    pub fn add(&self, input: CreateExpenseInput) -> ExpenseResult<Expense> {
        self.add_on(input, Local::now().date_naive())
    }

    /// Record a new expense with an explicit date
    pub fn add_on(&self, input: CreateExpenseInput, date: NaiveDate) -> ExpenseResult<Expense> {
        let category = input
            .category
            .unwrap_or_else(|| self.default_category.clone());

        let mut expense = Expense::new(
            ExpenseId::FIRST,
            date,
            input.description,
            input.amount,
            category,
        );
        expense
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let mut expenses = self.store.load()?;
        expense.id = ExpenseId::next_after(expenses.iter().map(|e| e.id)).ok_or_else(|| {
            ExpenseError::Validation("No expense IDs left to assign.".into())
        })?;

        expenses.push(expense.clone());
        self.store.save(&expenses)?;

        info!(id = %expense.id, amount = %expense.amount, "expense added");
        Ok(expense)
    }

    /// List expenses matching the filter, in stored order
    pub fn list(&self, filter: &ExpenseFilter) -> ExpenseResult<Vec<Expense>> {
        let mut expenses = self.store.load()?;
        expenses.retain(|e| filter.matches(e));
        Ok(expenses)
    }

    /// Delete an expense by ID, returning the removed record
    pub fn delete(&self, id: ExpenseId) -> ExpenseResult<Expense> {
        let mut expenses = self.store.load()?;

        let index = expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| ExpenseError::expense_not_found(id))?;

        let removed = expenses.remove(index);
        self.store.save(&expenses)?;

        info!(expense = %removed, "expense deleted");
        Ok(removed)
    }

    /// Total all expenses, or those in a month of the current year
    pub fn summarize(&self, month: Option<i64>) -> ExpenseResult<ExpenseSummary> {
        self.summarize_for_year(month, Local::now().year())
    }

    /// Total all expenses, or those in a month of the given year
    pub fn summarize_for_year(
        &self,
        month: Option<i64>,
        year: i32,
    ) -> ExpenseResult<ExpenseSummary> {
        let month = month.map(parse_month).transpose()?;
        let expenses = self.store.load()?;

        let included: Vec<&Expense> = match month {
            Some(m) => expenses
                .iter()
                .filter(|e| e.is_in_month(year, m.number_from_month()))
                .collect(),
            None => expenses.iter().collect(),
        };

        let total = Money::checked_sum(included.iter().map(|e| e.amount)).ok_or_else(|| {
            ExpenseError::Validation("Total is too large to compute.".into())
        })?;

        Ok(ExpenseSummary {
            month,
            total,
            count: included.len(),
        })
    }
}

/// Convert a month number (1-12) to a `Month`
fn parse_month(number: i64) -> ExpenseResult<Month> {
    u8::try_from(number)
        .ok()
        .and_then(|n| Month::try_from(n).ok())
        .ok_or_else(|| ExpenseError::Validation("Month must be between 1 and 12.".into()))
}
