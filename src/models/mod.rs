//! Core data models for the expense tracker

pub mod expense;
pub mod ids;
pub mod money;

pub use expense::{Expense, ExpenseValidationError};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
