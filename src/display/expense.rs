//! Expense display formatting
//!
//! Fixed-width tables and summary lines for terminal output.

use crate::models::Expense;
use crate::services::ExpenseSummary;

const RULE_WIDTH: usize = 55;

/// Format expenses as a fixed-width table
///
/// The header and rule are always present; an empty slice yields just those.
pub fn format_expense_table(expenses: &[Expense], currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format_columns("ID", "Date", "Description", "Amount", "Category"));
    output.push_str(&"-".repeat(RULE_WIDTH));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, currency_symbol));
    }

    output
}

/// Format a single table row
pub fn format_expense_row(expense: &Expense, currency_symbol: &str) -> String {
    format_columns(
        &expense.id.to_string(),
        &expense.date.format("%Y-%m-%d").to_string(),
        &expense.description,
        &expense.amount.format_with_symbol(currency_symbol),
        &expense.category,
    )
}

fn format_columns(id: &str, date: &str, description: &str, amount: &str, category: &str) -> String {
    let line = format!(
        "{:<4} {:<12} {:<15} {:<10} {:<10}",
        id, date, description, amount, category
    );
    format!("{}\n", line.trim_end())
}

/// Format a summary total, naming the month when the total is restricted to one
pub fn format_summary(summary: &ExpenseSummary, currency_symbol: &str) -> String {
    let total = summary.total.format_with_symbol(currency_symbol);
    match summary.month {
        Some(month) => format!("Total expenses for {}: {}", month.name(), total),
        None => format!("Total expenses: {}", total),
    }
}
