//! Expense CLI commands
//!
//! Implements the add, list, delete, summary and export commands.

use std::fs::File;
use std::io::BufWriter;

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_expense_table, format_summary};
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::export_expenses_csv;
use crate::models::{ExpenseId, Money};
use crate::services::{CreateExpenseInput, ExpenseFilter, ExpenseService};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense dated today
    Add {
        /// What the money was spent on
        #[arg(long)]
        description: String,
        /// Amount spent (e.g., "3.50")
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
        /// Category name (defaults to "General")
        #[arg(long)]
        category: Option<String>,
    },
    /// List expenses
    List {
        /// Only show expenses in this category (exact match)
        #[arg(long)]
        category: Option<String>,
    },
    /// Delete an expense
    Delete {
        /// Expense ID
        #[arg(long)]
        id: ExpenseId,
    },
    /// Show total expenses
    Summary {
        /// Month number (1-12) of the current year
        #[arg(long, allow_hyphen_values = true)]
        month: Option<i64>,
    },
    /// Export all expenses to expenses_export.csv
    Export,
}

/// Handle an expense command
///
/// Validation and not-found errors are printed and the command still
/// completes; any other error is returned.
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    match run_expense_command(storage, settings, cmd) {
        Err(e) if e.is_user_error() => {
            println!("Error: {}", e);
            Ok(())
        }
        result => result,
    }
}

fn run_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(&storage.expenses, settings.default_category.clone());

    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            category,
        } => {
            let amount =
                Money::parse(&amount).map_err(|e| ExpenseError::Validation(e.to_string()))?;

            let expense = service.add(CreateExpenseInput {
                description,
                amount,
                category,
            })?;

            println!("Expense added successfully (ID: {})", expense.id);
        }

        ExpenseCommands::List { category } => {
            let filter = ExpenseFilter { category };
            let expenses = service.list(&filter)?;
            print!(
                "{}",
                format_expense_table(&expenses, &settings.currency_symbol)
            );
        }

        ExpenseCommands::Delete { id } => {
            service.delete(id)?;
            println!("Expense deleted successfully");
        }

        ExpenseCommands::Summary { month } => {
            let summary = service.summarize(month)?;
            println!("{}", format_summary(&summary, &settings.currency_symbol));
        }

        ExpenseCommands::Export => {
            let expenses = service.list(&ExpenseFilter::new())?;
            let output = storage.paths().export_file();

            let file = File::create(&output).map_err(|e| {
                ExpenseError::Export(format!(
                    "Failed to create file {}: {}",
                    output.display(),
                    e
                ))
            })?;
            export_expenses_csv(&expenses, BufWriter::new(file))?;

            println!(
                "Expenses exported to {} ({} records)",
                output.display(),
                expenses.len()
            );
        }
    }

    Ok(())
}
