//! CSV export functionality
//!
//! Writes expense records as spreadsheet-compatible CSV.

use std::io::Write;

use crate::error::ExpenseResult;
use crate::models::Expense;

/// Column header of the export, in column order
pub const CSV_HEADER: [&str; 5] = ["id", "date", "description", "amount", "category"];

/// Export expenses to CSV, one row per expense in the given order
///
/// The header row is always written, even when there are no expenses.
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;

    for expense in expenses {
        csv_writer.write_record([
            expense.id.to_string(),
            expense.date.format("%Y-%m-%d").to_string(),
            expense.description.clone(),
            expense.amount.format_plain(),
            expense.category.clone(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
