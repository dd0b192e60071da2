//! Expense store backed by expenses.json
//!
//! The store holds no state between calls: every `load` reads the whole file
//! and every `save` rewrites it.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ExpenseError;
use crate::models::Expense;

use super::file_io::{read_json_or_default, write_json_atomic};

/// Persistence for the ordered sequence of expense records
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all expenses in stored order
    ///
    /// A missing or unparseable file yields an empty list.
    pub fn load(&self) -> Result<Vec<Expense>, ExpenseError> {
        let expenses: Vec<Expense> = read_json_or_default(&self.path)?;
        debug!(path = %self.path.display(), count = expenses.len(), "loaded expenses");
        Ok(expenses)
    }

    /// Overwrite the file with the given expenses
    pub fn save(&self, expenses: &[Expense]) -> Result<(), ExpenseError> {
        write_json_atomic(&self.path, expenses)?;
        debug!(path = %self.path.display(), count = expenses.len(), "saved expenses");
        Ok(())
    }
}
