//! Storage layer for the expense tracker
//!
//! Provides JSON file storage with atomic writes and lenient reads.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseStore;

use crate::config::paths::ExpensePaths;

/// Main storage coordinator giving access to the store and the paths it lives under
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseStore,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: ExpensePaths) -> Self {
        Self {
            expenses: ExpenseStore::new(paths.expenses_file()),
            paths,
        }
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }
}
