//! Expense Tracker - command-line personal expense records
//!
//! This library provides the core functionality for the `expense` binary:
//! appending, listing, deleting, summarizing and exporting expense records
//! kept in a local JSON file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and optional user settings
//! - `error`: Custom error types
//! - `models`: Expense, id and money types
//! - `storage`: JSON file storage layer
//! - `services`: Business logic for the expense operations
//! - `export`: CSV export
//! - `display`: Terminal formatting
//! - `cli`: clap subcommands and their handlers
//! - `logging`: tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::ExpensePaths;
//! use expense_tracker::services::{ExpenseFilter, ExpenseService};
//! use expense_tracker::storage::Storage;
//!
//! let storage = Storage::new(ExpensePaths::new()?);
//! let service = ExpenseService::new(&storage.expenses, "General");
//! let expenses = service.list(&ExpenseFilter::new())?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
