//! Export module for the expense tracker
//!
//! Provides CSV export of the full expense store.

pub mod csv;

pub use self::csv::{export_expenses_csv, CSV_HEADER};
