//! Configuration module for the expense tracker
//!
//! This module provides configuration management including:
//! - Base directory and file path resolution
//! - Optional user settings

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
