//! User settings for the expense tracker
//!
//! Settings are optional: when no settings file exists every field takes its
//! default value.

use serde::Deserialize;

use super::paths::ExpensePaths;
use crate::error::ExpenseError;

/// Category assigned when `add` is called without one
pub const DEFAULT_CATEGORY: &str = "General";

/// User settings for the expense tracker
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Category used when none is supplied
    #[serde(default = "default_category")]
    pub default_category: String,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            default_category: default_category(),
        }
    }
}

impl Settings {
    /// Load settings from disk, falling back to defaults if the file doesn't exist
    pub fn load_or_default(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ExpenseError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| ExpenseError::Config(format!("Failed to parse settings file: {}", e)))
    }
}
