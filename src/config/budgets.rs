//! Category budget table loading from config.toml
//!
//! The budget comparison chart pairs a fixed per-category figure against
//! actual spending. The figures ship as hardcoded defaults and can be
//! overridden from a TOML configuration file with the same shape the
//! envelope seeding used.

use crate::errors::{Error, Result};
use crate::records::Category;
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Per-category budget figures
    pub budgets: Vec<CategoryBudget>,
}

/// Budget figure for a single category
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct CategoryBudget {
    /// Category the figure applies to
    pub category: Category,
    /// Budgeted monthly amount
    pub amount: f64,
}

/// The built-in budget table, used when no config file overrides it.
#[must_use]
pub fn default_budgets() -> Vec<CategoryBudget> {
    [
        (Category::Food, 8000.0),
        (Category::Shopping, 6000.0),
        (Category::Transport, 4000.0),
        (Category::Bills, 7000.0),
        (Category::Entertainment, 3000.0),
        (Category::Health, 2000.0),
    ]
    .into_iter()
    .map(|(category, amount)| CategoryBudget { category, amount })
    .collect()
}

/// Loads a budget table from a TOML file.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads the budget table from ./config.toml, falling back to the built-in
/// defaults when the file is absent.
#[must_use]
pub fn load_or_default() -> Vec<CategoryBudget> {
    match load_config("config.toml") {
        Ok(config) => config.budgets,
        Err(_) => default_budgets(),
    }
}
