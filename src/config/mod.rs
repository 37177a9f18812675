/// Category budget table loading from config.toml
pub mod budgets;

/// Database configuration and connection management
pub mod database;
