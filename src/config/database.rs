//! Database configuration module.
//!
//! The persisted state is a single key-value table in `SQLite`, accessed
//! through `SeaORM`. This module establishes connections and creates the
//! table from the entity definition, so the schema always matches the Rust
//! struct without manual SQL.

use crate::entities::KvEntry;
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from environment variable or returns the default
/// `SQLite` path.
pub fn get_database_url() -> Result<String> {
    Ok(std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://data/moneyboard.sqlite?mode=rwc".to_string()))
}

/// Establishes a connection to the `SQLite` database using the
/// `DATABASE_URL` environment variable.
///
/// Falls back to a default local `SQLite` file if no environment variable is
/// set.
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = get_database_url()?;
    Database::connect(&database_url).await.map_err(Into::into)
}

/// Creates the key-value table from the entity definition.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut kv_table = schema.create_table_from_entity(KvEntry);
    db.execute(builder.build(kv_table.if_not_exists())).await?;

    Ok(())
}
