//! Key-value entity - Backing table for the persisted collections.
//!
//! Every persisted collection or scalar slot (transactions, notifications,
//! theme, ...) is stored as a single serialized blob under its string key.
//! The table is intentionally schema-free beyond `key`/`value` so the stored
//! shapes stay byte-compatible with the original storage layout.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Key-value database model - one row per persisted slot
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "kv_entries")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Slot key (e.g. `"transactions"`, `"theme"`)
    #[sea_orm(unique)]
    pub key: String,
    /// Serialized slot contents (JSON for collections, raw string for theme slots)
    pub value: String,
    /// When this slot was last written
    pub updated_at: DateTime,
}

/// `KvEntry` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
