//! Blob persistence - reads and writes whole slots in the key-value table.
//!
//! Collections are serialized as JSON arrays; the theme slots are raw
//! strings. A write is an upsert on the slot key. There is no batching and
//! no partial-failure recovery: callers persist after every mutation and a
//! failed write propagates as an error.

use crate::entities::{KvColumn, KvEntry, kv_entry};
use crate::errors::Result;
use crate::store::StoreKey;
use chrono::Utc;
use sea_orm::{ConnectionTrait, Set, prelude::*};
use serde::{Serialize, de::DeserializeOwned};

/// Reads the raw string stored under a key, if any.
pub async fn read_raw<C>(db: &C, key: StoreKey) -> Result<Option<String>>
where
    C: ConnectionTrait,
{
    let entry = KvEntry::find()
        .filter(KvColumn::Key.eq(key.as_str()))
        .one(db)
        .await?;

    Ok(entry.map(|e| e.value))
}

/// Writes a raw string under a key, inserting or updating the slot row.
pub async fn write_raw<C>(db: &C, key: StoreKey, value: &str) -> Result<()>
where
    C: ConnectionTrait,
{
    let now = Utc::now().naive_utc();

    let existing = KvEntry::find()
        .filter(KvColumn::Key.eq(key.as_str()))
        .one(db)
        .await?;

    if let Some(entry) = existing {
        let mut active_model: kv_entry::ActiveModel = entry.into();
        active_model.value = Set(value.to_string());
        active_model.updated_at = Set(now);
        active_model.update(db).await?;
    } else {
        let new_entry = kv_entry::ActiveModel {
            key: Set(key.as_str().to_string()),
            value: Set(value.to_string()),
            updated_at: Set(now),
            ..Default::default()
        };
        new_entry.insert(db).await?;
    }

    Ok(())
}

/// Loads a JSON-serialized collection. A missing key is an empty collection.
pub async fn load_collection<C, T>(db: &C, key: StoreKey) -> Result<Vec<T>>
where
    C: ConnectionTrait,
    T: DeserializeOwned,
{
    match read_raw(db, key).await? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(Vec::new()),
    }
}

/// Saves a collection as a JSON array under its key.
pub async fn save_collection<C, T>(db: &C, key: StoreKey, items: &[T]) -> Result<()>
where
    C: ConnectionTrait,
    T: Serialize,
{
    let raw = serde_json::to_string(items)?;
    write_raw(db, key, &raw).await
}

/// Loads a single JSON-serialized value, if the slot has ever been written.
pub async fn load_slot<C, T>(db: &C, key: StoreKey) -> Result<Option<T>>
where
    C: ConnectionTrait,
    T: DeserializeOwned,
{
    match read_raw(db, key).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Saves a single value as JSON under its key.
pub async fn save_slot<C, T>(db: &C, key: StoreKey, value: &T) -> Result<()>
where
    C: ConnectionTrait,
    T: Serialize,
{
    let raw = serde_json::to_string(value)?;
    write_raw(db, key, &raw).await
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_read_missing_key() -> Result<()> {
        let db = setup_test_db().await?;
        assert!(read_raw(&db, StoreKey::Theme).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_write_then_read_raw() -> Result<()> {
        let db = setup_test_db().await?;

        write_raw(&db, StoreKey::Theme, "dark").await?;
        assert_eq!(read_raw(&db, StoreKey::Theme).await?.as_deref(), Some("dark"));

        // Second write updates in place
        write_raw(&db, StoreKey::Theme, "light").await?;
        assert_eq!(
            read_raw(&db, StoreKey::Theme).await?.as_deref(),
            Some("light")
        );

        let rows = KvEntry::find()
            .filter(KvColumn::Key.eq(StoreKey::Theme.as_str()))
            .all(&db)
            .await?;
        assert_eq!(rows.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_collection_round_trip() -> Result<()> {
        let db = setup_test_db().await?;

        let missing: Vec<String> = load_collection(&db, StoreKey::Feedbacks).await?;
        assert!(missing.is_empty());

        let items = vec!["a".to_string(), "b".to_string()];
        save_collection(&db, StoreKey::Feedbacks, &items).await?;

        let loaded: Vec<String> = load_collection(&db, StoreKey::Feedbacks).await?;
        assert_eq!(loaded, items);

        Ok(())
    }
}
