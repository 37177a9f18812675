//! Record Store - in-memory collections persisted on every mutation.
//!
//! Each collection lives in memory as an ordered `Vec` and is written back to
//! the key-value table in full after every insert, delete, update, or
//! replace. Ordering conventions differ per collection and are load-bearing:
//! transactions and notifications prepend (newest first), users and feedback
//! append. "Recent" list views rely on store order when no explicit sort is
//! requested.
//!
//! The execution model is single-threaded and cooperative; stores take
//! `&mut self` for mutation, so the borrow checker enforces the
//! one-in-flight-mutation assumption the original code relied on.

pub mod blob;
mod session;

pub use session::Session;

use crate::errors::Result;
use crate::records::{Feedback, Notification, Record, Theme, Transaction, User};
use sea_orm::ConnectionTrait;
use tracing::debug;

/// Keys of the persisted slots. The strings are the storage contract and
/// must not change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKey {
    /// Finance transactions, newest first
    Transactions,
    /// Finance notifications, newest first
    Notifications,
    /// `{income, expense, balance, savings}` snapshot of the previous month
    PreviousMonthData,
    /// `"dark"`/`"light"`, stored raw
    Theme,
    /// Feedback board accounts, append order
    FeedbackUsers,
    /// Feedback posts, append order
    Feedbacks,
    /// Remembered `{email, password}` pair
    RememberMeUser,
    /// Guest theme preference, stored raw
    GuestTheme,
}

impl StoreKey {
    /// The exact storage key string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transactions => "transactions",
            Self::Notifications => "notifications",
            Self::PreviousMonthData => "previousMonthData",
            Self::Theme => "theme",
            Self::FeedbackUsers => "feedbackUsers",
            Self::Feedbacks => "feedbacks",
            Self::RememberMeUser => "rememberMeUser",
            Self::GuestTheme => "guestTheme",
        }
    }
}

/// Where new records land in a collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertOrder {
    /// Prepend: index 0 is the most recent record
    NewestFirst,
    /// Append: records keep creation order
    OldestFirst,
}

/// An in-memory collection of records, persisted in full after every
/// mutation.
#[derive(Debug)]
pub struct RecordStore<T: Record> {
    key: StoreKey,
    order: InsertOrder,
    items: Vec<T>,
}

impl<T: Record> RecordStore<T> {
    /// Creates an empty store without touching the database.
    #[must_use]
    pub const fn new(key: StoreKey, order: InsertOrder) -> Self {
        Self {
            key,
            order,
            items: Vec::new(),
        }
    }

    /// Loads a store from its persisted slot. A slot that was never written
    /// loads as an empty collection.
    pub async fn load<C>(db: &C, key: StoreKey, order: InsertOrder) -> Result<Self>
    where
        C: ConnectionTrait,
    {
        let items = blob::load_collection(db, key).await?;
        Ok(Self { key, order, items })
    }

    /// All records in store order.
    #[must_use]
    pub fn all(&self) -> &[T] {
        &self.items
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Finds a record by id with a linear scan.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Inserts a record at the position dictated by the store's order
    /// convention, then persists the collection.
    pub async fn insert<C>(&mut self, db: &C, record: T) -> Result<()>
    where
        C: ConnectionTrait,
    {
        match self.order {
            InsertOrder::NewestFirst => self.items.insert(0, record),
            InsertOrder::OldestFirst => self.items.push(record),
        }
        self.persist(db).await
    }

    /// Deletes a record by id and returns it. A missing id is a no-op, not
    /// an error; nothing is persisted in that case.
    pub async fn delete_by_id<C>(&mut self, db: &C, id: &str) -> Result<Option<T>>
    where
        C: ConnectionTrait,
    {
        let Some(index) = self.items.iter().position(|item| item.id() == id) else {
            return Ok(None);
        };

        let removed = self.items.remove(index);
        self.persist(db).await?;
        Ok(Some(removed))
    }

    /// Applies a patch to the record with the given id and persists. Returns
    /// whether a record was found; a missing id is a no-op.
    pub async fn update<C, F>(&mut self, db: &C, id: &str, patch: F) -> Result<bool>
    where
        C: ConnectionTrait,
        F: FnOnce(&mut T),
    {
        let Some(record) = self.items.iter_mut().find(|item| item.id() == id) else {
            return Ok(false);
        };

        patch(record);
        self.persist(db).await?;
        Ok(true)
    }

    /// Applies a patch to every record, then persists once.
    pub async fn update_all<C, F>(&mut self, db: &C, mut patch: F) -> Result<()>
    where
        C: ConnectionTrait,
        F: FnMut(&mut T),
    {
        for record in &mut self.items {
            patch(record);
        }
        self.persist(db).await
    }

    /// Replaces the whole collection and persists once.
    pub async fn replace_all<C>(&mut self, db: &C, items: Vec<T>) -> Result<()>
    where
        C: ConnectionTrait,
    {
        self.items = items;
        self.persist(db).await
    }

    async fn persist<C>(&self, db: &C) -> Result<()>
    where
        C: ConnectionTrait,
    {
        blob::save_collection(db, self.key, &self.items).await?;
        debug!(key = self.key.as_str(), len = self.items.len(), "persisted collection");
        Ok(())
    }
}

/// Loads the finance transaction store (newest first).
pub async fn load_transactions<C>(db: &C) -> Result<RecordStore<Transaction>>
where
    C: ConnectionTrait,
{
    RecordStore::load(db, StoreKey::Transactions, InsertOrder::NewestFirst).await
}

/// Loads the finance notification store (newest first).
pub async fn load_notifications<C>(db: &C) -> Result<RecordStore<Notification>>
where
    C: ConnectionTrait,
{
    RecordStore::load(db, StoreKey::Notifications, InsertOrder::NewestFirst).await
}

/// Loads the feedback-board user store (append order).
pub async fn load_users<C>(db: &C) -> Result<RecordStore<User>>
where
    C: ConnectionTrait,
{
    RecordStore::load(db, StoreKey::FeedbackUsers, InsertOrder::OldestFirst).await
}

/// Loads the feedback store (append order).
pub async fn load_feedbacks<C>(db: &C) -> Result<RecordStore<Feedback>>
where
    C: ConnectionTrait,
{
    RecordStore::load(db, StoreKey::Feedbacks, InsertOrder::OldestFirst).await
}

/// Loads the persisted theme. A never-written or unknown value is light.
pub async fn load_theme<C>(db: &C) -> Result<Theme>
where
    C: ConnectionTrait,
{
    let raw = blob::read_raw(db, StoreKey::Theme).await?;
    Ok(raw.as_deref().map(Theme::parse).unwrap_or_default())
}

/// Persists the theme as a raw string.
pub async fn save_theme<C>(db: &C, theme: Theme) -> Result<()>
where
    C: ConnectionTrait,
{
    blob::write_raw(db, StoreKey::Theme, theme.as_str()).await
}

/// Loads the guest theme preference, if one was saved.
pub async fn load_guest_theme<C>(db: &C) -> Result<Option<String>>
where
    C: ConnectionTrait,
{
    blob::read_raw(db, StoreKey::GuestTheme).await
}

/// Persists the guest theme preference as a raw string.
pub async fn save_guest_theme<C>(db: &C, value: &str) -> Result<()>
where
    C: ConnectionTrait,
{
    blob::write_raw(db, StoreKey::GuestTheme, value).await
}
