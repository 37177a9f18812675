//! Domain records - the persisted shapes for both applications.
//!
//! Records are plain serde structs whose serialized form stays compatible
//! with the original storage layout: `camelCase`/`type` field names where the
//! stored JSON uses them, millisecond timestamps, `YYYY-MM-DD` calendar
//! dates. Optional collections default to empty and numeric fields to zero so
//! that a partially malformed stored blob still loads and aggregates.

pub mod feedback;
pub mod notification;
pub mod transaction;
pub mod user;

pub use feedback::{AuthorSnapshot, Feedback, Reply};
pub use notification::{Notification, NotificationKind};
pub use transaction::{Category, Transaction, TransactionKind};
pub use user::{RememberedLogin, User};

use chrono::Utc;
use serde::{Serialize, de::DeserializeOwned};

/// A record that can live in a [`crate::store::RecordStore`].
///
/// The id is a generation-time string (millisecond timestamp in the original
/// data); stores look records up by it with a linear scan.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync {
    /// Unique id of this record within its collection.
    fn id(&self) -> &str;
}

/// Issues generation-time string ids.
///
/// Ids are millisecond timestamps, matching the ids found in existing stored
/// data. Two records created within the same millisecond get consecutive
/// values so ids stay unique within a single process.
#[derive(Debug, Default)]
pub struct IdSource {
    last_ms: i64,
}

impl IdSource {
    /// Creates an id source with no issued ids.
    #[must_use]
    pub const fn new() -> Self {
        Self { last_ms: 0 }
    }

    /// Returns a fresh id, strictly greater than any previously issued one.
    pub fn next(&mut self) -> String {
        let mut ms = Utc::now().timestamp_millis();
        if ms <= self.last_ms {
            ms = self.last_ms + 1;
        }
        self.last_ms = ms;
        ms.to_string()
    }
}

/// Color theme, persisted as a raw `"dark"`/`"light"` string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// Light theme (the default for unknown stored values)
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl Theme {
    /// The exact string persisted under the `theme` key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a stored theme string. Anything other than `"dark"` is light,
    /// matching the original check.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == "dark" { Self::Dark } else { Self::Light }
    }
}
