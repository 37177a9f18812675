//! Notification record - activity feed entries for the finance tracker.
//!
//! A notification is created as a side effect of every transaction mutation,
//! carries a snapshot of the transaction involved, and is only ever mutated
//! to flip its `read` flag. Individual deletion is not supported; the feed is
//! bulk-cleared.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::records::Transaction;

/// What kind of mutation produced the notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// An income transaction was added
    Income,
    /// An expense transaction was added
    Expense,
    /// A transaction was deleted
    Delete,
}

/// One entry in the notification feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Generation-time string id
    pub id: String,
    /// What produced this notification
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Short heading, e.g. `"Income Added"`
    #[serde(default)]
    pub title: String,
    /// Full message including the formatted amount
    #[serde(default)]
    pub message: String,
    /// Snapshot of the transaction involved, taken at notification time
    #[serde(default)]
    pub transaction: Option<Transaction>,
    /// Creation instant, used for relative-age display
    #[serde(with = "chrono::serde::ts_milliseconds", default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
    /// Whether the user has seen this notification
    #[serde(default)]
    pub read: bool,
}

impl crate::records::Record for Notification {
    fn id(&self) -> &str {
        &self.id
    }
}
