//! Notification feed maintenance.
//!
//! Notifications are created by the transaction operations; this module only
//! flips read flags and bulk-clears the feed. Individual deletion does not
//! exist.

use crate::errors::Result;
use crate::records::Notification;
use crate::store::RecordStore;
use sea_orm::ConnectionTrait;

/// Marks one notification as read. A missing id is a silent no-op; returns
/// whether the notification was found.
pub async fn mark_read<C>(
    db: &C,
    notifications: &mut RecordStore<Notification>,
    notification_id: &str,
) -> Result<bool>
where
    C: ConnectionTrait,
{
    notifications
        .update(db, notification_id, |n| n.read = true)
        .await
}

/// Marks the whole feed as read, as happens when the dropdown opens.
pub async fn mark_all_read<C>(
    db: &C,
    notifications: &mut RecordStore<Notification>,
) -> Result<()>
where
    C: ConnectionTrait,
{
    notifications.update_all(db, |n| n.read = true).await
}

/// Empties the feed.
pub async fn clear_all<C>(db: &C, notifications: &mut RecordStore<Notification>) -> Result<()>
where
    C: ConnectionTrait,
{
    notifications.replace_all(db, Vec::new()).await
}

/// Number of unread notifications, for the bell badge.
#[must_use]
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}
