//! Feedback record - posts on the review board.
//!
//! The author is an embedded snapshot of user fields taken at creation time,
//! not a live foreign key. Snapshots go stale when the user edits their
//! profile until [`crate::core::feedback::backfill_author`] rewrites them.
//! `likes` holds each user id at most once; the invariant is maintained by
//! the toggle operation, not by set semantics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::records::User;

/// Denormalized copy of user-identifying fields, embedded at creation time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthorSnapshot {
    /// Id of the user this snapshot was taken from
    #[serde(default)]
    pub id: String,
    /// Username at snapshot time
    #[serde(default)]
    pub username: String,
    /// Avatar at snapshot time
    #[serde(default)]
    pub avatar: Option<String>,
}

impl AuthorSnapshot {
    /// Takes a fresh snapshot of a user.
    #[must_use]
    pub fn of(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

/// A reply under a feedback item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    /// Generation-time string id
    pub id: String,
    /// Snapshot of the replying user
    #[serde(default)]
    pub author: AuthorSnapshot,
    /// Reply text
    #[serde(default)]
    pub content: String,
    /// Creation instant
    #[serde(with = "chrono::serde::ts_milliseconds", default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

/// A post on the feedback board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    /// Generation-time string id
    #[serde(default)]
    pub id: String,
    /// Post title
    #[serde(default)]
    pub title: String,
    /// Post body
    #[serde(default)]
    pub description: String,
    /// Star rating, 1-5
    #[serde(default)]
    pub rating: u8,
    /// Optional screenshot as a data URL
    #[serde(default)]
    pub screenshot: Option<String>,
    /// Snapshot of the posting user
    #[serde(default)]
    pub author: AuthorSnapshot,
    /// Ids of users who liked this post, each present at most once
    #[serde(default)]
    pub likes: Vec<String>,
    /// Ordered replies, append-only
    #[serde(default)]
    pub replies: Vec<Reply>,
    /// Creation instant
    #[serde(with = "chrono::serde::ts_milliseconds", default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl Feedback {
    /// Number of likes on this post.
    #[must_use]
    pub fn like_count(&self) -> usize {
        self.likes.len()
    }

    /// Whether the given user has liked this post.
    #[must_use]
    pub fn liked_by(&self, user_id: &str) -> bool {
        self.likes.iter().any(|id| id == user_id)
    }
}

impl crate::records::Record for Feedback {
    fn id(&self) -> &str {
        &self.id
    }
}
