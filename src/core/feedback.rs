//! Feedback mutations - post, edit, like, reply, author backfill.
//!
//! Posts are editable and deletable only by their author. Likes are a
//! toggle: the membership of the user id in the like list flips on every
//! call, so repeated toggles can never accumulate duplicates.

use crate::errors::{Error, Result};
use crate::records::{AuthorSnapshot, Feedback, IdSource, Reply, User};
use crate::store::RecordStore;
use chrono::Utc;
use sea_orm::ConnectionTrait;
use tracing::debug;

/// Form input for a new post.
#[derive(Clone, Debug)]
pub struct NewFeedback {
    /// Post title
    pub title: String,
    /// Post body
    pub description: String,
    /// Star rating, 1-5
    pub rating: u8,
    /// Optional screenshot data URL
    pub screenshot: Option<String>,
}

/// Fields an author can change on an existing post.
#[derive(Clone, Debug, Default)]
pub struct FeedbackPatch {
    /// New title, if changing
    pub title: Option<String>,
    /// New body, if changing
    pub description: Option<String>,
    /// New rating, if changing
    pub rating: Option<u8>,
    /// New screenshot, if changing (`Some(None)` removes it)
    pub screenshot: Option<Option<String>>,
}

/// Result of a like toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LikeState {
    /// Whether the user likes the post after the toggle
    pub liked: bool,
    /// Like count after the toggle
    pub count: usize,
}

/// Validates and appends a new post with a fresh author snapshot.
///
/// # Errors
/// [`Error::Validation`] when the title or description is empty or the
/// rating is outside 1-5.
pub async fn post_feedback<C>(
    db: &C,
    feedbacks: &mut RecordStore<Feedback>,
    ids: &mut IdSource,
    author: &User,
    input: NewFeedback,
) -> Result<Feedback>
where
    C: ConnectionTrait,
{
    let title = input.title.trim().to_string();
    let description = input.description.trim().to_string();

    if title.is_empty() || description.is_empty() {
        return Err(Error::Validation {
            message: "Please fill in all fields".to_string(),
        });
    }

    if !(1..=5).contains(&input.rating) {
        return Err(Error::Validation {
            message: "Please select a rating".to_string(),
        });
    }

    let feedback = Feedback {
        id: ids.next(),
        title,
        description,
        rating: input.rating,
        screenshot: input.screenshot,
        author: AuthorSnapshot::of(author),
        likes: Vec::new(),
        replies: Vec::new(),
        timestamp: Utc::now(),
    };

    feedbacks.insert(db, feedback.clone()).await?;
    debug!(id = %feedback.id, author = %author.username, "posted feedback");
    Ok(feedback)
}

/// Applies a patch to a post. Only the author may edit; a missing id is a
/// silent no-op.
pub async fn edit_feedback<C>(
    db: &C,
    feedbacks: &mut RecordStore<Feedback>,
    feedback_id: &str,
    editor_id: &str,
    patch: FeedbackPatch,
) -> Result<()>
where
    C: ConnectionTrait,
{
    let Some(existing) = feedbacks.find_by_id(feedback_id) else {
        return Ok(());
    };

    if existing.author.id != editor_id {
        return Err(Error::NotAuthor {
            id: feedback_id.to_string(),
        });
    }

    feedbacks
        .update(db, feedback_id, |fb| {
            if let Some(title) = patch.title {
                fb.title = title;
            }
            if let Some(description) = patch.description {
                fb.description = description;
            }
            if let Some(rating) = patch.rating {
                fb.rating = rating;
            }
            if let Some(screenshot) = patch.screenshot {
                fb.screenshot = screenshot;
            }
        })
        .await?;

    Ok(())
}

/// Deletes a post. Only the author may delete; a missing id is a silent
/// no-op.
pub async fn delete_feedback<C>(
    db: &C,
    feedbacks: &mut RecordStore<Feedback>,
    feedback_id: &str,
    editor_id: &str,
) -> Result<Option<Feedback>>
where
    C: ConnectionTrait,
{
    let Some(existing) = feedbacks.find_by_id(feedback_id) else {
        return Ok(None);
    };

    if existing.author.id != editor_id {
        return Err(Error::NotAuthor {
            id: feedback_id.to_string(),
        });
    }

    feedbacks.delete_by_id(db, feedback_id).await
}

/// Flips the membership of `user_id` in the post's like list: present
/// removes, absent appends. A missing post returns `None`.
pub async fn toggle_like<C>(
    db: &C,
    feedbacks: &mut RecordStore<Feedback>,
    feedback_id: &str,
    user_id: &str,
) -> Result<Option<LikeState>>
where
    C: ConnectionTrait,
{
    let mut state = None;

    feedbacks
        .update(db, feedback_id, |fb| {
            if let Some(position) = fb.likes.iter().position(|id| id == user_id) {
                fb.likes.remove(position);
                state = Some(LikeState {
                    liked: false,
                    count: fb.likes.len(),
                });
            } else {
                fb.likes.push(user_id.to_string());
                state = Some(LikeState {
                    liked: true,
                    count: fb.likes.len(),
                });
            }
        })
        .await?;

    Ok(state)
}

/// Appends a reply with a fresh author snapshot. A missing post returns
/// `None`.
///
/// # Errors
/// [`Error::Validation`] when the content is empty.
pub async fn add_reply<C>(
    db: &C,
    feedbacks: &mut RecordStore<Feedback>,
    ids: &mut IdSource,
    feedback_id: &str,
    author: &User,
    content: &str,
) -> Result<Option<Reply>>
where
    C: ConnectionTrait,
{
    let content = content.trim();
    if content.is_empty() {
        return Err(Error::Validation {
            message: "Reply cannot be empty".to_string(),
        });
    }

    let reply = Reply {
        id: ids.next(),
        author: AuthorSnapshot::of(author),
        content: content.to_string(),
        timestamp: Utc::now(),
    };

    let mut appended = None;
    feedbacks
        .update(db, feedback_id, |fb| {
            fb.replies.push(reply.clone());
            appended = Some(reply.clone());
        })
        .await?;

    Ok(appended)
}

/// Rewrites every author snapshot owned by `user` - on posts and replies -
/// to the user's current profile. Returns the number of snapshots
/// rewritten. Run this after every profile edit.
pub async fn backfill_author<C>(
    db: &C,
    feedbacks: &mut RecordStore<Feedback>,
    user: &User,
) -> Result<usize>
where
    C: ConnectionTrait,
{
    let snapshot = AuthorSnapshot::of(user);
    let mut rewritten = 0;

    feedbacks
        .update_all(db, |fb| {
            if fb.author.id == user.id {
                fb.author = snapshot.clone();
                rewritten += 1;
            }
            for reply in &mut fb.replies {
                if reply.author.id == user.id {
                    reply.author = snapshot.clone();
                    rewritten += 1;
                }
            }
        })
        .await?;

    debug!(user = %user.id, rewritten, "backfilled author snapshots");
    Ok(rewritten)
}
