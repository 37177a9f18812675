//! Feedback export and import.
//!
//! Export produces a `{user, feedbacks}` JSON document with the feedback
//! list filtered to the exporting user's authored posts. Import validates
//! only the presence of both top-level keys, reassigns fresh ids and author
//! snapshots on every imported post, and replaces (does not merge) the
//! importing user's existing authored set.

use crate::errors::{Error, Result};
use crate::records::{AuthorSnapshot, Feedback, IdSource, User};
use crate::store::RecordStore;
use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};
use tracing::info;

/// The exported document shape.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransferDocument {
    /// The exporting user
    pub user: User,
    /// The user's authored posts
    pub feedbacks: Vec<Feedback>,
}

/// Builds the export document for a user.
#[must_use]
pub fn export_user_feedback(user: &User, feedbacks: &[Feedback]) -> TransferDocument {
    TransferDocument {
        user: user.clone(),
        feedbacks: feedbacks
            .iter()
            .filter(|fb| fb.author.id == user.id)
            .cloned()
            .collect(),
    }
}

/// Serializes the export document to JSON.
pub fn export_json(user: &User, feedbacks: &[Feedback]) -> Result<String> {
    serde_json::to_string_pretty(&export_user_feedback(user, feedbacks)).map_err(Into::into)
}

/// Imports a document for `importer`, replacing their authored posts.
///
/// Validation is a presence check on the two top-level keys only; nested
/// records are taken as-is apart from the id and author reassignment.
/// Returns the number of imported posts.
///
/// # Errors
/// [`Error::Import`] when the document is not an object or a top-level key
/// is missing.
pub async fn import_user_feedback<C>(
    db: &C,
    feedbacks: &mut RecordStore<Feedback>,
    ids: &mut IdSource,
    importer: &User,
    json: &str,
) -> Result<usize>
where
    C: ConnectionTrait,
{
    let document: serde_json::Value = serde_json::from_str(json)?;
    let object = document.as_object().ok_or_else(|| Error::Import {
        message: "Document must be a JSON object".to_string(),
    })?;

    for key in ["user", "feedbacks"] {
        if !object.contains_key(key) {
            return Err(Error::Import {
                message: format!("Missing top-level key \"{key}\""),
            });
        }
    }

    let imported: Vec<Feedback> = serde_json::from_value(object["feedbacks"].clone())?;
    let snapshot = AuthorSnapshot::of(importer);

    let mut next: Vec<Feedback> = feedbacks
        .all()
        .iter()
        .filter(|fb| fb.author.id != importer.id)
        .cloned()
        .collect();

    let count = imported.len();
    for mut fb in imported {
        fb.id = ids.next();
        fb.author = snapshot.clone();
        next.push(fb);
    }

    feedbacks.replace_all(db, next).await?;
    info!(user = %importer.id, count, "imported feedback set");
    Ok(count)
}
