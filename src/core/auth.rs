//! Authentication - local account signup, login, and remember-me.
//!
//! Credential checks are plaintext equality against the user collection,
//! replicating the original single-tab login simulation. The surface is kept
//! behind `verify` so a hosting application can substitute a real credential
//! collaborator without touching the board logic.

use crate::errors::{Error, Result};
use crate::records::{IdSource, RememberedLogin, User};
use crate::store::{RecordStore, StoreKey, blob};
use chrono::Utc;
use sea_orm::ConnectionTrait;
use tracing::debug;

/// Signup form input.
#[derive(Clone, Debug)]
pub struct SignUp {
    /// Desired username, unique across accounts
    pub username: String,
    /// Email, unique across accounts
    pub email: String,
    /// Plaintext password
    pub password: String,
    /// Must equal `password`
    pub confirm_password: String,
    /// Optional avatar data URL
    pub avatar: Option<String>,
}

/// Profile fields a user can edit after signup.
#[derive(Clone, Debug, Default)]
pub struct ProfilePatch {
    /// New username, if changing
    pub username: Option<String>,
    /// New avatar, if changing
    pub avatar: Option<Option<String>>,
    /// New accent color, if changing
    pub accent_color: Option<String>,
    /// New background style, if changing
    pub background: Option<String>,
    /// New mode, if changing
    pub mode: Option<String>,
}

/// Creates an account after validating required fields, the password
/// confirmation, and username/email uniqueness (linear scan, matching how
/// the collection is stored).
///
/// # Errors
/// - [`Error::Validation`] for a missing field or password mismatch
/// - [`Error::DuplicateUser`] when the username or email is taken
pub async fn sign_up<C>(
    db: &C,
    users: &mut RecordStore<User>,
    ids: &mut IdSource,
    input: SignUp,
) -> Result<User>
where
    C: ConnectionTrait,
{
    let username = input.username.trim().to_string();
    let email = input.email.trim().to_string();

    if username.is_empty() || email.is_empty() || input.password.is_empty() {
        return Err(Error::Validation {
            message: "Please fill in all fields".to_string(),
        });
    }

    if input.password != input.confirm_password {
        return Err(Error::Validation {
            message: "Passwords do not match".to_string(),
        });
    }

    if users.all().iter().any(|u| u.username == username) {
        return Err(Error::DuplicateUser {
            field: "username",
            value: username,
        });
    }

    if users.all().iter().any(|u| u.email == email) {
        return Err(Error::DuplicateUser {
            field: "email",
            value: email,
        });
    }

    let user = User {
        id: ids.next(),
        username,
        email,
        password: input.password,
        avatar: input.avatar,
        accent_color: "#6366f1".to_string(),
        background: "default".to_string(),
        mode: "light".to_string(),
        joined: Utc::now(),
    };

    users.insert(db, user.clone()).await?;
    debug!(id = %user.id, "created account");
    Ok(user)
}

/// Plaintext credential check; the first matching user wins.
#[must_use]
pub fn verify<'a>(users: &'a [User], email: &str, password: &str) -> Option<&'a User> {
    users
        .iter()
        .find(|u| u.email == email && u.password == password)
}

/// Applies a profile patch to the user with the given id. A missing id is a
/// silent no-op returning `None`. Changing the username re-checks
/// uniqueness against the other accounts.
///
/// Feedback author snapshots are not touched here; follow up with
/// [`crate::core::feedback::backfill_author`].
pub async fn update_profile<C>(
    db: &C,
    users: &mut RecordStore<User>,
    user_id: &str,
    patch: ProfilePatch,
) -> Result<Option<User>>
where
    C: ConnectionTrait,
{
    if users.find_by_id(user_id).is_none() {
        return Ok(None);
    }

    if let Some(new_username) = &patch.username {
        let taken = users
            .all()
            .iter()
            .any(|u| u.id != user_id && u.username == *new_username);
        if taken {
            return Err(Error::DuplicateUser {
                field: "username",
                value: new_username.clone(),
            });
        }
    }

    users
        .update(db, user_id, |user| {
            if let Some(username) = patch.username {
                user.username = username;
            }
            if let Some(avatar) = patch.avatar {
                user.avatar = avatar;
            }
            if let Some(accent_color) = patch.accent_color {
                user.accent_color = accent_color;
            }
            if let Some(background) = patch.background {
                user.background = background;
            }
            if let Some(mode) = patch.mode {
                user.mode = mode;
            }
        })
        .await?;

    Ok(users.find_by_id(user_id).cloned())
}

/// Persists the remembered `{email, password}` pair.
pub async fn save_remembered<C>(db: &C, email: &str, password: &str) -> Result<()>
where
    C: ConnectionTrait,
{
    let login = RememberedLogin {
        email: email.to_string(),
        password: password.to_string(),
    };
    blob::save_slot(db, StoreKey::RememberMeUser, &login).await
}

/// Loads the remembered login, if one is stored.
pub async fn load_remembered<C>(db: &C) -> Result<Option<RememberedLogin>>
where
    C: ConnectionTrait,
{
    let stored: Option<Option<RememberedLogin>> =
        blob::load_slot(db, StoreKey::RememberMeUser).await?;
    Ok(stored.flatten())
}

/// Forgets the remembered login.
pub async fn clear_remembered<C>(db: &C) -> Result<()>
where
    C: ConnectionTrait,
{
    blob::save_slot(db, StoreKey::RememberMeUser, &Option::<RememberedLogin>::None).await
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::store::load_users;
    use crate::test_utils::setup_test_db;

    fn signup(username: &str, email: &str) -> SignUp {
        SignUp {
            username: username.to_string(),
            email: email.to_string(),
            password: "secret".to_string(),
            confirm_password: "secret".to_string(),
            avatar: None,
        }
    }

    #[tokio::test]
    async fn test_sign_up_then_verify() -> Result<()> {
        let db = setup_test_db().await?;
        let mut users = load_users(&db).await?;
        let mut ids = IdSource::new();

        let user = sign_up(&db, &mut users, &mut ids, signup("asha", "asha@example.com")).await?;
        assert_eq!(user.username, "asha");

        let found = verify(users.all(), "asha@example.com", "secret");
        assert_eq!(found.map(|u| u.id.as_str()), Some(user.id.as_str()));

        assert!(verify(users.all(), "asha@example.com", "wrong").is_none());
        assert!(verify(users.all(), "other@example.com", "secret").is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_password_mismatch_rejected() -> Result<()> {
        let db = setup_test_db().await?;
        let mut users = load_users(&db).await?;
        let mut ids = IdSource::new();

        let mut input = signup("asha", "asha@example.com");
        input.confirm_password = "different".to_string();

        let result = sign_up(&db, &mut users, &mut ids, input).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));
        assert!(users.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_username_and_email_rejected() -> Result<()> {
        let db = setup_test_db().await?;
        let mut users = load_users(&db).await?;
        let mut ids = IdSource::new();

        sign_up(&db, &mut users, &mut ids, signup("asha", "asha@example.com")).await?;

        let dup_name = sign_up(&db, &mut users, &mut ids, signup("asha", "new@example.com")).await;
        assert!(matches!(
            dup_name.unwrap_err(),
            Error::DuplicateUser { field: "username", .. }
        ));

        let dup_email = sign_up(&db, &mut users, &mut ids, signup("ravi", "asha@example.com")).await;
        assert!(matches!(
            dup_email.unwrap_err(),
            Error::DuplicateUser { field: "email", .. }
        ));

        assert_eq!(users.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_first_match_wins_on_duplicate_credentials() -> Result<()> {
        // Uniqueness is only enforced at signup time; a collection that
        // already holds duplicates resolves to the first match.
        let db = setup_test_db().await?;
        let mut users = load_users(&db).await?;

        let mut first = crate::test_utils::sample_user("1", "asha");
        first.email = "same@example.com".to_string();
        let mut second = crate::test_utils::sample_user("2", "ravi");
        second.email = "same@example.com".to_string();

        users.insert(&db, first).await?;
        users.insert(&db, second).await?;

        let found = verify(users.all(), "same@example.com", "secret").unwrap();
        assert_eq!(found.id, "1");
        Ok(())
    }

    #[tokio::test]
    async fn test_update_profile_checks_username_uniqueness() -> Result<()> {
        let db = setup_test_db().await?;
        let mut users = load_users(&db).await?;
        let mut ids = IdSource::new();

        let asha = sign_up(&db, &mut users, &mut ids, signup("asha", "asha@example.com")).await?;
        sign_up(&db, &mut users, &mut ids, signup("ravi", "ravi@example.com")).await?;

        let collision = update_profile(
            &db,
            &mut users,
            &asha.id,
            ProfilePatch {
                username: Some("ravi".to_string()),
                ..Default::default()
            },
        )
        .await;
        assert!(matches!(collision.unwrap_err(), Error::DuplicateUser { .. }));

        let updated = update_profile(
            &db,
            &mut users,
            &asha.id,
            ProfilePatch {
                username: Some("asha_k".to_string()),
                accent_color: Some("#06d6a0".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();
        assert_eq!(updated.username, "asha_k");
        assert_eq!(updated.accent_color, "#06d6a0");

        // Missing user is a silent no-op
        let missing = update_profile(&db, &mut users, "ghost", ProfilePatch::default()).await?;
        assert!(missing.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_remember_me_round_trip() -> Result<()> {
        let db = setup_test_db().await?;
        assert!(load_remembered(&db).await?.is_none());

        save_remembered(&db, "asha@example.com", "secret").await?;
        let stored = load_remembered(&db).await?.unwrap();
        assert_eq!(stored.email, "asha@example.com");
        assert_eq!(stored.password, "secret");

        clear_remembered(&db).await?;
        assert!(load_remembered(&db).await?.is_none());
        Ok(())
    }
}
