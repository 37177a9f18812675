//! User record - local accounts for the feedback board.
//!
//! Credentials are stored and compared in plaintext, replicating the original
//! single-tab login simulation. Any deployment with real users must swap
//! [`crate::core::auth`] for a proper credential collaborator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A local user account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Generation-time string id
    pub id: String,
    /// Unique display name, enforced by linear scan at signup
    #[serde(default)]
    pub username: String,
    /// Unique email, enforced by linear scan at signup
    #[serde(default)]
    pub email: String,
    /// Plaintext password (inherited design, see module docs)
    #[serde(default)]
    pub password: String,
    /// Optional avatar as a data URL
    #[serde(default)]
    pub avatar: Option<String>,
    /// Preferred accent color (hex string)
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
    /// Preferred background style
    #[serde(default = "default_background")]
    pub background: String,
    /// Preferred mode (`"light"`/`"dark"`)
    #[serde(default = "default_mode")]
    pub mode: String,
    /// When the account was created
    #[serde(with = "chrono::serde::ts_milliseconds", default = "Utc::now")]
    pub joined: DateTime<Utc>,
}

fn default_accent_color() -> String {
    "#6366f1".to_string()
}

fn default_background() -> String {
    "default".to_string()
}

fn default_mode() -> String {
    "light".to_string()
}

impl crate::records::Record for User {
    fn id(&self) -> &str {
        &self.id
    }
}

/// The `{email, password}` pair persisted under `rememberMeUser`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RememberedLogin {
    /// Remembered email
    pub email: String,
    /// Remembered plaintext password
    pub password: String,
}
