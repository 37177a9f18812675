//! Session state - the logged-in user snapshot.
//!
//! Session state is scoped to the process and never persisted; it is the
//! Rust counterpart of the original session-storage `currentUser` entry.

use crate::records::User;

/// Holds the current user for the lifetime of the session.
#[derive(Debug, Default)]
pub struct Session {
    current_user: Option<User>,
}

impl Session {
    /// Creates a logged-out session.
    #[must_use]
    pub const fn new() -> Self {
        Self { current_user: None }
    }

    /// Stores the given user as the session user.
    pub fn login(&mut self, user: User) {
        self.current_user = Some(user);
    }

    /// Clears the session user.
    pub fn logout(&mut self) {
        self.current_user = None;
    }

    /// The current user, if logged in.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Whether a user is logged in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }
}
