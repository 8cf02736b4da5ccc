//! Session store contracts and in-memory implementation.
//!
//! # Responsibility
//! - Hold the registered-user list and the current-session slot.
//! - Enforce store-level invariants (email uniqueness, at most one
//!   current user) independently of service orchestration.
//!
//! # Invariants
//! - At most one user is registered per distinct email.
//! - `current` always refers to a registered user or is absent.
//! - Preference updates mutate the registered record, so the current
//!   snapshot and the user list never diverge.

use crate::model::user::{PreferencesPatch, User, UserId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SessionRepoResult<T> = Result<T, SessionRepoError>;

/// Store-level error for session state mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionRepoError {
    /// A user with this email is already registered.
    DuplicateEmail(String),
    /// The given ID does not belong to any registered user.
    UnknownUser(UserId),
    /// A mutation required a current session, but none is active.
    NoActiveSession,
}

impl Display for SessionRepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateEmail(email) => write!(f, "email already registered: {email}"),
            Self::UnknownUser(id) => write!(f, "user not found: {id}"),
            Self::NoActiveSession => write!(f, "no active session"),
        }
    }
}

impl Error for SessionRepoError {}

/// Store interface for session lifecycle operations.
pub trait SessionRepository {
    /// Registers a new user. Fails when the email is already taken.
    fn insert_user(&mut self, user: User) -> SessionRepoResult<()>;
    /// Looks up a registered user by exact email match.
    fn find_by_email(&self, email: &str) -> Option<User>;
    /// Loads a registered user into the current-session slot.
    fn set_current(&mut self, id: UserId) -> SessionRepoResult<()>;
    /// Clears the current-session slot. Idempotent.
    fn clear_current(&mut self);
    /// Returns a snapshot of the current user, if any.
    fn current_user(&self) -> Option<User>;
    /// Merges a partial preference update into the current user's
    /// stored record and returns the updated snapshot.
    fn update_current_preferences(&mut self, patch: &PreferencesPatch) -> SessionRepoResult<User>;
    /// Number of registered users.
    fn user_count(&self) -> usize;
}

/// In-memory session store.
///
/// Process-lifetime only; nothing is persisted across restarts. Stands
/// in for a real backend session service.
#[derive(Debug, Default)]
pub struct MemorySessionRepository {
    /// Registered users in insertion order.
    users: Vec<User>,
    /// ID of the user holding the current session, if any.
    current: Option<UserId>,
}

impl MemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: UserId) -> Option<usize> {
        self.users.iter().position(|user| user.id == id)
    }
}

impl SessionRepository for MemorySessionRepository {
    fn insert_user(&mut self, user: User) -> SessionRepoResult<()> {
        if self.users.iter().any(|existing| existing.email == user.email) {
            return Err(SessionRepoError::DuplicateEmail(user.email));
        }
        self.users.push(user);
        Ok(())
    }

    fn find_by_email(&self, email: &str) -> Option<User> {
        // Exact match by design of the mock contract; no normalization.
        self.users.iter().find(|user| user.email == email).cloned()
    }

    fn set_current(&mut self, id: UserId) -> SessionRepoResult<()> {
        if self.position(id).is_none() {
            return Err(SessionRepoError::UnknownUser(id));
        }
        self.current = Some(id);
        Ok(())
    }

    fn clear_current(&mut self) {
        self.current = None;
    }

    fn current_user(&self) -> Option<User> {
        let id = self.current?;
        self.position(id).map(|index| self.users[index].clone())
    }

    fn update_current_preferences(&mut self, patch: &PreferencesPatch) -> SessionRepoResult<User> {
        let id = self.current.ok_or(SessionRepoError::NoActiveSession)?;
        let index = self
            .position(id)
            .ok_or(SessionRepoError::UnknownUser(id))?;
        self.users[index].preferences.apply(patch);
        Ok(self.users[index].clone())
    }

    fn user_count(&self) -> usize {
        self.users.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{MemorySessionRepository, SessionRepoError, SessionRepository};
    use crate::model::user::{PreferencesPatch, User};

    #[test]
    fn insert_rejects_duplicate_email() {
        let mut repo = MemorySessionRepository::new();
        repo.insert_user(User::new("a@example.com", "A"))
            .expect("first insert should succeed");

        let err = repo
            .insert_user(User::new("a@example.com", "Other A"))
            .expect_err("duplicate email must be rejected");
        assert_eq!(
            err,
            SessionRepoError::DuplicateEmail("a@example.com".to_string())
        );
        assert_eq!(repo.user_count(), 1);
    }

    #[test]
    fn email_lookup_is_case_sensitive() {
        let mut repo = MemorySessionRepository::new();
        repo.insert_user(User::new("a@example.com", "A"))
            .expect("insert should succeed");

        assert!(repo.find_by_email("a@example.com").is_some());
        assert!(repo.find_by_email("A@example.com").is_none());
    }

    #[test]
    fn set_current_rejects_unknown_user() {
        let mut repo = MemorySessionRepository::new();
        let unregistered = User::new("ghost@example.com", "Ghost");

        let err = repo
            .set_current(unregistered.id)
            .expect_err("unknown id must be rejected");
        assert!(matches!(err, SessionRepoError::UnknownUser(id) if id == unregistered.id));
        assert!(repo.current_user().is_none());
    }

    #[test]
    fn preference_update_mutates_registered_record() {
        let mut repo = MemorySessionRepository::new();
        let user = User::new("a@example.com", "A");
        let id = user.id;
        repo.insert_user(user).expect("insert should succeed");
        repo.set_current(id).expect("set current should succeed");

        let patch = PreferencesPatch {
            email_notifications: Some(false),
            ..PreferencesPatch::default()
        };
        let updated = repo
            .update_current_preferences(&patch)
            .expect("update should succeed");
        assert!(!updated.preferences.email_notifications);

        // Registered record and current snapshot stay consistent.
        let looked_up = repo
            .find_by_email("a@example.com")
            .expect("user should still be registered");
        assert!(!looked_up.preferences.email_notifications);
    }

    #[test]
    fn preference_update_without_session_fails() {
        let mut repo = MemorySessionRepository::new();
        let err = repo
            .update_current_preferences(&PreferencesPatch::default())
            .expect_err("no session must be rejected");
        assert_eq!(err, SessionRepoError::NoActiveSession);
    }
}
