//! Auth session use-case service.
//!
//! # Responsibility
//! - Provide the sign-up/sign-in/sign-out/preferences contract to the
//!   app shell.
//! - Broadcast session changes to subscribed consumers.
//!
//! # Invariants
//! - Mock contract: passwords are accepted but never stored or
//!   verified.
//! - Failed operations leave the session store unchanged.
//! - Every successful mutation publishes exactly one session event.

use crate::model::user::{PreferencesPatch, User};
use crate::repo::session_repo::{SessionRepoError, SessionRepository};
use crate::service::{simulate_latency, LatencyProfile};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::mpsc::{channel, Receiver, Sender};

pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-layer error for session lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Sign-up attempted with an already-registered email.
    DuplicateUser(String),
    /// Sign-in attempted with an unregistered email.
    InvalidCredentials,
    /// Preference update attempted with no active session.
    NoActiveSession,
    /// Session store invariant violation surfaced from below.
    Store(SessionRepoError),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateUser(email) => write!(f, "user already exists: {email}"),
            Self::InvalidCredentials => write!(f, "invalid credentials"),
            Self::NoActiveSession => write!(f, "no user logged in"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AuthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SessionRepoError> for AuthError {
    fn from(value: SessionRepoError) -> Self {
        match value {
            SessionRepoError::DuplicateEmail(email) => Self::DuplicateUser(email),
            SessionRepoError::NoActiveSession => Self::NoActiveSession,
            other => Self::Store(other),
        }
    }
}

/// Session change notification published to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A user became current, via sign-up or sign-in.
    SignedIn(User),
    /// The current-session slot was cleared.
    SignedOut,
    /// The current user's preferences changed.
    PreferencesUpdated(User),
}

/// Use-case service wrapper for the session store.
///
/// Writers take `&mut self`, so overlapping mutations against one
/// service instance are statically impossible; outer layers that share
/// an instance across threads must serialize access themselves.
pub struct AuthService<R: SessionRepository> {
    repo: R,
    latency: LatencyProfile,
    subscribers: Vec<Sender<SessionEvent>>,
}

impl<R: SessionRepository> AuthService<R> {
    /// Creates a service using the provided session store.
    pub fn new(repo: R) -> Self {
        Self::with_latency(repo, LatencyProfile::none())
    }

    /// Creates a service with an explicit latency profile.
    pub fn with_latency(repo: R, latency: LatencyProfile) -> Self {
        Self {
            repo,
            latency,
            subscribers: Vec::new(),
        }
    }

    /// Registers a new user and makes it the current session.
    ///
    /// # Contract
    /// - Fails with [`AuthError::DuplicateUser`] when the email is
    ///   already registered, leaving the store unchanged.
    /// - `password` is accepted but never stored or verified.
    pub fn sign_up(&mut self, email: &str, _password: &str, name: &str) -> AuthResult<User> {
        simulate_latency(self.latency.sign_up);

        if self.repo.find_by_email(email).is_some() {
            warn!("event=sign_up module=auth status=rejected reason=duplicate_email");
            return Err(AuthError::DuplicateUser(email.to_string()));
        }

        let user = User::new(email, name);
        self.repo.insert_user(user.clone())?;
        self.repo.set_current(user.id)?;
        info!(
            "event=sign_up module=auth status=ok user_id={} user_count={}",
            user.id,
            self.repo.user_count()
        );
        self.publish(SessionEvent::SignedIn(user.clone()));
        Ok(user)
    }

    /// Signs in a registered user and makes it the current session.
    ///
    /// # Contract
    /// - Fails with [`AuthError::InvalidCredentials`] when the email is
    ///   unregistered, leaving the current session unchanged.
    /// - `password` is accepted but never verified (mock contract).
    pub fn sign_in(&mut self, email: &str, _password: &str) -> AuthResult<User> {
        simulate_latency(self.latency.sign_in);

        let Some(user) = self.repo.find_by_email(email) else {
            warn!("event=sign_in module=auth status=rejected reason=unknown_email");
            return Err(AuthError::InvalidCredentials);
        };

        self.repo.set_current(user.id)?;
        info!("event=sign_in module=auth status=ok user_id={}", user.id);
        self.publish(SessionEvent::SignedIn(user.clone()));
        Ok(user)
    }

    /// Clears the current session. Always succeeds.
    pub fn sign_out(&mut self) {
        simulate_latency(self.latency.sign_out);
        self.repo.clear_current();
        info!("event=sign_out module=auth status=ok");
        self.publish(SessionEvent::SignedOut);
    }

    /// Returns a snapshot of the current user, if any.
    ///
    /// Pure read; used at process start to restore whatever session is
    /// already live in memory.
    pub fn current_user(&self) -> Option<User> {
        self.repo.current_user()
    }

    /// Derived authentication flag exposed to the app shell.
    pub fn is_authenticated(&self) -> bool {
        self.repo.current_user().is_some()
    }

    /// Merges a partial preference update into the current user.
    ///
    /// # Contract
    /// - Fails with [`AuthError::NoActiveSession`] when signed out.
    /// - Shallow merge: present patch fields overwrite, absent fields
    ///   are preserved.
    pub fn update_preferences(&mut self, patch: &PreferencesPatch) -> AuthResult<User> {
        simulate_latency(self.latency.update_preferences);

        let user = self.repo.update_current_preferences(patch)?;
        info!(
            "event=update_preferences module=auth status=ok user_id={}",
            user.id
        );
        self.publish(SessionEvent::PreferencesUpdated(user.clone()));
        Ok(user)
    }

    /// Subscribes to session change notifications.
    ///
    /// Every mutation publishes one [`SessionEvent`] to all live
    /// subscribers. Dropped receivers are pruned on the next publish.
    pub fn subscribe(&mut self) -> Receiver<SessionEvent> {
        let (sender, receiver) = channel();
        self.subscribers.push(sender);
        receiver
    }

    /// Number of live subscriber channels.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn publish(&mut self, event: SessionEvent) {
        self.subscribers
            .retain(|sender| sender.send(event.clone()).is_ok());
    }
}
