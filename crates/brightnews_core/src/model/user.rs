//! User domain model and preference merge semantics.
//!
//! # Responsibility
//! - Define the registered-user record held by the session store.
//! - Provide shallow-merge semantics for partial preference updates.
//!
//! # Invariants
//! - `id` is stable and never reused for another user.
//! - `email` is the unique sign-in key (case-sensitive exact match).
//! - `created_at_ms` never changes after construction.

use crate::model::now_epoch_ms;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Stable identifier for every registered user.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type UserId = Uuid;

/// Wildcard category tag meaning "no category filter".
pub const CATEGORY_ALL: &str = "all";

/// Per-user settings surfaced on the preferences screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Selected feed category tags. Defaults to the single wildcard tag.
    pub categories: BTreeSet<String>,
    /// Whether the user opted into email notifications.
    pub email_notifications: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        let mut categories = BTreeSet::new();
        categories.insert(CATEGORY_ALL.to_string());
        Self {
            categories,
            email_notifications: true,
        }
    }
}

/// Partial preference update.
///
/// Present fields overwrite the stored value; absent fields are
/// preserved (shallow merge, never a replace).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesPatch {
    pub categories: Option<BTreeSet<String>>,
    pub email_notifications: Option<bool>,
}

impl UserPreferences {
    /// Applies a partial update in place.
    pub fn apply(&mut self, patch: &PreferencesPatch) {
        if let Some(categories) = &patch.categories {
            self.categories = categories.clone();
        }
        if let Some(email_notifications) = patch.email_notifications {
            self.email_notifications = email_notifications;
        }
    }
}

/// Registered user record held by the session store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable global ID used for session tracking and auditing.
    pub id: UserId,
    /// Unique sign-in key. Compared exactly, never normalized.
    pub email: String,
    /// Display name shown on the profile screen.
    pub name: String,
    /// Unix epoch milliseconds at registration time.
    pub created_at_ms: i64,
    /// Mutable only while this user holds the current session.
    pub preferences: UserPreferences,
}

impl User {
    /// Creates a new user with a generated stable ID and default
    /// preferences.
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), email, name)
    }

    /// Creates a new user with a caller-provided stable ID.
    ///
    /// Used where identity already exists externally, e.g. fixtures
    /// that need deterministic users.
    pub fn with_id(id: UserId, email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            name: name.into(),
            created_at_ms: now_epoch_ms(),
            preferences: UserPreferences::default(),
        }
    }
}
