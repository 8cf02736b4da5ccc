//! Core domain logic for BrightNews.
//! This crate is the single source of truth for session and feed
//! business invariants; UI shells stay presentation-only.

pub mod display;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use display::relative_age_label;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{sample_feed, Article};
pub use model::user::{PreferencesPatch, User, UserId, UserPreferences, CATEGORY_ALL};
pub use repo::feed_repo::{FeedRepository, MemoryFeedRepository};
pub use repo::session_repo::{
    MemorySessionRepository, SessionRepoError, SessionRepoResult, SessionRepository,
};
pub use search::filter::{apply_query, matches_keyword};
pub use service::auth_service::{AuthError, AuthResult, AuthService, SessionEvent};
pub use service::news_service::NewsService;
pub use service::LatencyProfile;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
