//! FFI use-case API for app-shell-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level auth and feed functions to the
//!   mobile shell via FRB.
//! - Keep error semantics simple for early-stage UI integration.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - App calls against the shared services are serialized through one
//!   mutex (single-writer policy for overlapping UI actions).

use brightnews_core::model::now_epoch_ms;
use brightnews_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    relative_age_label, Article, AuthService, MemoryFeedRepository, MemorySessionRepository,
    NewsService, PreferencesPatch, User,
};
use std::sync::{Mutex, MutexGuard, OnceLock};

struct AppState {
    auth: AuthService<MemorySessionRepository>,
    news: NewsService<MemoryFeedRepository>,
}

static APP_STATE: OnceLock<Mutex<AppState>> = OnceLock::new();

fn app_state() -> MutexGuard<'static, AppState> {
    let state = APP_STATE.get_or_init(|| {
        Mutex::new(AppState {
            auth: AuthService::new(MemorySessionRepository::new()),
            news: NewsService::new(MemoryFeedRepository::with_sample_feed()),
        })
    });
    // A poisoning panic cannot corrupt the in-memory stores; keep
    // serving instead of propagating the poison across FFI.
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// User snapshot shaped for UI display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserView {
    /// Stable user ID in string form.
    pub id: String,
    pub email: String,
    pub name: String,
    /// Unix epoch milliseconds of registration.
    pub created_at_ms: i64,
    /// Selected feed category tags, sorted.
    pub categories: Vec<String>,
    pub email_notifications: bool,
}

/// Auth response envelope for session lifecycle calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Current/affected user snapshot, when one exists.
    pub user: Option<UserView>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl AuthResponse {
    fn success(message: impl Into<String>, user: Option<UserView>) -> Self {
        Self {
            ok: true,
            user,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            user: None,
            message: message.into(),
        }
    }
}

/// Article shaped for feed-card display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleView {
    pub id: String,
    pub title: String,
    pub summary: String,
    /// Canonical link; the shell owns opening it externally.
    pub url: String,
    pub source: String,
    pub published_at_ms: i64,
    /// Precomputed relative-age label ("Today", "Yesterday", ...).
    pub age_label: String,
    pub image_url: Option<String>,
}

/// Feed response envelope for fetch and search calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsFeedResponse {
    /// Articles in feed order (empty when nothing matches).
    pub items: Vec<ArticleView>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Registers a new account and signs it in.
///
/// # FFI contract
/// - Sync call against the in-memory mock backend.
/// - Never panics.
/// - `password` is accepted but never stored or verified.
#[flutter_rust_bridge::frb(sync)]
pub fn auth_sign_up(email: String, password: String, name: String) -> AuthResponse {
    match app_state().auth.sign_up(&email, &password, &name) {
        Ok(user) => AuthResponse::success("Account created.", Some(to_user_view(&user))),
        Err(err) => AuthResponse::failure(err.to_string()),
    }
}

/// Signs in an existing account.
///
/// # FFI contract
/// - Sync call against the in-memory mock backend.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn auth_sign_in(email: String, password: String) -> AuthResponse {
    match app_state().auth.sign_in(&email, &password) {
        Ok(user) => AuthResponse::success("Signed in.", Some(to_user_view(&user))),
        Err(err) => AuthResponse::failure(err.to_string()),
    }
}

/// Clears the current session.
///
/// # FFI contract
/// - Sync call; always succeeds.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn auth_sign_out() -> AuthResponse {
    app_state().auth.sign_out();
    AuthResponse::success("Signed out.", None)
}

/// Returns the current session snapshot, if any.
///
/// Used at app start to restore whatever session is already live in
/// this process.
///
/// # FFI contract
/// - Sync call, pure read.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn auth_current_user() -> AuthResponse {
    match app_state().auth.current_user() {
        Some(user) => AuthResponse::success("Session active.", Some(to_user_view(&user))),
        None => AuthResponse::success("No active session.", None),
    }
}

/// Returns whether a user is currently signed in.
///
/// # FFI contract
/// - Sync call, pure read.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn auth_is_authenticated() -> bool {
    app_state().auth.is_authenticated()
}

/// Merges a partial preference update into the current user.
///
/// Absent arguments leave the stored value untouched (shallow merge).
///
/// # FFI contract
/// - Sync call against the in-memory mock backend.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn auth_update_preferences(
    categories: Option<Vec<String>>,
    email_notifications: Option<bool>,
) -> AuthResponse {
    let patch = PreferencesPatch {
        categories: categories.map(|tags| tags.into_iter().collect()),
        email_notifications,
    };
    match app_state().auth.update_preferences(&patch) {
        Ok(user) => AuthResponse::success("Preferences updated.", Some(to_user_view(&user))),
        Err(err) => AuthResponse::failure(err.to_string()),
    }
}

/// Fetches the full positive-news feed.
///
/// # FFI contract
/// - Sync call; always resolves (mock backend).
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn news_fetch_all() -> NewsFeedResponse {
    let articles = app_state().news.fetch_all();
    to_feed_response(articles)
}

/// Searches the feed by keyword (case-insensitive substring match
/// against title or summary).
///
/// # FFI contract
/// - Sync call; always resolves (mock backend).
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn news_search(keyword: String) -> NewsFeedResponse {
    let articles = app_state().news.search(&keyword);
    to_feed_response(articles)
}

fn to_feed_response(articles: Vec<Article>) -> NewsFeedResponse {
    let now_ms = now_epoch_ms();
    let items: Vec<ArticleView> = articles
        .into_iter()
        .map(|article| to_article_view(article, now_ms))
        .collect();
    let message = if items.is_empty() {
        "No news found.".to_string()
    } else {
        format!("Loaded {} article(s).", items.len())
    };
    NewsFeedResponse { items, message }
}

fn to_article_view(article: Article, now_ms: i64) -> ArticleView {
    let age_label = relative_age_label(article.published_at_ms, now_ms);
    ArticleView {
        id: article.id,
        title: article.title,
        summary: article.summary,
        url: article.url,
        source: article.source,
        published_at_ms: article.published_at_ms,
        age_label,
        image_url: article.image_url,
    }
}

fn to_user_view(user: &User) -> UserView {
    UserView {
        id: user.id.to_string(),
        email: user.email.clone(),
        name: user.name.clone(),
        created_at_ms: user.created_at_ms,
        categories: user.preferences.categories.iter().cloned().collect(),
        email_notifications: user.preferences.email_notifications,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        auth_current_user, auth_is_authenticated, auth_sign_in, auth_sign_out, auth_sign_up,
        auth_update_preferences, core_version, init_logging, news_fetch_all, news_search, ping,
    };
    use std::time::{SystemTime, UNIX_EPOCH};

    // The FFI state is process-global, so each test uses unique emails
    // and avoids asserting on the shared session slot ordering.
    fn unique_email(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{}-{nanos}@example.com", std::process::id())
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    // Session state is one shared slot; every assertion that depends on
    // "who is current" lives in this single test so parallel tests
    // cannot interleave their own sign-ins between the steps.
    #[test]
    fn session_lifecycle_via_ffi() {
        let email = unique_email("lifecycle");
        let created = auth_sign_up(email.clone(), "secret".to_string(), "Tester".to_string());
        assert!(created.ok, "{}", created.message);
        let user = created.user.expect("sign up should return a user view");
        assert_eq!(user.email, email);
        assert_eq!(user.categories, vec!["all".to_string()]);
        assert!(user.email_notifications);

        assert!(auth_is_authenticated());
        let current = auth_current_user();
        assert!(current.ok);
        assert_eq!(current.user.expect("session should be active").email, email);

        let duplicate = auth_sign_up(email.clone(), "b".to_string(), "B".to_string());
        assert!(!duplicate.ok);
        assert!(duplicate.message.contains("already exists"));

        let unknown = auth_sign_in(unique_email("unknown"), "secret".to_string());
        assert!(!unknown.ok);
        assert!(unknown.message.contains("invalid credentials"));

        let updated = auth_update_preferences(None, Some(false));
        assert!(updated.ok, "{}", updated.message);
        let updated_user = updated.user.expect("update should return a user view");
        assert!(!updated_user.email_notifications);
        assert_eq!(updated_user.categories, vec!["all".to_string()]);

        assert!(auth_sign_out().ok);
        assert!(!auth_is_authenticated());
        assert!(auth_current_user().user.is_none());

        let no_session = auth_update_preferences(None, Some(true));
        assert!(!no_session.ok);
        assert!(no_session.message.contains("no user logged in"));

        let back = auth_sign_in(email, "different-password".to_string());
        assert!(back.ok, "{}", back.message);
        let back_user = back.user.expect("sign in should return a user view");
        assert!(!back_user.email_notifications);
    }

    #[test]
    fn feed_fetch_returns_labeled_articles() {
        let response = news_fetch_all();
        assert_eq!(response.items.len(), 5);
        assert_eq!(response.items[0].age_label, "Today");
        assert_eq!(response.items[1].age_label, "Yesterday");
        assert!(response.message.contains("5"));
    }

    #[test]
    fn feed_search_filters_and_reports_empty_results() {
        let hits = news_search("ocean plastic".to_string());
        assert_eq!(hits.items.len(), 1);
        assert_eq!(hits.items[0].id, "3");

        let empty = news_search("zzz-no-match".to_string());
        assert!(empty.items.is_empty());
        assert_eq!(empty.message, "No news found.");
    }
}
