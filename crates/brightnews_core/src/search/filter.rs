//! Case-insensitive keyword filter over the article feed.
//!
//! # Responsibility
//! - Provide the one matching rule used by `NewsService::search` and
//!   the type-as-you-filter composition in the app shell.
//! - Return matches in their original feed order.
//!
//! # Invariants
//! - Matching never reorders articles relative to the input set.
//! - `matches_keyword` is a literal substring test; blank-input
//!   handling belongs to [`apply_query`] alone.

use crate::model::article::Article;

/// Returns whether the article's title or summary contains the keyword,
/// case-insensitively.
///
/// The keyword is taken literally: an empty keyword is a substring of
/// every string and therefore matches every article.
pub fn matches_keyword(article: &Article, keyword: &str) -> bool {
    let needle = keyword.to_lowercase();
    article.title.to_lowercase().contains(&needle)
        || article.summary.to_lowercase().contains(&needle)
}

/// Filters a fetched article set by a live-typed query.
///
/// # Contract
/// - A trimmed-empty query means "no filter": the full set is returned
///   unchanged and in fetch order.
/// - Otherwise articles are kept by [`matches_keyword`], preserving
///   their relative order.
/// - Pure function of its inputs; never triggers a new fetch. Callers
///   recompute whenever either the set or the query changes.
pub fn apply_query(articles: &[Article], query: &str) -> Vec<Article> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return articles.to_vec();
    }
    articles
        .iter()
        .filter(|article| matches_keyword(article, trimmed))
        .cloned()
        .collect()
}
