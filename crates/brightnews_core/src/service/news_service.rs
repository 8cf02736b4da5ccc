//! News feed use-case service.
//!
//! # Responsibility
//! - Provide fetch-all and keyword-search entry points over the feed
//!   store.
//! - Keep the matching rule shared with the client-side filter.
//!
//! # Invariants
//! - Results preserve the feed's original article order.
//! - Neither operation can fail: the mock backend always resolves.

use crate::model::article::Article;
use crate::repo::feed_repo::FeedRepository;
use crate::search::filter::matches_keyword;
use crate::service::{simulate_latency, LatencyProfile};
use log::info;

/// Use-case service wrapper for the feed store.
pub struct NewsService<R: FeedRepository> {
    repo: R,
    latency: LatencyProfile,
}

impl<R: FeedRepository> NewsService<R> {
    /// Creates a service using the provided feed store.
    pub fn new(repo: R) -> Self {
        Self::with_latency(repo, LatencyProfile::none())
    }

    /// Creates a service with an explicit latency profile.
    pub fn with_latency(repo: R, latency: LatencyProfile) -> Self {
        Self { repo, latency }
    }

    /// Returns the full fixed article set, unfiltered and in original
    /// order. Idempotent.
    pub fn fetch_all(&self) -> Vec<Article> {
        simulate_latency(self.latency.fetch);
        let articles = self.repo.list_articles();
        info!(
            "event=fetch_news module=news status=ok article_count={}",
            articles.len()
        );
        articles
    }

    /// Returns the articles whose title or summary contains the
    /// keyword, case-insensitively, preserving original order.
    ///
    /// The keyword is matched literally; blank-input special-casing is
    /// the caller's concern (see `search::filter::apply_query`).
    pub fn search(&self, keyword: &str) -> Vec<Article> {
        let hits: Vec<Article> = self
            .fetch_all()
            .into_iter()
            .filter(|article| matches_keyword(article, keyword))
            .collect();
        info!(
            "event=search_news module=news status=ok keyword_len={} hit_count={}",
            keyword.len(),
            hits.len()
        );
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::NewsService;
    use crate::repo::feed_repo::MemoryFeedRepository;

    #[test]
    fn fetch_all_returns_sample_feed_in_order() {
        let news = NewsService::new(MemoryFeedRepository::with_sample_feed());
        let articles = news.fetch_all();
        assert_eq!(articles.len(), 5);
        assert_eq!(articles[0].id, "1");
        assert_eq!(articles[4].id, "5");
    }

    #[test]
    fn search_matches_summary_text() {
        let news = NewsService::new(MemoryFeedRepository::with_sample_feed());
        // "unesco" appears only in the literacy article's summary.
        let hits = news.search("unesco");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Global Literacy Rates Reach All-Time High");
    }

    #[test]
    fn empty_keyword_matches_all_articles() {
        let news = NewsService::new(MemoryFeedRepository::with_sample_feed());
        assert_eq!(news.search("").len(), 5);
    }
}
