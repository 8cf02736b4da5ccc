//! Feed store contracts and in-memory implementation.
//!
//! # Responsibility
//! - Hold the fixed article set backing the news feed.
//! - Keep the read-only contract explicit: no create/update/delete
//!   operations exist on this store.
//!
//! # Invariants
//! - The article set is immutable for the store's lifetime.
//! - Listing always returns the full set in insertion order.

use crate::model::article::{sample_feed, Article};

/// Store interface for article retrieval.
pub trait FeedRepository {
    /// Returns the full fixed article set in its original order.
    ///
    /// Never fails: the mock backend always resolves.
    fn list_articles(&self) -> Vec<Article>;
}

/// In-memory feed store holding a fixed article set.
#[derive(Debug, Clone)]
pub struct MemoryFeedRepository {
    articles: Vec<Article>,
}

impl MemoryFeedRepository {
    /// Creates a feed store over a caller-provided article set.
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    /// Creates a feed store seeded with the canonical mock feed.
    pub fn with_sample_feed() -> Self {
        Self::new(sample_feed())
    }
}

impl FeedRepository for MemoryFeedRepository {
    fn list_articles(&self) -> Vec<Article> {
        self.articles.clone()
    }
}
