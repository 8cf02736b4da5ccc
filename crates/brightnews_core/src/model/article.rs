//! Article domain model and the built-in positive-news sample feed.
//!
//! # Responsibility
//! - Define the read-only article record exposed by the feed store.
//! - Provide the canonical mock feed used until a real news backend
//!   replaces the in-memory stand-in.
//!
//! # Invariants
//! - Articles are never mutated after feed construction.
//! - `id` is unique within one feed set.

use crate::model::now_epoch_ms;
use serde::{Deserialize, Serialize};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Read-only news article record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Unique ID within the feed set.
    pub id: String,
    /// Headline shown in the feed list.
    pub title: String,
    /// Short teaser text shown under the headline.
    pub summary: String,
    /// Canonical link, opened externally by the app shell.
    pub url: String,
    /// Publisher label.
    pub source: String,
    /// Unix epoch milliseconds of publication, used for relative-age
    /// display.
    pub published_at_ms: i64,
    /// Optional cover image.
    pub image_url: Option<String>,
}

/// Canonical five-article mock feed.
///
/// Stands in for a real news API with sentiment filtering. Publication
/// times are anchored to the current wall clock so relative-age labels
/// stay meaningful across runs.
pub fn sample_feed() -> Vec<Article> {
    let now_ms = now_epoch_ms();
    vec![
        Article {
            id: "1".to_string(),
            title: "Scientists Discover New Renewable Energy Source".to_string(),
            summary: "Researchers have developed a groundbreaking method to harness energy \
                      from ocean waves, potentially providing clean power to millions."
                .to_string(),
            url: "https://example.com/news/1".to_string(),
            source: "Science Daily".to_string(),
            published_at_ms: now_ms,
            image_url: Some(
                "https://via.placeholder.com/400x200/4CAF50/ffffff?text=Renewable+Energy"
                    .to_string(),
            ),
        },
        Article {
            id: "2".to_string(),
            title: "Community Raises $1 Million for Local Hospital".to_string(),
            summary: "Local residents came together to raise funds for a new children's wing, \
                      exceeding their goal within just two weeks."
                .to_string(),
            url: "https://example.com/news/2".to_string(),
            source: "Community News".to_string(),
            published_at_ms: now_ms - DAY_MS,
            image_url: Some(
                "https://via.placeholder.com/400x200/2196F3/ffffff?text=Community".to_string(),
            ),
        },
        Article {
            id: "3".to_string(),
            title: "New Technology Helps Clean Ocean Plastic".to_string(),
            summary: "An innovative device successfully removes tons of plastic waste from the \
                      ocean, marking a significant victory for environmental conservation."
                .to_string(),
            url: "https://example.com/news/3".to_string(),
            source: "Environmental Times".to_string(),
            published_at_ms: now_ms - 2 * DAY_MS,
            image_url: Some(
                "https://via.placeholder.com/400x200/00BCD4/ffffff?text=Ocean+Cleanup".to_string(),
            ),
        },
        Article {
            id: "4".to_string(),
            title: "Global Literacy Rates Reach All-Time High".to_string(),
            summary: "UNESCO reports that worldwide literacy rates have reached historic levels \
                      thanks to education initiatives across developing nations."
                .to_string(),
            url: "https://example.com/news/4".to_string(),
            source: "Education Weekly".to_string(),
            published_at_ms: now_ms - 3 * DAY_MS,
            image_url: Some(
                "https://via.placeholder.com/400x200/FF9800/ffffff?text=Education".to_string(),
            ),
        },
        Article {
            id: "5".to_string(),
            title: "Endangered Species Population Doubles".to_string(),
            summary: "Conservation efforts pay off as the population of a once-endangered \
                      species has doubled in the last five years."
                .to_string(),
            url: "https://example.com/news/5".to_string(),
            source: "Wildlife Conservation".to_string(),
            published_at_ms: now_ms - 4 * DAY_MS,
            image_url: Some(
                "https://via.placeholder.com/400x200/8BC34A/ffffff?text=Wildlife".to_string(),
            ),
        },
    ]
}
