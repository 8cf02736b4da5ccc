//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `brightnews_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use brightnews_core::{MemoryFeedRepository, NewsService};

fn main() {
    // Tiny probe to validate core crate wiring independently from the
    // mobile shell and FFI runtime setup.
    println!("brightnews_core ping={}", brightnews_core::ping());
    println!("brightnews_core version={}", brightnews_core::core_version());

    let news = NewsService::new(MemoryFeedRepository::with_sample_feed());
    println!("brightnews_core feed_articles={}", news.fetch_all().len());
}
