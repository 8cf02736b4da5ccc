//! Display-label derivation helpers for the app shell.
//!
//! # Responsibility
//! - Turn publication timestamps into the relative-age labels shown on
//!   feed cards.
//!
//! # Invariants
//! - Pure functions of their inputs; no clock access inside.

use chrono::{DateTime, Utc};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Returns the human age label for a publication timestamp.
///
/// # Contract
/// - Same calendar day distance 0 -> `Today`, 1 -> `Yesterday`,
///   2..=6 -> `N days ago`, otherwise a calendar date label.
/// - Distance is absolute, so slightly-future timestamps from clock
///   skew still render as `Today`.
pub fn relative_age_label(published_at_ms: i64, now_ms: i64) -> String {
    let diff_days = (now_ms - published_at_ms).abs() / DAY_MS;
    match diff_days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{diff_days} days ago"),
        _ => calendar_label(published_at_ms),
    }
}

fn calendar_label(published_at_ms: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(published_at_ms) {
        Some(timestamp) => timestamp.format("%b %d, %Y").to_string(),
        // Out-of-range timestamp; fall back to a stable placeholder
        // rather than panicking in a display path.
        None => "Unknown date".to_string(),
    }
}
