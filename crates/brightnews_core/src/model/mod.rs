//! Domain records for the session and feed stores.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep one record shape shared by service, FFI and test layers.
//!
//! # Invariants
//! - Every registered user is identified by a stable `UserId`.
//! - Articles are immutable after feed construction.

use std::time::{SystemTime, UNIX_EPOCH};

pub mod article;
pub mod user;

/// Current wall-clock time as unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
