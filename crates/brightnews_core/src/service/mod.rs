//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level APIs.
//! - Keep UI/FFI layers decoupled from store internals.
//!
//! # Invariants
//! - Service APIs never bypass store validation contracts.
//! - Failed operations leave store state unchanged.

use std::thread;
use std::time::Duration;

pub mod auth_service;
pub mod news_service;

/// Injectable artificial latency, emulating backend round-trips.
///
/// The original mock backend delayed sign-up/sign-in and feed fetches
/// by about a second and lighter mutations by half that. The delay is
/// a UX simulation, not a correctness requirement, so it defaults to
/// zero and tests run synchronously.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub sign_up: Duration,
    pub sign_in: Duration,
    pub sign_out: Duration,
    pub update_preferences: Duration,
    pub fetch: Duration,
}

impl LatencyProfile {
    /// No artificial delay. The default.
    pub fn none() -> Self {
        Self {
            sign_up: Duration::ZERO,
            sign_in: Duration::ZERO,
            sign_out: Duration::ZERO,
            update_preferences: Duration::ZERO,
            fetch: Duration::ZERO,
        }
    }

    /// Delays matching the original mock backend.
    pub fn mock_backend() -> Self {
        Self {
            sign_up: Duration::from_millis(1000),
            sign_in: Duration::from_millis(1000),
            sign_out: Duration::from_millis(500),
            update_preferences: Duration::from_millis(500),
            fetch: Duration::from_millis(1000),
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::none()
    }
}

/// Blocks the calling thread for the configured delay, if any.
pub(crate) fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}

#[cfg(test)]
mod tests {
    use super::LatencyProfile;
    use std::time::Duration;

    #[test]
    fn default_profile_is_zero_everywhere() {
        let profile = LatencyProfile::default();
        assert_eq!(profile, LatencyProfile::none());
        assert_eq!(profile.sign_up, Duration::ZERO);
        assert_eq!(profile.fetch, Duration::ZERO);
    }

    #[test]
    fn mock_backend_profile_matches_original_delays() {
        let profile = LatencyProfile::mock_backend();
        assert_eq!(profile.sign_up, Duration::from_millis(1000));
        assert_eq!(profile.sign_in, Duration::from_millis(1000));
        assert_eq!(profile.sign_out, Duration::from_millis(500));
        assert_eq!(profile.update_preferences, Duration::from_millis(500));
        assert_eq!(profile.fetch, Duration::from_millis(1000));
    }
}
