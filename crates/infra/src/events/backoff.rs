//! Reconnect backoff policy
//!
//! Exponential delay capped at a maximum, plus uniform jitter so a fleet of
//! clients dropped by the same outage does not retry in lockstep.

use std::time::Duration;

use ecotrack_domain::constants::{
    RECONNECT_BASE_DELAY_MS, RECONNECT_JITTER_MS, RECONNECT_MAX_ATTEMPTS,
    RECONNECT_MAX_DELAY_MS,
};
use rand::Rng;

/// Cap on the backoff exponent to avoid shift overflow
const MAX_BACKOFF_EXPONENT: u32 = 16;

/// Attempt-bounded reconnect policy
#[derive(Debug, Clone)]
pub struct ReconnectPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub jitter: Duration,
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self {
            max_attempts: RECONNECT_MAX_ATTEMPTS,
            base_delay: Duration::from_millis(RECONNECT_BASE_DELAY_MS),
            max_delay: Duration::from_millis(RECONNECT_MAX_DELAY_MS),
            jitter: Duration::from_millis(RECONNECT_JITTER_MS),
        }
    }
}

impl ReconnectPolicy {
    /// Delay before 1-based attempt `n`: `min(base * 2^(n-1), max) + jitter`
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let shift = attempt.saturating_sub(1).min(MAX_BACKOFF_EXPONENT);
        let base_ms = self.base_delay.as_millis() as u64;
        let max_ms = self.max_delay.as_millis() as u64;
        let exponential = base_ms.saturating_mul(1u64 << shift).min(max_ms);

        let jitter_ms = self.jitter.as_millis() as u64;
        let jitter = if jitter_ms == 0 {
            0
        } else {
            rand::thread_rng().gen_range(0..=jitter_ms)
        };

        Duration::from_millis(exponential + jitter)
    }

    /// Whether `attempt` (1-based) is past the cap
    pub fn exhausted(&self, attempt: u32) -> bool {
        attempt > self.max_attempts
    }
}
