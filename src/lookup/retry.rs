//! Retry policy and backoff schedule.

use std::time::Duration;

use tokio_retry::strategy::ExponentialBackoff;

use crate::config::{RETRY_BASE_DELAY_SECS, RETRY_MAX_ATTEMPTS};

/// How often a lookup is attempted and how long to wait in between.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
}

impl RetryPolicy {
    /// Creates a policy with `max_attempts` total attempts (clamped to at
    /// least 1) and a first retry delay of `base_delay_secs` seconds.
    ///
    /// The delay has millisecond resolution; negative or non-finite delays
    /// are treated as zero.
    pub fn new(max_attempts: u32, base_delay_secs: f64) -> Self {
        let base_delay = if base_delay_secs.is_finite() && base_delay_secs > 0.0 {
            Duration::from_millis((base_delay_secs * 1000.0).round() as u64)
        } else {
            Duration::ZERO
        };
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    /// Total number of attempts.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay before the first retry.
    pub fn base_delay(&self) -> Duration {
        self.base_delay
    }

    /// Delays to wait after each failed attempt that is followed by another.
    ///
    /// The n-th delay (n starting at 1) is `base_delay * 2^(n-1)`, and there
    /// are `max_attempts - 1` of them.
    pub fn delays(&self) -> impl Iterator<Item = Duration> {
        let base_ms = u64::try_from(self.base_delay.as_millis()).unwrap_or(u64::MAX);
        // ExponentialBackoff yields `factor * base^n` for n >= 1, so a base of
        // 2 gives `base_ms * 2^n`; halving shifts the schedule to start at base_ms.
        ExponentialBackoff::from_millis(2)
            .factor(base_ms)
            .map(|delay| delay / 2)
            .take(self.max_attempts as usize - 1)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(RETRY_MAX_ATTEMPTS as u32, RETRY_BASE_DELAY_SECS)
    }
}
