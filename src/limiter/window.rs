//! Fixed-window request quota.

use std::time::Duration;

use tokio::time::Instant;

use crate::config::RateLimitConfig;

/// Point-in-time view of the rate-limit window.
///
/// # Example
///
/// ```rust
/// use clnk_sdk::{ClnkClient, ClnkConfig};
///
/// let client = ClnkClient::new(ClnkConfig::default());
/// let snapshot = client.window_snapshot();
///
/// assert_eq!(snapshot.request_count, 0);
/// assert_eq!(snapshot.max_requests, 60);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSnapshot {
    /// Requests admitted in the current window.
    pub request_count: u32,
    /// Requests allowed per window.
    pub max_requests: u32,
}

/// Outcome of asking the window for a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Admission {
    /// A slot is free now.
    Ready,
    /// The quota is spent; wait this long for the window to end.
    Wait(Duration),
}

/// Counter of requests admitted in the current fixed window.
///
/// The window has no timer of its own. Expiry is checked lazily each time a
/// caller asks for admission.
#[derive(Debug)]
pub(crate) struct RateLimitWindow {
    max_requests: u32,
    window: Duration,
    request_count: u32,
    reset_at: Instant,
}

impl RateLimitWindow {
    pub(crate) fn new(config: &RateLimitConfig, now: Instant) -> Self {
        Self {
            max_requests: config.max_requests(),
            window: config.window(),
            request_count: 0,
            reset_at: window_end(now, config.window()),
        }
    }

    /// Refreshes an expired window, then reports whether a slot is free.
    pub(crate) fn admission(&mut self, now: Instant) -> Admission {
        if now > self.reset_at {
            self.reset(now);
        }

        if self.request_count < self.max_requests {
            Admission::Ready
        } else {
            Admission::Wait(self.reset_at.saturating_duration_since(now))
        }
    }

    /// Starts a fresh window at `now`.
    pub(crate) fn reset(&mut self, now: Instant) {
        self.request_count = 0;
        self.reset_at = window_end(now, self.window);
    }

    /// Counts one admitted request.
    pub(crate) fn record(&mut self) {
        self.request_count = self.request_count.saturating_add(1);
    }

    pub(crate) const fn snapshot(&self) -> WindowSnapshot {
        WindowSnapshot {
            request_count: self.request_count,
            max_requests: self.max_requests,
        }
    }
}

/// End of a window starting at `now`. Falls back to the longest accepted
/// window when the sum does not fit in an `Instant`.
fn window_end(now: Instant, window: Duration) -> Instant {
    now.checked_add(window)
        .or_else(|| now.checked_add(RateLimitConfig::MAX_WINDOW))
        .unwrap_or(now)
}
