//! Client-side rate limit settings.

use std::time::Duration;

use crate::error::ConfigError;

/// Quota applied by the client's request sequencer.
///
/// At most `max_requests` limiter-routed calls start within each window of
/// `window` length. Calls beyond the quota wait for the window to reset;
/// they are never dropped.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use clnk_sdk::RateLimitConfig;
///
/// let limit = RateLimitConfig::new(10, Duration::from_secs(1)).unwrap();
/// assert_eq!(limit.max_requests(), 10);
///
/// assert!(RateLimitConfig::new(0, Duration::from_secs(1)).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimitConfig {
    max_requests: u32,
    window: Duration,
}

impl RateLimitConfig {
    /// Default number of requests per window.
    pub const DEFAULT_MAX_REQUESTS: u32 = 60;

    /// Default window length.
    pub const DEFAULT_WINDOW: Duration = Duration::from_secs(60);

    /// Longest accepted window (one year).
    pub const MAX_WINDOW: Duration = Duration::from_secs(365 * 24 * 60 * 60);

    /// Creates a validated rate limit.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRateLimit`] if `max_requests` is zero or
    /// `window` is empty or longer than [`Self::MAX_WINDOW`].
    pub fn new(max_requests: u32, window: Duration) -> Result<Self, ConfigError> {
        if max_requests == 0 {
            return Err(ConfigError::InvalidRateLimit {
                reason: "max_requests must be greater than zero".to_string(),
            });
        }
        if window.is_zero() {
            return Err(ConfigError::InvalidRateLimit {
                reason: "window duration must be greater than zero".to_string(),
            });
        }
        if window > Self::MAX_WINDOW {
            return Err(ConfigError::InvalidRateLimit {
                reason: format!(
                    "window duration must not exceed {} seconds",
                    Self::MAX_WINDOW.as_secs()
                ),
            });
        }
        Ok(Self {
            max_requests,
            window,
        })
    }

    /// Returns the number of requests allowed per window.
    #[must_use]
    pub const fn max_requests(&self) -> u32 {
        self.max_requests
    }

    /// Returns the window length.
    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: Self::DEFAULT_MAX_REQUESTS,
            window: Self::DEFAULT_WINDOW,
        }
    }
}
