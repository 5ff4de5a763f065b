//! Configuration types for the Clnk SDK.
//!
//! This module provides the configuration used to construct a
//! [`ClnkClient`](crate::ClnkClient).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ClnkConfig`]: The main configuration struct holding all SDK settings
//! - [`ClnkConfigBuilder`]: A builder for constructing [`ClnkConfig`] instances
//! - [`ApiUrl`]: A validated GraphQL endpoint URL
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`AccessToken`]: A bearer token newtype with masked debug output
//! - [`RateLimitConfig`]: The client-side request quota
//!
//! # Example
//!
//! ```rust
//! use clnk_sdk::{ClnkConfig, ApiKey, ApiUrl};
//!
//! let config = ClnkConfig::builder()
//!     .api_url(ApiUrl::new("http://localhost:8000/graphql").unwrap())
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod rate_limit;

pub use newtypes::{AccessToken, ApiKey, ApiUrl};
pub use rate_limit::RateLimitConfig;

use crate::error::ConfigError;

/// Configuration for the Clnk SDK.
///
/// Every field is optional; an empty builder yields a client pointed at the
/// production endpoint with no credentials.
///
/// # Thread Safety
///
/// `ClnkConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use clnk_sdk::{ClnkConfig, AccessToken, RateLimitConfig};
///
/// let config = ClnkConfig::builder()
///     .access_token(AccessToken::new("token-from-a-previous-login").unwrap())
///     .rate_limit(RateLimitConfig::new(5, Duration::from_secs(1)).unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.api_url().as_ref(), "https://clnk-api.m10.live/graphql");
/// assert_eq!(config.rate_limit().max_requests(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct ClnkConfig {
    api_url: ApiUrl,
    api_key: Option<ApiKey>,
    access_token: Option<AccessToken>,
    rate_limit: RateLimitConfig,
    transport_tries: u32,
    user_agent_prefix: Option<String>,
}

impl ClnkConfig {
    /// Creates a new builder for constructing a `ClnkConfig`.
    #[must_use]
    pub fn builder() -> ClnkConfigBuilder {
        ClnkConfigBuilder::new()
    }

    /// Returns the GraphQL endpoint URL.
    #[must_use]
    pub const fn api_url(&self) -> &ApiUrl {
        &self.api_url
    }

    /// Returns the API key, if configured.
    #[must_use]
    pub const fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    /// Returns the initial access token, if configured.
    ///
    /// The live token is held by the client's auth state and may differ
    /// after a login or refresh.
    #[must_use]
    pub const fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Returns the client-side rate limit.
    #[must_use]
    pub const fn rate_limit(&self) -> &RateLimitConfig {
        &self.rate_limit
    }

    /// Returns how many times the transport attempts a request on HTTP 429/500.
    #[must_use]
    pub const fn transport_tries(&self) -> u32 {
        self.transport_tries
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

impl Default for ClnkConfig {
    fn default() -> Self {
        Self {
            api_url: ApiUrl::default(),
            api_key: None,
            access_token: None,
            rate_limit: RateLimitConfig::default(),
            transport_tries: 1,
            user_agent_prefix: None,
        }
    }
}

// Verify ClnkConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClnkConfig>();
};

/// Builder for constructing [`ClnkConfig`] instances.
///
/// # Defaults
///
/// - `api_url`: `https://clnk-api.m10.live/graphql`
/// - `api_key`: `None`
/// - `access_token`: `None`
/// - `rate_limit`: 60 requests per 60 seconds
/// - `transport_tries`: `1` (no transport-level retries)
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ClnkConfigBuilder {
    api_url: Option<ApiUrl>,
    api_key: Option<ApiKey>,
    access_token: Option<AccessToken>,
    rate_limit: Option<RateLimitConfig>,
    transport_tries: Option<u32>,
    user_agent_prefix: Option<String>,
}

impl ClnkConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the GraphQL endpoint URL.
    #[must_use]
    pub fn api_url(mut self, url: ApiUrl) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Sets the API key sent with every request.
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the initial bearer token.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the client-side rate limit.
    #[must_use]
    pub const fn rate_limit(mut self, rate_limit: RateLimitConfig) -> Self {
        self.rate_limit = Some(rate_limit);
        self
    }

    /// Sets how many times the transport attempts a request.
    ///
    /// Values above 1 enable transport-level retries for HTTP 429 and 500
    /// responses, independent of the rate limiter's own single retry.
    #[must_use]
    pub const fn transport_tries(mut self, tries: u32) -> Self {
        self.transport_tries = Some(tries);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ClnkConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTries`] if `transport_tries` was set to zero.
    pub fn build(self) -> Result<ClnkConfig, ConfigError> {
        let transport_tries = self.transport_tries.unwrap_or(1);
        if transport_tries == 0 {
            return Err(ConfigError::InvalidTries {
                tries: transport_tries,
            });
        }

        Ok(ClnkConfig {
            api_url: self.api_url.unwrap_or_default(),
            api_key: self.api_key,
            access_token: self.access_token,
            rate_limit: self.rate_limit.unwrap_or_default(),
            transport_tries,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
