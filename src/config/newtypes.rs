//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Clnk API key.
///
/// This newtype ensures the API key is non-empty and masks its value in
/// debug output, since API keys grant programmatic access to an account.
///
/// # Example
///
/// ```rust
/// use clnk_sdk::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A bearer access token.
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `AccessToken(*****)`.
///
/// # Example
///
/// ```rust
/// use clnk_sdk::AccessToken;
///
/// let token = AccessToken::new("eyJhbGciOi...").unwrap();
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// assert!(AccessToken::new("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }

    /// Wraps a token without validation.
    ///
    /// Used for tokens handed out by the server and for explicit overrides,
    /// which are stored as-is.
    pub(crate) fn unchecked(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated GraphQL endpoint URL.
///
/// The URL must use the `http` or `https` scheme and name a host.
///
/// # Example
///
/// ```rust
/// use clnk_sdk::ApiUrl;
///
/// let url = ApiUrl::new("http://localhost:8000/graphql").unwrap();
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), "localhost");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl ApiUrl {
    /// The production Clnk GraphQL endpoint.
    pub const DEFAULT: &'static str = "https://clnk-api.m10.live/graphql";

    /// Creates a new validated API URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().to_string();
        let invalid = || ConfigError::InvalidApiUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl Default for ApiUrl {
    fn default() -> Self {
        let url = Self::DEFAULT;
        Self {
            url: url.to_string(),
            scheme_end: 5,
            host_start: 8,
            host_end: url.len() - "/graphql".len(),
        }
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty_string() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_masks_value_in_debug() {
        let key = ApiKey::new("super-secret-key").unwrap();
        let debug_output = format!("{:?}", key);
        assert_eq!(debug_output, "ApiKey(*****)");
        assert!(!debug_output.contains("super-secret-key"));
    }

    #[test]
    fn test_access_token_rejects_empty_string() {
        assert!(matches!(
            AccessToken::new(""),
            Err(ConfigError::EmptyAccessToken)
        ));
    }

    #[test]
    fn test_access_token_masks_value_in_debug() {
        let token = AccessToken::new("secret-token").unwrap();
        assert!(!format!("{:?}", token).contains("secret-token"));
    }

    #[test]
    fn test_api_url_validates_format() {
        let url = ApiUrl::new("https://clnk-api.m10.live/graphql").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), "clnk-api.m10.live");

        let url = ApiUrl::new("http://127.0.0.1:8000/graphql").unwrap();
        assert_eq!(url.host_name(), "127.0.0.1");

        let url = ApiUrl::new("  http://localhost  ").unwrap();
        assert_eq!(url.as_ref(), "http://localhost");
    }

    #[test]
    fn test_api_url_rejects_invalid() {
        // No scheme
        assert!(ApiUrl::new("clnk-api.m10.live/graphql").is_err());

        // Empty host
        assert!(ApiUrl::new("https://").is_err());
        assert!(ApiUrl::new("https:///graphql").is_err());

        // Non-http scheme
        assert!(ApiUrl::new("ftp://example.com").is_err());
    }

    #[test]
    fn test_default_api_url_matches_parsed_form() {
        let parsed = ApiUrl::new(ApiUrl::DEFAULT).unwrap();
        assert_eq!(ApiUrl::default(), parsed);
        assert_eq!(ApiUrl::default().host_name(), "clnk-api.m10.live");
    }
}
