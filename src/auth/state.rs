//! Bearer token state shared by every request a client sends.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::config::AccessToken;

/// Name of the header carrying the bearer token.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Holds the current bearer token of a client.
///
/// The token is read by every outbound call to build its headers and
/// replaced after a successful login or token refresh.
///
/// # Thread Safety
///
/// `AuthState` is `Send + Sync`; reads and writes go through an internal
/// `RwLock` so concurrent calls always observe a whole token.
///
/// # Example
///
/// ```rust
/// use clnk_sdk::auth::AuthState;
///
/// let state = AuthState::new(None);
/// assert!(state.build_auth_headers().is_empty());
///
/// state.set_access_token("abc");
/// assert_eq!(
///     state.build_auth_headers().get("Authorization").map(String::as_str),
///     Some("Bearer abc")
/// );
/// ```
#[derive(Debug, Default)]
pub struct AuthState {
    token: RwLock<Option<AccessToken>>,
}

// Verify AuthState is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthState>();
};

impl AuthState {
    /// Creates auth state holding an optional initial token.
    #[must_use]
    pub const fn new(token: Option<AccessToken>) -> Self {
        Self {
            token: RwLock::new(token),
        }
    }

    /// Replaces the stored token unconditionally.
    ///
    /// No validation is performed; the new token is used by every request
    /// built afterwards.
    pub fn set_access_token(&self, token: impl Into<String>) {
        let token = AccessToken::unchecked(token);
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token);
        tracing::debug!("Access token updated");
    }

    /// Removes the stored token.
    pub fn clear_access_token(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
        tracing::debug!("Access token cleared");
    }

    /// Returns a copy of the stored token, if any.
    #[must_use]
    pub fn access_token(&self) -> Option<AccessToken> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Builds the authentication headers for an outbound request.
    ///
    /// Returns an empty map when no token (or an empty one) is stored,
    /// otherwise a single `Authorization: Bearer <token>` entry.
    #[must_use]
    pub fn build_auth_headers(&self) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        if let Some(token) = self
            .token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .filter(|token| !token.as_ref().is_empty())
        {
            headers.insert(
                AUTHORIZATION_HEADER.to_string(),
                format!("Bearer {}", token.as_ref()),
            );
        }
        headers
    }
}
