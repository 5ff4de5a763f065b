//! Error types for the Clnk SDK.
//!
//! This module contains the two error types a caller deals with:
//!
//! - [`ConfigError`]: configuration and validation failures, raised before any
//!   request is sent
//! - [`ClnkError`]: the domain error returned by every API operation
//!
//! # Error Translation
//!
//! Every failure coming out of the GraphQL transport is translated into a
//! [`ClnkError`] with one of five [`ErrorKind`]s. Server-reported GraphQL
//! errors are classified from the first entry of the `errors` array:
//!
//! 1. A structured `extensions.code` is used when the server supplies a known one
//! 2. Otherwise the message is matched against known substrings
//!    ("Authentication", "Not authorized", "rate limit")
//!
//! Substring matching is best-effort; it depends on the wording the server
//! uses for its messages.
//!
//! Failures without a structured `errors` payload (network errors, non-2xx
//! responses, undecodable bodies) are passed through unchanged as
//! [`ClnkError::Transport`].
//!
//! # Example
//!
//! ```rust
//! use clnk_sdk::{ClnkError, ErrorKind};
//! use clnk_sdk::clients::graphql::{GraphqlError, GraphqlErrorEntry};
//!
//! let raw = GraphqlError::Response {
//!     errors: vec![GraphqlErrorEntry::new("Not authorized to view this")],
//! };
//!
//! let error = ClnkError::from(raw);
//! assert_eq!(error.kind(), ErrorKind::Authorization);
//! assert_eq!(
//!     error.to_string(),
//!     "Authorization failed: You do not have permission to perform this action"
//! );
//! ```

use std::fmt;

use thiserror::Error;

use crate::clients::graphql::{GraphqlError, GraphqlErrorEntry};

/// Fixed message for [`ErrorKind::Authentication`] failures.
pub const AUTHENTICATION_FAILED_MESSAGE: &str =
    "Authentication failed: Please check your credentials or API key";

/// Fixed message for [`ErrorKind::Authorization`] failures.
pub const AUTHORIZATION_FAILED_MESSAGE: &str =
    "Authorization failed: You do not have permission to perform this action";

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Clnk API key.")]
    EmptyApiKey,

    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Omit the token instead of passing an empty one.")]
    EmptyAccessToken,

    /// API URL is invalid.
    #[error("Invalid API URL '{url}'. Please provide an http(s) URL (e.g., 'https://clnk-api.m10.live/graphql').")]
    InvalidApiUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Rate limit settings are invalid.
    #[error("Invalid rate limit: {reason}")]
    InvalidRateLimit {
        /// The reason the rate limit is invalid.
        reason: String,
    },

    /// Transport retry count is invalid.
    #[error("Invalid transport tries '{tries}'. Requests must be attempted at least once.")]
    InvalidTries {
        /// The invalid number of tries.
        tries: u32,
    },
}

/// The category of a [`ClnkError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad credentials or API key.
    Authentication,
    /// The caller lacks permission for the operation.
    Authorization,
    /// The server rejected the call because of rate limiting.
    RateLimited,
    /// Any other server-reported GraphQL error.
    Api,
    /// Network, HTTP or decoding failure with no structured error payload.
    Transport,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authentication => write!(f, "authentication"),
            Self::Authorization => write!(f, "authorization"),
            Self::RateLimited => write!(f, "rate_limited"),
            Self::Api => write!(f, "api"),
            Self::Transport => write!(f, "transport"),
        }
    }
}

/// Error returned by every Clnk API operation.
///
/// The server-reported variants keep the original GraphQL error entries in
/// `errors` so callers can inspect paths and extensions.
///
/// # Example
///
/// ```rust,ignore
/// use clnk_sdk::{ClnkClient, ClnkError};
///
/// match client.get_current_user().await {
///     Ok(user) => println!("Hello {:?}", user.name),
///     Err(ClnkError::Authentication { .. }) => println!("Please log in again"),
///     Err(ClnkError::Transport(e)) => println!("Network trouble: {e}"),
///     Err(e) => println!("{e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ClnkError {
    /// Bad credentials or API key.
    #[error("{message}")]
    Authentication {
        /// User-facing message.
        message: String,
        /// The GraphQL error entries returned by the server.
        errors: Vec<GraphqlErrorEntry>,
    },

    /// The caller lacks permission for the operation.
    #[error("{message}")]
    Authorization {
        /// User-facing message.
        message: String,
        /// The GraphQL error entries returned by the server.
        errors: Vec<GraphqlErrorEntry>,
    },

    /// The server reported a rate-limit condition.
    ///
    /// The rate limiter retries these once before surfacing them.
    #[error("{message}")]
    RateLimited {
        /// User-facing message.
        message: String,
        /// The GraphQL error entries returned by the server.
        errors: Vec<GraphqlErrorEntry>,
    },

    /// Any other server-reported GraphQL error.
    #[error("{message}")]
    Api {
        /// User-facing message (`"API Error: <server message>"`).
        message: String,
        /// The GraphQL error entries returned by the server.
        errors: Vec<GraphqlErrorEntry>,
    },

    /// Failure with no structured error payload, passed through unchanged.
    #[error(transparent)]
    Transport(GraphqlError),
}

// Verify ClnkError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClnkError>();
};

impl ClnkError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Authentication { .. } => ErrorKind::Authentication,
            Self::Authorization { .. } => ErrorKind::Authorization,
            Self::RateLimited { .. } => ErrorKind::RateLimited,
            Self::Api { .. } => ErrorKind::Api,
            Self::Transport(_) => ErrorKind::Transport,
        }
    }

    /// Returns the server-reported GraphQL error entries, if any.
    #[must_use]
    pub fn graphql_errors(&self) -> &[GraphqlErrorEntry] {
        match self {
            Self::Authentication { errors, .. }
            | Self::Authorization { errors, .. }
            | Self::RateLimited { errors, .. }
            | Self::Api { errors, .. } => errors,
            Self::Transport(_) => &[],
        }
    }

    /// Returns `true` if this error signals a rate-limit condition.
    ///
    /// This covers the [`RateLimited`](Self::RateLimited) kind, any error
    /// whose message mentions "rate limit", and HTTP 429 responses.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        if matches!(self, Self::RateLimited { .. }) {
            return true;
        }
        let status = match self {
            Self::Transport(GraphqlError::Http(e)) => e.status(),
            _ => None,
        };
        status == Some(429) || mentions_rate_limit(&self.to_string())
    }

    /// Translates a raw GraphQL failure into the domain taxonomy.
    #[must_use]
    pub fn from_graphql(error: GraphqlError) -> Self {
        match error {
            GraphqlError::Response { errors } if !errors.is_empty() => classify(errors),
            other => Self::Transport(other),
        }
    }
}

impl From<GraphqlError> for ClnkError {
    fn from(error: GraphqlError) -> Self {
        Self::from_graphql(error)
    }
}

fn mentions_rate_limit(message: &str) -> bool {
    message.to_lowercase().contains("rate limit")
}

fn classify(errors: Vec<GraphqlErrorEntry>) -> ClnkError {
    let first = &errors[0];

    let kind = first
        .code()
        .and_then(kind_from_code)
        .unwrap_or_else(|| kind_from_message(&first.message));

    match kind {
        ErrorKind::Authentication => ClnkError::Authentication {
            message: AUTHENTICATION_FAILED_MESSAGE.to_string(),
            errors,
        },
        ErrorKind::Authorization => ClnkError::Authorization {
            message: AUTHORIZATION_FAILED_MESSAGE.to_string(),
            errors,
        },
        ErrorKind::RateLimited => ClnkError::RateLimited {
            message: format!("API Error: {}", first.message),
            errors,
        },
        ErrorKind::Api | ErrorKind::Transport => ClnkError::Api {
            message: format!("API Error: {}", first.message),
            errors,
        },
    }
}

fn kind_from_code(code: &str) -> Option<ErrorKind> {
    match code {
        "UNAUTHENTICATED" => Some(ErrorKind::Authentication),
        "FORBIDDEN" | "UNAUTHORIZED" => Some(ErrorKind::Authorization),
        "RATE_LIMITED" | "TOO_MANY_REQUESTS" => Some(ErrorKind::RateLimited),
        _ => None,
    }
}

fn kind_from_message(message: &str) -> ErrorKind {
    if message.contains("Authentication") {
        ErrorKind::Authentication
    } else if message.contains("Not authorized") {
        ErrorKind::Authorization
    } else if mentions_rate_limit(message) {
        ErrorKind::RateLimited
    } else {
        ErrorKind::Api
    }
}
