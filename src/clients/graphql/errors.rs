//! GraphQL-specific error types for the Clnk SDK.
//!
//! This module contains the raw failure type of the GraphQL layer. It is
//! translated into [`ClnkError`](crate::ClnkError) before reaching callers of
//! the high-level client.
//!
//! - [`GraphqlError::Http`]: Wraps underlying HTTP errors
//! - [`GraphqlError::Response`]: The server returned a non-empty `errors` array
//! - [`GraphqlError::MissingData`]: The expected top-level field was absent
//! - [`GraphqlError::Decode`]: The data did not match the expected shape
//! - [`GraphqlError::Encode`]: The variables could not be serialized
//! - [`GraphqlError::RequestDropped`]: A queued call never produced a result

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clients::HttpError;

/// One entry of a GraphQL response's `errors` array.
///
/// # Example
///
/// ```rust
/// use clnk_sdk::clients::graphql::GraphqlErrorEntry;
/// use serde_json::json;
///
/// let entry = GraphqlErrorEntry::new("Not authorized")
///     .with_extensions(json!({ "code": "FORBIDDEN" }));
///
/// assert_eq!(entry.code(), Some("FORBIDDEN"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphqlErrorEntry {
    /// Human-readable error message.
    pub message: String,
    /// Source locations in the query document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<serde_json::Value>,
    /// Response path of the field that failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<serde_json::Value>,
    /// Server-specific extensions, usually carrying a `code`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Value>,
}

impl GraphqlErrorEntry {
    /// Creates an entry with only a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: None,
            path: None,
            extensions: None,
        }
    }

    /// Attaches an `extensions` object.
    #[must_use]
    pub fn with_extensions(mut self, extensions: serde_json::Value) -> Self {
        self.extensions = Some(extensions);
        self
    }

    /// Returns `extensions.code`, if the server supplied one.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.extensions
            .as_ref()
            .and_then(|extensions| extensions.get("code"))
            .and_then(serde_json::Value::as_str)
    }
}

/// Error type for GraphQL operations.
///
/// # Example
///
/// ```rust
/// use clnk_sdk::clients::graphql::GraphqlError;
/// use clnk_sdk::clients::{HttpError, HttpResponseError};
///
/// let http_error = HttpError::Response(HttpResponseError {
///     code: 502,
///     message: r#"{"raw_body":"Bad Gateway"}"#.to_string(),
///     error_reference: None,
/// });
/// let graphql_error: GraphqlError = http_error.into();
/// assert!(graphql_error.to_string().contains("Bad Gateway"));
/// ```
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// An HTTP-level error occurred.
    ///
    /// It includes network errors, non-2xx responses without a GraphQL
    /// `errors` payload, and retry exhaustion.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The server reported one or more GraphQL errors.
    #[error("GraphQL error: {}", first_message(.errors))]
    Response {
        /// The reported errors, in server order.
        errors: Vec<GraphqlErrorEntry>,
    },

    /// The response carried no value for the requested field.
    #[error("Response data is missing field '{field}'")]
    MissingData {
        /// The top-level field that was expected.
        field: &'static str,
    },

    /// The response data could not be decoded.
    #[error("Failed to decode response data: {0}")]
    Decode(#[from] serde_json::Error),

    /// The operation variables could not be encoded.
    #[error("Failed to encode variables: {0}")]
    Encode(serde_json::Error),

    /// A queued call was dropped before it produced a result.
    #[error("Request was dropped before completion")]
    RequestDropped,
}

fn first_message(errors: &[GraphqlErrorEntry]) -> &str {
    errors.first().map_or("unknown error", |e| e.message.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpResponseError, MaxHttpRetriesExceededError};
    use serde_json::json;

    #[test]
    fn test_entry_deserializes_from_server_payload() {
        let entry: GraphqlErrorEntry = serde_json::from_value(json!({
            "message": "Invalid code",
            "locations": [{ "line": 1, "column": 3 }],
            "path": ["createUrl"],
            "extensions": { "code": "BAD_USER_INPUT" }
        }))
        .unwrap();

        assert_eq!(entry.message, "Invalid code");
        assert_eq!(entry.code(), Some("BAD_USER_INPUT"));
        assert_eq!(entry.path, Some(json!(["createUrl"])));
    }

    #[test]
    fn test_entry_without_extensions_has_no_code() {
        let entry: GraphqlErrorEntry =
            serde_json::from_value(json!({ "message": "boom" })).unwrap();
        assert!(entry.code().is_none());
    }

    #[test]
    fn test_response_error_displays_first_message() {
        let error = GraphqlError::Response {
            errors: vec![GraphqlErrorEntry::new("first"), GraphqlErrorEntry::new("second")],
        };
        assert_eq!(error.to_string(), "GraphQL error: first");
    }

    #[test]
    fn test_from_http_error_conversion() {
        let http_error = HttpError::Response(HttpResponseError {
            code: 500,
            message: r#"{"raw_body":"Internal Server Error"}"#.to_string(),
            error_reference: None,
        });

        let graphql_error: GraphqlError = http_error.into();

        assert!(matches!(graphql_error, GraphqlError::Http(_)));
    }

    #[test]
    fn test_http_error_wraps_max_retries_exceeded() {
        let graphql_error = GraphqlError::Http(HttpError::MaxRetries(MaxHttpRetriesExceededError {
            code: 429,
            tries: 3,
            message: "{}".to_string(),
            error_reference: None,
        }));
        let message = graphql_error.to_string();

        assert!(message.contains("Exceeded maximum retry count"));
        assert!(message.contains('3'));
    }

    #[test]
    fn test_missing_data_names_field() {
        let error = GraphqlError::MissingData { field: "login" };
        assert!(error.to_string().contains("'login'"));
    }

    #[test]
    fn test_graphql_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GraphqlError>();
    }
}
