//! HTTP request types for the Clnk SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the GraphQL endpoint. Every request is a JSON
//! `POST` to the configured endpoint, so a request only carries its body,
//! its extra headers and its retry budget.

use std::collections::HashMap;

use crate::clients::errors::InvalidHttpRequestError;

/// Content type sent with every request body.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// An HTTP request to be sent to the GraphQL endpoint.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use clnk_sdk::clients::HttpRequest;
/// use serde_json::json;
///
/// let request = HttpRequest::builder(json!({ "query": "query { me { id } }" }))
///     .header("Authorization", "Bearer abc")
///     .tries(3)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.tries, 3);
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The JSON request body.
    pub body: serde_json::Value,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
    /// Number of times to attempt the request (default: 1).
    pub tries: u32,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(body: impl Into<serde_json::Value>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(body)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `body` is not a JSON object
    /// - `tries` is zero
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if !self.body.is_object() {
            return Err(InvalidHttpRequestError::NonObjectBody {
                found: json_type_name(&self.body),
            });
        }

        if self.tries == 0 {
            return Err(InvalidHttpRequestError::InvalidTries { tries: self.tries });
        }

        Ok(())
    }
}

const fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    body: serde_json::Value,
    extra_headers: Option<HashMap<String, String>>,
    tries: u32,
}

impl HttpRequestBuilder {
    /// Creates a new builder with the required body.
    fn new(body: impl Into<serde_json::Value>) -> Self {
        Self {
            body: body.into(),
            extra_headers: None,
            tries: 1,
        }
    }

    /// Sets all extra headers at once.
    #[must_use]
    pub fn extra_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.extra_headers = Some(headers);
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets the number of times to attempt the request.
    ///
    /// Default is 1 (no retries). Set to a higher value to enable
    /// automatic retries for 429 and 500 responses.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = tries;
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            body: self.body,
            extra_headers: self.extra_headers,
            tries: self.tries,
        };
        request.verify()?;
        Ok(request)
    }
}
