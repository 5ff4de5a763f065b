//! GraphQL client implementation for the Clnk API.
//!
//! This module provides the [`GraphqlClient`] type for executing GraphQL
//! documents against the configured endpoint.

use std::collections::HashMap;

use crate::clients::graphql::{GraphqlError, GraphqlErrorEntry};
use crate::clients::{HttpClient, HttpError, HttpRequest};
use crate::config::ClnkConfig;

/// GraphQL client for the Clnk API.
///
/// Sends `{ query, variables, operationName }` as a JSON `POST` and unwraps
/// the response envelope: a non-empty `errors` array becomes
/// [`GraphqlError::Response`], otherwise the `data` object is returned.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use clnk_sdk::{ClnkConfig, clients::GraphqlClient};
/// use serde_json::json;
///
/// let client = GraphqlClient::new(&ClnkConfig::default());
///
/// let data = client
///     .query(
///         "query GetUrl($id: ID!) { url(id: $id) { id url shortUrl } }",
///         Some("GetUrl"),
///         Some(json!({ "id": "42" })),
///         None,
///         None,
///     )
///     .await?;
///
/// println!("{}", data["url"]["shortUrl"]);
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client for the configured endpoint.
    #[must_use]
    pub fn new(config: &ClnkConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
        }
    }

    /// Returns the endpoint this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.http_client.endpoint()
    }

    /// Executes a GraphQL document and returns its `data` object.
    ///
    /// # Arguments
    ///
    /// * `query` - The GraphQL document
    /// * `operation_name` - Optional operation name sent as `operationName`
    /// * `variables` - Optional variables for the document
    /// * `headers` - Optional extra headers to include in the request
    /// * `tries` - Optional number of transport attempts (default: 1, no retries)
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Response`] when the server reports GraphQL
    /// errors, including on non-2xx responses that carry an `errors` array.
    /// Returns [`GraphqlError::Http`] for every other transport failure.
    pub async fn query(
        &self,
        query: &str,
        operation_name: Option<&str>,
        variables: Option<serde_json::Value>,
        headers: Option<HashMap<String, String>>,
        tries: Option<u32>,
    ) -> Result<serde_json::Value, GraphqlError> {
        let mut body = serde_json::json!({
            "query": query,
            "variables": variables.unwrap_or_else(|| serde_json::json!({})),
        });
        if let Some(name) = operation_name {
            body["operationName"] = serde_json::Value::from(name);
        }

        let mut builder = HttpRequest::builder(body).tries(tries.unwrap_or(1));
        if let Some(extra_headers) = headers {
            builder = builder.extra_headers(extra_headers);
        }

        let request = builder.build().map_err(|e| GraphqlError::Http(e.into()))?;

        let response = match self.http_client.request(request).await {
            Ok(response) => response,
            Err(error) => return Err(Self::recover_error_payload(error)),
        };

        if let Some(errors) = parse_errors(response.body.get("errors")) {
            return Err(GraphqlError::Response { errors });
        }

        Ok(response
            .body
            .get("data")
            .cloned()
            .unwrap_or(serde_json::Value::Null))
    }

    /// Surfaces a GraphQL `errors` array carried by a non-2xx response.
    ///
    /// Servers report validation failures with a 400 status but a regular
    /// GraphQL error envelope; those are classified like any other response
    /// error instead of being left as opaque HTTP failures.
    fn recover_error_payload(error: HttpError) -> GraphqlError {
        let message = match &error {
            HttpError::Response(e) => Some(e.message.as_str()),
            HttpError::MaxRetries(e) => Some(e.message.as_str()),
            HttpError::InvalidRequest(_) | HttpError::Network(_) => None,
        };

        let errors = message
            .and_then(|message| serde_json::from_str::<serde_json::Value>(message).ok())
            .and_then(|payload| parse_errors(payload.get("errors")));

        match errors {
            Some(errors) => {
                tracing::debug!(
                    "Recovered {} GraphQL error(s) from HTTP {:?} response",
                    errors.len(),
                    error.status()
                );
                GraphqlError::Response { errors }
            }
            None => GraphqlError::Http(error),
        }
    }
}

/// Parses a non-empty `errors` array, ignoring entries that are not objects.
fn parse_errors(value: Option<&serde_json::Value>) -> Option<Vec<GraphqlErrorEntry>> {
    let entries = value?.as_array()?;
    let errors: Vec<GraphqlErrorEntry> = entries
        .iter()
        .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
        .collect();

    if errors.is_empty() {
        None
    } else {
        Some(errors)
    }
}
