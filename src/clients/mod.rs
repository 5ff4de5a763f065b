//! HTTP and GraphQL transport for Clnk API communication.
//!
//! This module provides the transport layer underneath
//! [`ClnkClient`](crate::ClnkClient). It handles request/response processing,
//! transport retries and the GraphQL response envelope.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client for the GraphQL endpoint
//! - [`HttpRequest`]: A request to be sent to the endpoint
//! - [`HttpResponse`]: A parsed response from the endpoint
//! - [`graphql::GraphqlClient`]: GraphQL client returning the `data` object
//! - [`graphql::GraphqlError`]: GraphQL-level error type
//!
//! # Retry Behavior
//!
//! The HTTP client implements automatic retry logic for transient failures:
//!
//! - **429 (Rate Limited)**: Retries using `Retry-After` header value, or 1 second if not present
//! - **500 (Server Error)**: Retries with fixed 1-second delay
//! - **Other errors**: Returns immediately without retry
//!
//! The default `tries` is 1, meaning no automatic retries. The high-level
//! client passes [`ClnkConfig::transport_tries`](crate::ClnkConfig::transport_tries).

mod errors;
pub mod graphql;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, API_KEY_HEADER, SDK_VERSION};
pub use http_request::{HttpRequest, HttpRequestBuilder, JSON_CONTENT_TYPE};
pub use http_response::HttpResponse;

// Re-export GraphQL client types at the clients module level
pub use graphql::{GraphqlClient, GraphqlError, GraphqlErrorEntry};
