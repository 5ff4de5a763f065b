//! GraphQL client for the Clnk API.
//!
//! This module provides a GraphQL client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) that posts documents to the
//! configured endpoint and unwraps the GraphQL response envelope.
//!
//! # Overview
//!
//! - [`GraphqlClient`]: Executes documents and returns the `data` object
//! - [`GraphqlError`]: Raw failure type of the GraphQL layer
//! - [`GraphqlErrorEntry`]: One entry of a response's `errors` array
//!
//! # Response Structure
//!
//! GraphQL responses contain these fields in the body:
//!
//! - `data`: The query result data
//! - `errors`: Any GraphQL errors, usually alongside HTTP 200
//!
//! # Retry Behavior
//!
//! By default, requests are attempted once (`tries=1`). Transport-level
//! retries on 429 and 500 responses are enabled by passing `tries`.

mod client;
mod errors;

pub use client::GraphqlClient;
pub use errors::{GraphqlError, GraphqlErrorEntry};
