//! Executes one operation: headers, transport, error translation, extraction.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::AuthState;
use crate::client::operations::Operation;
use crate::clients::{GraphqlClient, GraphqlError};
use crate::error::ClnkError;
use crate::types::{ApiKeyDetails, AuthData, RefreshPayload, RegisterData, Url, UrlData, User};

/// A value that can be extracted from an operation's result field.
pub(crate) trait ResponsePayload: DeserializeOwned + Send + 'static {
    /// Token to store as the new bearer token, if this payload carries one.
    fn access_token(&self) -> Option<&str> {
        None
    }
}

impl ResponsePayload for AuthData {
    fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }
}

impl ResponsePayload for RefreshPayload {
    fn access_token(&self) -> Option<&str> {
        Some(&self.access_token)
    }
}

impl ResponsePayload for RegisterData {}
impl ResponsePayload for Url {}
impl ResponsePayload for UrlData {}
impl ResponsePayload for User {}
impl ResponsePayload for ApiKeyDetails {}
impl ResponsePayload for Vec<Option<ApiKeyDetails>> {}
impl ResponsePayload for String {}
impl ResponsePayload for bool {}

/// Shared handle used by direct calls and by queued limiter units alike.
#[derive(Clone, Debug)]
pub(crate) struct Dispatcher {
    graphql: Arc<GraphqlClient>,
    auth: Arc<AuthState>,
    tries: u32,
}

impl Dispatcher {
    pub(crate) const fn new(graphql: Arc<GraphqlClient>, auth: Arc<AuthState>, tries: u32) -> Self {
        Self {
            graphql,
            auth,
            tries,
        }
    }

    pub(crate) fn auth(&self) -> &AuthState {
        &self.auth
    }

    /// Runs `operation` once and extracts its result field.
    ///
    /// Headers are built here rather than at scheduling time, so a queued
    /// call sees the token stored by a login that ran before it. A returned
    /// access token is stored before this resolves.
    pub(crate) async fn execute<T: ResponsePayload>(
        &self,
        operation: &'static Operation,
        variables: serde_json::Value,
    ) -> Result<T, ClnkError> {
        let headers = self.auth.build_auth_headers();

        tracing::debug!(
            "Executing {} {} (authenticated: {})",
            operation.kind.as_str(),
            operation.name,
            !headers.is_empty()
        );

        let data = self
            .graphql
            .query(
                operation.document,
                Some(operation.name),
                Some(variables),
                Some(headers),
                Some(self.tries),
            )
            .await?;

        let payload: T = extract_field(data, operation.field)?;

        if let Some(token) = payload.access_token().filter(|token| !token.is_empty()) {
            self.auth.set_access_token(token);
        }

        Ok(payload)
    }
}

/// Takes `field` out of a `data` object and decodes it.
fn extract_field<T: DeserializeOwned>(
    mut data: serde_json::Value,
    field: &'static str,
) -> Result<T, GraphqlError> {
    let value = data
        .get_mut(field)
        .map(serde_json::Value::take)
        .filter(|value| !value.is_null())
        .ok_or(GraphqlError::MissingData { field })?;

    Ok(serde_json::from_value(value)?)
}

/// Serializes an input object into a variables map.
pub(crate) fn encode_variables(value: impl Serialize) -> Result<serde_json::Value, ClnkError> {
    serde_json::to_value(value).map_err(|e| ClnkError::Transport(GraphqlError::Encode(e)))
}

/// Builds a variables map holding a single named value.
pub(crate) fn single_variable(
    name: &str,
    value: impl Serialize,
) -> Result<serde_json::Value, ClnkError> {
    let mut variables = serde_json::Map::new();
    variables.insert(name.to_string(), encode_variables(value)?);
    Ok(serde_json::Value::Object(variables))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_field_decodes_payload() {
        let url: Url = extract_field(
            json!({ "getUrl": { "id": "1", "url": "https://a.example", "shortUrl": "https://clnk.to/a" } }),
            "getUrl",
        )
        .unwrap();

        assert_eq!(url.id, "1");
    }

    #[test]
    fn test_extract_field_rejects_missing_and_null() {
        let missing: Result<bool, _> = extract_field(json!({}), "deleteUrl");
        assert!(matches!(missing, Err(GraphqlError::MissingData { field: "deleteUrl" })));

        let null: Result<bool, _> = extract_field(json!({ "deleteUrl": null }), "deleteUrl");
        assert!(matches!(null, Err(GraphqlError::MissingData { .. })));

        let no_data: Result<bool, _> = extract_field(serde_json::Value::Null, "deleteUrl");
        assert!(matches!(no_data, Err(GraphqlError::MissingData { .. })));
    }

    #[test]
    fn test_extract_field_reports_shape_mismatch() {
        let result: Result<bool, _> = extract_field(json!({ "deleteUrl": "yes" }), "deleteUrl");
        assert!(matches!(result, Err(GraphqlError::Decode(_))));
    }

    #[test]
    fn test_single_variable_wraps_value() {
        let variables = single_variable("id", "42").unwrap();
        assert_eq!(variables, json!({ "id": "42" }));
    }

    #[test]
    fn test_auth_payloads_expose_tokens() {
        let auth = AuthData {
            access_token: Some("abc".to_string()),
            ..AuthData::default()
        };
        assert_eq!(ResponsePayload::access_token(&auth), Some("abc"));

        let refresh = RefreshPayload {
            access_token: "def".to_string(),
        };
        assert_eq!(ResponsePayload::access_token(&refresh), Some("def"));

        assert_eq!(ResponsePayload::access_token(&true), None);
    }
}
