//! Result entities returned by the Clnk API.
//!
//! Field names are `snake_case` in Rust and `camelCase` on the wire. Every
//! field the schema marks nullable is an `Option`, so partial selections
//! decode without error.

use serde::{Deserialize, Deserializer, Serialize};

/// A role attached to a user.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Role {
    /// Role ID.
    pub id: String,
    /// Role name (e.g., "admin").
    pub name: String,
}

/// A registered user.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Whether the email address has been verified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
    /// Roles granted to the user. Null entries are dropped.
    #[serde(
        default,
        deserialize_with = "skip_null_items",
        skip_serializing_if = "Option::is_none"
    )]
    pub roles: Option<Vec<Role>>,
}

/// A shortened URL.
///
/// # Example
///
/// ```rust
/// use clnk_sdk::types::Url;
///
/// let url: Url = serde_json::from_value(serde_json::json!({
///     "id": "1",
///     "url": "https://example.com/a/very/long/path",
///     "shortUrl": "https://clnk.to/abc",
///     "code": "abc"
/// }))
/// .unwrap();
///
/// assert_eq!(url.short_url, "https://clnk.to/abc");
/// assert!(url.created_at.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Url {
    /// URL ID.
    pub id: String,
    /// The original long URL.
    pub url: String,
    /// The shortened URL.
    pub short_url: String,
    /// The short code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Preview image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Creation timestamp as sent by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last update timestamp as sent by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Owner of the URL, when selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Pagination metadata of a list result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Meta {
    /// Total number of matching items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    /// Current page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    /// Number of pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<i64>,
    /// Page size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

/// A page of URLs.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UrlData {
    /// The URLs on this page. Null entries are dropped.
    #[serde(
        default,
        deserialize_with = "skip_null_items",
        skip_serializing_if = "Option::is_none"
    )]
    pub data: Option<Vec<Url>>,
    /// Pagination metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

/// Result of a login or Google sign-in.
#[derive(Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthData {
    /// Bearer token for subsequent calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// Token that can be exchanged for a new access token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// The authenticated user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl std::fmt::Debug for AuthData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthData")
            .field("access_token", &self.access_token.as_ref().map(|_| "*****"))
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "*****"))
            .field("user", &self.user)
            .finish()
    }
}

/// Result of a registration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RegisterData {
    /// The newly registered user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Result of a token refresh.
#[derive(Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RefreshPayload {
    /// The new bearer token.
    pub access_token: String,
}

impl std::fmt::Debug for RefreshPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshPayload")
            .field("access_token", &"*****")
            .finish()
    }
}

/// An API key issued to a user.
#[derive(Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyDetails {
    /// API key ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The key itself. Only returned when the key is generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Creation timestamp as sent by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Owner of the key, when selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<User>,
}

impl std::fmt::Debug for ApiKeyDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyDetails")
            .field("id", &self.id)
            .field("key", &self.key.as_ref().map(|_| "*****"))
            .field("created_at", &self.created_at)
            .field("owner", &self.owner)
            .finish()
    }
}

/// Decodes a nullable list whose items are nullable, dropping null items.
pub(crate) fn skip_null_items<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items: Option<Vec<Option<T>>> = Option::deserialize(deserializer)?;
    Ok(items.map(|items| items.into_iter().flatten().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_decodes_camel_case_fields() {
        let user: User = serde_json::from_value(json!({
            "id": "u1",
            "name": "Ada",
            "email": "ada@example.com",
            "emailVerified": true,
            "roles": [{ "id": "r1", "name": "admin" }, null]
        }))
        .unwrap();

        assert_eq!(user.email_verified, Some(true));
        assert_eq!(
            user.roles,
            Some(vec![Role {
                id: "r1".to_string(),
                name: "admin".to_string()
            }])
        );
    }

    #[test]
    fn test_user_tolerates_missing_and_null_fields() {
        let user: User = serde_json::from_value(json!({ "id": "u1", "roles": null })).unwrap();

        assert_eq!(user.id.as_deref(), Some("u1"));
        assert!(user.name.is_none());
        assert!(user.roles.is_none());
    }

    #[test]
    fn test_url_requires_non_nullable_fields() {
        let result: Result<Url, _> = serde_json::from_value(json!({ "id": "1", "url": "x" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_url_data_drops_null_entries() {
        let page: UrlData = serde_json::from_value(json!({
            "data": [
                { "id": "1", "url": "https://a.example", "shortUrl": "https://clnk.to/a" },
                null
            ],
            "meta": { "total": 1, "page": 1, "pages": 1, "limit": 10 }
        }))
        .unwrap();

        assert_eq!(page.data.unwrap().len(), 1);
        assert_eq!(page.meta.unwrap().total, Some(1));
    }

    #[test]
    fn test_auth_data_debug_masks_tokens() {
        let auth = AuthData {
            access_token: Some("secret-access".to_string()),
            refresh_token: Some("secret-refresh".to_string()),
            user: None,
        };
        let debug = format!("{auth:?}");

        assert!(!debug.contains("secret-access"));
        assert!(!debug.contains("secret-refresh"));
        assert!(debug.contains("*****"));
    }

    #[test]
    fn test_url_serializes_without_empty_optionals() {
        let url = Url {
            id: "1".to_string(),
            url: "https://a.example".to_string(),
            short_url: "https://clnk.to/a".to_string(),
            ..Url::default()
        };
        let value = serde_json::to_value(&url).unwrap();

        assert_eq!(value["shortUrl"], "https://clnk.to/a");
        assert!(value.get("createdAt").is_none());
    }
}
