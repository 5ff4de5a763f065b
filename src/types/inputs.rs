//! Input objects sent as GraphQL variables.
//!
//! `None` fields are omitted from the serialized variables rather than sent
//! as `null`.

use serde::{Deserialize, Serialize};

/// Credentials for [`ClnkClient::login`](crate::ClnkClient::login).
#[derive(Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LoginInput {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl LoginInput {
    /// Creates login credentials.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for LoginInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginInput")
            .field("email", &self.email)
            .field("password", &"*****")
            .finish()
    }
}

/// New account details for [`ClnkClient::register`](crate::ClnkClient::register).
#[derive(Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RegisterInput {
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl std::fmt::Debug for RegisterInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterInput")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"*****")
            .finish()
    }
}

/// A URL to shorten.
///
/// # Example
///
/// ```rust
/// use clnk_sdk::types::CreateUrlInput;
///
/// let input = CreateUrlInput {
///     code: Some("docs".to_string()),
///     ..CreateUrlInput::new("https://example.com/docs")
/// };
///
/// let value = serde_json::to_value(&input).unwrap();
/// assert_eq!(value, serde_json::json!({ "url": "https://example.com/docs", "code": "docs" }));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateUrlInput {
    /// The long URL.
    pub url: String,
    /// Custom short code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Preview image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Custom short URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
    /// Whether the server should generate a short code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shorten: Option<bool>,
}

impl CreateUrlInput {
    /// Creates an input for `url` with every optional field unset.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

/// Changes to an existing URL.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUrlInput {
    /// ID of the URL to update.
    pub id: String,
    /// The new long URL.
    pub url: String,
    /// Preview image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Custom short URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
}

/// Filter for URL listings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UrlFilter {
    /// Match on short code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Match on short URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
    /// Match on long URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Match on owner ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

/// Page selection for URL listings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Page number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    /// Page size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

/// Arguments of [`ClnkClient::get_urls`](crate::ClnkClient::get_urls) and
/// [`ClnkClient::get_all_urls`](crate::ClnkClient::get_all_urls).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UrlListOptions {
    /// Optional filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<UrlFilter>,
    /// Optional page selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Identifies a single URL by ID or short code.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UrlLookup {
    /// URL ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Short code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl UrlLookup {
    /// Looks a URL up by ID.
    #[must_use]
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            code: None,
        }
    }

    /// Looks a URL up by short code.
    #[must_use]
    pub fn by_code(code: impl Into<String>) -> Self {
        Self {
            id: None,
            code: Some(code.into()),
        }
    }
}

/// Request for a one-time password.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SendOtpInput {
    /// Email to send the code to.
    pub email: String,
}

/// A one-time password to check.
#[derive(Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct VerifyOtpInput {
    /// Email the code was sent to.
    pub email: String,
    /// The code.
    pub otp: String,
}

impl std::fmt::Debug for VerifyOtpInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerifyOtpInput")
            .field("email", &self.email)
            .field("otp", &"*****")
            .finish()
    }
}

/// Profile changes for the current user.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UpdateUserInput {
    /// New email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
