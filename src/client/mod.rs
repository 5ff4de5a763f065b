//! High-level client for the Clnk API.
//!
//! [`ClnkClient`] exposes one async method per API operation. Every method:
//!
//! 1. Builds the operation's variables from typed input
//! 2. Attaches the current bearer token (see [`AuthState`])
//! 3. For mutations, queues the call on the client's [`RateLimiter`]
//! 4. Executes the GraphQL document and translates failures into [`ClnkError`]
//! 5. Extracts and decodes the operation's result field
//!
//! Queries bypass the rate limiter and run concurrently.

mod dispatcher;
mod operations;

use std::sync::Arc;

use crate::auth::AuthState;
use crate::clients::GraphqlClient;
use crate::config::{AccessToken, ClnkConfig};
use crate::error::ClnkError;
use crate::limiter::{RateLimiter, WindowSnapshot};
use crate::qr::{generate_qr_code_url, QrCodeOptions};
use crate::types::{
    ApiKeyDetails, AuthData, CreateUrlInput, LoginInput, RefreshPayload, RegisterData,
    RegisterInput, SendOtpInput, UpdateUrlInput, UpdateUserInput, Url, UrlData, UrlListOptions,
    UrlLookup, User, VerifyOtpInput,
};

use dispatcher::{encode_variables, single_variable, Dispatcher, ResponsePayload};
use operations::{Operation, OperationKind};

/// Async client for the Clnk URL shortener API.
///
/// # Thread Safety
///
/// `ClnkClient` is `Send + Sync`. Share it behind an `Arc` to issue calls
/// from several tasks; mutations from all tasks go through the same queue.
///
/// # Example
///
/// ```rust,ignore
/// use clnk_sdk::{ClnkClient, ClnkConfig};
/// use clnk_sdk::types::{CreateUrlInput, LoginInput};
///
/// let client = ClnkClient::new(ClnkConfig::default());
///
/// // The returned access token is stored for every later call
/// client.login(&LoginInput::new("ada@example.com", "secret")).await?;
///
/// let url = client
///     .create_url(&CreateUrlInput::new("https://example.com/a/long/path"))
///     .await?;
/// println!("Short URL: {}", url.short_url);
/// ```
#[derive(Debug)]
pub struct ClnkClient {
    config: ClnkConfig,
    dispatcher: Dispatcher,
    limiter: RateLimiter,
}

// Verify ClnkClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClnkClient>();
};

impl ClnkClient {
    /// Creates a client from a validated configuration.
    ///
    /// No request is sent and no task is spawned until the first call.
    #[must_use]
    pub fn new(config: ClnkConfig) -> Self {
        let graphql = Arc::new(GraphqlClient::new(&config));
        let auth = Arc::new(AuthState::new(config.access_token().cloned()));
        let dispatcher = Dispatcher::new(graphql, auth, config.transport_tries());
        let limiter = RateLimiter::new(config.rate_limit());

        tracing::debug!(
            "Created Clnk client for {} ({} requests per {:?})",
            config.api_url(),
            config.rate_limit().max_requests(),
            config.rate_limit().window()
        );

        Self {
            config,
            dispatcher,
            limiter,
        }
    }

    /// Returns the configuration this client was created with.
    #[must_use]
    pub const fn config(&self) -> &ClnkConfig {
        &self.config
    }

    /// Replaces the bearer token used by every later call.
    ///
    /// The token is stored as given, without validation.
    pub fn set_access_token(&self, token: impl Into<String>) {
        self.dispatcher.auth().set_access_token(token);
    }

    /// Removes the bearer token; later calls are sent unauthenticated.
    pub fn clear_access_token(&self) {
        self.dispatcher.auth().clear_access_token();
    }

    /// Returns the current bearer token, if any.
    #[must_use]
    pub fn access_token(&self) -> Option<AccessToken> {
        self.dispatcher.auth().access_token()
    }

    /// Returns the rate limiter's current window counters.
    #[must_use]
    pub fn window_snapshot(&self) -> WindowSnapshot {
        self.limiter.window_snapshot()
    }

    /// Logs in with email and password.
    ///
    /// A non-empty access token in the response is stored before this returns.
    ///
    /// # Errors
    ///
    /// Returns [`ClnkError::Authentication`] for bad credentials, or any other
    /// [`ClnkError`] the call fails with.
    pub async fn login(&self, input: &LoginInput) -> Result<AuthData, ClnkError> {
        let variables = single_variable("input", input)?;
        self.run(&operations::LOGIN, variables).await
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns a [`ClnkError`] if the call fails.
    pub async fn register(&self, input: &RegisterInput) -> Result<RegisterData, ClnkError> {
        let variables = single_variable("input", input)?;
        self.run(&operations::REGISTER, variables).await
    }

    /// Exchanges a refresh token for a new access token and stores it.
    ///
    /// # Errors
    ///
    /// Returns a [`ClnkError`] if the call fails.
    pub async fn refresh_token(&self, token: &str) -> Result<RefreshPayload, ClnkError> {
        let variables = single_variable("token", token)?;
        self.run(&operations::REFRESH_TOKEN, variables).await
    }

    /// Signs in with a Google authorization code.
    ///
    /// Like [`login`](Self::login), a returned access token is stored.
    ///
    /// # Errors
    ///
    /// Returns a [`ClnkError`] if the call fails.
    pub async fn google_auth(&self, code: &str) -> Result<AuthData, ClnkError> {
        let variables = single_variable("code", code)?;
        self.run(&operations::GOOGLE_AUTH, variables).await
    }

    /// Sends a one-time password to an email address.
    ///
    /// Returns the server's confirmation message.
    ///
    /// # Errors
    ///
    /// Returns a [`ClnkError`] if the call fails.
    pub async fn send_otp(&self, input: &SendOtpInput) -> Result<String, ClnkError> {
        let variables = single_variable("input", input)?;
        self.run(&operations::SEND_OTP, variables).await
    }

    /// Checks a one-time password.
    ///
    /// # Errors
    ///
    /// Returns a [`ClnkError`] if the call fails.
    pub async fn verify_otp(&self, input: &VerifyOtpInput) -> Result<bool, ClnkError> {
        let variables = single_variable("input", input)?;
        self.run(&operations::VERIFY_OTP, variables).await
    }

    /// Issues a new API key for the current user.
    ///
    /// # Errors
    ///
    /// Returns a [`ClnkError`] if the call fails.
    pub async fn generate_api_key(&self) -> Result<ApiKeyDetails, ClnkError> {
        self.run(&operations::GENERATE_API_KEY, serde_json::json!({}))
            .await
    }

    /// Revokes an API key.
    ///
    /// # Errors
    ///
    /// Returns a [`ClnkError`] if the call fails.
    pub async fn revoke_api_key(&self, id: &str) -> Result<ApiKeyDetails, ClnkError> {
        let variables = single_variable("id", id)?;
        self.run(&operations::REVOKE_API_KEY, variables).await
    }

    /// Lists the current user's API keys.
    ///
    /// # Errors
    ///
    /// Returns a [`ClnkError`] if the call fails.
    pub async fn get_api_keys(&self) -> Result<Vec<ApiKeyDetails>, ClnkError> {
        let keys: Vec<Option<ApiKeyDetails>> = self
            .run(&operations::API_KEYS, serde_json::json!({}))
            .await?;
        Ok(keys.into_iter().flatten().collect())
    }

    /// Shortens a URL.
    ///
    /// # Errors
    ///
    /// Returns a [`ClnkError`] if the call fails.
    pub async fn create_url(&self, input: &CreateUrlInput) -> Result<Url, ClnkError> {
        let variables = single_variable("input", input)?;
        self.run(&operations::CREATE_URL, variables).await
    }

    /// Updates an existing URL.
    ///
    /// # Errors
    ///
    /// Returns a [`ClnkError`] if the call fails.
    pub async fn update_url(&self, input: &UpdateUrlInput) -> Result<Url, ClnkError> {
        let variables = single_variable("input", input)?;
        self.run(&operations::UPDATE_URL, variables).await
    }

    /// Deletes a URL by ID.
    ///
    /// # Errors
    ///
    /// Returns a [`ClnkError`] if the call fails.
    pub async fn delete_url(&self, id: &str) -> Result<bool, ClnkError> {
        let variables = single_variable("id", id)?;
        self.run(&operations::DELETE_URL, variables).await
    }

    /// Fetches a single URL by ID or short code.
    ///
    /// # Errors
    ///
    /// Returns a [`ClnkError`] if the call fails or no URL matches.
    pub async fn get_url(&self, lookup: &UrlLookup) -> Result<Url, ClnkError> {
        let variables = encode_variables(lookup)?;
        self.run(&operations::GET_URL, variables).await
    }

    /// Lists the current user's URLs.
    ///
    /// # Errors
    ///
    /// Returns a [`ClnkError`] if the call fails.
    pub async fn get_urls(&self, options: &UrlListOptions) -> Result<UrlData, ClnkError> {
        let variables = encode_variables(options)?;
        self.run(&operations::GET_URLS, variables).await
    }

    /// Lists every URL visible to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`ClnkError::Authorization`] when the caller may not list all
    /// URLs, or any other [`ClnkError`] the call fails with.
    pub async fn get_all_urls(&self, options: &UrlListOptions) -> Result<UrlData, ClnkError> {
        let variables = encode_variables(options)?;
        self.run(&operations::GET_ALL_URLS, variables).await
    }

    /// Fetches the authenticated user, including roles.
    ///
    /// # Errors
    ///
    /// Returns a [`ClnkError`] if the call fails.
    pub async fn get_current_user(&self) -> Result<User, ClnkError> {
        self.run(&operations::ME, serde_json::json!({})).await
    }

    /// Updates the authenticated user's profile.
    ///
    /// # Errors
    ///
    /// Returns a [`ClnkError`] if the call fails.
    pub async fn update_user(&self, input: &UpdateUserInput) -> Result<User, ClnkError> {
        let variables = single_variable("input", input)?;
        self.run(&operations::UPDATE_USER, variables).await
    }

    /// Builds a QR code image URL for a short URL.
    ///
    /// This is a pure string builder; no request is sent.
    #[must_use]
    pub fn generate_qr_code_url(&self, short_url: &str, options: &QrCodeOptions) -> String {
        generate_qr_code_url(short_url, options)
    }

    /// Routes mutations through the rate limiter and runs queries directly.
    async fn run<T: ResponsePayload>(
        &self,
        operation: &'static Operation,
        variables: serde_json::Value,
    ) -> Result<T, ClnkError> {
        match operation.kind {
            OperationKind::Query => self.dispatcher.execute(operation, variables).await,
            OperationKind::Mutation => {
                let dispatcher = self.dispatcher.clone();
                self.limiter
                    .schedule_call(move || {
                        let dispatcher = dispatcher.clone();
                        let variables = variables.clone();
                        async move { dispatcher.execute(operation, variables).await }
                    })
                    .await
            }
        }
    }
}
