//! Authentication state for the Clnk SDK.
//!
//! Clnk authenticates requests in two independent ways:
//!
//! - **API key**: configured once and sent as the `X-API-Key` header on every
//!   request (see [`ClnkConfig`](crate::ClnkConfig))
//! - **Bearer token**: obtained from `login`, `google_auth` or `refresh_token`
//!   and sent as `Authorization: Bearer <token>`
//!
//! The bearer token is held by [`AuthState`], owned by each
//! [`ClnkClient`](crate::ClnkClient). Successful login and refresh calls
//! store the returned token before the call returns, so the next request is
//! already authenticated.
//!
//! # Example
//!
//! ```rust,ignore
//! use clnk_sdk::{ClnkClient, ClnkConfig};
//! use clnk_sdk::types::LoginInput;
//!
//! let client = ClnkClient::new(ClnkConfig::default());
//! client.login(&LoginInput::new("me@example.com", "hunter2")).await?;
//!
//! // Authenticated from here on
//! let me = client.get_current_user().await?;
//! ```

mod state;

pub use state::{AuthState, AUTHORIZATION_HEADER};
