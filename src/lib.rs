//! # Clnk Rust SDK
//!
//! A Rust SDK for the Clnk URL shortener GraphQL API, providing typed async
//! operations, bearer-token handling and client-side rate limiting.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ClnkConfig`] and [`ClnkConfigBuilder`]
//! - Validated newtypes for the endpoint and credentials
//! - A [`ClnkClient`] with one async method per API operation
//! - Automatic capture of the access token returned by login and refresh
//! - A FIFO rate limiter for mutations, with one retry on rate-limit errors
//! - A structured error taxonomy via [`ClnkError`] and [`ErrorKind`]
//! - QR code image links for short URLs
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use clnk_sdk::{ApiKey, ClnkClient, ClnkConfig, RateLimitConfig};
//!
//! // Create configuration using the builder pattern
//! let config = ClnkConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .rate_limit(RateLimitConfig::new(30, Duration::from_secs(60)).unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = ClnkClient::new(config);
//! assert_eq!(client.window_snapshot().max_requests, 30);
//! ```
//!
//! ## Authentication
//!
//! ```rust,ignore
//! use clnk_sdk::{ClnkClient, ClnkConfig};
//! use clnk_sdk::types::LoginInput;
//!
//! let client = ClnkClient::new(ClnkConfig::default());
//!
//! // The access token in the response is stored on the client
//! let auth = client.login(&LoginInput::new("ada@example.com", "secret")).await?;
//!
//! // Later calls carry `Authorization: Bearer <token>`
//! let me = client.get_current_user().await?;
//! ```
//!
//! ## Shortening URLs
//!
//! ```rust,ignore
//! use clnk_sdk::types::{CreateUrlInput, UrlListOptions, Pagination};
//! use clnk_sdk::qr::QrCodeOptions;
//!
//! let url = client
//!     .create_url(&CreateUrlInput::new("https://example.com/a/very/long/path"))
//!     .await?;
//!
//! let page = client
//!     .get_urls(&UrlListOptions {
//!         pagination: Some(Pagination { page: Some(1), limit: Some(20) }),
//!         ..UrlListOptions::default()
//!     })
//!     .await?;
//!
//! let qr = client.generate_qr_code_url(&url.short_url, &QrCodeOptions::default());
//! ```
//!
//! ## Error Handling
//!
//! ```rust,ignore
//! use clnk_sdk::{ClnkError, ErrorKind};
//!
//! match client.get_all_urls(&Default::default()).await {
//!     Ok(page) => println!("{} URLs", page.meta.and_then(|m| m.total).unwrap_or(0)),
//!     Err(e) if e.kind() == ErrorKind::Authorization => println!("Admins only"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Token, window and queue belong to one client instance
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod auth;
pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod limiter;
pub mod qr;
pub mod types;

// Re-export public types at crate root for convenience
pub use auth::AuthState;
pub use client::ClnkClient;
pub use config::{AccessToken, ApiKey, ApiUrl, ClnkConfig, ClnkConfigBuilder, RateLimitConfig};
pub use error::{ClnkError, ConfigError, ErrorKind};
pub use limiter::{RateLimiter, WindowSnapshot};
pub use qr::{generate_qr_code_url, QrCodeOptions, QrFormat};

// Re-export transport types
pub use clients::{
    GraphqlClient, GraphqlError, GraphqlErrorEntry, HttpClient, HttpError, HttpRequest,
    HttpRequestBuilder, HttpResponse, HttpResponseError, InvalidHttpRequestError,
    MaxHttpRetriesExceededError,
};
