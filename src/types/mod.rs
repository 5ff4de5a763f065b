//! Typed inputs and results of the Clnk API.
//!
//! - [`models`]: result entities such as [`Url`], [`User`] and [`AuthData`]
//! - [`inputs`]: variables such as [`CreateUrlInput`] and [`UrlListOptions`]

pub mod inputs;
pub mod models;

pub use inputs::{
    CreateUrlInput, LoginInput, Pagination, RegisterInput, SendOtpInput, UpdateUrlInput,
    UpdateUserInput, UrlFilter, UrlListOptions, UrlLookup, VerifyOtpInput,
};
pub use models::{
    ApiKeyDetails, AuthData, Meta, RefreshPayload, RegisterData, Role, Url, UrlData, User,
};
