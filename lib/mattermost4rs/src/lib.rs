//! Async client for the Mattermost REST API v4.
//!
//! Endpoint calls return an [`ApiResponse`], a typed view over the completed
//! response that reads the entity, detects the server's error payload and
//! interprets `{"status":"OK"}` acknowledgements.
//!
//! # Example
//!
//! ```ignore
//! use mattermost4rs::prelude::*;
//!
//! #[derive(Debug, Clone, Deserialize)]
//! pub struct User {
//!     id: String,
//!     username: String,
//! }
//!
//! let http = HyperClient::builder()
//!     .with_bearer_auth("personal-access-token")
//!     .with_logging()
//!     .build();
//! let api = ApiClient::new(http, "https://chat.example.com")?;
//!
//! let me = api.get::<User>("users/me", None).await?.into_result()?;
//! let removed = api.delete("posts/p1").await?.read_entity()?;
//! ```

mod api_client;
mod client;
mod config;
mod connector;
pub mod middleware;
pub mod prelude;

pub use api_client::{API_PATH, ApiClient};
pub use client::{BoxedService, HyperClient, HyperClientBuilder, ServiceFuture};
pub use config::{
    ClientConfig, DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, PoolConfig,
};

// Re-export tower for middleware composition
pub use tower;

// Re-export core types
pub use mattermost4rs_core::{
    ApiError, ApiResponse, Error, GenericType, HttpClient, Method, Request, RequestBuilder,
    ResponseHandle, Result, from_json, header, is_compatible, mime, to_json,
};

// Re-export crates used in public signatures
pub use url;
