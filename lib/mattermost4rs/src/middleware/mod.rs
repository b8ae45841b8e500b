//! Tower middleware layers for the HTTP transport.
//!
//! Layers wrap the [`HyperClient`](crate::HyperClient) service and see every
//! request and the resulting [`ResponseHandle`](crate::ResponseHandle). None of
//! them reads the response body.
//!
//! - [`BearerAuthLayer`] - Adds `Authorization: Bearer <token>`
//! - [`LoggingLayer`] - Logs requests/responses using `tracing`
//!
//! # Example
//!
//! ```ignore
//! use mattermost4rs::HyperClient;
//! use mattermost4rs::middleware::{BearerAuthLayer, LoggingLayer};
//!
//! let client = HyperClient::builder()
//!     .layer(LoggingLayer::new())
//!     .layer(BearerAuthLayer::new("personal-access-token"))
//!     .build();
//! ```

mod bearer_auth;
mod logging;

pub use bearer_auth::{BearerAuth, BearerAuthLayer};
pub use logging::{LogLevel, Logging, LoggingLayer};

// Re-export tower types for convenience
pub use tower::{Layer, ServiceBuilder};
