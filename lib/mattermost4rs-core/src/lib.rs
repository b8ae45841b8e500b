//! Core types for the mattermost4rs API client.
//!
//! This crate holds everything that does not need an async runtime:
//! - [`ApiResponse`] - Typed wrapper over a response, with error probing and
//!   the status-OK probe
//! - [`GenericType`] - Reified type token for collection bodies
//! - [`ResponseHandle`] - Completed HTTP exchange with a once-readable body
//! - [`ApiError`] - Error payload returned by the server
//! - [`is_compatible`] - Wildcard-aware media type matching
//! - [`Request`] and [`RequestBuilder`] - HTTP request types
//! - [`HttpClient`] - Transport contract
//! - [`Error`] and [`Result`] - Error handling

mod api_error;
mod api_response;
mod body;
mod client;
mod error;
mod media_type;
pub mod prelude;
mod request;
mod response;

pub use api_error::ApiError;
pub use api_response::{ApiResponse, GenericType};
pub use body::{from_json, to_json};
pub use client::HttpClient;
pub use error::{Error, Result};
pub use media_type::is_compatible;
pub use request::{Request, RequestBuilder};
pub use response::ResponseHandle;

// Re-export http crate types for methods and headers
pub use http::{Method, header};

// Re-export mime for `Content-Type` values
pub use mime;
