//! Prelude module for convenient imports.
//!
//! ```ignore
//! use mattermost4rs::prelude::*;
//! ```

pub use crate::{
    ApiClient, ApiError, ApiResponse, ClientConfig, Error, GenericType, HttpClient, HyperClient,
    Method, ResponseHandle, Result,
};
pub use serde::{Deserialize, Serialize};
