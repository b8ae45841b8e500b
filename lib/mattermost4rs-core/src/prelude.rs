//! Prelude module for convenient imports.
//!
//! ```ignore
//! use mattermost4rs_core::prelude::*;
//! ```

pub use crate::{
    ApiError, ApiResponse, Error, GenericType, HttpClient, Method, Request, RequestBuilder,
    ResponseHandle, Result, from_json, to_json,
};
