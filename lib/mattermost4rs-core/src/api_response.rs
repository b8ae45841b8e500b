//! Typed view over a completed API response.
//!
//! [`ApiResponse`] wraps a [`ResponseHandle`] and knows how to produce the
//! endpoint's result type from it. There are three ways to build one:
//!
//! - [`ApiResponse::of_entity`]: the body is deserialized as `T`.
//! - [`ApiResponse::of_generic`]: the body is deserialized through a
//!   [`GenericType`] token, handy for collections declared once as constants.
//! - [`ApiResponse::of_value`]: the result was computed ahead of time and the
//!   body is never read for it.
//!
//! Error probing, header access and the status-OK probe are shared by all
//! three.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//!
//! use bytes::Bytes;
//! use mattermost4rs_core::{ApiResponse, ResponseHandle};
//!
//! let mut headers = HashMap::new();
//! headers.insert("Content-Type".to_string(), "application/json".to_string());
//! let handle = ResponseHandle::new(200, headers, Bytes::from(r#"{"status":"OK"}"#));
//!
//! let response = ApiResponse::<serde_json::Value>::of_entity(handle);
//! assert!(!response.has_error());
//! assert!(response.check_status_ok().expect("status check").read_entity().expect("bool"));
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::{ApiError, Error, ResponseHandle, Result, is_compatible};

const STATUS: &str = "status";
const STATUS_OK: &str = "ok";

// ============================================================================
// Type Token
// ============================================================================

/// Reified type descriptor for body deserialization.
///
/// Tokens are `const`-constructible, so an endpoint module can declare the
/// shapes it reads once:
///
/// ```
/// use std::collections::HashMap;
///
/// use mattermost4rs_core::GenericType;
///
/// const USER_IDS: GenericType<Vec<String>> = GenericType::new();
/// const STATUSES: GenericType<HashMap<String, String>> = GenericType::new();
///
/// assert!(USER_IDS.type_name().contains("Vec"));
/// ```
pub struct GenericType<T> {
    decode: fn(&[u8]) -> Result<T>,
}

impl<T: DeserializeOwned> GenericType<T> {
    /// Creates a token for `T`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            decode: crate::from_json::<T>,
        }
    }
}

impl<T> GenericType<T> {
    /// Name of the described type, for diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    pub(crate) fn decode(&self, bytes: &[u8]) -> Result<T> {
        (self.decode)(bytes)
    }
}

impl<T: DeserializeOwned> Default for GenericType<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for GenericType<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for GenericType<T> {}

impl<T> fmt::Debug for GenericType<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GenericType").field(&self.type_name()).finish()
    }
}

// ============================================================================
// API Response
// ============================================================================

/// How the entity is produced. Fixed at construction.
enum Extraction<T> {
    Entity(fn(&ResponseHandle) -> Result<T>),
    Generic(GenericType<T>),
    Value(T),
}

impl<T: fmt::Debug> fmt::Debug for Extraction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entity(_) => f.write_str("Entity"),
            Self::Generic(token) => token.fmt(f),
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
        }
    }
}

/// Typed wrapper around a completed HTTP response.
///
/// The wrapper owns its [`ResponseHandle`]. Every method that reads the body
/// buffers it first, so the entity, the error payload and the status probe
/// can all be read from the same wrapper in any order.
pub struct ApiResponse<T> {
    response: Box<ResponseHandle>,
    extraction: Extraction<T>,
}

impl<T: fmt::Debug> fmt::Debug for ApiResponse<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiResponse")
            .field("response", &self.response)
            .field("extraction", &self.extraction)
            .finish()
    }
}

impl<T> ApiResponse<T> {
    /// Wraps a response whose body is a `T`.
    #[must_use]
    pub fn of_entity(response: ResponseHandle) -> Self
    where
        T: DeserializeOwned,
    {
        Self::with(response, Extraction::Entity(ResponseHandle::read_entity::<T>))
    }

    /// Wraps a response whose body is read through `token`.
    #[must_use]
    pub fn of_generic(response: ResponseHandle, token: GenericType<T>) -> Self {
        Self::with(response, Extraction::Generic(token))
    }

    /// Wraps a response together with an already computed result.
    ///
    /// [`ApiResponse::read_entity`] returns `value` and never reads the body.
    #[must_use]
    pub fn of_value(response: ResponseHandle, value: T) -> Self {
        Self::with(response, Extraction::Value(value))
    }

    fn with(response: ResponseHandle, extraction: Extraction<T>) -> Self {
        Self {
            response: Box::new(response),
            extraction,
        }
    }

    /// The typed result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the body cannot be read, or a deserialization
    /// error if it is not a `T`. A precomputed value never fails.
    pub fn read_entity(&self) -> Result<T>
    where
        T: Clone,
    {
        match &self.extraction {
            Extraction::Value(value) => Ok(value.clone()),
            Extraction::Entity(read) => {
                self.response.buffer_body()?;
                read(&self.response)
            }
            Extraction::Generic(token) => {
                self.response.buffer_body()?;
                self.response.read_generic(token)
            }
        }
    }

    /// The typed result, consuming the wrapper.
    ///
    /// # Errors
    ///
    /// Same as [`ApiResponse::read_entity`].
    pub fn into_entity(self) -> Result<T> {
        match self.extraction {
            Extraction::Value(value) => Ok(value),
            Extraction::Entity(read) => read(&self.response),
            Extraction::Generic(token) => self.response.read_generic(&token),
        }
    }

    /// The body parsed as the server's error payload, whatever the status.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the body cannot be read, or
    /// [`Error::JsonDeserialization`] if it is not an [`ApiError`].
    pub fn read_error(&self) -> Result<ApiError> {
        self.response.buffer_body()?;
        self.response.read_entity()
    }

    /// Whether the body is an [`ApiError`] payload.
    ///
    /// The check is content based: the status code is not consulted. Any
    /// failure, to read or to parse, answers `false`. The body stays
    /// readable afterwards.
    #[must_use]
    pub fn has_error(&self) -> bool {
        match self.read_error() {
            Ok(api_error) => {
                debug!(
                    id = %api_error.id,
                    status_code = api_error.status_code,
                    "response carries an API error"
                );
                true
            }
            Err(err) if err.is_io() => {
                debug!(error = %err, "response body unreadable, assuming no API error");
                false
            }
            Err(err) => {
                trace!(error = %err, "response body is not an API error");
                false
            }
        }
    }

    /// The wrapped response.
    #[must_use]
    pub fn raw_response(&self) -> &ResponseHandle {
        &self.response
    }

    /// Unwraps the response.
    #[must_use]
    pub fn into_raw_response(self) -> ResponseHandle {
        *self.response
    }

    /// The `Etag` header, verbatim.
    #[must_use]
    pub fn etag(&self) -> Option<&str> {
        self.response.etag()
    }

    /// Reads the body as a status acknowledgement.
    ///
    /// A `text/plain` body is acknowledged when it is `ok` (ignoring case and
    /// trailing whitespace). Any other body, including one without a declared
    /// media type, is read as a JSON object of string members and
    /// acknowledged when its `status` member is `ok` (ignoring case). `null`,
    /// `{}` and a missing or `null` status are not acknowledgements. A plain
    /// text body that is not valid UTF-8 is decoded lossily, so it is never
    /// an error.
    ///
    /// The returned wrapper holds the same response handle and the outcome as
    /// a precomputed value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the body cannot be read, and a deserialization
    /// error if a JSON body is not an object whose members are strings or
    /// `null`.
    pub fn check_status_ok(self) -> Result<ApiResponse<bool>> {
        self.response.buffer_body()?;

        let success = match self.response.media_type() {
            Some(media_type) if is_compatible(&media_type, &mime::TEXT_PLAIN) => {
                let bytes = self.response.read_bytes()?;
                trace!(%media_type, "probing plain text status");
                String::from_utf8_lossy(&bytes)
                    .trim_end()
                    .eq_ignore_ascii_case(STATUS_OK)
            }
            media_type => {
                trace!(media_type = ?media_type.map(|m| m.to_string()), "probing JSON status");
                let members: Option<HashMap<String, Option<String>>> =
                    self.response.read_entity()?;
                members
                    .and_then(|mut members| members.remove(STATUS).flatten())
                    .is_some_and(|status| status.eq_ignore_ascii_case(STATUS_OK))
            }
        };
        debug!(success, "status probe completed");

        Ok(ApiResponse {
            response: self.response,
            extraction: Extraction::Value(success),
        })
    }

    /// The typed result, or the server's error payload as [`Error::Api`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] when [`ApiResponse::has_error`] holds, otherwise
    /// the errors of [`ApiResponse::into_entity`].
    pub fn into_result(self) -> Result<T> {
        if self.has_error() {
            return Err(Error::Api(self.read_error()?));
        }
        self.into_entity()
    }
}
