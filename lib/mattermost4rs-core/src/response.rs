//! Completed HTTP exchanges.
//!
//! A [`ResponseHandle`] carries the status and headers of a response together
//! with its body. The body behaves like an entity stream: it can be read once,
//! unless [`ResponseHandle::buffer_body`] pinned it in memory first.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//!
//! use bytes::Bytes;
//! use mattermost4rs_core::ResponseHandle;
//!
//! let response = ResponseHandle::new(200, HashMap::new(), Bytes::from("ok"));
//! response.buffer_body().expect("buffer");
//! assert_eq!(response.read_text().expect("text"), "ok");
//! assert_eq!(response.read_text().expect("text again"), "ok");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::io::{Cursor, Read};
use std::sync::{Mutex, PoisonError};

use bytes::Bytes;
use tracing::trace;

use mime::Mime;

use crate::{Error, GenericType, Result};

/// State of a response body.
enum Body {
    /// Not read yet.
    Stream(Box<dyn Read + Send>),
    /// Held in memory, can be read any number of times.
    Buffered(Bytes),
    /// Read without buffering.
    Consumed,
}

impl Body {
    const fn state(&self) -> &'static str {
        match self {
            Self::Stream(_) => "stream",
            Self::Buffered(_) => "buffered",
            Self::Consumed => "consumed",
        }
    }
}

fn drain(mut reader: Box<dyn Read + Send>) -> Result<Bytes> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(Bytes::from(buf))
}

/// HTTP response with status, headers, and a once-readable body.
pub struct ResponseHandle {
    status: u16,
    headers: HashMap<String, String>,
    body: Mutex<Body>,
}

impl fmt::Debug for ResponseHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseHandle")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .field("body", &self.lock_body().state())
            .finish()
    }
}

impl ResponseHandle {
    /// Creates a response whose body is the given bytes, not yet read.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, String>, body: Bytes) -> Self {
        Self::from_reader(status, headers, Cursor::new(body))
    }

    /// Creates a response whose body is read from `reader`.
    ///
    /// Read failures surface as [`Error::Io`] from the first body access.
    #[must_use]
    pub fn from_reader(
        status: u16,
        headers: HashMap<String, String>,
        reader: impl Read + Send + 'static,
    ) -> Self {
        Self {
            status,
            headers,
            body: Mutex::new(Body::Stream(Box::new(reader))),
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Status is 3xx.
    #[must_use]
    pub const fn is_redirection(&self) -> bool {
        self.status >= 300 && self.status < 400
    }

    /// Status is 4xx.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status >= 400 && self.status < 500
    }

    /// Status is 5xx.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status >= 500 && self.status < 600
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str).or_else(|| {
            self.headers
                .iter()
                .find(|(n, _)| n.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_str())
        })
    }

    /// The `Etag` header, verbatim.
    #[must_use]
    pub fn etag(&self) -> Option<&str> {
        self.header("Etag")
    }

    /// The declared `Content-Type`, or `None` if absent or unparseable.
    #[must_use]
    pub fn media_type(&self) -> Option<Mime> {
        self.header("Content-Type")
            .and_then(|value| value.parse().ok())
    }

    /// Reads the whole body into memory so that it can be read repeatedly.
    ///
    /// Idempotent: buffering an already buffered body does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if reading fails or the body was already
    /// consumed by an unbuffered read.
    pub fn buffer_body(&self) -> Result<()> {
        let mut body = self.lock_body();
        match std::mem::replace(&mut *body, Body::Consumed) {
            Body::Stream(reader) => {
                let bytes = drain(reader)?;
                trace!(len = bytes.len(), "response body buffered");
                *body = Body::Buffered(bytes);
                Ok(())
            }
            buffered @ Body::Buffered(_) => {
                *body = buffered;
                Ok(())
            }
            Body::Consumed => Err(Error::body_consumed()),
        }
    }

    /// Body has been buffered.
    #[must_use]
    pub fn is_buffered(&self) -> bool {
        matches!(*self.lock_body(), Body::Buffered(_))
    }

    /// Raw body bytes.
    ///
    /// Consumes the body unless it was buffered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the body cannot be read.
    pub fn read_bytes(&self) -> Result<Bytes> {
        let mut body = self.lock_body();
        match std::mem::replace(&mut *body, Body::Consumed) {
            Body::Buffered(bytes) => {
                *body = Body::Buffered(bytes.clone());
                Ok(bytes)
            }
            Body::Stream(reader) => drain(reader),
            Body::Consumed => Err(Error::body_consumed()),
        }
    }

    /// Deserialize the JSON body as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the body cannot be read, or
    /// [`Error::JsonDeserialization`] if it is not a valid `T`.
    pub fn read_entity<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        crate::from_json(&self.read_bytes()?)
    }

    /// Deserialize the body with a reified type token.
    ///
    /// # Errors
    ///
    /// Same as [`ResponseHandle::read_entity`].
    pub fn read_generic<T>(&self, token: &GenericType<T>) -> Result<T> {
        token.decode(&self.read_bytes()?)
    }

    /// Body as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the body cannot be read, or
    /// [`Error::TextDecoding`] if it is not valid UTF-8.
    pub fn read_text(&self) -> Result<String> {
        let bytes = self.read_bytes()?;
        String::from_utf8(bytes.to_vec()).map_err(Into::into)
    }

    fn lock_body(&self) -> std::sync::MutexGuard<'_, Body> {
        self.body.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
