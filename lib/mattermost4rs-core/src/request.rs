//! HTTP request building.
//!
//! Use [`Request::builder`] to construct requests with headers, cache
//! validators and bodies.
//!
//! # Example
//!
//! ```
//! use bytes::Bytes;
//! use http::Method;
//! use mattermost4rs_core::Request;
//!
//! let url = "https://chat.example.com/api/v4/users/me".parse().expect("url");
//! let request = Request::<Bytes>::builder(Method::GET, url)
//!     .header("Accept", "application/json")
//!     .if_none_match(Some("\"abc\""))
//!     .build();
//!
//! assert_eq!(request.header("If-None-Match"), Some("\"abc\""));
//! ```

use std::collections::HashMap;

use bytes::Bytes;
use http::Method;

/// An HTTP request with method, URL, headers, and optional body.
#[derive(Debug, Clone)]
pub struct Request<B = Bytes> {
    method: Method,
    url: url::Url,
    headers: HashMap<String, String>,
    body: Option<B>,
}

impl<B> Request<B> {
    /// Creates a new [`RequestBuilder`].
    #[must_use]
    pub fn builder(method: Method, url: url::Url) -> RequestBuilder<B> {
        RequestBuilder::new(method, url)
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Request URL.
    #[must_use]
    pub fn url(&self) -> &url::Url {
        &self.url
    }

    /// Request headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Mutable access to headers.
    #[must_use]
    pub fn headers_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.headers
    }

    /// Single header value by name (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Request body.
    #[must_use]
    pub const fn body(&self) -> Option<&B> {
        self.body.as_ref()
    }

    /// Consume into (method, url, headers, body).
    #[must_use]
    pub fn into_parts(self) -> (Method, url::Url, HashMap<String, String>, Option<B>) {
        (self.method, self.url, self.headers, self.body)
    }
}

/// Builder for constructing [`Request`] instances.
#[derive(Debug, Clone)]
pub struct RequestBuilder<B = Bytes> {
    method: Method,
    url: url::Url,
    headers: HashMap<String, String>,
    body: Option<B>,
}

impl<B> RequestBuilder<B> {
    /// Creates a new builder.
    #[must_use]
    pub fn new(method: Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Sets a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sends `If-None-Match` with a previously received `Etag`.
    ///
    /// `None` leaves the request unconditional.
    #[must_use]
    pub fn if_none_match(self, etag: Option<&str>) -> Self {
        match etag {
            Some(etag) if !etag.is_empty() => self.header("If-None-Match", etag),
            _ => self,
        }
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: B) -> Self {
        self.body = Some(body);
        self
    }

    /// Builds the [`Request`].
    #[must_use]
    pub fn build(self) -> Request<B> {
        Request {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(path: &str) -> url::Url {
        url::Url::parse("https://chat.example.com/api/v4/")
            .and_then(|base| base.join(path))
            .expect("valid URL")
    }

    #[test]
    fn request_builder_basic() {
        let request = Request::<Bytes>::builder(Method::GET, url("users/me"))
            .header("Accept", "application/json")
            .build();

        assert_eq!(*request.method(), Method::GET);
        assert_eq!(
            request.url().as_str(),
            "https://chat.example.com/api/v4/users/me"
        );
        assert_eq!(request.header("accept"), Some("application/json"));
        assert!(request.body().is_none());
    }

    #[test]
    fn request_builder_if_none_match() {
        let request = Request::<Bytes>::builder(Method::GET, url("users/me"))
            .if_none_match(Some("\"abc\""))
            .build();
        assert_eq!(request.header("If-None-Match"), Some("\"abc\""));

        let request = Request::<Bytes>::builder(Method::GET, url("users/me"))
            .if_none_match(None)
            .if_none_match(Some(""))
            .build();
        assert!(request.header("If-None-Match").is_none());
    }
}
