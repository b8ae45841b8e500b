//! Error types for mattermost4rs.

use derive_more::{Display, Error, From};

use crate::ApiError;

/// Main error type for mattermost4rs operations.
///
/// Reading a response body yields [`Error::Io`] when the body cannot be read
/// and one of [`Error::JsonDeserialization`] or [`Error::TextDecoding`] when it
/// was read but does not have the requested shape. A structured error returned
/// by the server is carried by [`Error::Api`].
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// Network/connection errors.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// Request timeout.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,

    /// Invalid request configuration.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),

    /// JSON serialization error.
    #[display("JSON serialization error: {_0}")]
    #[from]
    JsonSerialization(serde_json::Error),

    /// JSON deserialization error with path context.
    #[display("JSON deserialization error at '{path}': {message}")]
    #[from(skip)]
    JsonDeserialization {
        /// JSON path to the error (e.g., "user.props.channel").
        path: String,
        /// Error message.
        message: String,
    },

    /// Body is not valid UTF-8 text.
    #[display("text decoding error: {_0}")]
    #[from]
    TextDecoding(std::string::FromUtf8Error),

    /// The response body could not be read.
    #[display("I/O error: {_0}")]
    #[from]
    Io(std::io::Error),

    /// Application-level error returned by the server.
    #[display("API error: {_0}")]
    #[from]
    Api(ApiError),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a JSON deserialization error with path context.
    #[must_use]
    pub fn json_deserialization(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::JsonDeserialization {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error for a response body that has already been read.
    #[must_use]
    pub fn body_consumed() -> Self {
        Self::Io(std::io::Error::other("response body already consumed"))
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns `true` if the response body could not be read.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// Returns `true` if the body was read but did not match the requested shape.
    #[must_use]
    pub const fn is_deserialization(&self) -> bool {
        matches!(self, Self::JsonDeserialization { .. } | Self::TextDecoding(_))
    }

    /// Returns the server's error payload if this is an [`Error::Api`].
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(api_error) => Some(api_error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        insta::assert_snapshot!(Error::Timeout, @"request timeout");
        insta::assert_snapshot!(
            Error::connection("failed to connect"),
            @"connection error: failed to connect"
        );
        insta::assert_snapshot!(
            Error::json_deserialization("status", "invalid type: integer `1`, expected a string"),
            @"JSON deserialization error at 'status': invalid type: integer `1`, expected a string"
        );
        insta::assert_snapshot!(
            Error::body_consumed(),
            @"I/O error: response body already consumed"
        );
    }

    #[test]
    fn error_kinds() {
        assert!(Error::Timeout.is_timeout());
        assert!(Error::connection("failed").is_connection());
        assert!(!Error::Timeout.is_connection());

        assert!(Error::body_consumed().is_io());
        assert!(!Error::body_consumed().is_deserialization());

        assert!(Error::json_deserialization("", "eof").is_deserialization());
        let utf8 = String::from_utf8(vec![0xff]).expect_err("invalid utf-8");
        assert!(Error::from(utf8).is_deserialization());
    }

    #[test]
    fn error_api_payload() {
        let api_error = ApiError {
            id: "api.context.permissions.app_error".to_string(),
            message: "You do not have the appropriate permissions.".to_string(),
            status_code: 403,
            detailed_error: None,
            request_id: None,
            is_oauth: false,
        };
        let err = Error::from(api_error.clone());

        assert_eq!(err.api_error(), Some(&api_error));
        assert!(Error::Timeout.api_error().is_none());
        assert!(err.to_string().starts_with("API error: "));
    }
}
