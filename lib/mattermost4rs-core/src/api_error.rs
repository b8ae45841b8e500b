//! Application-level error payload returned by the Mattermost server.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Structured error body sent by the server when a call fails.
///
/// `id`, `message` and `status_code` are required: a body without all three
/// is not an error payload, which is what keeps regular entities (a user, a
/// channel) from being read as errors by
/// [`ApiResponse::has_error`](crate::ApiResponse::has_error).
///
/// ```
/// use mattermost4rs_core::{ApiError, from_json};
///
/// let body = br#"{"id":"api.user.get.app_error","message":"Unable to get user","status_code":404}"#;
/// let error: ApiError = from_json(body).expect("error payload");
/// assert_eq!(error.status_code, 404);
///
/// let user = br#"{"id":"u1","username":"alice"}"#;
/// assert!(from_json::<ApiError>(user).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, Serialize, Deserialize)]
#[display("{id}: {message} (status {status_code})")]
pub struct ApiError {
    /// Translation id of the error, e.g. `api.context.session_expired.app_error`.
    pub id: String,
    /// Human readable message.
    pub message: String,
    /// HTTP status the server associated with the error.
    pub status_code: u16,
    /// Server-side detail, usually only set in developer mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_error: Option<String>,
    /// Request id, useful to correlate with server logs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Whether the failure happened during an OAuth flow.
    #[serde(default)]
    pub is_oauth: bool,
}
