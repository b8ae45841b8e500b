//! Transport contract.
//!
//! An [`HttpClient`] turns a [`Request`] into a [`ResponseHandle`]. The
//! `mattermost4rs` crate ships a hyper-based implementation; implement the
//! trait directly to plug in another transport or a test double.

use std::future::Future;

use bytes::Bytes;

use crate::{Request, ResponseHandle, Result};

/// Core HTTP client trait.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
///
/// use bytes::Bytes;
/// use mattermost4rs_core::{HttpClient, Request, ResponseHandle, Result};
///
/// /// Answers every request with a canned body.
/// struct Canned(&'static str);
///
/// impl HttpClient for Canned {
///     async fn execute(&self, _request: Request<Bytes>) -> Result<ResponseHandle> {
///         Ok(ResponseHandle::new(200, HashMap::new(), Bytes::from(self.0)))
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request and return the response.
    ///
    /// A response is returned for every status code; only transport failures
    /// are errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails for any reason:
    /// - Network errors
    /// - TLS errors
    /// - Timeouts
    /// - Invalid request
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<ResponseHandle>> + Send;
}
