//! Endpoint plumbing.
//!
//! [`ApiClient`] resolves endpoint paths against the server's API root,
//! sends the request through any [`HttpClient`], and hands the response back
//! wrapped in an [`ApiResponse`] of the endpoint's result type.

use bytes::Bytes;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::{ApiResponse, GenericType, HttpClient, Method, Request, ResponseHandle, Result, mime};

/// Path of the REST API root, relative to the server URL.
pub const API_PATH: &str = "api/v4/";

/// Client for the server's REST API.
///
/// Wraps any [`HttpClient`] (with its connection pool and middleware) and the
/// API root URL.
///
/// # Example
///
/// ```ignore
/// use mattermost4rs::{ApiClient, HyperClient};
///
/// #[derive(Debug, Clone, serde::Deserialize)]
/// struct User {
///     id: String,
///     username: String,
/// }
///
/// let http = HyperClient::builder().with_bearer_auth("token").build();
/// let api = ApiClient::new(http, "https://chat.example.com")?;
///
/// let response = api.get::<User>("users/me", None).await?;
/// if response.has_error() {
///     eprintln!("{}", response.read_error()?);
/// } else {
///     let me = response.read_entity()?;
///     let cached = api.get::<User>("users/me", response.etag()).await?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient<C> {
    client: C,
    api_url: Url,
}

impl<C> ApiClient<C> {
    /// Create a client for the server at `server_url`.
    ///
    /// The API root is `server_url` followed by [`API_PATH`]; a server
    /// installed under a sub-path (`https://example.com/chat`) is supported.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn new(client: C, server_url: impl AsRef<str>) -> Result<Self> {
        let mut server_url = Url::parse(server_url.as_ref())?;
        if !server_url.path().ends_with('/') {
            let path = format!("{}/", server_url.path());
            server_url.set_path(&path);
        }
        let api_url = server_url.join(API_PATH)?;
        Ok(Self { client, api_url })
    }

    /// Create a client with an explicit API root URL.
    #[must_use]
    pub fn with_url(client: C, api_url: Url) -> Self {
        Self { client, api_url }
    }

    /// The API root URL.
    #[must_use]
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Get a reference to the inner HTTP client.
    #[must_use]
    pub fn inner(&self) -> &C {
        &self.client
    }

    /// Consume the wrapper and return the inner HTTP client.
    #[must_use]
    pub fn into_inner(self) -> C {
        self.client
    }

    /// Absolute URL of an endpoint; the leading `/` of `path` is optional.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is not a valid relative URL.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.api_url.join(path.trim_start_matches('/'))?)
    }
}

impl<C: HttpClient> ApiClient<C> {
    /// Send a request and return the raw response.
    ///
    /// `etag` is sent as `If-None-Match`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the transport fails. Error
    /// statuses are not errors here.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Bytes>,
        etag: Option<&str>,
    ) -> Result<ResponseHandle> {
        let url = self.endpoint(path)?;
        debug!(%method, %url, "calling API");

        let mut builder = Request::builder(method, url)
            .header("Accept", mime::APPLICATION_JSON.essence_str())
            .if_none_match(etag);
        if let Some(body) = body {
            builder = builder
                .header("Content-Type", mime::APPLICATION_JSON.essence_str())
                .body(body);
        }

        self.client.execute(builder.build()).await
    }

    /// `GET` an entity of type `T`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        etag: Option<&str>,
    ) -> Result<ApiResponse<T>> {
        let response = self.execute(Method::GET, path, None, etag).await?;
        Ok(ApiResponse::of_entity(response))
    }

    /// `GET` a body read through a type token, e.g. a list of users.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn get_generic<T>(
        &self,
        path: &str,
        token: GenericType<T>,
        etag: Option<&str>,
    ) -> Result<ApiResponse<T>> {
        let response = self.execute(Method::GET, path, None, etag).await?;
        Ok(ApiResponse::of_generic(response, token))
    }

    /// `POST` a JSON body and read an entity of type `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if `body` cannot be serialized, or see
    /// [`ApiClient::execute`].
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = crate::to_json(body)?;
        let response = self.execute(Method::POST, path, Some(body), None).await?;
        Ok(ApiResponse::of_entity(response))
    }

    /// `POST` a JSON body to an endpoint answering with a status acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns an error if `body` cannot be serialized, if the transport fails,
    /// or if the acknowledgement cannot be read
    /// (see [`ApiResponse::check_status_ok`]).
    pub async fn post_status<B>(&self, path: &str, body: &B) -> Result<ApiResponse<bool>>
    where
        B: Serialize + ?Sized,
    {
        let body = crate::to_json(body)?;
        let response = self.execute(Method::POST, path, Some(body), None).await?;
        ApiResponse::of_value(response, ()).check_status_ok()
    }

    /// `PUT` a JSON body and read an entity of type `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if `body` cannot be serialized, or see
    /// [`ApiClient::execute`].
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = crate::to_json(body)?;
        let response = self.execute(Method::PUT, path, Some(body), None).await?;
        Ok(ApiResponse::of_entity(response))
    }

    /// `DELETE` a resource; the result is the server's status acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails or the acknowledgement cannot
    /// be read (see [`ApiResponse::check_status_ok`]).
    pub async fn delete(&self, path: &str) -> Result<ApiResponse<bool>> {
        let response = self.execute(Method::DELETE, path, None, None).await?;
        ApiResponse::of_value(response, ()).check_status_ok()
    }
}
