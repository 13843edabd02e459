//! The seam between the client and the network.
//!
//! [ApiClient](crate::ApiClient) talks to the backend exclusively through
//! the [Transport] trait, so tests can substitute an in-memory fake and the
//! cache and invalidation logic can be exercised without a server.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::Error;

/// The HTTP methods the backend API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Read a resource.
    Get,
    /// Create a resource, or invoke an action endpoint.
    Post,
    /// Replace a resource.
    Put,
    /// Partially update a resource.
    Patch,
    /// Delete a resource.
    Delete,
}

impl Method {
    /// Whether this method reads rather than mutates.
    ///
    /// Only reads are served from and stored into the cache; everything
    /// else invalidates it.
    pub fn is_read(&self) -> bool {
        matches!(self, Method::Get)
    }

    fn as_reqwest(&self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One request to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// The HTTP method.
    pub method: Method,
    /// The endpoint path, relative to the API base URL.
    pub path: String,
    /// Query parameters, in the order supplied.
    pub query: Vec<(String, String)>,
    /// The JSON body, for mutations.
    pub body: Option<Value>,
    /// The bearer token to attach, when the session has one.
    pub bearer: Option<String>,
}

/// The backend's answer, whatever the status.
///
/// Non-success statuses are data here, not errors: the client layer decides
/// what a 401 or a 400 means. Only a failure to produce any response at all
/// is an [Error::Transport].
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The response body decoded as JSON, or [Value::Null] for empty
    /// bodies (e.g. a 204 on delete).
    pub body: Value,
}

impl ApiResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends [ApiRequest]s somewhere and returns what came back.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform `request` and return the response.
    ///
    /// # Errors
    /// Returns [Error::Transport] when no response could be obtained:
    /// connection refused, timeout, or an unreadable body.
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, Error>;
}

/// The production [Transport], backed by a reqwest client.
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    /// Create a transport for the API rooted at `base_url`.
    ///
    /// `timeout` bounds each whole request. It is deliberately generous by
    /// default (see [DEFAULT_REQUEST_TIMEOUT](crate::config::DEFAULT_REQUEST_TIMEOUT))
    /// so a backend cold-starting on a free hosting tier does not fail the
    /// first read of a session.
    ///
    /// # Errors
    /// Returns [Error::InvalidBaseUrl] when `base_url` does not parse.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|error| Error::InvalidBaseUrl(error.to_string()))?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| Error::Transport(error.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// The absolute URL for `path`.
    ///
    /// Paths are appended to the base URL rather than resolved against it,
    /// so a base of `http://host/api` plus `/transactions/` yields
    /// `http://host/api/transactions/` (URL-join semantics would drop the
    /// `/api` prefix).
    fn endpoint_url(&self, path: &str) -> Result<Url, Error> {
        // Url normalizes an empty path to "/", so trim before appending to
        // avoid a double slash.
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
            .parse()
            .map_err(|error: url::ParseError| Error::InvalidBaseUrl(error.to_string()))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, Error> {
        let url = self.endpoint_url(&request.path)?;

        let mut builder = self.http.request(request.method.as_reqwest(), url);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|error| Error::Transport(error.to_string()))?;

        let status = response.status().as_u16();

        let text = response
            .text()
            .await
            .map_err(|error| Error::Transport(error.to_string()))?;

        // Delete endpoints answer 204 with no body; anything unparseable is
        // treated the same as empty and handled by the shape checks above
        // this layer.
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);

        Ok(ApiResponse { status, body })
    }
}
