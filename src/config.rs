//! The config for the API client.

use std::time::Duration;

/// How long a cached read response stays fresh.
///
/// Kept short so changes made from another device show up within a session.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(30);

/// The top-level timeout for a single request.
///
/// Generous so that a backend cold-starting on a free hosting tier has time
/// to come up before the first read fails.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// The config for constructing an [ApiClient](crate::ApiClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// The root of the backend API, e.g. `http://localhost:8000/api`.
    pub base_url: String,
    /// How long cached read responses stay fresh.
    pub cache_ttl: Duration,
    /// The transport-level timeout for a single request.
    pub request_timeout: Duration,
    /// The canonical timezone name used to resolve "today" for calendar
    /// date filters, e.g. "Pacific/Auckland". `None` falls back to UTC.
    pub timezone: Option<String>,
}

impl ClientConfig {
    /// Create a config for `base_url` with the default TTL and timeout.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_owned(),
            cache_ttl: DEFAULT_CACHE_TTL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            timezone: None,
        }
    }
}
