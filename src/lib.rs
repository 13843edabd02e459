//! Spendwise is the client-side data core of a personal-finance tracker.
//!
//! It talks to the tracker's REST backend and gives UI screens three things:
//!
//! * [`client::ApiClient`]: typed access to every backend resource, with a
//!   bearer credential attached to each request and authentication failures
//!   handled in one place.
//! * [`cache::RequestCache`]: an in-memory cache for read responses with TTL
//!   expiry, cleared wholesale after every successful mutation so a write is
//!   never followed by a stale read.
//! * [`metrics`]: pure functions that reduce raw transaction, budget and
//!   goal snapshots into the aggregates each screen renders, from totals and
//!   category breakdowns to budget utilization bands and weekly bar series.

#![warn(missing_docs)]

pub mod cache;
pub mod client;
pub mod config;
pub mod currency;
pub mod endpoints;
pub mod icon;
pub mod metrics;
pub mod model;
pub mod palette;
pub mod timezone;

pub use client::ApiClient;
pub use config::ClientConfig;

/// The errors that may occur in the client core.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// The request never produced a response: connection refused, DNS
    /// failure, timeout, or the response body could not be read.
    ///
    /// A cache hit never reaches the network, so this error can only occur
    /// on a cache miss or a mutation.
    #[error("network error: {0}")]
    Transport(String),

    /// The backend rejected the stored credential.
    ///
    /// By the time this error is returned the credential has been discarded
    /// and the cache cleared; the caller should enter the log-in flow.
    #[error("the session has expired, log in again")]
    Unauthorized,

    /// The username and password were rejected by the token endpoint.
    ///
    /// Unlike [Error::Unauthorized], this does not reset any client state:
    /// a failed log-in attempt keeps the caller on the log-in screen.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// An amount that must be positive was zero or negative.
    ///
    /// Caught client-side, before any network call is made.
    #[error("{0} is not a valid amount, it must be greater than zero")]
    NonPositiveAmount(String),

    /// An empty string was used where a title or name is required.
    ///
    /// Caught client-side, before any network call is made.
    #[error("a title is required")]
    EmptyTitle,

    /// The password and its confirmation did not match during sign-up.
    ///
    /// Caught client-side, before any network call is made.
    #[error("the passwords do not match")]
    PasswordMismatch,

    /// The backend answered with a non-success status other than 401.
    ///
    /// The message is taken from the response body where the backend
    /// provides one, e.g. "Invalid amount" from the budget endpoint.
    #[error("the server rejected the request (HTTP {status}): {message}")]
    Api {
        /// The HTTP status code of the response.
        status: u16,
        /// The error message extracted from the response body, or a generic
        /// placeholder when the body carries none.
        message: String,
    },

    /// A response decoded as JSON but did not match the expected shape.
    #[error("could not decode the server response: {0}")]
    Decode(String),

    /// The configured base URL could not be parsed.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}
