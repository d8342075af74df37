//! Network error types.

use reqwest::{StatusCode, Url};

/// Errors produced by [`Network`](crate::Network) implementations.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// The request could not be sent or its body could not be read.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{url} answered with status {status}")]
    Status { url: Url, status: StatusCode },

    /// The network client could not be set up.
    #[error("Network unavailable: {0}")]
    Unavailable(String),

    /// A mock was called on a path the test did not configure.
    #[error("Unexpected call to `{0}` with no override set")]
    UnexpectedCall(&'static str),
}

/// Convenient Result type for network operations.
pub type Result<T> = std::result::Result<T, NetworkError>;
