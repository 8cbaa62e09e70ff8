//! Error types for arriendo-core

use thiserror::Error;

/// Result type alias using arriendo-core's [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the rental API client and the listing sync controller
#[derive(Error, Debug)]
pub enum Error {
    /// Client built from an unusable base URL or owner id
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Transport-level HTTP failure (connect, timeout, TLS)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The rental API answered with a non-success status
    #[error("Rental API error: {0}")]
    Api(String),

    /// The response body did not have the advertised shape
    #[error("Malformed API response: {0}")]
    Decode(String),
}
