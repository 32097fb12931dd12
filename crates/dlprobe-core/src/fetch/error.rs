//! Fetch error type, reported per URL by the pipeline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL does not parse as an absolute URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    /// Curl reported an error (timeout, connection, DNS, etc.).
    #[error("request failed: {0}")]
    Curl(#[from] curl::Error),
    /// The final response had a non-2xx status.
    #[error("GET {url} returned HTTP {status}")]
    Http { url: String, status: u32 },
}
