//! HTTP GET transport.
//!
//! The pipeline only depends on the [`Fetcher`] trait; [`CurlFetcher`] is the
//! libcurl implementation used by the CLI.

mod curl_fetcher;
mod error;

pub use curl_fetcher::CurlFetcher;
pub use error::FetchError;

use crate::headers::ResponseHeaders;

/// A completed GET: final headers and the whole body.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// URL that was requested (before redirects).
    pub url: String,
    /// HTTP status of the final response.
    pub status: u32,
    pub headers: ResponseHeaders,
    pub body: Vec<u8>,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one blocking GET per call.
pub trait Fetcher {
    fn get(&self, url: &str) -> Result<FetchResponse, FetchError>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn get(&self, url: &str) -> Result<FetchResponse, FetchError> {
        (**self).get(url)
    }
}
