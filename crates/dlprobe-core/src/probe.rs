//! Classify a fetched response as a real file or the vendor's placeholder page.

use crate::fetch::FetchResponse;

/// Outcome of probing one URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    /// The endpoint served real content.
    Valid,
    /// The endpoint served the "invalid download" placeholder page.
    Invalid,
}

/// Only HTML responses can be the placeholder; any other content type is a
/// real file even if its bytes happen to contain the marker text.
pub fn classify(response: &FetchResponse, invalid_marker: &str) -> Validity {
    let is_html = response
        .headers
        .content_type()
        .map(|ct| ct.to_ascii_lowercase().contains("text/html"))
        .unwrap_or(false);
    if is_html && contains_marker(&response.body, invalid_marker) {
        Validity::Invalid
    } else {
        Validity::Valid
    }
}

fn contains_marker(body: &[u8], marker: &str) -> bool {
    let marker = marker.as_bytes();
    if marker.is_empty() {
        return false;
    }
    body.windows(marker.len()).any(|w| w == marker)
}
