//! Content-Disposition filename extraction.

const FILENAME_MARKER: &str = "filename=";

/// Extracts the filename from a raw Content-Disposition header value.
///
/// Everything after the last `filename=` is taken, then quotes, semicolons
/// and spaces are trimmed from both ends. `filename*=` is not a match for the
/// marker and is ignored.
pub fn filename_from_content_disposition(header_value: &str) -> Option<String> {
    let start = header_value.rfind(FILENAME_MARKER)? + FILENAME_MARKER.len();
    let name = header_value[start..].trim_matches(|c| matches!(c, '"' | '\'' | ';' | ' '));
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
