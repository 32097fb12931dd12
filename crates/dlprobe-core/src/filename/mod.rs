//! Filename resolution for downloaded content.
//!
//! Derives a stable local filename from the Content-Disposition header, the
//! request URL path, or the Content-Type, then sanitizes it to lowercase
//! `[a-z0-9_]` plus an optional extension.

mod content_disposition;
mod path;
mod sanitize;

use std::fmt;
use std::path::Path;

use crate::headers::ResponseHeaders;

pub use content_disposition::filename_from_content_disposition;
pub use path::filename_from_url_path;
pub use sanitize::sanitize;

/// A sanitized, filesystem-safe filename. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedFilename(String);

impl ResolvedFilename {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ResolvedFilename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResolvedFilename {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<Path> for ResolvedFilename {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl PartialEq<&str> for ResolvedFilename {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<ResolvedFilename> for String {
    fn from(name: ResolvedFilename) -> Self {
        name.0
    }
}

/// Generic name chosen from the response `Content-Type` when neither the
/// header nor the URL yields a name. Media-type parameters are ignored.
pub fn fallback_filename(content_type: Option<&str>) -> &'static str {
    let media_type = content_type
        .and_then(|ct| ct.split(';').next())
        .map(str::trim)
        .unwrap_or("");
    if media_type.eq_ignore_ascii_case("application/zip") {
        "download.zip"
    } else if media_type.eq_ignore_ascii_case("application/pdf") {
        "download.pdf"
    } else {
        "download"
    }
}

/// Unsanitized candidate: Content-Disposition first, then the URL path,
/// then the Content-Type fallback.
pub fn candidate_filename(headers: &ResponseHeaders, request_url: &str) -> String {
    let candidate = headers
        .content_disposition()
        .and_then(filename_from_content_disposition)
        .or_else(|| filename_from_url_path(request_url))
        .unwrap_or_default();

    if candidate.is_empty() || candidate == "/" {
        fallback_filename(headers.content_type()).to_string()
    } else {
        candidate
    }
}

/// Resolves the local filename for a response to `request_url`.
///
/// # Examples
///
/// - `Content-Disposition: attachment; filename="My File.PDF"` → `my_file.pdf`
/// - no headers, `https://host/?download=42`, `Content-Type: application/pdf` → `download.pdf`
/// - unparsable URL, no headers → `download`
pub fn resolve_filename(headers: &ResponseHeaders, request_url: &str) -> ResolvedFilename {
    let candidate = candidate_filename(headers, request_url);
    let mut name = sanitize(&candidate).to_lowercase();
    if name.is_empty() {
        // e.g. `filename="!!!"`: nothing survives sanitizing.
        name = sanitize(fallback_filename(headers.content_type()));
    }
    ResolvedFilename(name)
}
