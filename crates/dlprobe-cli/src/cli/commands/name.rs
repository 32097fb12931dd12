//! `dlprobe name` – show the resolved filename for given response metadata.

use dlprobe_core::filename::resolve_filename;
use dlprobe_core::headers::ResponseHeaders;

pub fn run_name(url: &str, content_disposition: Option<&str>, content_type: Option<&str>) {
    let mut headers = ResponseHeaders::new();
    if let Some(v) = content_disposition {
        headers.insert("Content-Disposition", v);
    }
    if let Some(v) = content_type {
        headers.insert("Content-Type", v);
    }
    println!("{}", resolve_filename(&headers, url));
}
