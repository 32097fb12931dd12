//! libcurl-backed blocking GET.

use std::time::Duration;

use super::{FetchError, FetchResponse, Fetcher};
use crate::config::HttpConfig;
use crate::headers::ResponseHeaders;

const MAX_REDIRECTIONS: u32 = 10;

/// Blocking GET via the curl crate. A fresh `Easy` handle is used per request.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    connect_timeout: Duration,
    timeout: Duration,
    user_agent: Option<String>,
}

impl CurlFetcher {
    pub fn new(http: &HttpConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(http.connect_timeout_secs),
            timeout: Duration::from_secs(http.timeout_secs),
            user_agent: http.user_agent.clone(),
        }
    }
}

impl Default for CurlFetcher {
    fn default() -> Self {
        Self::new(&HttpConfig::default())
    }
}

impl Fetcher for CurlFetcher {
    fn get(&self, url: &str) -> Result<FetchResponse, FetchError> {
        if url::Url::parse(url).is_err() {
            return Err(FetchError::InvalidUrl(url.to_string()));
        }

        let mut header_lines: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(MAX_REDIRECTIONS)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        if let Some(agent) = &self.user_agent {
            easy.useragent(agent)?;
        }

        {
            let mut transfer = easy.transfer();
            // Non-UTF-8 bytes (Latin-1 filenames) become U+FFFD rather than
            // dropping the whole header line.
            transfer.header_function(|data| {
                header_lines.push(String::from_utf8_lossy(data).trim_end().to_string());
                true
            })?;
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        if !(200..300).contains(&status) {
            return Err(FetchError::Http {
                url: url.to_string(),
                status,
            });
        }

        tracing::debug!(url, status, bytes = body.len(), "GET complete");

        Ok(FetchResponse {
            url: url.to_string(),
            status,
            headers: ResponseHeaders::from_lines(&header_lines),
            body,
        })
    }
}
