//! URL sources: a numeric ID sweep or a fixed list.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Where the pipeline takes its URLs from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlSource {
    /// `<base_url><id>` for every `id` in `start..=end`.
    Range { base_url: String, start: u64, end: u64 },
    /// A finite list, probed in order.
    List(Vec<String>),
}

impl UrlSource {
    pub fn range(base_url: impl Into<String>, start: u64, end: u64) -> Self {
        UrlSource::Range {
            base_url: base_url.into(),
            start,
            end,
        }
    }

    /// Builds a list source, dropping repeated entries (first occurrence kept).
    pub fn list<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let urls = urls
            .into_iter()
            .map(Into::into)
            .filter(|u: &String| seen.insert(u.clone()))
            .collect();
        UrlSource::List(urls)
    }

    /// Reads one URL per line; blank lines and `#` comments are skipped.
    pub fn from_list_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("read URL list {}", path.display()))?;
        Ok(Self::list(
            data.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#')),
        ))
    }

    /// Number of URLs this source yields.
    pub fn len(&self) -> u64 {
        match self {
            UrlSource::Range { start, end, .. } => {
                if start > end {
                    0
                } else {
                    (end - start).saturating_add(1)
                }
            }
            UrlSource::List(urls) => urls.len() as u64,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn urls(&self) -> Box<dyn Iterator<Item = String> + '_> {
        match self {
            UrlSource::Range {
                base_url,
                start,
                end,
            } => Box::new((*start..=*end).map(move |id| format!("{base_url}{id}"))),
            UrlSource::List(urls) => Box::new(urls.iter().cloned()),
        }
    }
}
