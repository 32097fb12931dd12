//! Tracking file: newline-delimited, append-only list of validated URLs.
//!
//! Read once at startup; every newly validated URL is appended so later runs
//! can skip it.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct TrackingFile {
    path: PathBuf,
    seen: HashSet<String>,
}

impl TrackingFile {
    /// Loads the tracked URLs. A missing file is an empty set.
    pub fn load(path: &Path) -> Result<Self> {
        let seen = match fs::read_to_string(path) {
            Ok(data) => data
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => HashSet::new(),
            Err(e) => {
                return Err(e).with_context(|| format!("read tracking file {}", path.display()))
            }
        };
        tracing::debug!(path = %path.display(), entries = seen.len(), "loaded tracking file");
        Ok(Self {
            path: path.to_path_buf(),
            seen,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Exact match against a whole line of the file.
    pub fn contains(&self, url: &str) -> bool {
        self.seen.contains(url)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Appends `url` as a new line, creating the file if needed.
    /// Already-tracked URLs are not written twice.
    pub fn append(&mut self, url: &str) -> Result<()> {
        if self.seen.contains(url) {
            return Ok(());
        }
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("open tracking file {}", self.path.display()))?;
        file.write_all(format!("{url}\n").as_bytes())
            .with_context(|| format!("append to tracking file {}", self.path.display()))?;
        self.seen.insert(url.to_string());
        Ok(())
    }
}
