//! The probing/downloading loop.
//!
//! One sequential pass over a [`UrlSource`]: optional dedup against the
//! tracking file, GET, placeholder detection, optional save, tracking append.
//! A failing URL is logged and counted; it never stops the run.

mod summary;

pub use summary::{FailureStage, RunSummary, SavedFile, UrlOutcome};

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::checksum;
use crate::config::ProbeConfig;
use crate::fetch::{FetchResponse, Fetcher};
use crate::filename::resolve_filename;
use crate::probe::{self, Validity};
use crate::source::UrlSource;
use crate::storage;
use crate::tracking::TrackingFile;

pub struct Pipeline<F> {
    fetcher: F,
    output_dir: PathBuf,
    download: bool,
    invalid_marker: String,
    tracking: Option<TrackingFile>,
}

impl<F: Fetcher> Pipeline<F> {
    /// Loads the tracking file and creates the output directory when
    /// downloading. These are the only failures that abort a run.
    pub fn new(config: &ProbeConfig, fetcher: F) -> Result<Self> {
        let tracking = match &config.tracking_file {
            Some(path) => Some(TrackingFile::load(path)?),
            None => None,
        };
        if config.download {
            storage::ensure_dir(&config.output_dir)?;
        }
        Ok(Self {
            fetcher,
            output_dir: config.output_dir.clone(),
            download: config.download,
            invalid_marker: config.invalid_marker.clone(),
            tracking,
        })
    }

    pub fn tracking(&self) -> Option<&TrackingFile> {
        self.tracking.as_ref()
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn run(&mut self, source: &UrlSource) -> RunSummary {
        self.run_with(source, |_, _| {})
    }

    /// Like [`run`](Self::run), calling `on_outcome` after every URL.
    pub fn run_with<C>(&mut self, source: &UrlSource, mut on_outcome: C) -> RunSummary
    where
        C: FnMut(&str, &UrlOutcome),
    {
        tracing::info!(urls = source.len(), download = self.download, "run started");
        let mut summary = RunSummary::default();
        for url in source.urls() {
            let outcome = self.process(&url);
            summary.record(&outcome);
            on_outcome(&url, &outcome);
        }
        tracing::info!("run finished: {}", summary);
        summary
    }

    /// Processes a single URL.
    pub fn process(&mut self, url: &str) -> UrlOutcome {
        if let Err(e) = url::Url::parse(url) {
            tracing::warn!(url, "skipping unparsable URL: {}", e);
            return UrlOutcome::Failed {
                stage: FailureStage::Url,
                reason: e.to_string(),
            };
        }

        if self.tracking.as_ref().is_some_and(|t| t.contains(url)) {
            tracing::debug!(url, "already tracked");
            return UrlOutcome::Skipped;
        }

        let response = match self.fetcher.get(url) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(url, "fetch failed: {}", e);
                return UrlOutcome::Failed {
                    stage: FailureStage::Fetch,
                    reason: e.to_string(),
                };
            }
        };

        if probe::classify(&response, &self.invalid_marker) == Validity::Invalid {
            tracing::debug!(url, "invalid download");
            return UrlOutcome::Invalid;
        }
        tracing::info!(url, "valid");

        let saved = if self.download {
            match self.save(&response) {
                Ok(saved) => Some(saved),
                Err(e) => {
                    tracing::warn!(url, "save failed: {:#}", e);
                    return UrlOutcome::Failed {
                        stage: FailureStage::Storage,
                        reason: format!("{e:#}"),
                    };
                }
            }
        } else {
            None
        };

        if let Some(tracking) = self.tracking.as_mut() {
            if let Err(e) = tracking.append(url) {
                tracing::warn!(url, "could not record URL: {:#}", e);
            }
        }

        UrlOutcome::Valid { saved }
    }

    fn save(&self, response: &FetchResponse) -> Result<SavedFile> {
        let name = resolve_filename(&response.headers, &response.url);
        let path = storage::save(&self.output_dir, &name, &response.body)?;
        let sha256 = checksum::sha256_bytes(&response.body);
        tracing::info!(
            file = %path.display(),
            bytes = response.body.len(),
            sha256 = %sha256,
            "saved"
        );
        Ok(SavedFile {
            name,
            path,
            bytes: response.body.len() as u64,
            sha256,
        })
    }
}
