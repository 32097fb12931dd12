//! Per-URL outcomes and run totals.

use std::fmt;
use std::path::PathBuf;

use crate::filename::ResolvedFilename;

/// What happened to one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlOutcome {
    /// Already in the tracking file; not fetched.
    Skipped,
    /// The endpoint served the placeholder page.
    Invalid,
    /// Real content. `saved` is set when downloading is enabled.
    Valid { saved: Option<SavedFile> },
    /// The URL could not be processed; see `stage`.
    Failed { stage: FailureStage, reason: String },
}

/// Where a URL failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStage {
    /// The URL does not parse; nothing was fetched.
    Url,
    /// Transport error or non-2xx status.
    Fetch,
    /// The body could not be saved.
    Storage,
}

/// A body written to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    pub name: ResolvedFilename,
    pub path: PathBuf,
    pub bytes: u64,
    pub sha256: String,
}

/// Counters for a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// URLs fetched (skipped and unparsable URLs are not counted).
    pub probed: u64,
    pub valid: u64,
    pub invalid: u64,
    pub skipped: u64,
    pub downloaded: u64,
    pub failed: u64,
}

impl RunSummary {
    pub(crate) fn record(&mut self, outcome: &UrlOutcome) {
        let fetched = !matches!(
            outcome,
            UrlOutcome::Skipped
                | UrlOutcome::Failed {
                    stage: FailureStage::Url,
                    ..
                }
        );
        if fetched {
            self.probed += 1;
        }
        match outcome {
            UrlOutcome::Skipped => self.skipped += 1,
            UrlOutcome::Invalid => self.invalid += 1,
            UrlOutcome::Valid { saved } => {
                self.valid += 1;
                if saved.is_some() {
                    self.downloaded += 1;
                }
            }
            UrlOutcome::Failed { .. } => self.failed += 1,
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "probed {}, valid {}, invalid {}, skipped {}, downloaded {}, failed {}",
            self.probed, self.valid, self.invalid, self.skipped, self.downloaded, self.failed
        )
    }
}
