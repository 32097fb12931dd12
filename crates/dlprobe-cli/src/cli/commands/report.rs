//! Console output shared by `probe` and `fetch`.

use dlprobe_core::pipeline::{RunSummary, UrlOutcome};

/// One line per URL worth telling the user about; placeholder pages stay in the log.
pub fn print_outcome(url: &str, outcome: &UrlOutcome) {
    match outcome {
        UrlOutcome::Valid { saved: Some(file) } => {
            println!("Downloaded: {} -> {}", url, file.path.display());
        }
        UrlOutcome::Valid { saved: None } => println!("Valid: {}", url),
        UrlOutcome::Skipped => println!("Already tracked: {}", url),
        UrlOutcome::Failed { reason, .. } => println!("Error: {}: {}", url, reason),
        UrlOutcome::Invalid => {}
    }
}

pub fn print_summary(summary: &RunSummary) {
    println!("Done: {}", summary);
}
