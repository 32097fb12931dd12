//! `dlprobe fetch` – download a fixed list of URLs.

use anyhow::Result;
use dlprobe_core::config::ProbeConfig;
use dlprobe_core::fetch::CurlFetcher;
use dlprobe_core::pipeline::Pipeline;
use dlprobe_core::source::UrlSource;
use std::path::Path;

use super::report;

/// Builds the list source from positional URLs followed by the list file's entries.
pub fn list_source(urls: Vec<String>, list: Option<&Path>) -> Result<UrlSource> {
    let mut all = urls;
    if let Some(path) = list {
        if let UrlSource::List(from_file) = UrlSource::from_list_file(path)? {
            all.extend(from_file);
        }
    }
    if all.is_empty() {
        anyhow::bail!("no URLs given; pass URLs or --list <FILE>");
    }
    Ok(UrlSource::list(all))
}

pub fn run_fetch(cfg: &ProbeConfig, urls: Vec<String>, list: Option<&Path>) -> Result<()> {
    let source = list_source(urls, list)?;
    let mut pipeline = Pipeline::new(cfg, CurlFetcher::new(&cfg.http))?;
    println!(
        "Fetching {} URL(s) into {}",
        source.len(),
        pipeline.output_dir().display()
    );
    let summary = pipeline.run_with(&source, report::print_outcome);
    report::print_summary(&summary);
    Ok(())
}
