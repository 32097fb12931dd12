//! `dlprobe probe` – sweep the configured ID range.

use anyhow::Result;
use dlprobe_core::config::ProbeConfig;
use dlprobe_core::fetch::CurlFetcher;
use dlprobe_core::pipeline::Pipeline;
use dlprobe_core::source::UrlSource;

use super::report;

pub fn run_probe(cfg: &ProbeConfig) -> Result<()> {
    let source = UrlSource::range(&cfg.base_url, cfg.id_range_start, cfg.id_range_end);
    if source.is_empty() {
        anyhow::bail!(
            "empty ID range: start {} is after end {}",
            cfg.id_range_start,
            cfg.id_range_end
        );
    }
    println!(
        "Probing {}{{{}..={}}}",
        cfg.base_url, cfg.id_range_start, cfg.id_range_end
    );

    let mut pipeline = Pipeline::new(cfg, CurlFetcher::new(&cfg.http))?;
    let summary = pipeline.run_with(&source, report::print_outcome);
    report::print_summary(&summary);
    Ok(())
}
