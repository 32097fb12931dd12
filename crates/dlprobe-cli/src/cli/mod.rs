//! CLI for dlprobe.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use dlprobe_core::config::{self, ProbeConfig};
use std::path::PathBuf;

use commands::{run_checksum, run_fetch, run_name, run_probe};

/// Top-level CLI for dlprobe.
#[derive(Debug, Parser)]
#[command(name = "dlprobe")]
#[command(about = "dlprobe: probe a vendor download endpoint and fetch the files it serves", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Options shared by commands that run the pipeline.
#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    /// Config file to use instead of ~/.config/dlprobe/config.toml.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory downloaded files are saved into.
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Tracking file of already discovered URLs.
    #[arg(long, value_name = "FILE", conflicts_with = "no_tracking")]
    pub tracking_file: Option<PathBuf>,

    /// Neither read nor update a tracking file.
    #[arg(long)]
    pub no_tracking: bool,
}

impl RunArgs {
    /// Loads the config file and applies the overrides given on the command line.
    pub fn load_config(&self) -> Result<ProbeConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from_path(path)?,
            None => config::load_or_init()?,
        };
        self.apply(&mut cfg);
        tracing::debug!("loaded config: {:?}", cfg);
        Ok(cfg)
    }

    pub fn apply(&self, cfg: &mut ProbeConfig) {
        if let Some(dir) = &self.output {
            cfg.output_dir = dir.clone();
        }
        if let Some(path) = &self.tracking_file {
            cfg.tracking_file = Some(path.clone());
        }
        if self.no_tracking {
            cfg.tracking_file = None;
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Sweep a numeric ID range and record (optionally download) valid files.
    Probe {
        /// Endpoint prefix the ID is appended to.
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,

        /// First ID (inclusive).
        #[arg(long, value_name = "N")]
        start: Option<u64>,

        /// Last ID (inclusive).
        #[arg(long, value_name = "N")]
        end: Option<u64>,

        /// Save valid files into the output directory.
        #[arg(long)]
        download: bool,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Download a fixed list of URLs.
    Fetch {
        /// URLs to download.
        urls: Vec<String>,

        /// File with one URL per line (`#` starts a comment).
        #[arg(long, value_name = "FILE")]
        list: Option<PathBuf>,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Print the filename a response would be saved under (no network).
    Name {
        /// Request URL.
        url: String,

        /// Content-Disposition header value.
        #[arg(long, value_name = "VALUE")]
        content_disposition: Option<String>,

        /// Content-Type header value.
        #[arg(long, value_name = "VALUE")]
        content_type: Option<String>,
    },

    /// Compute SHA-256 of a file (e.g. after download).
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Probe {
                base_url,
                start,
                end,
                download,
                run,
            } => {
                let mut cfg = run.load_config()?;
                if let Some(url) = base_url {
                    cfg.base_url = url;
                }
                if let Some(n) = start {
                    cfg.id_range_start = n;
                }
                if let Some(n) = end {
                    cfg.id_range_end = n;
                }
                cfg.download |= download;
                run_probe(&cfg)?;
            }
            CliCommand::Fetch { urls, list, run } => {
                let mut cfg = run.load_config()?;
                cfg.download = true;
                run_fetch(&cfg, urls, list.as_deref())?;
            }
            CliCommand::Name {
                url,
                content_disposition,
                content_type,
            } => run_name(&url, content_disposition.as_deref(), content_type.as_deref()),
            CliCommand::Checksum { path } => run_checksum(&path)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
