use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// HTTP transport parameters (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds (includes the body transfer).
    pub timeout_secs: u64,
    /// Optional User-Agent header; libcurl sends none by default.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 300,
            user_agent: None,
        }
    }
}

/// Global configuration loaded from `~/.config/dlprobe/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Endpoint prefix; the numeric ID is appended verbatim.
    pub base_url: String,
    /// First ID probed (inclusive).
    pub id_range_start: u64,
    /// Last ID probed (inclusive).
    pub id_range_end: u64,
    /// Directory valid files are saved into.
    pub output_dir: PathBuf,
    /// Append-only list of validated URLs. `None` disables the dedup stage.
    #[serde(default)]
    pub tracking_file: Option<PathBuf>,
    /// Text the vendor's "invalid download" placeholder page contains.
    #[serde(default = "default_invalid_marker")]
    pub invalid_marker: String,
    /// Save valid files, not just record them.
    #[serde(default)]
    pub download: bool,
    #[serde(default)]
    pub http: HttpConfig,
}

fn default_invalid_marker() -> String {
    "Invalid download.".to_string()
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.immersionrc.com/?download=".to_string(),
            id_range_start: 0,
            id_range_end: 10_000,
            output_dir: PathBuf::from("PDFs"),
            tracking_file: Some(PathBuf::from("downloads.txt")),
            invalid_marker: default_invalid_marker(),
            download: false,
            http: HttpConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dlprobe")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ProbeConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ProbeConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load configuration from an explicit file.
pub fn load_from_path(path: &Path) -> Result<ProbeConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: ProbeConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
