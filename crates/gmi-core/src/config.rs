use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Archives shipped by default, in install order.
pub const DEFAULT_ARCHIVE_URLS: &[&str] = &[
    "https://gmodcontent.fra1.cdn.digitaloceanspaces.com/hl2ep2-content-gmodcontent.zip",
    "https://gmodcontent.fra1.cdn.digitaloceanspaces.com/hl2ep1-content-gmodcontent.zip",
    "https://gmodcontent.fra1.cdn.digitaloceanspaces.com/css-content-gmodcontent.zip",
    "https://gmodcontent.fra1.cdn.digitaloceanspaces.com/css-maps-gmodcontent.zip",
];

/// Transport knobs for the archive download (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadConfig {
    /// Seconds to wait for the TCP/TLS connection. There is no overall transfer timeout.
    pub connect_timeout_secs: u64,
    /// Optional curl receive buffer size in bytes (None = library default).
    #[serde(default)]
    pub buffer_size: Option<usize>,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 30,
            buffer_size: None,
        }
    }
}

/// Global configuration loaded from `~/.config/gmi/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GmiConfig {
    /// Archives to install, in order.
    pub archive_urls: Vec<String>,
    /// Explicit addons directory; when set the registry lookup is skipped.
    #[serde(default)]
    pub addons_dir: Option<PathBuf>,
    #[serde(default)]
    pub download: DownloadConfig,
}

impl Default for GmiConfig {
    fn default() -> Self {
        Self {
            archive_urls: DEFAULT_ARCHIVE_URLS.iter().map(|u| u.to_string()).collect(),
            addons_dir: None,
            download: DownloadConfig::default(),
        }
    }
}

impl GmiConfig {
    /// Reject archive URLs that are not absolute http(s) URLs.
    pub fn validate(&self) -> Result<()> {
        for raw in &self.archive_urls {
            let parsed = match url::Url::parse(raw) {
                Ok(u) => u,
                Err(e) => bail!("invalid archive url {:?}: {}", raw, e),
            };
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                bail!("archive url {:?} must be http or https", raw);
            }
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gmi")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GmiConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = GmiConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: GmiConfig = toml::from_str(&data)?;
    cfg.validate()?;
    Ok(cfg)
}
