use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::format::{OutputFormat, MAX_PRECISION};

/// Prefix for XDG config/state directories.
pub const APP_NAME: &str = "osmlink";

/// User configuration loaded from `~/.config/osmlink/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsmlinkConfig {
    /// Default output format for `decode_osm`: "json" or "plain".
    #[serde(default)]
    pub format: OutputFormat,
    /// Optional number of decimal places for lat/lon (None = full precision).
    #[serde(default)]
    pub precision: Option<usize>,
}

impl OsmlinkConfig {
    fn validate(&self) -> Result<()> {
        if let Some(p) = self.precision {
            ensure!(
                p <= MAX_PRECISION,
                "precision {p} exceeds maximum of {MAX_PRECISION}"
            );
        }
        Ok(())
    }
}

const CONFIG_FILE: &str = "config.toml";

/// Location of the user config file, whether or not it exists.
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_NAME)?;
    Ok(xdg_dirs.get_config_file(CONFIG_FILE))
}

/// Load configuration from the XDG config dirs; defaults if there is no file.
/// Never writes a default file.
pub fn load_or_default() -> Result<OsmlinkConfig> {
    let xdg_dirs = match xdg::BaseDirectories::with_prefix(APP_NAME) {
        Ok(dirs) => dirs,
        Err(e) => {
            tracing::warn!("cannot locate config dir, using defaults: {e}");
            return Ok(OsmlinkConfig::default());
        }
    };
    match xdg_dirs.find_config_file(CONFIG_FILE) {
        Some(path) => load_from_path(&path),
        None => {
            tracing::debug!(
                "no config at {}, using defaults",
                xdg_dirs.get_config_file(CONFIG_FILE).display()
            );
            Ok(OsmlinkConfig::default())
        }
    }
}

/// Load and validate configuration from an explicit path.
pub fn load_from_path(path: &Path) -> Result<OsmlinkConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: OsmlinkConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config: {}", path.display()))?;
    tracing::debug!("loaded config from {}: {:?}", path.display(), cfg);
    Ok(cfg)
}
