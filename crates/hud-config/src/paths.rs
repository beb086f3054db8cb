//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/hud-palette/`, `~/.cache/hud-palette/`
//! - macOS: `~/Library/Application Support/hud-palette/`, `~/Library/Caches/hud-palette/`
//! - Windows: `%APPDATA%\hud-palette\`, `%LOCALAPPDATA%\hud-palette\`

use anyhow::{Context, Result};
use std::path::PathBuf;

pub(crate) const APP_NAME: &str = "hud-palette";
const CONFIG_FILE_NAME: &str = "config.toml";
const LOG_DIR_NAME: &str = "logs";

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create cache directory {}", dir.display()))?;
    Ok(dir)
}

/// Directory for log files of release builds, creating it if needed
pub fn log_dir() -> Result<PathBuf> {
    let dir = cache_dir()?.join(LOG_DIR_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    Ok(dir)
}

/// Path of the global config file. Does not touch the filesystem.
pub fn app_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_NAME).join(CONFIG_FILE_NAME))
}
