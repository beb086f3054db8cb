use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::paths::app_config_path;

const LOCAL_CONFIG_FILE: &str = ".hud-palette.toml";

/// Locate the config file to use when none was given explicitly
///
/// Searches in:
/// 1. Current working directory as .hud-palette.toml
/// 2. The global config directory as hud-palette/config.toml
///
/// Returns the path and its content if found, None otherwise.
pub fn find_config_file() -> Option<(PathBuf, String)> {
    let candidates = [Some(PathBuf::from(LOCAL_CONFIG_FILE)), app_config_path()];
    candidates.into_iter().flatten().find_map(|path| read(&path))
}

fn read(path: &Path) -> Option<(PathBuf, String)> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            log::debug!("Loaded config from {}", path.display());
            Some((path.to_path_buf(), content))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            log::warn!("Skipping unreadable config file {}: {}", path.display(), e);
            None
        }
    }
}
