//! Application configuration
//!
//! Configuration loaded from .hud-palette.toml or the global config.toml.

use hud_list_engine::{CaseMatching, SortPolicy};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config_file::find_config_file;
use crate::error::ConfigError;

/// Ordering of the visible commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Keep the order in which the commands were listed
    #[default]
    Insertion,
    /// Best fuzzy match first
    Relevance,
}

impl From<SortMode> for SortPolicy {
    fn from(mode: SortMode) -> Self {
        match mode {
            SortMode::Insertion => SortPolicy::InsertionOrder,
            SortMode::Relevance => SortPolicy::Relevance,
        }
    }
}

/// Case sensitivity of the search field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    #[default]
    Ignore,
    Respect,
    Smart,
}

impl From<CaseMode> for CaseMatching {
    fn from(mode: CaseMode) -> Self {
        match mode {
            CaseMode::Ignore => CaseMatching::Ignore,
            CaseMode::Respect => CaseMatching::Respect,
            CaseMode::Smart => CaseMatching::Smart,
        }
    }
}

/// One entry of the `[[commands]]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandEntry {
    /// Name shown in the palette and matched against the query
    pub name: String,
    /// Shell command line run when the entry is executed
    pub run: String,
}

/// Application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub sort: SortMode,

    #[serde(default)]
    pub case_matching: CaseMode,

    /// Shell used to run command lines (invoked as `<shell> -c <run>`)
    #[serde(default = "default_shell")]
    pub shell: String,

    /// Title of the palette panel
    #[serde(default = "default_title")]
    pub title: String,

    /// Panel width as a percentage of the terminal width
    #[serde(default = "default_width_percent")]
    pub width_percent: u16,

    /// Panel height as a percentage of the terminal height
    #[serde(default = "default_height_percent")]
    pub height_percent: u16,

    #[serde(default)]
    pub commands: Vec<CommandEntry>,
}

fn default_shell() -> String {
    "sh".to_string()
}

fn default_title() -> String {
    "Commands".to_string()
}

fn default_width_percent() -> u16 {
    70
}

fn default_height_percent() -> u16 {
    60
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sort: SortMode::default(),
            case_matching: CaseMode::default(),
            shell: default_shell(),
            title: default_title(),
            width_percent: default_width_percent(),
            height_percent: default_height_percent(),
            commands: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Load the configuration.
    ///
    /// An explicit path must exist and parse. Without one, the CWD file and
    /// then the global file are tried; a broken discovered file is logged
    /// and the defaults are used.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        if let Some((path, content)) = find_config_file() {
            match Self::parse(&path, &content) {
                Ok(config) => {
                    log::info!("Loaded app config from {}", path.display());
                    return Ok(config);
                }
                Err(e) => {
                    log::warn!("{}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(path, &content)?;
        log::info!("Loaded app config from {}", path.display());
        Ok(config)
    }

    fn parse(path: &Path, content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.width_percent = config.width_percent.clamp(20, 100);
        config.height_percent = config.height_percent.clamp(20, 100);
        Ok(config)
    }

    /// Names of the configured commands, in file order.
    pub fn command_names(&self) -> Vec<String> {
        self.commands.iter().map(|entry| entry.name.clone()).collect()
    }

    /// Command line for the entry called `name`. The first entry wins when
    /// names repeat.
    pub fn command_line(&self, name: &str) -> Option<&str> {
        self.commands
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.run.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.sort, SortMode::Insertion);
        assert_eq!(config.case_matching, CaseMode::Ignore);
        assert_eq!(config.shell, "sh");
        assert_eq!(config.width_percent, 70);
        assert_eq!(config.height_percent, 60);
        assert!(config.commands.is_empty());
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            sort = "relevance"
            case_matching = "smart"
            title = "Launcher"

            [[commands]]
            name = "Open terminal"
            run = "x-terminal-emulator"

            [[commands]]
            name = "Lock screen"
            run = "loginctl lock-session"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.sort, SortMode::Relevance);
        assert_eq!(config.case_matching, CaseMode::Smart);
        assert_eq!(config.title, "Launcher");
        assert_eq!(config.shell, "sh");
        assert_eq!(
            config.command_names(),
            vec!["Open terminal".to_string(), "Lock screen".to_string()]
        );
        assert_eq!(
            config.command_line("Lock screen"),
            Some("loginctl lock-session")
        );
        assert_eq!(config.command_line("Missing"), None);
    }

    #[test]
    fn test_sort_mode_maps_to_policy() {
        assert_eq!(SortPolicy::from(SortMode::Insertion), SortPolicy::InsertionOrder);
        assert_eq!(SortPolicy::from(SortMode::Relevance), SortPolicy::Relevance);
    }

    #[test]
    fn test_load_from_path_clamps_dimensions() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "width_percent = 5\nheight_percent = 250").unwrap();

        let config = AppConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.width_percent, 20);
        assert_eq!(config.height_percent, 100);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            AppConfig::load(Some(&missing)),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn test_explicit_invalid_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "sort = \"sideways\"").unwrap();
        assert!(matches!(
            AppConfig::load(Some(file.path())),
            Err(ConfigError::Parse { .. })
        ));
    }
}
