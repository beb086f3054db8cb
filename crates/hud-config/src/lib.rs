//! Configuration and file management for hud-palette
//!
//! This crate provides:
//! - Config, cache and log file locations
//! - Configuration file discovery and loading (TOML)
//! - Application configuration (AppConfig), including the command table

pub mod app_config;
pub mod config_file;
pub mod error;
pub mod paths;

pub use app_config::{AppConfig, CaseMode, CommandEntry, SortMode};
pub use config_file::find_config_file;
pub use error::ConfigError;
pub use paths::{app_config_path, cache_dir, log_dir};
