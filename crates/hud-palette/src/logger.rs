//! File-based logging using simplelog
//!
//! The terminal belongs to the palette, so logs go to a file. Location
//! depends on build type:
//! - Debug builds: current working directory (for development convenience)
//! - Release builds: log directory (~/.cache/hud-palette/logs/ on Linux)

use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

/// Get the log file path based on build type
fn log_file_path() -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let filename = format!("hud-palette-{}.log", timestamp);

    if cfg!(debug_assertions) {
        PathBuf::from(filename)
    } else {
        hud_config::log_dir()
            .map(|dir| dir.join(&filename))
            .unwrap_or_else(|_| PathBuf::from(filename))
    }
}

fn level_from_env() -> LevelFilter {
    std::env::var("RUST_LOG")
        .map(|v| parse_level(&v))
        .unwrap_or(LevelFilter::Debug)
}

fn parse_level(value: &str) -> LevelFilter {
    match value.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Initialize file-based logging
///
/// Returns the path of the log file.
pub fn init() -> Result<PathBuf> {
    let log_file = log_file_path();

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c) // Fallback if local time offset fails
        .build();

    let file = File::create(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    WriteLogger::init(level_from_env(), config, file).context("Failed to initialize logger")?;

    Ok(log_file)
}
