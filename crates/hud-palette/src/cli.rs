//! Command-line arguments

use clap::{Parser, ValueEnum};
use hud_config::SortMode;
use std::path::PathBuf;

/// Keyboard-driven command palette for the terminal
#[derive(Debug, Parser)]
#[command(name = "hud-palette", version, about)]
pub struct Args {
    /// Config file to use instead of .hud-palette.toml / the global config
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Read command names from stdin and print the chosen one on stdout
    #[arg(long)]
    pub stdin: bool,

    /// Ordering of matching commands (overrides the config file)
    #[arg(short, long, value_enum)]
    pub sort: Option<SortArg>,

    /// Initial search query
    #[arg(short, long, value_name = "TEXT")]
    pub query: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    /// Keep the listed order
    Insertion,
    /// Best match first
    Relevance,
}

impl From<SortArg> for SortMode {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Insertion => SortMode::Insertion,
            SortArg::Relevance => SortMode::Relevance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let args = Args::parse_from([
            "hud-palette",
            "--stdin",
            "--sort",
            "relevance",
            "-q",
            "sav",
        ]);
        assert!(args.stdin);
        assert_eq!(args.sort, Some(SortArg::Relevance));
        assert_eq!(args.query.as_deref(), Some("sav"));
        assert!(args.config.is_none());
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["hud-palette"]);
        assert!(!args.stdin);
        assert!(args.sort.is_none());
    }
}
