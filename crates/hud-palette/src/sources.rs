//! Concrete action sources
//!
//! - [`ShellActionSource`]: the `[[commands]]` table of the config file, each
//!   entry run through the configured shell.
//! - [`StdinActionSource`]: dmenu style, names read from stdin and the chosen
//!   one handed back to the caller for printing.

use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::Mutex;

use hud_config::AppConfig;
use hud_list_engine::{ActionError, ActionSource};

/// Runs config-defined command lines through a shell.
///
/// Every listing replaces the held config, so edits to both `shell` and
/// `[[commands]]` apply from the next reload on.
pub struct ShellActionSource {
    /// Config file given on the command line, if any
    config_path: Option<PathBuf>,
    config: Mutex<AppConfig>,
}

impl ShellActionSource {
    pub fn new(config: &AppConfig, config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            config: Mutex::new(config.clone()),
        }
    }
}

impl ActionSource for ShellActionSource {
    /// Re-reads the config so edits show up on reload.
    fn list_commands(&self) -> Result<Vec<String>, ActionError> {
        let config = AppConfig::load(self.config_path.as_deref())
            .map_err(|e| ActionError::Unavailable(e.to_string()))?;
        let names = config.command_names();

        *self.config.lock().unwrap_or_else(|p| p.into_inner()) = config;
        Ok(names)
    }

    fn execute(&self, name: &str) -> Result<(), ActionError> {
        let (shell, run) = {
            let config = self.config.lock().unwrap_or_else(|p| p.into_inner());
            let run = config
                .command_line(name)
                .ok_or_else(|| ActionError::UnknownCommand(name.to_string()))?;
            (config.shell.clone(), run.to_string())
        };

        log::info!("Running '{}': {} -c {:?}", name, shell, run);
        Command::new(&shell)
            .arg("-c")
            .arg(&run)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ActionError::Spawn {
                name: name.to_string(),
                source,
            })?;

        Ok(())
    }
}

/// Reads command names from an input stream, one per line.
///
/// The stream is consumed by the first listing; reloads return the same
/// names. Executing records the choice instead of acting on it.
pub struct StdinActionSource {
    input: Mutex<Option<Box<dyn Read + Send>>>,
    names: Mutex<Vec<String>>,
    chosen: Mutex<Option<String>>,
}

impl StdinActionSource {
    pub fn new(input: impl Read + Send + 'static) -> Self {
        Self {
            input: Mutex::new(Some(Box::new(input))),
            names: Mutex::new(Vec::new()),
            chosen: Mutex::new(None),
        }
    }

    /// Name picked by the last execute, if any
    pub fn chosen(&self) -> Option<String> {
        self.chosen.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }
}

impl ActionSource for StdinActionSource {
    fn list_commands(&self) -> Result<Vec<String>, ActionError> {
        let mut names = self.names.lock().unwrap_or_else(|p| p.into_inner());

        let input = self.input.lock().unwrap_or_else(|p| p.into_inner()).take();
        if let Some(input) = input {
            for line in BufReader::new(input).lines() {
                let line = line?;
                let line = line.trim_end_matches('\r');
                if !line.trim().is_empty() {
                    names.push(line.to_string());
                }
            }
            log::debug!("Read {} command names from input", names.len());
        }

        Ok(names.clone())
    }

    fn execute(&self, name: &str) -> Result<(), ActionError> {
        let known = self
            .names
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .iter()
            .any(|known| known == name);
        if !known {
            return Err(ActionError::UnknownCommand(name.to_string()));
        }

        *self.chosen.lock().unwrap_or_else(|p| p.into_inner()) = Some(name.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hud_config::CommandEntry;
    use std::io::{Cursor, Write};

    #[test]
    fn test_stdin_source_reads_lines_once() {
        let source = StdinActionSource::new(Cursor::new("Open\r\n\nClose\n  \nSave"));
        let expected = vec!["Open".to_string(), "Close".to_string(), "Save".to_string()];
        assert_eq!(source.list_commands().unwrap(), expected);
        // Reload returns the cached names
        assert_eq!(source.list_commands().unwrap(), expected);
    }

    #[test]
    fn test_stdin_source_records_choice() {
        let source = StdinActionSource::new(Cursor::new("Open\nSave\n"));
        source.list_commands().unwrap();

        assert!(source.chosen().is_none());
        source.execute("Save").unwrap();
        assert_eq!(source.chosen().as_deref(), Some("Save"));

        assert!(matches!(
            source.execute("Print"),
            Err(ActionError::UnknownCommand(_))
        ));
        assert_eq!(source.chosen().as_deref(), Some("Save"));
    }

    #[test]
    fn test_shell_source_lists_from_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[[commands]]\nname = \"Say hi\"\nrun = \"true\"\n\n[[commands]]\nname = \"Fail\"\nrun = \"false\""
        )
        .unwrap();

        let source = ShellActionSource::new(&AppConfig::default(), Some(file.path().to_path_buf()));
        assert_eq!(
            source.list_commands().unwrap(),
            vec!["Say hi".to_string(), "Fail".to_string()]
        );
        source.execute("Say hi").unwrap();
    }

    #[test]
    fn test_shell_source_unknown_command() {
        let source = ShellActionSource::new(&AppConfig::default(), None);
        assert!(matches!(
            source.execute("Nope"),
            Err(ActionError::UnknownCommand(name)) if name == "Nope"
        ));
    }

    #[test]
    fn test_shell_source_spawn_failure() {
        let config = AppConfig {
            shell: "/nonexistent/shell".to_string(),
            commands: vec![CommandEntry {
                name: "Run".to_string(),
                run: "true".to_string(),
            }],
            ..AppConfig::default()
        };
        let source = ShellActionSource::new(&config, None);
        assert!(matches!(
            source.execute("Run"),
            Err(ActionError::Spawn { .. })
        ));
    }

    #[test]
    fn test_shell_source_broken_config_is_unavailable() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "commands = 3").unwrap();

        let source = ShellActionSource::new(&AppConfig::default(), Some(file.path().to_path_buf()));
        assert!(matches!(
            source.list_commands(),
            Err(ActionError::Unavailable(_))
        ));
    }

    #[test]
    fn test_shell_source_reload_picks_up_new_shell() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "shell = \"/nonexistent/shell\"\n\n[[commands]]\nname = \"Touch\"\nrun = \"true\"\n"
        )
        .unwrap();

        let config = AppConfig::load_from_path(file.path()).unwrap();
        let source = ShellActionSource::new(&config, Some(file.path().to_path_buf()));
        assert!(matches!(
            source.execute("Touch"),
            Err(ActionError::Spawn { .. })
        ));

        std::fs::write(
            file.path(),
            "shell = \"sh\"\n\n[[commands]]\nname = \"Touch\"\nrun = \"true\"\n",
        )
        .unwrap();
        assert_eq!(source.list_commands().unwrap(), vec!["Touch".to_string()]);
        source.execute("Touch").unwrap();
    }
}
