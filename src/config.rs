/*!
 * Configuration handling for srcdump
 */

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::ensure;
use crate::error::Result;
use crate::utils::OUTPUT_FILE_NAME;

/// Verbosity of the operator-facing log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Command-line arguments for srcdump
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "srcdump",
    version = env!("CARGO_PKG_VERSION"),
    about = "Concatenate the source files of a directory tree into one annotated text file",
    long_about = "Walks a directory tree, skipping dependency, VCS and build directories, and writes every .js, .jsx, .css and .py file into codigo_compilado.txt in the current directory, each preceded by a header with its relative path."
)]
pub struct Args {
    /// Directory to scan (prompted for when omitted)
    pub directory_path: Option<String>,

    /// Hide the progress spinner
    #[clap(long)]
    pub no_progress: bool,

    /// Log verbosity
    #[clap(long, value_enum, default_value_t = LogLevel::default())]
    pub log_level: LogLevel,
}

/// Run configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Root directory to scan
    pub target_dir: PathBuf,

    /// Output file path
    pub output_file: PathBuf,
}

impl Config {
    /// Configuration for `target_dir` with the fixed output location
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
            output_file: PathBuf::from(OUTPUT_FILE_NAME),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.target_dir.is_dir(),
            InvalidRoot,
            "'{}' is not a valid directory",
            self.target_dir.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SrcDumpError;

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["srcdump", "some/dir", "--no-progress"]);
        assert_eq!(args.directory_path.as_deref(), Some("some/dir"));
        assert!(args.no_progress);
        assert_eq!(args.log_level, LogLevel::Info);

        let args = Args::parse_from(["srcdump", "--log-level", "warn"]);
        assert!(args.directory_path.is_none());
        assert_eq!(args.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_default_output_file() {
        let config = Config::new(".");
        assert_eq!(config.output_file, PathBuf::from("codigo_compilado.txt"));
    }

    #[test]
    fn test_validate() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::new(dir.path()).validate().is_ok());

        let file = dir.path().join("file.py");
        std::fs::write(&file, "x=1").unwrap();
        assert!(matches!(
            Config::new(&file).validate(),
            Err(SrcDumpError::InvalidRoot(_))
        ));
        assert!(matches!(
            Config::new(dir.path().join("missing")).validate(),
            Err(SrcDumpError::InvalidRoot(_))
        ));
    }
}
